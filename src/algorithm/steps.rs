//! # Step trail
//!
//! Every meaningful action of a solver is recorded as a full copy of the tableau, together with the
//! variables involved and a description. The trail can be replayed after the solve.
use std::fmt;
use std::ops::Index;

use crate::algorithm::tableau::Tableau;

/// Snapshot of the tableau after a single action.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    tableau: Tableau,
    /// Name of the variable entering the basis, empty if none.
    entering: String,
    /// Name of the variable leaving the basis, empty if none.
    leaving: String,
    description: String,
}

impl StepRecord {
    /// Tableau as it was after this step.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Name of the entering variable, or the empty string.
    pub fn entering(&self) -> &str {
        &self.entering
    }

    /// Name of the leaving variable, or the empty string.
    pub fn leaving(&self) -> &str {
        &self.leaving
    }

    /// What happened in this step.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        if !self.entering.is_empty() || !self.leaving.is_empty() {
            writeln!(f, "entering: {}, leaving: {}", self.entering, self.leaving)?;
        }
        write!(f, "{}", self.tableau)
    }
}

/// Append-only history of steps.
///
/// Steps can only be added by the solver that owns the recorder; everyone else reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepRecorder {
    steps: Vec<StepRecord>,
}

impl StepRecorder {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        tableau: &Tableau,
        entering: &str,
        leaving: &str,
        description: impl Into<String>,
    ) {
        self.steps.push(StepRecord {
            tableau: tableau.clone(),
            entering: entering.to_string(),
            leaving: leaving.to_string(),
            description: description.into(),
        });
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a position, if it exists.
    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.steps.get(index)
    }

    /// Most recent step.
    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    /// Iterate over the steps in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter()
    }

    /// All steps in the order they were recorded.
    pub fn as_slice(&self) -> &[StepRecord] {
        &self.steps
    }
}

impl Index<usize> for StepRecorder {
    type Output = StepRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepRecorder {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
