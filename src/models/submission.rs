use serde::{Deserialize, Serialize};

/// Lifecycle of a simulated form submission.
///
/// `Idle -> Submitting -> Submitted`, with `reset` returning to `Idle`.
/// There is no failure state: a started submission always completes.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SubmissionStatus<T> {
    #[default]
    Idle,
    Submitting,
    Submitted(T),
}

impl<T> SubmissionStatus<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn submitted(&self) -> Option<&T> {
        match self {
            Self::Submitted(value) => Some(value),
            _ => None,
        }
    }

    /// Moves to `Submitting`. Returns false (and changes nothing) unless idle.
    pub fn begin(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Moves from `Submitting` to `Submitted`. Ignored in any other state.
    pub fn complete(&mut self, value: T) -> bool {
        if !self.is_submitting() {
            return false;
        }
        *self = Self::Submitted(value);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted(_) => "submitted",
        }
    }
}
