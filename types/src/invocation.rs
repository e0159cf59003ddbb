//! Reconstruction requests, generation tokens and the shown result.

use std::fmt;

/// Output shown when no reconstruction applies to the current inputs.
pub const OUTPUT_PLACEHOLDER: &str = "-";

/// Identity of an input snapshot. Advances on every observed input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arguments passed to the reconstruction service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReconstructionRequest {
    /// Zero residual.
    pub left: String,
    /// One residual, same length as `left`.
    pub right: String,
    /// Single decimal digit naming the argument.
    pub index: String,
}

impl ReconstructionRequest {
    #[must_use]
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            index: index.into(),
        }
    }
}

/// What the result area currently holds. Only the orchestrator writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationState {
    output: String,
    error: String,
}

impl Default for InvocationState {
    fn default() -> Self {
        Self {
            output: OUTPUT_PLACEHOLDER.to_string(),
            error: String::new(),
        }
    }
}

impl InvocationState {
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.error.is_empty() && self.output == OUTPUT_PLACEHOLDER
    }

    pub fn reset(&mut self) {
        self.error.clear();
        self.output = OUTPUT_PLACEHOLDER.to_string();
    }

    pub fn succeed(&mut self, output: String) {
        self.error.clear();
        self.output = output;
    }

    /// Records a failure. The previous output is kept but hidden behind the error.
    pub fn fail(&mut self, error: String) {
        self.error = error;
    }

    /// Presenter rule: a non-empty error wins over the output.
    #[must_use]
    pub fn view(&self) -> ResultView<'_> {
        if self.error.is_empty() {
            ResultView::Output(&self.output)
        } else {
            ResultView::Error(&self.error)
        }
    }
}

/// The single thing the result area renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    Output(&'a str),
    Error(&'a str),
}

impl ResultView<'_> {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ResultView::Output(text) | ResultView::Error(text) => text,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ResultView::Error(_))
    }
}
