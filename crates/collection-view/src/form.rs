//! Create-form state
//!
//! Input survives a failed submit so the user can correct it.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateForm<P> {
    pub values: P,
    open: bool,
    submitting: bool,
    error: Option<String>,
}

impl<P: Default> CreateForm<P> {
    pub fn new() -> Self {
        Self {
            values: P::default(),
            open: false,
            submitting: false,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without submitting; values are kept for the next open.
    pub fn cancel(&mut self) {
        self.open = false;
        self.error = None;
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Close and reset values
    pub fn succeed(&mut self) {
        *self = Self::new();
    }
}
