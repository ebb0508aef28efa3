/// Ordered validation findings for one configuration pass.
///
/// Errors block use of the configuration; warnings are side-channel
/// diagnostics about optional resources and never affect the verdict.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Blocking messages, in evaluation order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Side-channel messages, in evaluation order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Write warnings to stderr with the warning marker.
    pub fn emit_warnings(&self) {
        for warning in &self.warnings {
            eprintln!("⚠️  Warning: {}", warning);
        }
    }
}
