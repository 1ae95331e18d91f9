use error_stack::{AttachmentKind, FrameKind, Report};
use kernel::KernelError;

/// Success/failure envelope handed to the presentation layer. The
/// message is always set on completion; on failure the value is `None`
/// and must not be relied on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    value: Option<T>,
    success: bool,
    message: String,
}

impl<T> Outcome<T> {
    pub fn success(value: T, message: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            value: None,
            success: false,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub(crate) trait IntoOutcome<T> {
    fn into_outcome(self, message: &str) -> Outcome<T>;
}

impl<T> IntoOutcome<T> for error_stack::Result<T, KernelError> {
    fn into_outcome(self, message: &str) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::success(value, message),
            Err(report) => Outcome::failure(failure_message(&report)),
        }
    }
}

/// Flattens a report into one line: the kernel context first, then every
/// printable attachment, which is where the store's own error text ends
/// up after the driver boundary translation.
fn failure_message(report: &Report<KernelError>) -> String {
    let mut parts = vec![report.current_context().to_string()];
    for frame in report.frames() {
        if let FrameKind::Attachment(AttachmentKind::Printable(attachment)) = frame.kind() {
            parts.push(attachment.to_string());
        }
    }
    parts.join(": ")
}

#[cfg(test)]
mod test {
    use super::{IntoOutcome, Outcome};
    use error_stack::Report;
    use kernel::KernelError;

    #[test]
    fn ok_result_becomes_success_with_the_given_message() {
        let result: error_stack::Result<i32, KernelError> = Ok(7);
        let outcome = result.into_outcome("Successfully completed.");
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&7));
        assert_eq!(outcome.message(), "Successfully completed.");
    }

    #[test]
    fn failure_message_carries_the_underlying_error_text() {
        let result: error_stack::Result<i32, KernelError> =
            Err(Report::new(KernelError::Persistence).attach_printable("connection refused"));
        let outcome = result.into_outcome("unused");
        assert!(!outcome.is_success());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.message(), "store operation failed: connection refused");
    }

    #[test]
    fn validation_failures_surface_their_own_message() {
        let result: error_stack::Result<(), KernelError> = Err(Report::new(
            KernelError::Validation("user must be saved before rental".to_string()),
        ));
        let outcome = result.into_outcome("unused");
        assert_eq!(outcome.message(), "user must be saved before rental");
        assert_eq!(Outcome::<()>::failure("x").value(), None);
    }
}
