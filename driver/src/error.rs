use error_stack::Report;
use kernel::KernelError;

/// Single translation boundary between store errors and the kernel's
/// error taxonomy. The original error text is attached so it reaches
/// the outcome message verbatim.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let message = error.to_string();
            let context = match &error {
                sqlx::Error::PoolTimedOut => KernelError::Timeout,
                _ => KernelError::Persistence,
            };
            Report::from(error)
                .attach_printable(message)
                .change_context(context)
        })
    }
}
