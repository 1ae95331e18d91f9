use error_stack::Report;
use kernel::KernelError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key).map_err(|error| {
        let message = error.to_string();
        Report::from(error)
            .attach_printable(message)
            .attach_printable(format!("environment variable {key} is required"))
            .change_context(KernelError::Persistence)
    })
}
