/// Logger port - provides logging capabilities to the domain layer.
///
/// The native adapter forwards to the `log` facade; the binary embedding the
/// vault picks the backend.
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);
}
