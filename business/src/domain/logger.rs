/// Logging port for the business layer.
///
/// Use cases never touch a logging backend directly; the presentation layer
/// wires in an adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
