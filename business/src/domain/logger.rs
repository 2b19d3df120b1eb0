/// Logging port for the business layer. Adapters decide formatting and
/// destination; use cases only pick the level.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
