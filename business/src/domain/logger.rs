/// Logging port used by every application service.
///
/// Messages are plain text; adapters decide the target and formatting.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
