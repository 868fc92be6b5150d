// trolley/src/notify.rs

//! User-facing feedback sink.
//!
//! Every mutation outcome the user should see goes through a `Notifier`,
//! which is a transient toast in the real UI. Errors are funneled here
//! instead of being returned to callers, so the sink is the only place
//! failure surfaces.

use tracing::{event, Level};

/// Sink for transient success/error feedback.
///
/// Implementations must be cheap and non-blocking; the store calls these
/// inline from async operations.
pub trait Notifier: Send + Sync {
  fn success(&self, message: &str);
  fn error(&self, message: &str);
}

/// Default sink: forwards notifications to `tracing`.
///
/// Useful for headless consumers and examples; a UI binds its toast system
/// in place of this.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
  fn success(&self, message: &str) {
    event!(Level::INFO, notification = "success", "{}", message);
  }

  fn error(&self, message: &str) {
    event!(Level::WARN, notification = "error", "{}", message);
  }
}
