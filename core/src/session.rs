// trolley/src/session.rs

//! Supplies the current authenticated identity to the cart store.
//!
//! The session is an explicitly constructed, injected collaborator rather
//! than module-level state: the store is handed an `Arc<dyn SessionProvider>`
//! at construction, so lifetime and teardown stay caller-controlled and a
//! test can swap in whatever identity it needs.

use async_trait::async_trait;
use parking_lot::RwLock;

/// Source of the current user's identity.
///
/// The lookup is async because real providers resolve the session over the
/// network; callers only ever see "some user id" or "no session".
#[async_trait]
pub trait SessionProvider: Send + Sync {
  /// The authenticated user's id, or `None` when signed out.
  async fn current_user_id(&self) -> Option<String>;
}

/// A provider pinned to one identity (or to no identity at all).
///
/// This is the "cart scoped to a user at construction" shape: build one per
/// signed-in user, or `anonymous()` for the signed-out state. The identity
/// can still be swapped to model sign-in/sign-out mid-test.
#[derive(Debug, Default)]
pub struct StaticSession {
  user_id: RwLock<Option<String>>,
}

impl StaticSession {
  pub fn user(user_id: impl Into<String>) -> Self {
    Self {
      user_id: RwLock::new(Some(user_id.into())),
    }
  }

  /// A signed-out session: `current_user_id` resolves to `None`.
  pub fn anonymous() -> Self {
    Self {
      user_id: RwLock::new(None),
    }
  }

  /// Replaces the identity, modelling a sign-in (`Some`) or sign-out (`None`).
  pub fn set_user(&self, user_id: Option<String>) {
    *self.user_id.write() = user_id;
  }
}

#[async_trait]
impl SessionProvider for StaticSession {
  async fn current_user_id(&self) -> Option<String> {
    self.user_id.read().clone()
  }
}
