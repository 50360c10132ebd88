//! Current-actor context.
//!
//! The identity provider signs users in and out through [`SessionContext`];
//! operations that attribute work to a user take the context explicitly and
//! resolve the actor at call time. Every change is broadcast over a
//! `tokio::sync::watch` channel.

use daftar_shared::AppError;
use daftar_shared::types::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User identifier.
    pub user_id: UserId,
    /// Email address, when the provider supplies one.
    pub email: Option<String>,
}

impl Actor {
    /// Creates an actor without an email.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
        }
    }

    /// Attaches an email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Errors raised when resolving the current actor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Nobody is signed in.
    #[error("No signed-in user")]
    NoCurrentUser,

    /// The session context was dropped.
    #[error("Session closed")]
    Closed,
}

impl SessionError {
    /// Returns the error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoCurrentUser => "NO_CURRENT_USER",
            Self::Closed => "SESSION_CLOSED",
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}

/// Holds the current actor and notifies subscribers of changes.
#[derive(Debug)]
pub struct SessionContext {
    sender: watch::Sender<Option<Actor>>,
}

impl SessionContext {
    /// Creates a context with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Creates a context with `actor` already signed in.
    #[must_use]
    pub fn signed_in(actor: Actor) -> Self {
        let (sender, _) = watch::channel(Some(actor));
        Self { sender }
    }

    /// Signs `actor` in. Subscribers are notified only if the actor changed.
    pub fn sign_in(&self, actor: Actor) {
        self.sender.send_if_modified(|current| {
            if current.as_ref() == Some(&actor) {
                return false;
            }
            *current = Some(actor);
            true
        });
    }

    /// Signs the current actor out.
    pub fn sign_out(&self) {
        self.sender.send_if_modified(|current| current.take().is_some());
    }

    /// The current actor, if any.
    #[must_use]
    pub fn current_actor(&self) -> Option<Actor> {
        self.sender.borrow().clone()
    }

    /// The current actor, or [`SessionError::NoCurrentUser`].
    pub fn require_actor(&self) -> Result<Actor, SessionError> {
        self.current_actor().ok_or(SessionError::NoCurrentUser)
    }

    /// Returns true if someone is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Subscribes to actor changes.
    #[must_use]
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives every change to the current actor.
#[derive(Debug, Clone)]
pub struct SessionSubscription {
    receiver: watch::Receiver<Option<Actor>>,
}

impl SessionSubscription {
    /// Returns true if the actor changed since the last [`Self::latest`] call.
    pub fn has_changed(&self) -> Result<bool, SessionError> {
        self.receiver.has_changed().map_err(|_| SessionError::Closed)
    }

    /// The current actor, marking the change as seen.
    pub fn latest(&mut self) -> Option<Actor> {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits for the next change and returns the new actor.
    pub async fn changed(&mut self) -> Result<Option<Actor>, SessionError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| SessionError::Closed)?;
        Ok(self.latest())
    }
}
