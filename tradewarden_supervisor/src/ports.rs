//! Collaborator ports: the narrow interfaces the supervisor drives.
//!
//! All calls are blocking; the pipeline is a single logical worker and each
//! item is fully processed before the next one is fetched. Implementations
//! own their transports; nothing here opens a socket.

use std::time::Duration;

use thiserror::Error;
use tradewarden_core::{ContentItem, VerificationRecord};

/// Failure taxonomy for every outside call.
///
/// Only `ServerSide` earns a backoff pause; everything else either falls
/// back (`MessagingDisabled`), gets surfaced to operators (`Permission`),
/// or abandons the current item (`Transport`).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream server error: {0}")]
    ServerSide(String),
    #[error("permission refused: {0}")]
    Permission(String),
    #[error("messaging disabled for u/{0}")]
    MessagingDisabled(String),
}

impl UpstreamError {
    #[inline]
    pub fn is_server_side(&self) -> bool {
        matches!(self, UpstreamError::ServerSide(_))
    }
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// A live, possibly-interrupted sequence of content items.
pub trait ContentStream {
    /// The next item, or `Ok(None)` when the stream is temporarily drained
    /// and control should pass to the sibling stream.
    fn next(&mut self) -> UpstreamResult<Option<ContentItem>>;
}

/// A reply that was just posted and can still be moderated.
pub trait ReplyHandle {
    /// Mark the reply as a moderator action and lock it against replies.
    fn distinguish_and_lock(&mut self) -> UpstreamResult<()>;
}

/// The forum: two item streams plus the moderation primitives.
pub trait ContentSource {
    type Stream: ContentStream;
    type Reply: ReplyHandle;

    /// Open a fresh comment stream with skip-history semantics (resume from
    /// now, not from backlog). Streams are not restartable; reconnection
    /// means opening new ones.
    fn comments(&self) -> UpstreamResult<Self::Stream>;
    /// Submission counterpart of [`ContentSource::comments`].
    fn submissions(&self) -> UpstreamResult<Self::Stream>;

    fn remove(&self, item: &ContentItem, note: &str) -> UpstreamResult<()>;
    fn reply(&self, item: &ContentItem, body: &str) -> UpstreamResult<Self::Reply>;
    /// Account-wide badge mutation, not item-scoped.
    fn set_author_badge(
        &self,
        handle: &str,
        text: &str,
        template_id: Option<&str>,
    ) -> UpstreamResult<()>;
    fn direct_message(&self, handle: &str, subject: &str, body: &str) -> UpstreamResult<()>;
}

/// The verification record store, keyed by lowercase author handle.
pub trait VerificationStore {
    fn lookup(&self, handle: &str) -> UpstreamResult<Option<VerificationRecord>>;
    /// Compare-and-set blacklist flag. `Ok(false)` when the flag was already
    /// set; safe to apply more than once.
    fn mark_blacklisted(&self, handle: &str) -> UpstreamResult<bool>;
}

/// Fire-and-forget operator alerts. Delivery is best-effort; callers log
/// and move on when this fails.
pub trait NotificationChannel {
    fn send(&self, text: &str) -> UpstreamResult<()>;
}

/// Injected pause so backoff arithmetic is observable in tests.
pub trait Sleeper {
    fn sleep(&self, pause: Duration);
}

/// Default sleeper: blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, pause: Duration) {
        std::thread::sleep(pause);
    }
}
