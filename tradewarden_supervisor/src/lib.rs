//! tradewarden_supervisor
//!
//! Outside-world facing orchestration layer for `tradewarden_core`.
//!
//! Responsibilities:
//! - define the collaborator ports (content source, record store, operator
//!   notifications) and the failure taxonomy they share
//! - carry decisions out with contained, per-item failure handling
//! - drive the perpetual dual-stream drain loop with its backoff/reconnect
//!   state machine
//!
//! Non-goals:
//! - no network code (ports are implemented by the embedding application)
//! - no decision policy (lives in core)
//! - no message prose (lives behind `MessageCatalog`)

pub mod executor;
pub mod ports;
pub mod supervisor;

pub use ports::{
    ContentSource, ContentStream, NotificationChannel, ReplyHandle, Sleeper, ThreadSleeper,
    UpstreamError, UpstreamResult, VerificationStore,
};

pub use executor::{execute_decision, post_reply, ExecutorCfg, MessageCatalog};

pub use supervisor::{Phase, StreamSupervisor, SupervisorCfg};
