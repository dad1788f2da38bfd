//! tradewarden_gateway
//!
//! Outside-world integration pieces for embedding applications.
//!
//! Responsibilities:
//! - webhook-backed operator notification channel
//! - codec for the legacy card-search record payload
//! - message prose behind the supervisor's `MessageCatalog` seam
//! - environment-driven configuration and logging bootstrap
//!
//! Non-goals:
//! - no forum client (the `ContentSource` port is implemented by the
//!   application against its own platform SDK)
//! - no record-store client beyond the payload codec

pub mod config;
pub mod notify;
pub mod records;
pub mod telemetry;
pub mod templates;

pub use config::{ConfigError, GatewayConfig};
pub use notify::WebhookChannel;
pub use records::{record_from_card, CardError};
pub use telemetry::init_logging;
pub use templates::{readable_number, Messages};
