pub mod badge;
pub mod content;

pub mod cfg;
pub mod decide;
pub mod eligibility;
pub mod state;

pub use badge::{already_annotated, annotate, BadgeUpdate, BonusPolicy};
pub use content::{ContentItem, ContentKind, Platform, PlatformIdentity, VerificationRecord};

pub use cfg::EngineCfg;
pub use decide::{decide, Decision, RemovalReason};
pub use eligibility::{is_trade_listing, mentions_price_check, parse_profile_request, ProfileRequest};
pub use state::RetryState;
