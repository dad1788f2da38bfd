use serde::{Deserialize, Serialize};

use crate::badge::{annotate, BadgeUpdate};
use crate::cfg::EngineCfg;
use crate::content::{ContentItem, ContentKind, VerificationRecord};
use crate::eligibility::is_trade_listing;

/// Moderation outcome for one content item. Exactly one case applies per
/// item; the engine never emits a second action for the same item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    /// No-op: automated account, exempt author, or non-trade content.
    Allow,
    /// Remove the item and explain why to the author.
    RemoveAndNotify { reason: RemovalReason },
    /// Remove and alert operators; the record is terminal.
    FlagBlacklisted,
    /// Apply the derived badge account-wide.
    AnnotateBadge(BadgeUpdate),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RemovalReason {
    /// No verification record exists for the author.
    NotRegistered,
    /// A record exists but verification never completed.
    VerificationPending,
}

impl RemovalReason {
    /// Machine-readable moderation note. Both reasons read the same on the
    /// platform side; the distinction only matters for logs.
    pub fn note(self) -> &'static str {
        "User not registered"
    }
}

/// Map one content item plus its (possibly absent) verification record to a
/// decision.
///
/// Priority order: eligibility pre-filter, automated/exempt authors, missing
/// record, blacklist, incomplete verification, badge annotation.
pub fn decide(item: &ContentItem, record: Option<&VerificationRecord>, cfg: &EngineCfg) -> Decision {
    if !passes_eligibility(item, cfg) {
        return Decision::Allow;
    }

    if is_exempt(&item.author, cfg) {
        return Decision::Allow;
    }

    let record = match record {
        None => {
            return Decision::RemoveAndNotify {
                reason: RemovalReason::NotRegistered,
            }
        }
        Some(r) => r,
    };

    if record.is_blacklisted {
        return Decision::FlagBlacklisted;
    }

    if !record.verification_complete {
        return Decision::RemoveAndNotify {
            reason: RemovalReason::VerificationPending,
        };
    }

    Decision::AnnotateBadge(annotate(
        item.badge_text.as_deref(),
        item.badge_template_id.as_deref(),
        record,
        cfg,
    ))
}

fn is_exempt(author: &str, cfg: &EngineCfg) -> bool {
    author.eq_ignore_ascii_case(&cfg.automated_account)
        || cfg
            .exempt_authors
            .iter()
            .any(|a| a.eq_ignore_ascii_case(author))
}

/// Per-kind eligibility: a filtered kind must carry a trade tag in its
/// title (submissions) or body (comments) to be processed at all.
fn passes_eligibility(item: &ContentItem, cfg: &EngineCfg) -> bool {
    let (filtered, probe) = match item.kind {
        ContentKind::Submission => (cfg.filter_submissions, item.title.as_deref()),
        ContentKind::Comment => (cfg.filter_comments, item.body.as_deref()),
    };
    if !filtered {
        return true;
    }
    probe
        .map(|text| is_trade_listing(text, cfg.exclude_price_checks))
        .unwrap_or(false)
}
