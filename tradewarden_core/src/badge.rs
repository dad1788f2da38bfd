use serde::{Deserialize, Serialize};

use crate::cfg::EngineCfg;
use crate::content::{Platform, VerificationRecord};

// ---------------------------------------------------------------------
// Badge annotation: derive the next account-wide badge for a verified,
// non-blacklisted author. Pure and idempotent.
// ---------------------------------------------------------------------

/// The badge text/template to apply account-wide.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeUpdate {
    pub text: String,
    pub template_id: Option<String>,
}

/// One-time reputation bonus granted the first time a badge is annotated.
/// Consolidates the promotional variant behind a flag instead of a parallel
/// code path.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusPolicy {
    pub enabled: bool,
    pub amount: i64,
}

/// True when `text` already carries any platform keyword. Re-annotating such
/// a badge must be a no-op, so markers are never duplicated.
pub fn already_annotated(text: &str) -> bool {
    let lo = text.to_ascii_lowercase();
    Platform::PRECEDENCE.iter().any(|p| lo.contains(p.keyword()))
}

/// Compute the next badge for `record`, starting from the author's current
/// badge text/template (or the configured default when absent).
///
/// One marker per registered platform is inserted immediately before the
/// reputation-counter token, iterating platforms in `Platform::PRECEDENCE`
/// order; markers therefore end up in precedence order, left of the counter.
/// Annotating an already-annotated badge returns it unchanged.
pub fn annotate(
    existing_text: Option<&str>,
    existing_template: Option<&str>,
    record: &VerificationRecord,
    cfg: &EngineCfg,
) -> BadgeUpdate {
    let existing = existing_text.filter(|t| !t.trim().is_empty());

    if let Some(text) = existing {
        if already_annotated(text) {
            return BadgeUpdate {
                text: text.to_string(),
                template_id: existing_template.map(String::from),
            };
        }
    }

    let (base, template_id) = match existing {
        Some(t) => (t.to_string(), existing_template.map(String::from)),
        None => (
            cfg.default_badge_text.clone(),
            cfg.default_template_id.clone(),
        ),
    };

    let mut tokens: Vec<String> = base.split_whitespace().map(String::from).collect();
    let mut inserted = 0usize;
    for platform in Platform::PRECEDENCE {
        if !record.is_registered(platform) {
            continue;
        }
        let at = counter_index(&tokens);
        tokens.insert(at, platform.marker().to_string());
        inserted += 1;
    }

    if inserted > 0 && cfg.bonus.enabled {
        if let Some(last) = tokens.last_mut() {
            // Non-numeric counters (courier badges etc.) are left alone.
            if let Ok(v) = last.parse::<i64>() {
                *last = (v + cfg.bonus.amount).to_string();
            }
        }
    }

    BadgeUpdate {
        text: tokens.join(" "),
        template_id,
    }
}

/// Index of the reputation-counter token: the token carrying the literal
/// `Karma` label, falling back to the last token.
fn counter_index(tokens: &[String]) -> usize {
    tokens
        .iter()
        .position(|t| t.contains("Karma"))
        .unwrap_or_else(|| tokens.len().saturating_sub(1))
}
