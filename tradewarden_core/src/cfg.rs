use crate::badge::BonusPolicy;

/// Decision-engine tunables. `Default` matches the deployed behavior:
/// submissions are gated on a trade tag, comments are not, price checks are
/// excluded, and no annotation bonus is granted.
#[derive(Clone, Debug)]
pub struct EngineCfg {
    /// The platform's automated moderation account; its items are never
    /// acted upon.
    pub automated_account: String,
    /// Additional authors exempt from moderation (other bots, couriers).
    pub exempt_authors: Vec<String>,
    /// Apply the trade-tag eligibility filter to submissions (title).
    pub filter_submissions: bool,
    /// Apply the trade-tag eligibility filter to comments (body).
    pub filter_comments: bool,
    /// Treat titles mentioning a price check as non-listings.
    pub exclude_price_checks: bool,
    pub bonus: BonusPolicy,
    /// Badge text used for authors that have none yet.
    pub default_badge_text: String,
    /// Badge template applied together with `default_badge_text`.
    pub default_template_id: Option<String>,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            automated_account: "AutoModerator".to_string(),
            exempt_authors: Vec::new(),
            filter_submissions: true,
            filter_comments: false,
            exclude_price_checks: true,
            bonus: BonusPolicy::default(),
            default_badge_text: "Karma: 0".to_string(),
            default_template_id: None,
        }
    }
}
