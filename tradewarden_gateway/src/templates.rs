//! Prose for moderator replies, notices and operator alerts.

use tradewarden_core::{ContentItem, Platform, VerificationRecord};
use tradewarden_supervisor::MessageCatalog;

/// The deployed message set, parameterized on community naming so the same
/// prose serves any forum.
#[derive(Clone, Debug)]
pub struct Messages {
    /// Display name of the forum, used in tables and sign-offs.
    pub forum_name: String,
    /// Account traders contact to register.
    pub contact_handle: String,
    pub disclaimer: String,
}

impl Messages {
    pub fn new(forum_name: impl Into<String>, contact_handle: impl Into<String>) -> Self {
        Self {
            forum_name: forum_name.into(),
            contact_handle: contact_handle.into(),
            disclaimer: "^(This action was performed by a bot. Please contact the moderators \
                         for any questions.)"
                .to_string(),
        }
    }
}

impl MessageCatalog for Messages {
    fn removal_subject(&self) -> &str {
        "Your submission/comment was removed"
    }

    fn removal_body(&self, item: &ContentItem) -> String {
        format!(
            "## Your submission/comment was removed\n\
             [Submission/Comment URL]({permalink})\n\
             ### Why it was removed?\n\
             Hi u/{author}! It seems that you have not registered your IGN/GamerTag in our \
             system. To keep you and the community safe, we decided to make registration \
             compulsory if you want to trade here.\n\n\
             ### How to register?\n\
             Registration is easy and takes only a couple of minutes: send u/{contact} a chat \
             message and you will be guided through it from there.\n\n\
             Thank you for your cooperation!\n\n\
             {forum}\n\n\
             If you have any questions, please send the moderators a message. This is a bot \
             account and replies may not get read.",
            permalink = item.permalink,
            author = item.author,
            contact = self.contact_handle,
            forum = self.forum_name,
        )
    }

    fn disclaimer(&self) -> &str {
        &self.disclaimer
    }

    fn blacklist_alert(&self, item: &ContentItem) -> String {
        format!(
            "Blacklisted trader u/{} is posting again: {}",
            item.author, item.permalink
        )
    }

    fn profile_summary(&self, record: &VerificationRecord) -> String {
        let mut lines = vec![
            "|**Platform**|**Username**|".to_string(),
            "|:-|:-|".to_string(),
            format!("|{}|u/{}|", self.forum_name, record.handle),
        ];
        for (label, platform) in [
            ("XBL", Platform::Xbox),
            ("PSN", Platform::PlayStation),
            ("PC", Platform::Pc),
        ] {
            lines.push(format!(
                "|{label}|{}|",
                record.gamertag(platform).unwrap_or("N/A")
            ));
        }
        lines.push(format!(
            "|Trading Karma|{}|",
            readable_number(record.reputation as f64)
        ));
        lines.push(String::new());
        lines.push(
            "^(Note: If this user is trading with a GamerTag that is not listed here, please \
             report it to the moderators immediately.)"
                .to_string(),
        );
        lines.join("\n")
    }

    fn unregistered_warning(&self, handle: &str) -> String {
        format!(
            "u/{handle} has not registered their GamerTag with us. Please take precaution \
             when trading with them."
        )
    }
}

/// Compact display for large counters: 1234 -> `1.23k`, 10000 -> `10k`.
pub fn readable_number(value: f64) -> String {
    let mut v = value;
    for unit in ["", "k", "m", "g"] {
        if v.abs() < 1000.0 {
            return format!("{}{unit}", trim_decimal(v));
        }
        v /= 1000.0;
    }
    format!("{}t", trim_decimal(v))
}

fn trim_decimal(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
