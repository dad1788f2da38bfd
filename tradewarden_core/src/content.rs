use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------
// Content items and verification records: the two inputs every
// moderation decision is made from.
// ---------------------------------------------------------------------

/// Trading platforms, in fixed badge precedence order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    Xbox,
    PlayStation,
    Pc,
}

impl Platform {
    /// Badge marker precedence. Iteration order here decides the final
    /// left-to-right order of markers, regardless of how a record stores
    /// its identities.
    pub const PRECEDENCE: [Platform; 3] = [Platform::Xbox, Platform::PlayStation, Platform::Pc];

    /// Emoji marker inserted into badge text.
    pub fn marker(self) -> &'static str {
        match self {
            Platform::Xbox => ":xbox:",
            Platform::PlayStation => ":playstation:",
            Platform::Pc => ":pc:",
        }
    }

    /// Keyword used by the re-tag guard: badge text already containing this
    /// (case-insensitive) is considered annotated.
    pub fn keyword(self) -> &'static str {
        match self {
            Platform::Xbox => "xbox",
            Platform::PlayStation => "playstation",
            Platform::Pc => "pc",
        }
    }
}

/// One registered platform identity, optionally carrying a gamertag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformIdentity {
    pub platform: Platform,
    pub gamertag: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentKind {
    Comment,
    Submission,
}

/// A comment or submission as fetched from the content source.
///
/// Immutable once fetched; badge fields describe the author's badge at fetch
/// time and are only ever changed through the action executor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub author: String,
    pub permalink: String,
    pub kind: ContentKind,
    /// Submission title; absent on comments.
    pub title: Option<String>,
    /// Comment body; absent on submissions.
    pub body: Option<String>,
    pub badge_text: Option<String>,
    pub badge_template_id: Option<String>,
}

impl ContentItem {
    pub fn comment(
        id: impl Into<String>,
        author: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            permalink: permalink.into(),
            kind: ContentKind::Comment,
            title: None,
            body: None,
            badge_text: None,
            badge_template_id: None,
        }
    }

    pub fn submission(
        id: impl Into<String>,
        author: impl Into<String>,
        permalink: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            permalink: permalink.into(),
            kind: ContentKind::Submission,
            title: Some(title.into()),
            body: None,
            badge_text: None,
            badge_template_id: None,
        }
    }

    /// Attach a comment body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach the author's current badge.
    pub fn with_badge(mut self, text: impl Into<String>, template_id: Option<&str>) -> Self {
        self.badge_text = Some(text.into());
        self.badge_template_id = template_id.map(String::from);
        self
    }
}

/// Per-author verification data as held by the external record store.
///
/// `is_blacklisted == true` is terminal: no badge mutation is ever applied
/// to a blacklisted record.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationRecord {
    /// Lowercase author handle; the store's lookup key.
    pub handle: String,
    pub identities: Vec<PlatformIdentity>,
    pub verification_complete: bool,
    pub is_blacklisted: bool,
    /// Opaque trading-reputation counter owned by the store.
    pub reputation: i64,
}

impl VerificationRecord {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Register an identity.
    pub fn with_identity(mut self, platform: Platform, gamertag: Option<&str>) -> Self {
        self.identities.push(PlatformIdentity {
            platform,
            gamertag: gamertag.map(String::from),
        });
        self
    }

    pub fn verified(mut self) -> Self {
        self.verification_complete = true;
        self
    }

    pub fn blacklisted(mut self) -> Self {
        self.is_blacklisted = true;
        self
    }

    pub fn is_registered(&self, platform: Platform) -> bool {
        self.identities.iter().any(|id| id.platform == platform)
    }

    pub fn gamertag(&self, platform: Platform) -> Option<&str> {
        self.identities
            .iter()
            .find(|id| id.platform == platform)
            .and_then(|id| id.gamertag.as_deref())
    }
}
