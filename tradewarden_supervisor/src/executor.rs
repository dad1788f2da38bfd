//! Carry a `Decision` out against the collaborators.
//!
//! Message bodies are composed outside this crate (see the `MessageCatalog`
//! seam); the executor only decides which calls to make and how their
//! failures are contained.

use tracing::{debug, warn};

use tradewarden_core::{
    parse_profile_request, ContentItem, ContentKind, Decision, VerificationRecord,
};

use crate::ports::{
    ContentSource, NotificationChannel, ReplyHandle, UpstreamError, UpstreamResult,
    VerificationStore,
};

/// Human-readable message composition, provided by the embedding
/// application. The supervisor never formats prose itself.
pub trait MessageCatalog {
    /// Subject line for removal notices.
    fn removal_subject(&self) -> &str;
    /// Explanation delivered to the author of a removed item.
    fn removal_body(&self, item: &ContentItem) -> String;
    /// Footer appended to every moderator reply.
    fn disclaimer(&self) -> &str;
    /// Operator alert for a blacklisted author's item.
    fn blacklist_alert(&self, item: &ContentItem) -> String;
    /// Informational profile table for a registered author.
    fn profile_summary(&self, record: &VerificationRecord) -> String;
    /// Posted when a profile lookup names an unregistered handle.
    fn unregistered_warning(&self, handle: &str) -> String;
}

#[derive(Clone, Debug)]
pub struct ExecutorCfg {
    /// Moderation note attached when removing a blacklisted author's item.
    pub blacklist_note: String,
    /// Reply to eligible submissions from registered authors with their
    /// profile summary.
    pub profile_reply_on_submissions: bool,
    /// Answer `!PROFILE` requests found in comment bodies.
    pub answer_profile_requests: bool,
}

impl Default for ExecutorCfg {
    fn default() -> Self {
        Self {
            blacklist_note: "Blacklisted user".to_string(),
            profile_reply_on_submissions: true,
            answer_profile_requests: true,
        }
    }
}

/// Execute exactly one decision for one item.
///
/// `record` is the same lookup result the decision was made from. Errors
/// returned here abandon the item; the caller never retries it.
pub fn execute_decision<S, V, N, M>(
    source: &S,
    store: &V,
    notifier: &N,
    messages: &M,
    cfg: &ExecutorCfg,
    item: &ContentItem,
    record: Option<&VerificationRecord>,
    decision: &Decision,
) -> UpstreamResult<()>
where
    S: ContentSource,
    V: VerificationStore,
    N: NotificationChannel,
    M: MessageCatalog,
{
    match decision {
        Decision::Allow => Ok(()),
        Decision::RemoveAndNotify { reason } => {
            source.remove(item, reason.note())?;
            deliver_removal_notice(source, notifier, messages, item)
        }
        Decision::FlagBlacklisted => flag_blacklisted(source, store, notifier, messages, cfg, item),
        Decision::AnnotateBadge(update) => {
            apply_badge(source, item, &update.text, update.template_id.as_deref());
            inform_author(source, store, notifier, messages, cfg, item, record)
        }
    }
}

/// Explain a removal to its author: direct message first, public reply when
/// the author has messaging disabled. The fallback is the terminal handler
/// and never raises.
fn deliver_removal_notice<S, N, M>(
    source: &S,
    notifier: &N,
    messages: &M,
    item: &ContentItem,
) -> UpstreamResult<()>
where
    S: ContentSource,
    N: NotificationChannel,
    M: MessageCatalog,
{
    let body = messages.removal_body(item);
    match source.direct_message(&item.author, messages.removal_subject(), &body) {
        Ok(()) => Ok(()),
        Err(UpstreamError::MessagingDisabled(_)) => {
            if let Err(err) = post_reply(source, notifier, messages, item, &body) {
                warn!(item = %item.id, %err, "removal explanation could not be delivered");
            }
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Removal, store re-affirmation and the operator alert are independent;
/// one failing must not block the others.
fn flag_blacklisted<S, V, N, M>(
    source: &S,
    store: &V,
    notifier: &N,
    messages: &M,
    cfg: &ExecutorCfg,
    item: &ContentItem,
) -> UpstreamResult<()>
where
    S: ContentSource,
    V: VerificationStore,
    N: NotificationChannel,
    M: MessageCatalog,
{
    let removal = source.remove(item, &cfg.blacklist_note);
    if let Err(err) = &removal {
        warn!(item = %item.id, %err, "could not remove blacklisted item");
    }

    match store.mark_blacklisted(&item.author.to_ascii_lowercase()) {
        Ok(true) => debug!(author = %item.author, "blacklist flag set"),
        Ok(false) => debug!(author = %item.author, "blacklist flag already set"),
        Err(err) => warn!(author = %item.author, %err, "blacklist flag update failed"),
    }

    if let Err(err) = notifier.send(&messages.blacklist_alert(item)) {
        warn!(item = %item.id, %err, "blacklist alert delivery failed");
    }

    removal
}

/// Account-wide badge mutation. Re-applying the same badge is a no-op and
/// skips the call; a failure is logged and never aborts the item.
fn apply_badge<S: ContentSource>(
    source: &S,
    item: &ContentItem,
    text: &str,
    template_id: Option<&str>,
) {
    if item.badge_text.as_deref() == Some(text) {
        debug!(author = %item.author, "badge unchanged; skipping");
        return;
    }
    if let Err(err) = source.set_author_badge(&item.author, text, template_id) {
        warn!(author = %item.author, %err, "badge update failed");
    }
}

/// Informational replies for approved items: the submission profile table
/// and `!PROFILE` comment requests.
fn inform_author<S, V, N, M>(
    source: &S,
    store: &V,
    notifier: &N,
    messages: &M,
    cfg: &ExecutorCfg,
    item: &ContentItem,
    record: Option<&VerificationRecord>,
) -> UpstreamResult<()>
where
    S: ContentSource,
    V: VerificationStore,
    N: NotificationChannel,
    M: MessageCatalog,
{
    match item.kind {
        ContentKind::Submission => {
            if cfg.profile_reply_on_submissions {
                if let Some(record) = record {
                    post_reply(source, notifier, messages, item, &messages.profile_summary(record))?;
                }
            }
            Ok(())
        }
        ContentKind::Comment => {
            if !cfg.answer_profile_requests {
                return Ok(());
            }
            let request = match item.body.as_deref().and_then(parse_profile_request) {
                Some(req) => req,
                None => return Ok(()),
            };
            let body = match &request.target {
                None => match record {
                    Some(record) => messages.profile_summary(record),
                    None => return Ok(()),
                },
                Some(target) => match store.lookup(&target.to_ascii_lowercase())? {
                    Some(record) => messages.profile_summary(&record),
                    None => messages.unregistered_warning(target),
                },
            };
            post_reply(source, notifier, messages, item, &body)
        }
    }
}

/// Post a moderator reply: disclaimer footer appended, distinguished and
/// locked. A refused distinguish/lock is elevated to the operator channel
/// but the reply stays posted.
pub fn post_reply<S, N, M>(
    source: &S,
    notifier: &N,
    messages: &M,
    item: &ContentItem,
    body: &str,
) -> UpstreamResult<()>
where
    S: ContentSource,
    N: NotificationChannel,
    M: MessageCatalog,
{
    let full = format!("{}\n\n{}", body, messages.disclaimer());
    let mut reply = source.reply(item, &full)?;
    if let Err(err) = reply.distinguish_and_lock() {
        warn!(item = %item.id, %err, "could not distinguish/lock reply");
        let alert = format!("could not distinguish/lock reply on {}: {err}", item.permalink);
        if notifier.send(&alert).is_err() {
            debug!("operator alert delivery failed");
        }
    }
    Ok(())
}
