use tradewarden_core::*;

fn verified_record(handle: &str, platforms: &[Platform]) -> VerificationRecord {
    let mut r = VerificationRecord::new(handle).verified();
    for p in platforms {
        r = r.with_identity(*p, Some("SomeTag"));
    }
    r
}

#[test]
fn automod_allowed() {
    let cfg = EngineCfg::default();
    let item = ContentItem::comment("c1", "AutoModerator", "/c1");
    assert_eq!(decide(&item, None, &cfg), Decision::Allow);
}

#[test]
fn unregistered_comment_removed() {
    let cfg = EngineCfg::default();
    let item = ContentItem::comment("c2", "drifter", "/c2");
    assert_eq!(
        decide(&item, None, &cfg),
        Decision::RemoveAndNotify {
            reason: RemovalReason::NotRegistered
        }
    );
}

#[test]
fn listing_from_unregistered_removed() {
    let cfg = EngineCfg::default();
    let item = ContentItem::submission("s1", "drifter", "/s1", "[PC] Selling plans");
    assert_eq!(
        decide(&item, None, &cfg),
        Decision::RemoveAndNotify {
            reason: RemovalReason::NotRegistered
        }
    );
}

#[test]
fn non_listing_submission_untouched() {
    let cfg = EngineCfg::default();
    let item = ContentItem::submission("s2", "drifter", "/s2", "Selling plans");
    assert_eq!(decide(&item, None, &cfg), Decision::Allow);
}

#[test]
fn blacklist_beats_completed_verification() {
    let cfg = EngineCfg::default();
    let record = verified_record("crook", &[Platform::Pc]).blacklisted();
    let item = ContentItem::comment("c3", "crook", "/c3");
    assert_eq!(decide(&item, Some(&record), &cfg), Decision::FlagBlacklisted);
}

#[test]
fn pending_verification_removed() {
    let cfg = EngineCfg::default();
    let record = VerificationRecord::new("newcomer").with_identity(Platform::Xbox, None);
    let item = ContentItem::comment("c4", "newcomer", "/c4");
    assert_eq!(
        decide(&item, Some(&record), &cfg),
        Decision::RemoveAndNotify {
            reason: RemovalReason::VerificationPending
        }
    );
}

#[test]
fn verified_author_gets_badge() {
    let cfg = EngineCfg::default();
    let record = verified_record("trader", &[Platform::Xbox]);
    let item = ContentItem::comment("c5", "trader", "/c5").with_badge("Karma: 7", None);
    match decide(&item, Some(&record), &cfg) {
        Decision::AnnotateBadge(update) => assert_eq!(update.text, ":xbox: Karma: 7"),
        other => panic!("expected badge annotation, got {other:?}"),
    }
}

#[test]
fn listing_brackets_interchangeable() {
    assert!(is_trade_listing("[PC] caps", true));
    assert!(is_trade_listing("(ps4) rare armor", true));
    assert!(is_trade_listing("{XB1} h: plans", true));
    assert!(is_trade_listing("[PS4} mixed brackets", true));
    assert!(!is_trade_listing("H: [PC] not at start", true));
    assert!(!is_trade_listing("[NES] wrong platform", true));
}

#[test]
fn price_checks_excluded() {
    assert!(!is_trade_listing("[PC] price check on fixer", true));
    assert!(!is_trade_listing("[PC] Pricecheck please", true));
    // Exclusion off: the tag alone decides.
    assert!(is_trade_listing("[PC] price check on fixer", false));
}

#[test]
fn annotate_is_idempotent() {
    let cfg = EngineCfg::default();
    let record = verified_record("trader", &[Platform::Xbox, Platform::Pc]);

    let once = annotate(Some("Karma: 120"), None, &record, &cfg);
    let twice = annotate(Some(&once.text), None, &record, &cfg);
    assert_eq!(once.text, twice.text);
}

#[test]
fn two_tag_golden_fixture() {
    let cfg = EngineCfg::default();
    let record = verified_record("trader", &[Platform::Xbox, Platform::Pc]);
    let update = annotate(Some("Karma: 120"), None, &record, &cfg);
    assert_eq!(update.text, ":xbox: :pc: Karma: 120");
}

#[test]
fn tag_order_ignores_record_order() {
    let cfg = EngineCfg::default();
    // Identities registered in reverse precedence order.
    let record = verified_record(
        "trader",
        &[Platform::Pc, Platform::PlayStation, Platform::Xbox],
    );
    let update = annotate(Some("Karma: 0"), None, &record, &cfg);
    assert_eq!(update.text, ":xbox: :playstation: :pc: Karma: 0");
}

#[test]
fn absent_badge_starts_from_default() {
    let cfg = EngineCfg {
        default_template_id: Some("tmpl-1".to_string()),
        ..EngineCfg::default()
    };
    let record = verified_record("trader", &[Platform::PlayStation]);
    let update = annotate(None, None, &record, &cfg);
    assert_eq!(update.text, ":playstation: Karma: 0");
    assert_eq!(update.template_id.as_deref(), Some("tmpl-1"));
}

#[test]
fn counter_fallback_is_last_token() {
    let cfg = EngineCfg::default();
    let record = verified_record("courier", &[Platform::Xbox]);
    let update = annotate(Some("Courier 50"), None, &record, &cfg);
    assert_eq!(update.text, "Courier :xbox: 50");
}

#[test]
fn bonus_granted_once() {
    let cfg = EngineCfg {
        bonus: BonusPolicy {
            enabled: true,
            amount: 10,
        },
        ..EngineCfg::default()
    };
    let record = verified_record("trader", &[Platform::Xbox]);

    let first = annotate(Some("Karma: 5"), None, &record, &cfg);
    assert_eq!(first.text, ":xbox: Karma: 15");

    // Second pass trips the re-tag guard; no second bonus.
    let second = annotate(Some(&first.text), None, &record, &cfg);
    assert_eq!(second.text, first.text);
}

#[test]
fn profile_request_forms() {
    assert_eq!(
        parse_profile_request("!PROFILE"),
        Some(ProfileRequest { target: None })
    );
    assert_eq!(
        parse_profile_request("profile! who is this"),
        Some(ProfileRequest { target: None })
    );
    assert_eq!(
        parse_profile_request("!profile u/Some_Trader please"),
        Some(ProfileRequest {
            target: Some("Some_Trader".to_string())
        })
    );
    assert_eq!(parse_profile_request("WTS fixer"), None);
}

#[test]
fn retry_counter_lifecycle() {
    let mut retry = RetryState::default();
    assert_eq!(retry.failed_attempts, 1);
    retry.note_failure();
    retry.note_failure();
    assert_eq!(retry.failed_attempts, 3);
    retry.note_success();
    assert_eq!(retry.failed_attempts, 1);
}
