use tradewarden_core::{ContentItem, Platform, VerificationRecord};
use tradewarden_gateway::{readable_number, record_from_card, CardError, Messages};
use tradewarden_supervisor::MessageCatalog;

#[test]
fn card_with_platforms_and_karma() {
    let record = record_from_card(
        "Some_Trader",
        r#"{"XBL": ["TagX"], "PC": ["TagP"], "karma": 42}"#,
    )
    .unwrap();

    assert_eq!(record.handle, "some_trader");
    assert!(record.verification_complete);
    assert!(!record.is_blacklisted);
    assert_eq!(record.reputation, 42);
    assert_eq!(record.gamertag(Platform::Xbox), Some("TagX"));
    assert_eq!(record.gamertag(Platform::Pc), Some("TagP"));
    assert!(!record.is_registered(Platform::PlayStation));
}

#[test]
fn card_flags_override_defaults() {
    let record = record_from_card(
        "crook",
        r#"{"PSN": ["TagS"], "verified": false, "blacklisted": true}"#,
    )
    .unwrap();

    assert!(!record.verification_complete);
    assert!(record.is_blacklisted);
}

#[test]
fn card_bare_string_tag_accepted() {
    let record = record_from_card("trader", r#"{"PC": "SoloTag"}"#).unwrap();
    assert_eq!(record.gamertag(Platform::Pc), Some("SoloTag"));
}

#[test]
fn malformed_cards_rejected() {
    assert!(matches!(
        record_from_card("x", "not json"),
        Err(CardError::Json(_))
    ));
    assert!(matches!(
        record_from_card("x", r#"["just", "an", "array"]"#),
        Err(CardError::NotAnObject)
    ));
}

#[test]
fn readable_number_units() {
    assert_eq!(readable_number(999.0), "999");
    assert_eq!(readable_number(1234.0), "1.23k");
    assert_eq!(readable_number(10_000.0), "10k");
    assert_eq!(readable_number(2_500_000.0), "2.5m");
    assert_eq!(readable_number(-1500.0), "-1.5k");
}

#[test]
fn removal_body_names_author_and_link() {
    let messages = Messages::new("Wasteland Market", "MarketWardenBot");
    let item = ContentItem::submission("s1", "drifter", "/r/m/s1", "[PC] caps");
    let body = messages.removal_body(&item);

    assert!(body.contains("u/drifter"));
    assert!(body.contains("/r/m/s1"));
    assert!(body.contains("u/MarketWardenBot"));
    assert_eq!(messages.removal_subject(), "Your submission/comment was removed");
}

#[test]
fn profile_summary_lists_all_platform_rows() {
    let messages = Messages::new("Wasteland Market", "MarketWardenBot");
    let record = VerificationRecord::new("trader")
        .verified()
        .with_identity(Platform::Xbox, Some("XTag"));
    let table = messages.profile_summary(&record);

    assert!(table.contains("|Wasteland Market|u/trader|"));
    assert!(table.contains("|XBL|XTag|"));
    assert!(table.contains("|PSN|N/A|"));
    assert!(table.contains("|PC|N/A|"));
    assert!(table.contains("|Trading Karma|0|"));
}
