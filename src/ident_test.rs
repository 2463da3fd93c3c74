use super::*;

// =============================================================================
// generate_id
// =============================================================================

#[test]
fn generate_id_is_36_chars() {
    assert_eq!(generate_id().len(), 36);
}

#[test]
fn generate_id_parses_as_uuid() {
    let id = generate_id();
    assert!(Uuid::parse_str(&id).is_ok());
}

#[test]
fn generate_id_two_calls_differ() {
    assert_ne!(generate_id(), generate_id());
}

// =============================================================================
// short_id
// =============================================================================

#[test]
fn short_id_takes_first_8_chars() {
    assert_eq!(short_id("1a2b3c4d-5e6f-4abc-8def-0123456789ab"), "1a2b3c4d");
}

#[test]
fn short_id_of_short_input_is_whole_input() {
    assert_eq!(short_id("abc"), "abc");
}

#[test]
fn short_id_of_empty_input_is_empty() {
    assert_eq!(short_id(""), "");
}

// =============================================================================
// now_rfc3339
// =============================================================================

#[test]
fn now_rfc3339_is_parseable() {
    let now = now_rfc3339();
    assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok());
}

#[test]
fn now_rfc3339_is_utc() {
    assert!(now_rfc3339().ends_with('Z'));
}
