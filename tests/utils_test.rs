use axum::http::{HeaderMap, HeaderValue, header};
use chrono::{NaiveDate, TimeZone};
use sporback::types::Token;
use sporback::utils::*;

#[test]
fn test_generate_state_token() {
    let state = generate_state_token();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let state2 = generate_state_token();
    assert_ne!(state, state2);
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_find_cookie() {
    // Single cookie
    assert_eq!(
        find_cookie("spotify=tok123", "spotify"),
        Some("tok123".to_string())
    );

    // Multiple cookies, arbitrary position
    assert_eq!(
        find_cookie("a=b; spotify=tok123; c=d", "spotify"),
        Some("tok123".to_string())
    );

    // Whitespace variations
    assert_eq!(
        find_cookie("a=b;spotify=tok123", "spotify"),
        Some("tok123".to_string())
    );

    // Absent cookie
    assert_eq!(find_cookie("a=b; c=d", "spotify"), None);

    // Name must match exactly, not as a prefix
    assert_eq!(find_cookie("spotify_old=tok123", "spotify"), None);

    // Empty header
    assert_eq!(find_cookie("", "spotify"), None);
}

#[test]
fn test_session_token() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("a=b; spotify=tok123"),
    );
    assert_eq!(session_token(&headers), Some("tok123".to_string()));

    // No cookie header at all
    let empty = HeaderMap::new();
    assert_eq!(session_token(&empty), None);

    // Cookie header without the session cookie
    let mut other = HeaderMap::new();
    other.insert(header::COOKIE, HeaderValue::from_static("a=b"));
    assert_eq!(session_token(&other), None);

    // Empty token value does not count as a session
    let mut blank = HeaderMap::new();
    blank.insert(header::COOKIE, HeaderValue::from_static("spotify="));
    assert_eq!(session_token(&blank), None);
}

#[test]
fn test_session_cookie() {
    let token = Token {
        access_token: "abc123".to_string(),
        scope: "playlist-modify-private".to_string(),
        expires_in: 3600,
    };

    let cookie = session_cookie(&token);
    assert_eq!(cookie, "spotify=abc123; Path=/; Max-Age=3600; Secure");

    // Round-trips through the parser
    assert_eq!(
        find_cookie(&cookie, SESSION_COOKIE),
        Some("abc123".to_string())
    );
}

#[test]
fn test_backup_playlist_name() {
    // Mid-year date
    let mid_year = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    assert_eq!(
        backup_playlist_name("Discover Weekly", mid_year),
        "Discover Weekly 2023-24"
    );

    // Early January can belong to the previous ISO year
    let jan1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    assert_eq!(
        backup_playlist_name("Discover Weekly", jan1),
        "Discover Weekly 2020-53"
    );

    // Late December can belong to the next ISO year
    let dec30 = NaiveDate::from_ymd_opt(2019, 12, 30).unwrap();
    assert_eq!(
        backup_playlist_name("Discover Weekly", dec30),
        "Discover Weekly 2020-1"
    );

    // The source name is used as the prefix verbatim
    let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    assert_eq!(
        backup_playlist_name("Release Radar", date),
        "Release Radar 2023-24"
    );
}

#[test]
fn test_backup_description() {
    let made_on = chrono::Local.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap();
    let description = backup_description("Discover Weekly", made_on);

    assert_eq!(
        description,
        "This is a backup of: \"Discover Weekly\" made on 2023-06-15 12:30:00"
    );
}
