use sporback::spotify::auth::build_authorize_url;

#[test]
fn test_build_authorize_url() {
    let url = build_authorize_url(
        "https://accounts.spotify.com/authorize",
        "client123",
        "http://127.0.0.1:8080/callback",
        "user-read-private",
        "challenge456",
        "state789",
    );

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=http://127.0.0.1:8080/callback"));
    assert!(url.contains("code_challenge=challenge456"));
    assert!(url.contains("code_challenge_method=S256"));
    assert!(url.contains("scope=user-read-private"));
    assert!(url.contains("state=state789"));
}

#[test]
fn test_build_authorize_url_state_varies() {
    let first = build_authorize_url("https://a", "c", "r", "s", "ch", "state-one");
    let second = build_authorize_url("https://a", "c", "r", "s", "ch", "state-two");

    assert_ne!(first, second);
    assert!(first.ends_with("&state=state-one"));
    assert!(second.ends_with("&state=state-two"));
}
