use super::*;

#[test]
fn builds_tokens_for_both_namespaces() {
    assert_eq!(media_token("m01"), "media://m01");
    assert_eq!(asset_token("apple.png"), "asset://apple.png");
}

#[test]
fn parse_round_trips() {
    for raw in ["media://m0000001a", "asset://produce/apple.png"] {
        let token = parse_token(raw).unwrap();
        assert_eq!(token.to_token_string(), raw);
    }
}

#[test]
fn parse_extracts_the_identifier() {
    assert_eq!(parse_token("media://abc").unwrap().id(), "abc");
    assert_eq!(parse_token("asset://logo.png").unwrap().id(), "logo.png");
}

#[test]
fn parse_rejects_foreign_schemes_and_empty_ids() {
    assert_eq!(parse_token("https://example.com/a.png"), None);
    assert_eq!(parse_token("file:///tmp/a.png"), None);
    assert_eq!(parse_token("media://"), None);
    assert_eq!(parse_token("asset://"), None);
    assert_eq!(parse_token(""), None);
    assert_eq!(parse_token("plain-id"), None);
}
