use super::*;
use axum::http::HeaderValue;
use axum::http::header::COOKIE;

fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn session_token_reads_bearer_header() {
    let map = headers(&[(AUTHORIZATION, "Bearer abc123")]);
    assert_eq!(session_token(&map), Some("abc123".to_owned()));
}

#[test]
fn session_token_reads_cookie() {
    let map = headers(&[(COOKIE, "theme=dark; session_token=tok-9")]);
    assert_eq!(session_token(&map), Some("tok-9".to_owned()));
}

#[test]
fn session_token_prefers_bearer_over_cookie() {
    let map = headers(&[(AUTHORIZATION, "Bearer from-header"), (COOKIE, "session_token=from-cookie")]);
    assert_eq!(session_token(&map), Some("from-header".to_owned()));
}

#[test]
fn session_token_ignores_other_schemes() {
    let map = headers(&[(AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
    assert_eq!(session_token(&map), None);
}

#[test]
fn session_token_ignores_empty_values() {
    let map = headers(&[(AUTHORIZATION, "Bearer   "), (COOKIE, "session_token=")]);
    assert_eq!(session_token(&map), None);
}

#[test]
fn session_token_absent() {
    assert_eq!(session_token(&HeaderMap::new()), None);
}
