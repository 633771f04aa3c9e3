//! One-shot status messages carried across the post/redirect/get cycle

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use weba_inquiry::UserOutcome;

pub const COOKIE_NAME: &str = "flash";

/// Store the outcome until the next page render
pub fn push(jar: CookieJar, outcome: &UserOutcome) -> CookieJar {
    let value = match serde_json::to_string(outcome) {
        Ok(json) => urlencoding::encode(&json).into_owned(),
        Err(err) => {
            tracing::error!("failed to serialize flash message: {err}");
            return jar;
        }
    };

    jar.add(
        Cookie::build((COOKIE_NAME, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Read and clear the pending outcome, if any
pub fn take(jar: CookieJar) -> (CookieJar, Option<UserOutcome>) {
    let Some(cookie) = jar.get(COOKIE_NAME) else {
        return (jar, None);
    };

    let outcome = decode(cookie.value());
    if outcome.is_none() {
        tracing::warn!("discarding malformed flash cookie");
    }

    (jar.remove(Cookie::build(COOKIE_NAME).path("/")), outcome)
}

fn decode(value: &str) -> Option<UserOutcome> {
    let json = urlencoding::decode(value).ok()?;

    serde_json::from_str(&json).ok()
}
