#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use weba::{AppState, Config};
use weba_notification::{DeliveryError, DeliveryResult, NotificationMessage, Notifier};

/// Notifier that records every message instead of talking to a relay
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub sent: Mutex<Vec<NotificationMessage>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &NotificationMessage) -> DeliveryResult {
        self.sent.lock().unwrap().push(message.clone());

        if self.fail {
            return Err(DeliveryError::Send("relay rejected the message".into()));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn create_test_app(notifier: RecordingNotifier) -> TestApp {
    let config = Config::load(None).expect("Failed to load config");
    let notifier = Arc::new(notifier);

    let router = weba::router(AppState {
        config,
        notifier: notifier.clone(),
    });

    TestApp { router, notifier }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// `name=value` pair of the flash cookie set by a response
pub fn flash_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("flash="))
        .and_then(|value| value.split(';').next())
        .expect("flash cookie not set")
        .to_owned()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}
