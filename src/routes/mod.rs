use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use weba_notification::Notifier;

use crate::template::{NotFoundTemplate, Template};

mod about;
mod appointment;
mod blog;
mod contact;
mod faq;
mod health;
mod index;
mod pricing;
mod services;
mod testimonials;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub notifier: Arc<dyn Notifier>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate { current_path: "" }))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/pricing", get(pricing::page))
        .route("/faq", get(faq::page))
        .route("/blog", get(blog::page))
        .route("/testimonials", get(testimonials::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route(
            "/appointment",
            get(appointment::page).post(appointment::action),
        )
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService)
        .with_state(app_state)
}
