use axum::response::IntoResponse;

use crate::content::{self, Service, Testimonial};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: &'static str,
    pub services: &'static [Service],
    pub testimonials: &'static [Testimonial],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        current_path: "home",
        services: content::SERVICES,
        testimonials: content::featured_testimonials(),
    })
}
