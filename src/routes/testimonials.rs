use axum::response::IntoResponse;

use crate::content::{self, Testimonial};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "testimonials.html")]
pub struct TestimonialsTemplate {
    pub current_path: &'static str,
    pub testimonials: &'static [Testimonial],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(TestimonialsTemplate {
        current_path: "testimonials",
        testimonials: content::TESTIMONIALS,
    })
}
