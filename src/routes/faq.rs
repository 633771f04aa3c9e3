use axum::response::IntoResponse;

use crate::content::{self, FaqGroup};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub current_path: &'static str,
    pub groups: &'static [FaqGroup],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(FaqTemplate {
        current_path: "faq",
        groups: content::FAQS,
    })
}
