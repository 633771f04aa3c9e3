use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub current_path: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        current_path: "about",
    })
}
