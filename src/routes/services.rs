use axum::response::IntoResponse;

use crate::content::{self, Service};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub current_path: &'static str,
    pub services: &'static [Service],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        current_path: "services",
        services: content::SERVICES,
    })
}
