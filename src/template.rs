use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::config::CompanyConfig;

pub(crate) mod filters {
    use crate::config::CompanyConfig;

    /// `{{ "phone"|company }}`
    #[askama::filter_fn]
    pub fn company(key: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let company = askama::get_value::<CompanyConfig>(values, "company")?;

        Ok(company.field(key).unwrap_or_default().to_owned())
    }

    /// `{{ "linkedin"|social }}`, empty when the network is not configured
    #[askama::filter_fn]
    pub fn social(network: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let company = askama::get_value::<CompanyConfig>(values, "company")?;

        Ok(company.social_link(network).unwrap_or_default().to_owned())
    }
}

pub struct Template {
    company: CompanyConfig,
}

impl Template {
    pub fn new(company: CompanyConfig) -> Self {
        Self { company }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("company", Box::new(self.company.clone()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.company.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub current_path: &'static str,
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use super::*;

    #[tokio::test]
    async fn renders_with_company_profile_only() {
        let company = CompanyConfig {
            phone: "+358 9 123 456".to_string(),
            ..Default::default()
        };

        let response = Template::new(company).render(NotFoundTemplate { current_path: "" });

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Page Not Found"));
        assert!(body.contains("+358 9 123 456"));
    }
}
