use axum::{body::Body, response::Response};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use std::sync::LazyLock;

        use axum::{body::to_bytes, http::header};

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            ..Default::default()
        });

        fn is_html(response: &Response<Body>) -> bool {
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|content_type| content_type.starts_with("text/html"))
        }

        /// Minify rendered pages; other responses pass through untouched
        pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
            if !is_html(&response) {
                return response;
            }

            let (mut parts, body) = response.into_parts();
            parts.headers.remove(header::CONTENT_LENGTH);
            let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

            Response::from_parts(parts, Body::from(minify_html::minify(&bytes, &MINIFY_CFG)))
        }
    } else {
        /// Debug builds serve templates as written
        pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::header,
        response::{Html, IntoResponse},
    };
    use http_body_util::BodyExt;

    use super::*;

    const PAGE: &str = "<html>\n  <body>\n    <p>  Contact   us  </p>\n  </body>\n</html>\n";

    async fn body_of(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn stylesheets_pass_through() {
        let css = "body {\n  margin: 0;\n}\n";
        let response = ([(header::CONTENT_TYPE, "text/css")], css).into_response();

        let response = minify_html_middleware(response).await;

        assert_eq!(body_of(response).await, css);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn pages_are_untouched_in_debug_builds() {
        let response = minify_html_middleware(Html(PAGE).into_response()).await;

        assert_eq!(body_of(response).await, PAGE);
    }

    #[cfg(not(debug_assertions))]
    #[tokio::test]
    async fn pages_are_minified_in_release_builds() {
        let response = minify_html_middleware(Html(PAGE).into_response()).await;

        let body = body_of(response).await;
        assert!(body.len() < PAGE.len());
        assert!(body.contains("Contact us"));
        assert!(!body.contains("\n  "));
    }
}
