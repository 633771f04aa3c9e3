use axum::response::IntoResponse;

use crate::content::{self, BlogPost};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub current_path: &'static str,
    pub posts: &'static [BlogPost],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(BlogTemplate {
        current_path: "blog",
        posts: content::BLOG_POSTS,
    })
}
