use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use weba_inquiry::{FormKind, FormSubmission, UserOutcome};

use crate::{
    content::{self, Service},
    flash,
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "appointment.html")]
pub struct AppointmentTemplate {
    pub current_path: &'static str,
    pub services: &'static [Service],
    pub flash: Option<UserOutcome>,
}

pub async fn page(template: Template, jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);

    (
        jar,
        template.render(AppointmentTemplate {
            current_path: "appointment",
            services: content::SERVICES,
            flash,
        }),
    )
}

pub async fn action(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(pairs): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let submission = FormSubmission::from_pairs(FormKind::Appointment, pairs);
    let outcome = weba_inquiry::handle(app_state.notifier.as_ref(), &submission).await;

    (flash::push(jar, &outcome), Redirect::to("/appointment"))
}
