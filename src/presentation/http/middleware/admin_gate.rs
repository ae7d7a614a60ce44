// src/presentation/http/middleware/admin_gate.rs
use crate::application::{error::ApplicationError, ports::access::AccessDecision};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::forms::GateParams;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::View;
use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use minijinja::context;

/// Guards category mutations behind the admin password.
///
/// The password travels as `?password=` so the form pages can carry it into
/// their own POST action. Without it the password prompt is rendered instead
/// of the page; a wrong password re-renders the prompt with an error.
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure("application state missing"))
            .into_response();
    };

    let params = Query::<GateParams>::try_from_uri(req.uri())
        .map(|Query(params)| params)
        .unwrap_or_default();
    let credential = params.password.as_deref();

    match state.services.authorize_mutation(credential).await {
        Ok(AccessDecision::Granted) => next.run(req).await,
        Ok(AccessDecision::Prompt) => prompt(req.uri().path(), None),
        Ok(AccessDecision::Rejected(reason)) => prompt(req.uri().path(), Some(reason)),
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

fn prompt(action: &str, error: Option<String>) -> Response {
    let errors: Vec<String> = error.into_iter().collect();
    View::new(
        "private_form.html",
        context! {
            title => "Password required",
            action => action,
            errors => errors,
        },
    )
    .with_status(StatusCode::UNAUTHORIZED)
    .into_response()
}
