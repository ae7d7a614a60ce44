// src/presentation/http/views.rs
use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{Environment, Value};
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("errors.html", include_str!("../../../templates/errors.html")),
    ("category_list.html", include_str!("../../../templates/category_list.html")),
    ("category_detail.html", include_str!("../../../templates/category_detail.html")),
    ("category_form.html", include_str!("../../../templates/category_form.html")),
    ("category_delete.html", include_str!("../../../templates/category_delete.html")),
    ("product_detail.html", include_str!("../../../templates/product_detail.html")),
    ("product_form.html", include_str!("../../../templates/product_form.html")),
    ("product_delete.html", include_str!("../../../templates/product_delete.html")),
    ("private_form.html", include_str!("../../../templates/private_form.html")),
    ("error.html", include_str!("../../../templates/error.html")),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

/// Template environment with every page registered. `.html` templates are
/// auto-escaped.
pub fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            if let Err(err) = env.add_template(name, source) {
                tracing::error!(template = name, error = %err, "failed to load template");
            }
        }
        env
    })
}

/// A template name plus the context it is rendered with.
#[derive(Debug, Clone)]
pub struct View {
    template: &'static str,
    status: StatusCode,
    context: Value,
}

impl View {
    pub fn new(template: &'static str, context: impl Serialize) -> Self {
        Self {
            template,
            status: StatusCode::OK,
            context: Value::from_serialize(&context),
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn render(&self) -> Result<String, minijinja::Error> {
        environment()
            .get_template(self.template)?
            .render(&self.context)
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(
                    template = self.template,
                    error = %err,
                    "template rendering failed"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "template rendering failed").into_response()
            }
        }
    }
}
