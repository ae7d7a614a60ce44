// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{categories, products};
use crate::presentation::http::middleware::require_admin;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
};
use serde::Serialize;
use std::path::PathBuf;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// Settings the router needs besides application state.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Directory served under `/uploads`.
    pub upload_dir: PathBuf,
    /// Largest accepted request body, multipart framing included.
    pub max_upload_bytes: usize,
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let admin = Router::new()
        .route(
            "/category/create",
            get(categories::create_category_form).post(categories::create_category),
        )
        .route(
            "/category/{slug}/update",
            get(categories::update_category_form).post(categories::update_category),
        )
        .route(
            "/category/{slug}/delete",
            get(categories::delete_category_form).post(categories::delete_category),
        )
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .route("/", get(categories::list_categories))
        .route("/health", get(health))
        .route("/category/{slug}", get(categories::category_detail))
        .route(
            "/product/create",
            get(products::create_product_form).post(products::create_product),
        )
        .route("/product/{slug}", get(products::product_detail))
        .route(
            "/product/{slug}/update",
            get(products::update_product_form).post(products::update_product),
        )
        .route(
            "/product/{slug}/delete",
            get(products::delete_product_form).post(products::delete_product),
        )
        .merge(admin)
        .nest_service("/uploads", ServeDir::new(&options.upload_dir))
        .layer(DefaultBodyLimit::max(options.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
