// src/presentation/http/controllers/mod.rs
use axum::http::Uri;

pub mod categories;
pub mod products;

/// Target for a page's own form: the request path with its query string, so
/// a `?password=` that unlocked the page is resubmitted with the form.
pub(crate) fn form_action(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned())
}
