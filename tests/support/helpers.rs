// tests/support/helpers.rs
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};

use catalog_core::application::commands::categories::CreateCategoryCommand;
use catalog_core::application::commands::products::{CreateProductCommand, ProductInput};
use catalog_core::application::dto::{CategoryDto, ProductDto};
use catalog_core::application::ports::access::AccessGate;
use catalog_core::application::ports::storage::ImageStorage;
use catalog_core::application::services::ApplicationServices;
use catalog_core::domain::category::CategoryRepository;
use catalog_core::domain::product::ProductRepository;
use catalog_core::presentation::http::routes::{RouterOptions, build_router};
use catalog_core::presentation::http::state::HttpState;

use super::mocks::{InMemoryCatalog, RecordingImageStorage, StaticAccessGate};

pub const MULTIPART_BOUNDARY: &str = "catalog-test-boundary";

/// Services over an empty in-memory catalog, plus handles to inspect it.
pub struct TestCatalog {
    pub catalog: InMemoryCatalog,
    pub storage: RecordingImageStorage,
    pub services: Arc<ApplicationServices>,
}

pub fn build_test_catalog(gate: StaticAccessGate) -> TestCatalog {
    let catalog = InMemoryCatalog::new();
    let storage = RecordingImageStorage::new();

    let category_repo: Arc<dyn CategoryRepository> = Arc::new(catalog.clone());
    let product_repo: Arc<dyn ProductRepository> = Arc::new(catalog.clone());
    let access_gate: Arc<dyn AccessGate> = Arc::new(gate);
    let image_storage: Arc<dyn ImageStorage> = Arc::new(storage.clone());

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        product_repo,
        access_gate,
        image_storage,
    ));

    TestCatalog {
        catalog,
        storage,
        services,
    }
}

pub fn make_router(test: &TestCatalog) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&test.services),
    };
    let options = RouterOptions {
        upload_dir: PathBuf::from("target/test-uploads"),
        max_upload_bytes: 1024 * 1024,
    };
    build_router(state, &options)
}

/// Router with no admin password configured.
pub fn make_test_router() -> (TestCatalog, axum::Router) {
    let test = build_test_catalog(StaticAccessGate::open());
    let router = make_router(&test);
    (test, router)
}

pub fn make_gated_router(password: &str) -> (TestCatalog, axum::Router) {
    let test = build_test_catalog(StaticAccessGate::with_password(password));
    let router = make_router(&test);
    (test, router)
}

pub async fn seed_category(services: &ApplicationServices, name: &str) -> CategoryDto {
    services
        .category_commands
        .create_category(CreateCategoryCommand {
            name: name.into(),
            ..CreateCategoryCommand::default()
        })
        .await
        .expect("seed category")
}

pub async fn seed_product(services: &ApplicationServices, input: ProductInput) -> ProductDto {
    services
        .product_commands
        .create_product(CreateProductCommand { input })
        .await
        .expect("seed product")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// A file part for `multipart_post`: file name, content type and bytes.
pub type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

pub fn multipart_post(
    uri: &str,
    fields: &[(&str, &str)],
    photo: Option<FilePart<'_>>,
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, bytes)) = photo {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"photo\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Assert the status and return the body for further checks.
pub async fn assert_html(resp: Response<Body>, expected: StatusCode) -> String {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let text = body_text(resp).await;
    assert_eq!(status, expected, "unexpected status; body: {text}");
    assert!(content_type.starts_with("text/html"), "content type was {content_type}");
    text
}

pub fn assert_see_other(resp: &Response<Body>, expected_location: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(resp).as_deref(), Some(expected_location));
}
