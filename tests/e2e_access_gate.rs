use axum::http::StatusCode;
use tower::util::ServiceExt as _;

mod support;

use support::{
    TEST_PASSWORD, assert_html, assert_see_other, form_post, get, make_gated_router,
    seed_category,
};

#[tokio::test]
async fn gated_page_prompts_for_password() {
    let (_test, app) = make_gated_router(TEST_PASSWORD);
    let resp = app.oneshot(get("/category/create")).await.unwrap();
    let html = assert_html(resp, StatusCode::UNAUTHORIZED).await;
    assert!(html.contains("name=\"password\""));
    assert!(!html.contains("Invalid password"));
}

#[tokio::test]
async fn wrong_password_is_rejected_with_message() {
    let (_test, app) = make_gated_router(TEST_PASSWORD);
    let resp = app
        .oneshot(get("/category/create?password=guess"))
        .await
        .unwrap();
    let html = assert_html(resp, StatusCode::UNAUTHORIZED).await;
    assert!(html.contains("Invalid password"));
}

#[tokio::test]
async fn correct_password_unlocks_form_and_carries_into_action() {
    let (_test, app) = make_gated_router(TEST_PASSWORD);
    let resp = app
        .oneshot(get(&format!("/category/create?password={TEST_PASSWORD}")))
        .await
        .unwrap();
    let html = assert_html(resp, StatusCode::OK).await;
    assert!(html.contains(&format!("password={TEST_PASSWORD}")));
}

#[tokio::test]
async fn post_without_password_changes_nothing() {
    let (test, app) = make_gated_router(TEST_PASSWORD);
    let resp = app
        .clone()
        .oneshot(form_post("/category/create", &[("name", "Garden Tools")]))
        .await
        .unwrap();
    assert_html(resp, StatusCode::UNAUTHORIZED).await;
    assert_eq!(test.catalog.category_count(), 0);

    let resp = app
        .oneshot(form_post(
            &format!("/category/create?password={TEST_PASSWORD}"),
            &[("name", "Garden Tools")],
        ))
        .await
        .unwrap();
    assert_see_other(&resp, "/category/garden-tools");
    assert_eq!(test.catalog.category_count(), 1);
}

#[tokio::test]
async fn category_delete_is_gated_but_reads_are_not() {
    let (test, app) = make_gated_router(TEST_PASSWORD);
    seed_category(&test.services, "Lamps").await;

    let resp = app.clone().oneshot(get("/category/lamps")).await.unwrap();
    assert_html(resp, StatusCode::OK).await;

    let resp = app
        .oneshot(form_post("/category/lamps/delete", &[]))
        .await
        .unwrap();
    assert_html(resp, StatusCode::UNAUTHORIZED).await;
    assert_eq!(test.catalog.category_count(), 1);
}

#[tokio::test]
async fn product_routes_are_not_gated() {
    let (_test, app) = make_gated_router(TEST_PASSWORD);
    let resp = app.oneshot(get("/product/create")).await.unwrap();
    assert_html(resp, StatusCode::OK).await;
}
