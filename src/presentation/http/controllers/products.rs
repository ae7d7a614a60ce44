// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::ProductDetailDto,
    error::ApplicationError,
    queries::products::GetProductBySlugQuery,
    validation::FieldErrors,
};
use crate::presentation::http::controllers::form_action;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::forms::{NewProductParams, ProductForm};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::View;
use axum::{
    Extension,
    extract::{Multipart, Path, Query},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;

pub async fn product_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<View> {
    let detail = find(&state, slug).await?;
    Ok(View::new(
        "product_detail.html",
        context! {
            title => detail.product.name.clone(),
            product => detail.product,
            category => detail.category,
        },
    ))
}

pub async fn create_product_form(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewProductParams>,
    uri: Uri,
) -> HttpResult<View> {
    let form = ProductForm {
        category: params.category.unwrap_or_default(),
        ..ProductForm::default()
    };
    form_view(&state, "Create product", &uri, &form, None).await
}

pub async fn create_product(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    multipart: Multipart,
) -> HttpResult<Response> {
    let form = ProductForm::from_multipart(multipart).await?;
    let result = state
        .services
        .product_commands
        .create_product(CreateProductCommand {
            input: form.to_input(),
        })
        .await;
    match result {
        Ok(product) => Ok(Redirect::to(&product.url).into_response()),
        Err(ApplicationError::Validation(errors)) => {
            rejected_form(&state, "Create product", &uri, &form, &errors).await
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn update_product_form(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> HttpResult<View> {
    let detail = find(&state, slug).await?;
    let form = ProductForm::from_product(&detail.product);
    form_view(&state, &update_title(&detail), &uri, &form, None).await
}

pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
    multipart: Multipart,
) -> HttpResult<Response> {
    let detail = find(&state, slug).await?;
    let form = ProductForm::from_multipart(multipart).await?;
    let result = state
        .services
        .product_commands
        .update_product(UpdateProductCommand {
            id: detail.product.id,
            input: form.to_input(),
        })
        .await;
    match result {
        Ok(product) => Ok(Redirect::to(&product.url).into_response()),
        Err(ApplicationError::Validation(errors)) => {
            rejected_form(&state, &update_title(&detail), &uri, &form, &errors).await
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn delete_product_form(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> HttpResult<View> {
    let detail = find(&state, slug).await?;
    Ok(View::new(
        "product_delete.html",
        context! {
            title => format!("Delete product: {}", detail.product.name),
            action => form_action(&uri),
            product => detail.product,
            category => detail.category,
        },
    ))
}

/// Deletes and returns to the product's category page.
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Redirect> {
    let detail = find(&state, slug).await?;
    let deleted = state
        .services
        .product_commands
        .delete_product(DeleteProductCommand {
            id: detail.product.id,
        })
        .await
        .into_http()?;
    Ok(Redirect::to(&deleted.return_url()))
}

async fn find(state: &HttpState, slug: String) -> HttpResult<ProductDetailDto> {
    state
        .services
        .product_queries
        .get_product(GetProductBySlugQuery { slug })
        .await
        .into_http()
}

fn update_title(detail: &ProductDetailDto) -> String {
    format!("Update product: {}", detail.product.name)
}

async fn form_view(
    state: &HttpState,
    title: &str,
    uri: &Uri,
    form: &ProductForm,
    errors: Option<&FieldErrors>,
) -> HttpResult<View> {
    let options = state
        .services
        .category_queries
        .list_category_options()
        .await
        .into_http()?;
    Ok(View::new(
        "product_form.html",
        context! {
            title => title,
            action => form_action(uri),
            form => form,
            errors => errors,
            category_list => options,
        },
    ))
}

async fn rejected_form(
    state: &HttpState,
    title: &str,
    uri: &Uri,
    form: &ProductForm,
    errors: &FieldErrors,
) -> HttpResult<Response> {
    tracing::debug!(%errors, "product form rejected");
    Ok(form_view(state, title, uri, form, Some(errors))
        .await?
        .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        .into_response())
}
