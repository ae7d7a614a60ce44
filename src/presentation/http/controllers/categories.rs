// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::DeleteCategoryCommand,
    dto::{CategoryDto, DeleteCategoryOutcome, ProductDto},
    error::ApplicationError,
    queries::categories::GetCategoryBySlugQuery,
    validation::FieldErrors,
};
use crate::presentation::http::controllers::form_action;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::forms::CategoryForm;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::View;
use axum::{
    Extension, Form,
    extract::Path,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;

/// `GET /`: every category with its product count.
pub async fn list_categories(Extension(state): Extension<HttpState>) -> HttpResult<View> {
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;
    Ok(View::new(
        "category_list.html",
        context! { title => "All categories", category_list => categories },
    ))
}

pub async fn category_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<View> {
    let detail = state
        .services
        .category_queries
        .get_category(GetCategoryBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(View::new(
        "category_detail.html",
        context! {
            title => detail.category.name.clone(),
            category => detail.category,
            products => detail.products,
        },
    ))
}

pub async fn create_category_form(uri: Uri) -> View {
    form_view("Create category", &uri, &CategoryForm::default(), None)
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Form(form): Form<CategoryForm>,
) -> HttpResult<Response> {
    let result = state
        .services
        .category_commands
        .create_category(form.to_create_command())
        .await;
    match result {
        Ok(category) => Ok(Redirect::to(&category.url).into_response()),
        Err(ApplicationError::Validation(errors)) => {
            Ok(rejected_form("Create category", &uri, &form, &errors))
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn update_category_form(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> HttpResult<View> {
    let category = find(&state, slug).await?;
    Ok(form_view(
        &update_title(&category),
        &uri,
        &CategoryForm::from_category(&category),
        None,
    ))
}

pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
    Form(form): Form<CategoryForm>,
) -> HttpResult<Response> {
    let category = find(&state, slug).await?;
    let result = state
        .services
        .category_commands
        .update_category(form.to_update_command(category.id))
        .await;
    match result {
        Ok(updated) => Ok(Redirect::to(&updated.url).into_response()),
        Err(ApplicationError::Validation(errors)) => {
            Ok(rejected_form(&update_title(&category), &uri, &form, &errors))
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

/// `GET /category/{slug}/delete`: confirmation, or the products that must
/// go first.
pub async fn delete_category_form(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> HttpResult<View> {
    let detail = state
        .services
        .category_queries
        .get_category(GetCategoryBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(delete_view(&uri, detail.category, detail.products))
}

pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> HttpResult<Response> {
    let category = find(&state, slug).await?;
    let outcome = state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: category.id })
        .await
        .into_http()?;
    Ok(match outcome {
        DeleteCategoryOutcome::Deleted { .. } => Redirect::to("/").into_response(),
        DeleteCategoryOutcome::Blocked { category, products } => {
            delete_view(&uri, category, products).into_response()
        }
    })
}

async fn find(state: &HttpState, slug: String) -> HttpResult<CategoryDto> {
    state
        .services
        .category_queries
        .get_category(GetCategoryBySlugQuery { slug })
        .await
        .map(|detail| detail.category)
        .into_http()
}

fn update_title(category: &CategoryDto) -> String {
    format!("Update category: {}", category.name)
}

fn form_view(title: &str, uri: &Uri, form: &CategoryForm, errors: Option<&FieldErrors>) -> View {
    View::new(
        "category_form.html",
        context! {
            title => title,
            action => form_action(uri),
            form => form,
            errors => errors,
        },
    )
}

fn rejected_form(title: &str, uri: &Uri, form: &CategoryForm, errors: &FieldErrors) -> Response {
    tracing::debug!(%errors, "category form rejected");
    form_view(title, uri, form, Some(errors))
        .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        .into_response()
}

fn delete_view(uri: &Uri, category: CategoryDto, products: Vec<ProductDto>) -> View {
    View::new(
        "category_delete.html",
        context! {
            title => format!("Delete category: {}", category.name),
            action => form_action(uri),
            category => category,
            products => products,
        },
    )
}
