use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";

const FOREIGN_KEY_VIOLATION: &str = "23503";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("category slug already exists".into())
                    }
                    CNT_PRODUCT_SLUG => {
                        DomainError::Conflict("product slug already exists".into())
                    }
                    CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Deleting a row that is still referenced reports a foreign-key violation.
pub fn map_sqlx_on_delete(err: sqlx::Error) -> DomainError {
    let still_referenced = matches!(
        &err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
    );
    if still_referenced {
        DomainError::Conflict("record is still referenced".into())
    } else {
        map_sqlx(err)
    }
}
