use crate::domain::errors::DomainError;

const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_CATEGORY_VIEWS_CHECK: &str = "categories_views_non_negative_chk";
const CNT_PAGE_CATEGORY: &str = "pages_category_id_fkey";
const CNT_PAGE_VISIT_ORDER_CHECK: &str = "pages_visit_order_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_NAME => {
                        DomainError::Conflict("category name already exists".into())
                    }
                    CNT_PAGE_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_CATEGORY_VIEWS_CHECK => {
                        DomainError::Validation("category views must not be negative".into())
                    }
                    CNT_PAGE_VISIT_ORDER_CHECK => DomainError::Validation(
                        "first visit must not be after last visit".into(),
                    ),
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
                    "23503" => {
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

/// Escape `LIKE` metacharacters so user input matches literally.
pub(super) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("py"), "py");
        assert_eq!(escape_like("100%_sure\\"), "100\\%\\_sure\\\\");
    }

    #[test]
    fn non_database_errors_become_persistence_errors() {
        let mapped = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }
}
