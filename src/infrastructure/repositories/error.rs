use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // 23514: the non-blank CHECK constraints on the articles table.
            if let Some(code) = db_err.code() {
                if code.as_ref() == "23514" {
                    return DomainError::Validation("check constraint violated".into());
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
