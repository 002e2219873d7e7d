use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let e = ServiceError::not_found("parcel 12");
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: parcel 12 not found");
    }

    #[test]
    fn db_errors_become_db_variant() {
        let e: ServiceError = sea_orm::DbErr::Custom("disk I/O error".into()).into();
        assert!(matches!(e, ServiceError::Db(ref m) if m.contains("disk I/O error")));
        assert!(!e.is_not_found());
    }
}
