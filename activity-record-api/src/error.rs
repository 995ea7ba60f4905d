use thiserror::Error;

/// Boxed error as returned by the record store.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Activity payload must be provided")]
    MissingPayload,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} must not exceed {1} characters")]
    FieldTooLong(&'static str, u64),

    #[error("Id must be a positive number")]
    InvalidId,

    #[error("Activity with id {0} not found")]
    NotFound(i64),

    #[error("Store failure: {0}")]
    StoreFailure(#[source] StoreError),
}

impl ActivityError {
    /// Errors caused by the caller's input (bad payload, bad id).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ActivityError::MissingPayload
                | ActivityError::MissingField(_)
                | ActivityError::FieldTooLong(_, _)
                | ActivityError::InvalidId
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ActivityError::NotFound(_))
    }
}

impl From<StoreError> for ActivityError {
    fn from(err: StoreError) -> Self {
        ActivityError::StoreFailure(err)
    }
}

pub type ActivityResult<T> = Result<T, ActivityError>;
