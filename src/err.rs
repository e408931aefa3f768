use diesel::result::Error as DieselError;
use roa::http::StatusCode;
use roa::Status;
use thiserror::Error;

pub const TITLE_REQUIRED: &str = "Title is required.";

pub type Result<T = ()> = std::result::Result<T, ActionError>;

/// Failure of a post action.
///
/// Every action returns its failure to the caller unchanged;
/// endpoints decide whether it becomes a notice or a status code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Rejected before any storage call.
    #[error("{0}")]
    Validation(&'static str),

    /// No record matches the id.
    #[error("post({0}) not found")]
    NotFound(i32),

    /// Anything the pool or diesel reported.
    #[error("{}", .0.message)]
    Storage(Status),
}

impl ActionError {
    /// Converts to a `Status` thrown by json endpoints.
    ///
    /// Storage failures keep their original status and stay hidden from clients.
    pub fn into_status(self) -> Status {
        match self {
            ActionError::Validation(message) => {
                Status::new(StatusCode::UNPROCESSABLE_ENTITY, message, true)
            }
            err @ ActionError::NotFound(_) => {
                Status::new(StatusCode::NOT_FOUND, err, true)
            }
            ActionError::Storage(status) => status,
        }
    }
}

impl From<Status> for ActionError {
    fn from(status: Status) -> Self {
        ActionError::Storage(status)
    }
}

impl From<DieselError> for ActionError {
    fn from(err: DieselError) -> Self {
        ActionError::Storage(err.into())
    }
}
