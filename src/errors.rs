use crate::models::MessageResponse;
use axum::Json;
use axum::http::StatusCode;

/// Failure of one HTTP operation.
///
/// Every variant renders as `500 {"msg": ...}` with a fixed message; the cause is logged
/// by the handler before it is collapsed into one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    ListFailed,
    FindFailed { id: String },
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            Self::ListFailed => "Error listing entries".to_string(),
            Self::FindFailed { id } => format!("Error finding entry with id {id}"),
            Self::CreateFailed => "Error creating entry".to_string(),
            Self::UpdateFailed => "Error updating".to_string(),
            Self::DeleteFailed => "Error deleting entry".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ApiError {}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(MessageResponse::new(self.message()))).into_response()
    }
}
