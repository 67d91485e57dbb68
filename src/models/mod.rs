use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod category;
pub mod contestant;
pub mod user_role;
pub mod vote;
pub mod voter;
pub mod voting_session;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub use category::*;
pub use contestant::*;
pub use user_role::*;
pub use vote::*;
pub use voter::*;
pub use voting_session::*;
