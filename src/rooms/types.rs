use serde::{Deserialize, Serialize};

use crate::shared::validation::{validate_name, Validate, ValidationError};

/// Create room request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateRoomRequest {
    /// Room name, used as the unique slug
    pub name: String,
}

impl Validate for CreateRoomRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)
    }
}

/// Returned by create room with `201 Created`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateRoomResponse {
    #[serde(rename = "roomId")]
    pub room_id: i64,
}
