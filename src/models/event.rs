use serde::{Serialize, Deserialize};

use crate::models::issue::Issue;

/// Envelope Linear posts to the webhook endpoint. Every field is optional so
/// that any JSON object deserializes; irrelevant events are filtered, not
/// rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookEvent{
    #[serde(rename="type")]
    pub kind: Option<String>,

    pub action: Option<String>,

    pub data: Option<Issue>,

    #[serde(rename="updatedFrom")]
    pub updated_from: Option<UpdatedFrom>,
}

/// Partial snapshot of the fields as they were before the event.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedFrom{
    #[serde(rename="stateId")]
    pub state_id: Option<String>,
}
