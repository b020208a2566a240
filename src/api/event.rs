//! Scheduled Event Endpoints
//!
//! Bindings for creating, updating and deleting scheduled events.

use super::{delete_json, post_json, put_json, ApiError};
use crate::models::{EventPayload, ScheduledEvent};

pub async fn create_event(payload: &EventPayload) -> Result<ScheduledEvent, ApiError> {
    post_json("/events/", payload).await
}

pub async fn update_event(id: u32, payload: &EventPayload) -> Result<ScheduledEvent, ApiError> {
    put_json(&format!("/events/{}", id), payload).await
}

pub async fn delete_event(id: u32) -> Result<(), ApiError> {
    let _: serde_json::Value = delete_json(&format!("/events/{}", id)).await?;
    Ok(())
}
