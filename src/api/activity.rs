//! Activity Endpoints
//!
//! Bindings for the activity CRUD surface.

use serde::Serialize;

use super::{delete_json, get_json, post_json, put_json, ApiError};
use crate::models::{Activity, ActivityNode};

/// Body for creating or updating an activity
#[derive(Serialize)]
pub struct ActivityPayload<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub parent_id: Option<u32>,
}

/// Nested activity tree (root activities with their subtrees)
pub async fn activity_tree() -> Result<Vec<ActivityNode>, ApiError> {
    get_json("/activities/tree").await
}

/// Flat activity list; the same server-side set as the tree
pub async fn list_activities() -> Result<Vec<Activity>, ApiError> {
    get_json("/activities/").await
}

pub async fn create_activity(payload: &ActivityPayload<'_>) -> Result<Activity, ApiError> {
    post_json("/activities/", payload).await
}

pub async fn update_activity(id: u32, payload: &ActivityPayload<'_>) -> Result<Activity, ApiError> {
    put_json(&format!("/activities/{}", id), payload).await
}

pub async fn delete_activity(id: u32) -> Result<(), ApiError> {
    let _: serde_json::Value = delete_json(&format!("/activities/{}", id)).await?;
    Ok(())
}
