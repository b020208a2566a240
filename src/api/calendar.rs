//! Calendar Endpoints
//!
//! Week and month schedule reads.

use super::{get_json, ApiError};
use crate::models::{MonthOverview, WeekScheduleResponse};

/// Full schedule of the week containing `date` (ISO date string)
pub async fn week_schedule(date: &str) -> Result<WeekScheduleResponse, ApiError> {
    get_json(&format!("/calendar/week/{}", date)).await
}

pub async fn month_overview(year: i32, month: u32) -> Result<MonthOverview, ApiError> {
    get_json(&format!("/calendar/month/{}/{}", year, month)).await
}
