//! Frontend Models
//!
//! Data structures matching the schedule backend's JSON payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Activity as the flat listing returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<u32>,
}

/// Activity with its subtree, as `/activities/tree` returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityNode {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub children: Vec<ActivityNode>,
}

/// The five fixed scheduling slots of a day
///
/// The codes are wire-level: the backend stores and validates exactly
/// these five integers, so they serialize as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TimeSlot {
    Morning1 = 21,
    Morning2 = 22,
    Afternoon1 = 51,
    Afternoon2 = 52,
    Evening = 71,
}

impl TimeSlot {
    /// Grid row order, top to bottom
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Morning1,
        TimeSlot::Morning2,
        TimeSlot::Afternoon1,
        TimeSlot::Afternoon2,
        TimeSlot::Evening,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning1 => "上午第1时段",
            TimeSlot::Morning2 => "上午第2时段",
            TimeSlot::Afternoon1 => "下午第1时段",
            TimeSlot::Afternoon2 => "下午第2时段",
            TimeSlot::Evening => "晚上时段",
        }
    }
}

impl From<TimeSlot> for u8 {
    fn from(slot: TimeSlot) -> u8 {
        slot as u8
    }
}

impl TryFrom<u8> for TimeSlot {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            21 => Ok(TimeSlot::Morning1),
            22 => Ok(TimeSlot::Morning2),
            51 => Ok(TimeSlot::Afternoon1),
            52 => Ok(TimeSlot::Afternoon2),
            71 => Ok(TimeSlot::Evening),
            other => Err(format!("invalid time slot code: {}", other)),
        }
    }
}

/// Status options for a scheduled event
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("planned", "计划中"),
    ("in_progress", "进行中"),
    ("completed", "已完成"),
    ("cancelled", "已取消"),
];

/// Scheduled event as the week endpoint embeds it in a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEvent {
    pub id: u32,
    pub activity_id: u32,
    #[serde(default)]
    pub activity_name: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
}

/// One day of the week schedule response; empty slots come back as null
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeekDay {
    pub date: String,
    #[serde(default)]
    pub slots: HashMap<TimeSlot, Option<SlotEvent>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeekScheduleResponse {
    pub schedule: Vec<WeekDay>,
}

/// One day of the month overview
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthDay {
    pub date: String,
    pub day: u32,
    #[serde(default)]
    pub is_today: bool,
    #[serde(default)]
    pub event_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonthOverview {
    #[serde(default)]
    pub days: Vec<MonthDay>,
}

/// Full scheduled event, as the event endpoints return it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduledEvent {
    pub id: u32,
    pub activity_id: u32,
    pub event_date: String,
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
}

/// Body for `POST /events/` and `PUT /events/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    pub activity_id: u32,
    pub event_date: String,
    pub time_slot: TimeSlot,
    pub goal: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

/// Working copy behind the event editor modal
///
/// `id == None` means the slot was empty when the editor opened; an
/// `activity_id` must have been attached (by a drop) before a save can
/// go out.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub id: Option<u32>,
    pub activity_id: Option<u32>,
    pub activity_name: String,
    pub event_date: String,
    pub time_slot: TimeSlot,
    pub goal: String,
    pub notes: String,
    pub status: String,
}

impl EventDraft {
    /// Draft for `(date, slot)`: the existing event's fields when the
    /// slot is occupied, an empty creating draft otherwise.
    pub fn for_slot(existing: Option<&SlotEvent>, date: &str, slot: TimeSlot) -> EventDraft {
        match existing {
            Some(event) => EventDraft {
                id: Some(event.id),
                activity_id: Some(event.activity_id),
                activity_name: event.activity_name.clone().unwrap_or_default(),
                event_date: date.to_string(),
                time_slot: slot,
                goal: event.goal.clone().unwrap_or_default(),
                notes: event.notes.clone().unwrap_or_default(),
                status: event.status.clone(),
            },
            None => EventDraft {
                id: None,
                activity_id: None,
                activity_name: String::new(),
                event_date: date.to_string(),
                time_slot: slot,
                goal: String::new(),
                notes: String::new(),
                status: "planned".to_string(),
            },
        }
    }

    /// Request body for saving this draft; `None` while no activity is
    /// attached yet (the save must be rejected without a request).
    pub fn payload(&self) -> Option<EventPayload> {
        let activity_id = self.activity_id?;
        Some(EventPayload {
            activity_id,
            event_date: self.event_date.clone(),
            time_slot: self.time_slot,
            goal: if self.goal.is_empty() { None } else { Some(self.goal.clone()) },
            notes: if self.notes.is_empty() { None } else { Some(self.notes.clone()) },
            status: self.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slot_codes_round_trip() {
        for slot in TimeSlot::ALL {
            assert_eq!(TimeSlot::try_from(slot.code()), Ok(slot));
        }
        assert!(TimeSlot::try_from(0).is_err());
        assert!(TimeSlot::try_from(23).is_err());
        assert!(TimeSlot::try_from(70).is_err());
    }

    #[test]
    fn time_slot_serializes_as_bare_code() {
        assert_eq!(serde_json::to_string(&TimeSlot::Morning1).unwrap(), "21");
        let slot: TimeSlot = serde_json::from_str("71").unwrap();
        assert_eq!(slot, TimeSlot::Evening);
        assert!(serde_json::from_str::<TimeSlot>("33").is_err());
    }

    #[test]
    fn week_day_slots_deserialize_with_nulls() {
        let json = r#"{
            "date": "2024-03-11",
            "weekday": "Monday",
            "slots": {
                "21": null,
                "71": {"id": 1, "activity_id": 2, "activity_name": "锻炼", "goal": null, "notes": null, "status": "planned"}
            }
        }"#;
        let day: WeekDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, "2024-03-11");
        assert_eq!(day.slots.get(&TimeSlot::Morning1), Some(&None));
        let event = day.slots[&TimeSlot::Evening].as_ref().unwrap();
        assert_eq!(event.activity_name.as_deref(), Some("锻炼"));
    }

    #[test]
    fn draft_without_activity_produces_no_payload() {
        let draft = EventDraft::for_slot(None, "2024-03-11", TimeSlot::Morning1);
        assert_eq!(draft.id, None);
        assert_eq!(draft.activity_id, None);
        assert_eq!(draft.status, "planned");
        assert_eq!(draft.payload(), None);
    }

    #[test]
    fn draft_for_occupied_slot_carries_event_fields() {
        let event = SlotEvent {
            id: 9,
            activity_id: 3,
            activity_name: Some("读书".to_string()),
            goal: Some("两章".to_string()),
            notes: None,
            status: "planned".to_string(),
        };
        let draft = EventDraft::for_slot(Some(&event), "2024-03-12", TimeSlot::Evening);
        assert_eq!(draft.id, Some(9));
        assert_eq!(draft.activity_id, Some(3));

        let payload = draft.payload().expect("activity attached");
        assert_eq!(payload.event_date, "2024-03-12");
        assert_eq!(payload.time_slot, TimeSlot::Evening);
        assert_eq!(payload.goal.as_deref(), Some("两章"));
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn empty_goal_and_notes_serialize_as_null() {
        let mut draft = EventDraft::for_slot(None, "2024-03-11", TimeSlot::Morning1);
        draft.activity_id = Some(5);
        let json = serde_json::to_value(draft.payload().unwrap()).unwrap();
        assert_eq!(json["goal"], serde_json::Value::Null);
        assert_eq!(json["notes"], serde_json::Value::Null);
        assert_eq!(json["time_slot"], 21);
        assert_eq!(json["status"], "planned");
    }
}
