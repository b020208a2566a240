//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The fetched
//! collections are written only by the loaders below; views read through
//! the field accessors. Each loader replaces its collection wholesale —
//! there is no incremental patching after mutations.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::calendar;
use crate::models::{Activity, ActivityNode, MonthOverview, SlotEvent, TimeSlot, WeekDay};

/// Week cache: date string -> time slot -> event
pub type WeekCache = HashMap<String, HashMap<TimeSlot, SlotEvent>>;

/// The three top-level views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewKind {
    #[default]
    Summary,
    Week,
    Month,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub current_view: ViewKind,
    /// Anchor date of the week view
    pub current_date: NaiveDate,
    /// Displayed month view page
    pub current_year: i32,
    pub current_month: u32,
    /// Activity tree for the summary view
    pub activities: Vec<ActivityNode>,
    /// Flat activity pool; same server-side set as the tree
    pub flat_activities: Vec<Activity>,
    /// Seven ISO dates of the displayed week, Monday first
    pub week_dates: Vec<String>,
    pub week_schedule: WeekCache,
    pub month_schedule: MonthOverview,
}

impl AppState {
    pub fn new() -> Self {
        let today = calendar::today();
        Self {
            current_view: ViewKind::Summary,
            current_date: today,
            current_year: today.year(),
            current_month: today.month(),
            activities: Vec::new(),
            flat_activities: Vec::new(),
            week_dates: calendar::week_dates(calendar::week_start(today)),
            week_schedule: WeekCache::new(),
            month_schedule: MonthOverview::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Week Cache Helpers
// ========================

/// Rebuild the week cache wholesale from a week response
pub fn build_week_cache(days: Vec<WeekDay>) -> WeekCache {
    days.into_iter()
        .map(|day| {
            let slots = day
                .slots
                .into_iter()
                .filter_map(|(slot, event)| event.map(|e| (slot, e)))
                .collect();
            (day.date, slots)
        })
        .collect()
}

/// Event at `(date, slot)` in the cache, if any
pub fn event_at<'a>(cache: &'a WeekCache, date: &str, slot: TimeSlot) -> Option<&'a SlotEvent> {
    cache.get(date).and_then(|slots| slots.get(&slot))
}

/// Double-booking guard. Checked against the in-memory cache only, so
/// it can be stale under concurrent edits from another client.
pub fn slot_is_free(cache: &WeekCache, date: &str, slot: TimeSlot) -> bool {
    event_at(cache, date, slot).is_none()
}

// ========================
// Store Operations
// ========================

/// Re-anchor the week view on `date` and recompute the seven dates
pub fn set_week_from(store: &AppStore, date: NaiveDate) {
    store.current_date().set(date);
    store.week_dates().set(calendar::week_dates(calendar::week_start(date)));
}

/// Switch views; each entered view triggers exactly its own load
pub fn switch_view(store: AppStore, view: ViewKind) {
    store.current_view().set(view);
    match view {
        ViewKind::Week => spawn_local(load_week(store)),
        ViewKind::Month => spawn_local(load_month(store)),
        ViewKind::Summary => {}
    }
}

// ========================
// Loaders
// ========================

/// Load both representations of the activity set
pub async fn load_activities(store: AppStore) {
    if let Ok(tree) = api::activity_tree().await {
        store.activities().set(tree);
    }
    if let Ok(flat) = api::list_activities().await {
        store.flat_activities().set(flat);
    }
}

/// Reload the displayed week wholesale
pub async fn load_week(store: AppStore) {
    let Some(monday) = store.week_dates().get_untracked().first().cloned() else {
        return;
    };
    if let Ok(response) = api::week_schedule(&monday).await {
        store.week_schedule().set(build_week_cache(response.schedule));
    }
}

/// Reload the displayed month overview
pub async fn load_month(store: AppStore) {
    let year = store.current_year().get_untracked();
    let month = store.current_month().get_untracked();
    if let Ok(overview) = api::month_overview(year, month).await {
        store.month_schedule().set(overview);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_event(id: u32) -> SlotEvent {
        SlotEvent {
            id,
            activity_id: 1,
            activity_name: Some("晨跑".to_string()),
            goal: None,
            notes: None,
            status: "planned".to_string(),
        }
    }

    fn week_day(date: &str, occupied: &[(TimeSlot, u32)]) -> WeekDay {
        let mut slots: HashMap<TimeSlot, Option<SlotEvent>> =
            TimeSlot::ALL.iter().map(|slot| (*slot, None)).collect();
        for (slot, id) in occupied {
            slots.insert(*slot, Some(slot_event(*id)));
        }
        WeekDay { date: date.to_string(), slots }
    }

    #[test]
    fn cache_rebuild_drops_empty_slots() {
        let cache = build_week_cache(vec![
            week_day("2024-03-11", &[(TimeSlot::Morning1, 7)]),
            week_day("2024-03-12", &[]),
        ]);
        assert_eq!(cache["2024-03-11"].len(), 1);
        assert!(cache["2024-03-12"].is_empty());
    }

    #[test]
    fn occupied_slot_is_not_free() {
        let cache = build_week_cache(vec![week_day("2024-03-11", &[(TimeSlot::Evening, 3)])]);
        assert!(!slot_is_free(&cache, "2024-03-11", TimeSlot::Evening));
        assert!(slot_is_free(&cache, "2024-03-11", TimeSlot::Morning1));
        // Dates outside the loaded week are free as far as the cache knows
        assert!(slot_is_free(&cache, "2024-03-18", TimeSlot::Evening));
        assert_eq!(event_at(&cache, "2024-03-11", TimeSlot::Evening).map(|e| e.id), Some(3));
    }

    #[test]
    fn reload_without_event_leaves_slot_absent() {
        let cache = build_week_cache(vec![week_day("2024-03-11", &[(TimeSlot::Morning1, 7)])]);
        assert!(!slot_is_free(&cache, "2024-03-11", TimeSlot::Morning1));

        // The same week reloaded after the event was deleted
        let cache = build_week_cache(vec![week_day("2024-03-11", &[])]);
        assert!(event_at(&cache, "2024-03-11", TimeSlot::Morning1).is_none());
        assert!(slot_is_free(&cache, "2024-03-11", TimeSlot::Morning1));
    }
}
