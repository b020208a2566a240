//! Week View Components
//!
//! Monday-first 7x5 week grid beside the draggable activity pool. Slot
//! cells accept drops only and open the event editor on click; the drop
//! handler itself is bound once at app level.

use chrono::Duration;
use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, SlotTarget};

use crate::api;
use crate::calendar;
use crate::components::ActivityPool;
use crate::context::AppContext;
use crate::models::{EventDraft, EventPayload, TimeSlot};
use crate::store::{self, use_app_store, AppStateStoreFields, AppStore};

/// Week view: activity pool beside the slot grid
#[component]
pub fn WeekView() -> impl IntoView {
    let store = use_app_store();
    let dnd = expect_context::<DndSignals>();

    let shift_week = move |days: i64| {
        let date = store.current_date().get_untracked() + Duration::days(days);
        store::set_week_from(&store, date);
        spawn_local(store::load_week(store));
    };

    view! {
        <div class="week-view">
            <ActivityPool dnd=dnd />

            <div class="week-panel">
                <div class="week-nav">
                    <button on:click=move |_| shift_week(-7)>"‹ 上一周"</button>
                    <span class="week-title">{move || calendar::week_title(&store.week_dates().get())}</span>
                    <button on:click=move |_| shift_week(7)>"下一周 ›"</button>
                </div>

                <div class="week-grid">
                    <div class="grid-header">
                        <div class="slot-label-cell"></div>
                        {move || store.week_dates().get().into_iter().map(|date| {
                            view! {
                                <div class="day-header">
                                    <div class="day-weekday">{calendar::weekday_label(&date)}</div>
                                    <div class="day-date">{calendar::short_date(&date)}</div>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    {TimeSlot::ALL.iter().map(|slot| {
                        let slot = *slot;
                        view! {
                            <div class="grid-row">
                                <div class="slot-label-cell">{slot.label()}</div>
                                {move || store.week_dates().get().into_iter().enumerate().map(|(day_index, date)| {
                                    view! { <SlotCell date=date day_index=day_index time_slot=slot dnd=dnd /> }
                                }).collect_view()}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// One droppable, clickable cell, tagged with its date and slot code
#[component]
fn SlotCell(
    date: String,
    day_index: usize,
    time_slot: TimeSlot,
    dnd: DndSignals,
) -> impl IntoView {
    let slot = time_slot;
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_mouseenter = make_on_slot_mouseenter(dnd, day_index, slot.code());
    let on_mouseleave = make_on_mouseleave(dnd);

    let cell_date = date.clone();
    let event = Memo::new(move |_| {
        let cache = store.week_schedule().read();
        store::event_at(&cache, &cell_date, slot).cloned()
    });

    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(t) if t.day == day_index && t.slot == slot.code())
    };

    let cell_class = move || {
        let mut c = String::from("time-slot");
        if event.get().is_some() { c.push_str(" occupied"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let click_date = date.clone();
    let on_click = move |_| {
        // The releasing mouseup of a drop also fires a click; skip it
        if dnd.drag_just_ended_read.get_untracked() { return; }
        let existing = event.get_untracked();
        ctx.open_event_editor(EventDraft::for_slot(existing.as_ref(), &click_date, slot));
    };

    view! {
        <div
            class=cell_class
            data-date=date.clone()
            data-time-slot=slot.code().to_string()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=on_click
        >
            {move || event.get().map(|e| {
                let event_class = format!("slot-event status-{}", e.status);
                view! {
                    <div class=event_class>
                        <div class="event-activity">{e.activity_name.clone().unwrap_or_default()}</div>
                        {e.goal.clone().map(|goal| view! { <small class="event-goal">{goal}</small> })}
                    </div>
                }
            })}
        </div>
    }
}

/// Drop handler for the whole grid: advisory occupied check against the
/// cache, then create, full reload, and the editor once the reload has
/// settled.
pub async fn handle_drop(store: AppStore, ctx: AppContext, activity_id: u32, target: SlotTarget) {
    let Some(date) = store.week_dates().get_untracked().get(target.day).cloned() else {
        return;
    };
    let Ok(slot) = TimeSlot::try_from(target.slot) else {
        return;
    };

    let cache = store.week_schedule().get_untracked();
    if !store::slot_is_free(&cache, &date, slot) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message("该时间槽已有安排，请选择其他时间或先删除现有安排");
        }
        return;
    }

    let known = store
        .flat_activities()
        .get_untracked()
        .iter()
        .any(|activity| activity.id == activity_id);
    if !known {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message("未找到活动信息");
        }
        return;
    }

    let payload = EventPayload {
        activity_id,
        event_date: date.clone(),
        time_slot: slot,
        goal: None,
        notes: None,
        status: "planned".to_string(),
    };
    if api::create_event(&payload).await.is_err() {
        return;
    }

    store::load_week(store).await;

    // Let the reload settle before the editor opens
    gloo_timers::future::TimeoutFuture::new(100).await;

    let existing = store::event_at(&store.week_schedule().get_untracked(), &date, slot).cloned();
    ctx.open_event_editor(EventDraft::for_slot(existing.as_ref(), &date, slot));
}
