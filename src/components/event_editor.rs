//! Event Editor Modal
//!
//! Edits the scheduled event of one slot: goal, notes and status for an
//! existing event, or a fresh entry once a drop has attached an
//! activity. Every successful save or delete triggers a full week
//! reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::calendar;
use crate::context::AppContext;
use crate::models::STATUS_OPTIONS;
use crate::store::{self, use_app_store};

/// Modal editor over the current slot draft
#[component]
pub fn EventEditor() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (goal, set_goal) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (status, set_status) = signal(String::from("planned"));

    // Seed the fields whenever a draft opens
    Effect::new(move |_| {
        if let Some(draft) = ctx.editing_event.get() {
            set_goal.set(draft.goal.clone());
            set_notes.set(draft.notes.clone());
            set_status.set(draft.status.clone());
        }
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut draft) = ctx.editing_event.get_untracked() else { return };
        draft.goal = goal.get_untracked();
        draft.notes = notes.get_untracked();
        draft.status = status.get_untracked();

        // A slot with no activity attached yet cannot be saved
        let Some(payload) = draft.payload() else {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message("请先拖拽活动到时间槽中");
            }
            return;
        };

        spawn_local(async move {
            let saved = match draft.id {
                Some(id) => api::update_event(id, &payload).await.map(|_| ()),
                None => api::create_event(&payload).await.map(|_| ()),
            };
            if saved.is_ok() {
                store::load_week(store).await;
                ctx.close_event_editor();
            }
        });
    };

    let on_delete = move |_| {
        let Some(draft) = ctx.editing_event.get_untracked() else { return };
        let Some(id) = draft.id else { return };
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message("确定要删除这个日程吗？").ok())
            .unwrap_or(false);
        if !confirmed { return; }

        spawn_local(async move {
            if api::delete_event(id).await.is_ok() {
                store::load_week(store).await;
                ctx.close_event_editor();
            }
        });
    };

    view! {
        {move || ctx.editing_event.get().map(|draft| {
            let has_id = draft.id.is_some();
            let weekday = calendar::weekday_label(&draft.event_date);
            let activity_display = if draft.activity_name.is_empty() {
                "（先拖拽一个活动到该时间槽）".to_string()
            } else {
                draft.activity_name.clone()
            };

            view! {
                <div class="modal-backdrop">
                    <div class="modal event-editor">
                        <div class="modal-header">
                            <span class="modal-title">{if has_id { "编辑日程" } else { "新建日程" }}</span>
                            <button class="close-btn" on:click=move |_| ctx.close_event_editor()>"×"</button>
                        </div>

                        <div class="event-meta">
                            <span>{draft.event_date.clone()}</span>
                            <span>{weekday}</span>
                            <span>{draft.time_slot.label()}</span>
                        </div>
                        <div class="event-activity-name">{activity_display}</div>

                        <form on:submit=on_save>
                            <div class="form-row">
                                <label>"目标"</label>
                                <input
                                    type="text"
                                    prop:value=move || goal.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_goal.set(input.value());
                                    }
                                />
                            </div>

                            <div class="form-row">
                                <label>"备注"</label>
                                <textarea
                                    prop:value=move || notes.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                        set_notes.set(area.value());
                                    }
                                ></textarea>
                            </div>

                            <div class="form-row">
                                <label>"状态"</label>
                                <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                                    {STATUS_OPTIONS.iter().map(|(value, label)| {
                                        let value = *value;
                                        view! {
                                            <option value=value selected=move || status.get() == value>
                                                {*label}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>

                            <div class="modal-actions">
                                <button type="submit">"保存"</button>
                                <Show when=move || has_id>
                                    <button type="button" class="danger" on:click=on_delete>"删除"</button>
                                </Show>
                                <button type="button" on:click=move |_| ctx.close_event_editor()>"取消"</button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        })}
    }
}
