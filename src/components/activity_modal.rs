//! Activity Modal Component
//!
//! Create / edit form for activities: name, optional parent, optional
//! description. The parent select is fed from the flat activity pool.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ActivityPayload};
use crate::models::Activity;
use crate::store::{self, use_app_store, AppStateStoreFields};

/// What the activity modal is pointed at
#[derive(Clone, Debug, PartialEq)]
pub enum ActivityTarget {
    /// Creating a new activity
    New,
    /// Editing an existing one
    Edit(Activity),
}

/// Modal form for creating or editing an activity
#[component]
pub fn ActivityModal(
    activity_target: ReadSignal<Option<ActivityTarget>>,
    set_activity_target: WriteSignal<Option<ActivityTarget>>,
) -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (parent_id, set_parent_id) = signal::<Option<u32>>(None);

    // Seed the form whenever the modal target changes
    Effect::new(move |_| match activity_target.get() {
        Some(ActivityTarget::Edit(activity)) => {
            set_name.set(activity.name.clone());
            set_description.set(activity.description.clone().unwrap_or_default());
            set_parent_id.set(activity.parent_id);
        }
        Some(ActivityTarget::New) => {
            set_name.set(String::new());
            set_description.set(String::new());
            set_parent_id.set(None);
        }
        None => {}
    });

    let close = move || set_activity_target.set(None);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = activity_target.get_untracked() else { return };
        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() { return; }
        let description_value = description.get_untracked();
        let parent = parent_id.get_untracked();

        spawn_local(async move {
            let payload = ActivityPayload {
                name: &name_value,
                description: if description_value.trim().is_empty() {
                    None
                } else {
                    Some(description_value.as_str())
                },
                parent_id: parent,
            };
            let saved = match &target {
                ActivityTarget::New => api::create_activity(&payload).await.map(|_| ()),
                ActivityTarget::Edit(activity) => {
                    api::update_activity(activity.id, &payload).await.map(|_| ())
                }
            };
            if saved.is_ok() {
                store::load_activities(store).await;
                set_activity_target.set(None);
            }
        });
    };

    view! {
        {move || activity_target.get().map(|target| {
            let title = match &target {
                ActivityTarget::New => "新建活动",
                ActivityTarget::Edit(_) => "编辑活动",
            };
            let editing_id = match &target {
                ActivityTarget::Edit(activity) => Some(activity.id),
                ActivityTarget::New => None,
            };

            view! {
                <div class="modal-backdrop">
                    <div class="modal activity-modal">
                        <div class="modal-header">
                            <span class="modal-title">{title}</span>
                            <button class="close-btn" on:click=move |_| close()>"×"</button>
                        </div>

                        <form on:submit=on_save>
                            <div class="form-row">
                                <label>"名称"</label>
                                <input
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-row">
                                <label>"父活动"</label>
                                <select on:change=move |ev| {
                                    set_parent_id.set(event_target_value(&ev).parse::<u32>().ok());
                                }>
                                    <option value="" selected=move || parent_id.get().is_none()>"无"</option>
                                    <For
                                        each=move || store.flat_activities().get()
                                        key=|activity| activity.id
                                        children=move |activity| {
                                            let id = activity.id;
                                            // An activity cannot become its own parent
                                            let disabled = editing_id == Some(id);
                                            view! {
                                                <option
                                                    value=id.to_string()
                                                    disabled=disabled
                                                    selected=move || parent_id.get() == Some(id)
                                                >
                                                    {activity.name.clone()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </div>

                            <div class="form-row">
                                <label>"描述"</label>
                                <textarea
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <div class="modal-actions">
                                <button type="submit">"保存"</button>
                                <button type="button" on:click=move |_| close()>"取消"</button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        })}
    }
}
