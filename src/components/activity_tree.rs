//! Activity Tree Component
//!
//! Summary view: the activity hierarchy, indented by depth, with edit
//! and delete actions per activity.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ActivityTarget;
use crate::models::Activity;
use crate::store::{self, use_app_store, AppStateStoreFields};
use crate::tree::flatten_tree;

/// Indented activity tree for the summary view
#[component]
pub fn ActivityTree(
    set_activity_target: WriteSignal<Option<ActivityTarget>>,
) -> impl IntoView {
    let store = use_app_store();

    let rows = move || flatten_tree(&store.activities().read());

    view! {
        <div class="activity-tree">
            <Show when=move || store.activities().read().is_empty()>
                <p class="empty-hint">"暂无活动"</p>
            </Show>

            <For
                each=rows
                key=|(node, depth)| (node.id, *depth, node.name.clone(), node.description.clone())
                children=move |(node, depth)| {
                    let id = node.id;
                    let indent = depth * 20;
                    let description = node.description.clone();
                    let activity = Activity {
                        id: node.id,
                        name: node.name.clone(),
                        description: node.description.clone(),
                        parent_id: node.parent_id,
                    };

                    view! {
                        <div class="activity-row" style=format!("margin-left: {}px;", indent)>
                            <div class="activity-info">
                                <strong>{node.name.clone()}</strong>
                                {description.map(|d| view! { <small class="activity-description">{d}</small> })}
                            </div>
                            <div class="activity-actions">
                                <button
                                    class="edit-btn"
                                    on:click=move |_| set_activity_target.set(Some(ActivityTarget::Edit(activity.clone())))
                                >
                                    "编辑"
                                </button>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| {
                                        let confirmed = web_sys::window()
                                            .and_then(|win| win.confirm_with_message("确定要删除这个活动吗？").ok())
                                            .unwrap_or(false);
                                        if !confirmed { return; }
                                        spawn_local(async move {
                                            if api::delete_activity(id).await.is_ok() {
                                                store::load_activities(store).await;
                                            }
                                        });
                                    }
                                >
                                    "删除"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
