//! Activity Pool Component
//!
//! Flat activity list beside the week grid. Rows drag out onto slot
//! cells; the originals always stay in the pool.

use leptos::prelude::*;

use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::store::{use_app_store, AppStateStoreFields};

/// Draggable activity pool (drag source only, never a drop target)
#[component]
pub fn ActivityPool(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="activity-pool" id="activity-pool">
            <h3>"活动池"</h3>
            <For
                each=move || store.flat_activities().get()
                key=|activity| (activity.id, activity.name.clone())
                children=move |activity| {
                    let id = activity.id;
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

                    view! {
                        <div
                            class=move || if is_dragging() { "pool-item dragging" } else { "pool-item" }
                            data-activity-id=id.to_string()
                            on:mousedown=on_mousedown
                        >
                            {activity.name.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
