//! Schedule Frontend App
//!
//! Top-level component: header with the view switcher, the current
//! view, and the shared modals. The drag-and-drop bridge is created and
//! bound here, once, so the global listeners survive view switches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::components::{handle_drop, ActivityModal, ActivityTarget, ActivityTree, EventEditor, MonthCalendar, ViewTabs, WeekView};
use crate::context::AppContext;
use crate::models::EventDraft;
use crate::store::{self, AppState, AppStateStoreFields, ViewKind};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (editing_event, set_editing_event) = signal::<Option<EventDraft>>(None);
    let ctx = AppContext::new((editing_event, set_editing_event));
    provide_context(ctx);

    // Activity create/edit modal target
    let (activity_target, set_activity_target) = signal::<Option<ActivityTarget>>(None);

    // One drag bridge for the whole app: the pool drags out, slot cells receive
    let dnd = create_dnd_signals();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |activity_id, target| {
        spawn_local(handle_drop(store, ctx, activity_id, target));
    });

    // Initial load: activities always, then whatever the starting view needs
    Effect::new(move |_| {
        spawn_local(async move {
            store::load_activities(store).await;
            match store.current_view().get_untracked() {
                ViewKind::Week => store::load_week(store).await,
                ViewKind::Month => store::load_month(store).await,
                ViewKind::Summary => {}
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"LAE 日程系统"</h1>
                <ViewTabs />
                <button
                    class="new-activity-btn"
                    on:click=move |_| set_activity_target.set(Some(ActivityTarget::New))
                >
                    "新建活动"
                </button>
            </header>

            <main class="main-content">
                {move || match store.current_view().get() {
                    ViewKind::Summary => view! { <ActivityTree set_activity_target=set_activity_target /> }.into_any(),
                    ViewKind::Week => view! { <WeekView /> }.into_any(),
                    ViewKind::Month => view! { <MonthCalendar /> }.into_any(),
                }}
            </main>

            <ActivityModal activity_target=activity_target set_activity_target=set_activity_target />
            <EventEditor />
        </div>
    }
}
