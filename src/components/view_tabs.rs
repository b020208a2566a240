//! View Tab Bar Component
//!
//! Switches between the summary, week and month views.

use leptos::prelude::*;

use crate::store::{switch_view, use_app_store, AppStateStoreFields, ViewKind};

const VIEWS: &[(ViewKind, &str)] = &[
    (ViewKind::Summary, "活动汇总"),
    (ViewKind::Week, "周视图"),
    (ViewKind::Month, "月视图"),
];

/// Three-way view switcher
#[component]
pub fn ViewTabs() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="view-tabs">
            {VIEWS.iter().map(|(view, label)| {
                let view = *view;
                let is_active = move || store.current_view().get() == view;
                view! {
                    <button
                        class=move || if is_active() { "view-tab active" } else { "view-tab" }
                        on:click=move |_| switch_view(store, view)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
