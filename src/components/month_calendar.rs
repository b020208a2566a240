//! Month Calendar Component
//!
//! Monthly overview grid: leading blanks from the padding computation,
//! one cell per day with today / event-count flags. Clicking a day jumps
//! the week view to the week containing it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::calendar;
use crate::store::{self, use_app_store, AppStateStoreFields, ViewKind};

const WEEKDAY_LABELS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

/// Month overview grid
#[component]
pub fn MonthCalendar() -> impl IntoView {
    let store = use_app_store();

    let page = move |forward: bool| {
        let year = store.current_year().get_untracked();
        let month = store.current_month().get_untracked();
        let (year, month) = if forward {
            calendar::next_month(year, month)
        } else {
            calendar::prev_month(year, month)
        };
        store.current_year().set(year);
        store.current_month().set(month);
        spawn_local(store::load_month(store));
    };

    let go_to_week = move |date: String| {
        if let Some(parsed) = calendar::parse_date(&date) {
            store::set_week_from(&store, parsed);
            store::switch_view(store, ViewKind::Week);
        }
    };

    let padding = move || calendar::month_padding(store.current_year().get(), store.current_month().get());

    view! {
        <div class="month-view">
            <div class="month-nav">
                <button on:click=move |_| page(false)>"‹ 上个月"</button>
                <span class="month-title">
                    {move || calendar::month_title(store.current_year().get(), store.current_month().get())}
                </span>
                <button on:click=move |_| page(true)>"下个月 ›"</button>
            </div>

            <div class="month-grid" id="month-calendar">
                {WEEKDAY_LABELS.iter().map(|label| view! {
                    <div class="month-weekday">{*label}</div>
                }).collect_view()}

                {move || (0..padding()).map(|_| view! {
                    <div class="month-cell blank"></div>
                }).collect_view()}

                <For
                    each=move || store.month_schedule().read().days.clone()
                    key=|day| day.date.clone()
                    children=move |day| {
                        let date = day.date.clone();
                        let has_events = day.event_count > 0;
                        let cell_class = {
                            let mut c = String::from("month-cell");
                            if day.is_today { c.push_str(" today"); }
                            if has_events { c.push_str(" has-events"); }
                            c
                        };

                        view! {
                            <div class=cell_class on:click=move |_| go_to_week(date.clone())>
                                <div class="month-day-number">{day.day}</div>
                                <Show when=move || has_events>
                                    <span class="event-count-badge">{day.event_count}"项"</span>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
