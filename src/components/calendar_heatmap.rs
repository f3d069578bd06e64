//! Calendar Heatmap Component
//!
//! Month grid with one colored dot per day that has goals. Clicking a day
//! filters the goal list to that date.

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;

use goalboard_core::calendar::{MonthCursor, WEEKDAY_NAMES};
use goalboard_core::palette::HeatColor;

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn CalendarHeatmap() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let (cursor, set_cursor) = signal(MonthCursor::containing(Local::now().date_naive()));

    let markers = Memo::new(move |_| {
        store
            .heatmap()
            .get()
            .into_iter()
            .map(|m| (m.date, m.color))
            .collect::<HashMap<String, HeatColor>>()
    });

    view! {
        <div class="calendar-card">
            <div class="calendar-header">
                <button class="calendar-nav" on:click=move |_| set_cursor.update(|c| *c = c.prev())>
                    "‹"
                </button>
                <span class="calendar-title">{move || cursor.get().title()}</span>
                <button class="calendar-nav" on:click=move |_| set_cursor.update(|c| *c = c.next())>
                    "›"
                </button>
                <button
                    class="calendar-today"
                    on:click=move |_| set_cursor.set(MonthCursor::containing(Local::now().date_naive()))
                >
                    "Today"
                </button>
            </div>

            <div class="calendar-grid">
                {WEEKDAY_NAMES.iter().map(|name| view! {
                    <div class="calendar-weekday">{*name}</div>
                }).collect_view()}

                {move || cursor.get().weeks().into_iter().flatten().map(|cell| match cell {
                    Some(date) => view! { <DayCell date=date markers=markers /> }.into_any(),
                    None => view! { <div class="calendar-day outside"></div> }.into_any(),
                }).collect_view()}
            </div>

            <div class="calendar-legend">
                <span><span class="heat-dot" style=legend_style(HeatColor::Normal)></span>"1-2"</span>
                <span><span class="heat-dot" style=legend_style(HeatColor::Warning)></span>"3-5"</span>
                <span><span class="heat-dot" style=legend_style(HeatColor::Overloaded)></span>"6+"</span>
                <span><span class="heat-dot" style=legend_style(HeatColor::Completed)></span>"Done"</span>
            </div>
        </div>
    }
}

fn legend_style(color: HeatColor) -> String {
    format!("background-color: {};", color.hex())
}

/// Single day of the grid
#[component]
fn DayCell(date: NaiveDate, markers: Memo<HashMap<String, HeatColor>>) -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let key = date.format("%Y-%m-%d").to_string();
    let is_today = date == Local::now().date_naive();

    let is_selected = move || store.list().read().filters().date == Some(date);
    let dot = move || markers.with(|m| m.get(&key).map(|color| color.hex()));

    let class = move || {
        let mut class = String::from("calendar-day");
        if is_selected() {
            class.push_str(" selected");
        }
        if is_today {
            class.push_str(" today");
        }
        class
    };

    let select = move |_: web_sys::MouseEvent| {
        let now = Local::now().time();
        ctx.update_filters(move |list| list.select_date(date, now));
    };

    view! {
        <div class=class on:click=select>
            <span class="calendar-day-number">{date.day()}</span>
            {move || dot().map(|color| view! {
                <span class="heat-dot" style=format!("background-color: {};", color)></span>
            })}
        </div>
    }
}
