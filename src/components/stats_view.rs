//! Statistics View
//!
//! Fetches `/api/stats` once and draws the three charts plus the KPI strip.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use goalboard_core::models::Stats;

use crate::api::ApiClient;
use crate::charts::{self, Chart, ChartConfig};

#[component]
pub fn StatsView() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (stats, set_stats) = signal::<Option<Stats>>(None);
    let (load_failed, set_load_failed) = signal(false);

    let category_canvas = NodeRef::<html::Canvas>::new();
    let status_canvas = NodeRef::<html::Canvas>::new();
    let bar_canvas = NodeRef::<html::Canvas>::new();
    let instances = StoredValue::new_local(Vec::<Chart>::new());

    // Load once on mount
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.get_stats().await {
                Ok(loaded) => set_stats.set(Some(loaded)),
                Err(e) => {
                    log::error!("[Stats] Error loading stats: {}", e);
                    set_load_failed.set(true);
                }
            }
        });
    });

    // Draw once both the data and the canvases exist
    Effect::new(move |_| {
        let Some(stats) = stats.get() else {
            return;
        };
        let (Some(category), Some(status), Some(bar)) =
            (category_canvas.get(), status_canvas.get(), bar_canvas.get())
        else {
            return;
        };

        let plan: [(&web_sys::HtmlCanvasElement, ChartConfig); 3] = [
            (&category, charts::category_doughnut(&stats.pie_category)),
            (&status, charts::status_pie(&stats.pie_status)),
            (&bar, charts::momentum_bar(&stats.bar)),
        ];

        instances.update_value(|existing| {
            for chart in existing.drain(..) {
                chart.destroy();
            }
            for (canvas, config) in plan.iter() {
                match charts::render(canvas, config) {
                    Ok(chart) => existing.push(chart),
                    Err(e) => log::error!("[Stats] Could not draw {} chart: {}", config.kind, e),
                }
            }
        });
    });

    on_cleanup(move || {
        instances.update_value(|existing| {
            for chart in existing.drain(..) {
                chart.destroy();
            }
        });
    });

    let kpi = move || stats.get().and_then(|s| s.kpi);

    view! {
        <section class="stats-view">
            <h1>"Analytics"</h1>

            <Show when=move || load_failed.get()>
                <p class="muted">"Statistics are unavailable right now."</p>
            </Show>
            <Show when=move || stats.get().is_none() && !load_failed.get()>
                <p class="muted">"Loading..."</p>
            </Show>

            {move || kpi().map(|kpi| view! {
                <div class="kpi-strip">
                    <div class="kpi"><span class="kpi-value">{kpi.total}</span><span class="kpi-label">"Total goals"</span></div>
                    <div class="kpi"><span class="kpi-value">{kpi.completed}</span><span class="kpi-label">"Completed"</span></div>
                    <div class="kpi"><span class="kpi-value">{format!("{:.1}%", kpi.win_rate)}</span><span class="kpi-label">"Win rate"</span></div>
                </div>
            })}

            <div class="chart-grid">
                <div class="chart-card">
                    <h3>"By category"</h3>
                    <canvas node_ref=category_canvas></canvas>
                </div>
                <div class="chart-card">
                    <h3>"By status"</h3>
                    <canvas node_ref=status_canvas></canvas>
                </div>
                <div class="chart-card wide">
                    <h3>"Last 7 days"</h3>
                    <canvas node_ref=bar_canvas></canvas>
                </div>
            </div>
        </section>
    }
}
