use yew::prelude::*;

use super::{BarChart, PageProps, StatsCard};
use crate::config::CONFIG;
use crate::hooks::use_query;
use crate::models::ProductPage;
use crate::services::QueryResult;
use crate::viewmodels::DashboardViewModel;

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;
    let vm = {
        let ctx = ctx.clone();
        use_state(move || {
            DashboardViewModel::new(
                ctx.queries.clone(),
                ctx.products.clone(),
                CONFIG.stats_sample_size,
                CONFIG.low_stock_threshold,
            )
        })
    };

    let load = {
        let vm = (*vm).clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.load().await {
                    log::error!("❌ Error cargando estadísticas: {}", e);
                }
            });
        })
    };

    let [products_key, users_key] = DashboardViewModel::keys();
    let sample: QueryResult<ProductPage> = use_query(&ctx.queries, products_key, load.clone());
    let users: QueryResult<u64> = use_query(&ctx.queries, users_key, load.clone());

    let Some(stats) = vm.stats() else {
        return match vm.error() {
            Some(error) if sample.is_error() || users.is_error() => html! {
                <div class="panel-error">
                    <p>{error}</p>
                    <button type="button" onclick={load.reform(|_: MouseEvent| ())}>{"Retry"}</button>
                </div>
            },
            _ => html! { <div class="panel-loading">{"Loading statistics..."}</div> },
        };
    };

    html! {
        <div class="dashboard">
            <div class="stats-grid">
                <StatsCard title="Total products" value={stats.total_products.to_string()} icon="📦" />
                <StatsCard title="Total users" value={stats.total_users.to_string()} icon="👥" />
                <StatsCard
                    title="Low stock"
                    value={stats.low_stock.to_string()}
                    icon="⚠️"
                    highlight={stats.low_stock > 0}
                />
                <StatsCard title="Average price" value={format!("${}", stats.average_price)} icon="💲" />
            </div>
            <div class="charts-grid">
                <BarChart title="Top categories" points={stats.top_categories.clone()} />
                <BarChart title="Price distribution" points={stats.price_ranges.clone()} />
                <BarChart title="Top rated" points={stats.top_rated.clone()} />
            </div>
        </div>
    }
}
