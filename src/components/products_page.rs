use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{DeleteModal, PageProps};
use crate::config::CONFIG;
use crate::dom::{POP_STATE_EVENT, ROUTE_CHANGE_EVENT};
use crate::hooks::{use_observed, use_query, use_window_event};
use crate::models::{Category, FilterChange, ProductPage, QueryKey};
use crate::services::QueryResult;
use crate::viewmodels::products_viewmodel::CATEGORIES_ROOT;
use crate::viewmodels::ProductsViewModel;

#[function_component(ProductsPage)]
pub fn products_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;
    let vm = {
        let ctx = ctx.clone();
        use_state(move || {
            ProductsViewModel::new(
                ctx.queries.clone(),
                ctx.products.clone(),
                ctx.navigator.clone(),
                CONFIG.page_size,
            )
        })
    };
    use_observed(&*vm);

    // Atrás/adelante o enlace a `/products`: la URL vuelve a mandar
    let on_location = {
        let vm = (*vm).clone();
        let navigator = ctx.navigator.clone();
        Callback::from(move |_| vm.sync_from_query(&navigator.current_query()))
    };
    use_window_event(ROUTE_CHANGE_EVENT, on_location.clone());
    use_window_event(POP_STATE_EVENT, on_location);

    let load_products = {
        let vm = (*vm).clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.load_products().await {
                    log::error!("❌ Error cargando productos: {}", e);
                }
            });
        })
    };
    let load_categories = {
        let vm = (*vm).clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.load_categories().await {
                    log::error!("❌ Error cargando categorías: {}", e);
                }
            });
        })
    };

    let products: QueryResult<ProductPage> = use_query(&ctx.queries, vm.query_key(), load_products.clone());
    let categories: QueryResult<Vec<Category>> =
        use_query(&ctx.queries, QueryKey::new(CATEGORIES_ROOT), load_categories);

    let state = vm.state();
    let pagination = vm.pagination();

    let on_search = {
        let vm = (*vm).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            vm.set_filter(FilterChange::Search(input.value()));
        })
    };
    let on_category = {
        let vm = (*vm).clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            vm.set_filter(FilterChange::Category(select.value()));
        })
    };
    let on_previous = {
        let vm = (*vm).clone();
        Callback::from(move |_: MouseEvent| vm.previous_page())
    };
    let on_next = {
        let vm = (*vm).clone();
        Callback::from(move |_: MouseEvent| vm.next_page())
    };
    let on_cancel_delete = {
        let vm = (*vm).clone();
        Callback::from(move |_| vm.cancel_delete())
    };
    let on_confirm_delete = {
        let vm = (*vm).clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.confirm_delete().await {
                    log::warn!("⚠️ Borrado fallido: {}", e);
                }
            });
        })
    };

    let category_options = categories.data.clone().unwrap_or_default();
    let page = products.data.clone();

    let table = match (&page, products.is_error()) {
        (None, true) => html! {
            <div class="panel-error">
                <p>{products.error.clone().unwrap_or_default()}</p>
                <button type="button" onclick={load_products.reform(|_: MouseEvent| ())}>{"Retry"}</button>
            </div>
        },
        (None, false) => html! { <div class="panel-loading">{"Loading products..."}</div> },
        (Some(page), _) if page.products.is_empty() => html! {
            <div class="panel-empty">{"No products found"}</div>
        },
        (Some(page), _) => html! {
            <table class="products-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{"Title"}</th>
                        <th>{"Category"}</th>
                        <th>{"Price"}</th>
                        <th>{"Stock"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for page.products.iter().map(|product| {
                        let on_delete = {
                            let vm = (*vm).clone();
                            let id = product.id;
                            Callback::from(move |_: MouseEvent| vm.request_delete(id))
                        };
                        let stock_class = classes!(
                            "stock",
                            product.is_low_stock(CONFIG.low_stock_threshold).then_some("low-stock")
                        );
                        html! {
                            <tr key={product.id.to_string()}>
                                <td><img class="thumbnail" src={product.thumbnail.clone()} alt={product.title.clone()} /></td>
                                <td>{&product.title}</td>
                                <td>{&product.category}</td>
                                <td>{format!("${:.2}", product.price)}</td>
                                <td class={stock_class}>{product.stock}</td>
                                <td>
                                    <button type="button" class="btn-danger" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };

    let pending_title = state.pending_deletion.map(|id| {
        page.as_ref()
            .and_then(|page| page.products.iter().find(|p| p.id == id))
            .map(|p| p.title.clone())
            .unwrap_or_else(|| format!("product #{}", id))
    });

    html! {
        <div class="products-page">
            <div class="filters">
                <input
                    type="search"
                    class="filter-search"
                    placeholder="Search products..."
                    value={state.filter.search.clone()}
                    oninput={on_search}
                />
                <select class="filter-category" onchange={on_category}>
                    <option value="" selected={state.filter.category.is_empty()}>{"All categories"}</option>
                    { for category_options.iter().map(|category| html! {
                        <option
                            key={category.slug.clone()}
                            value={category.slug.clone()}
                            selected={category.slug == state.filter.category}
                        >
                            {&category.name}
                        </option>
                    }) }
                </select>
                if products.is_fetching && page.is_some() {
                    <span class="refreshing">{"Refreshing..."}</span>
                }
            </div>

            { table }

            <div class="pagination">
                <span class="pagination-info">
                    {format!("Showing {} - {} of {}", pagination.first_item, pagination.last_item, pagination.total)}
                </span>
                <button type="button" onclick={on_previous} disabled={!pagination.has_previous}>{"Previous"}</button>
                <span class="pagination-page">{format!("Page {}", pagination.page)}</span>
                <button type="button" onclick={on_next} disabled={!pagination.has_next}>{"Next"}</button>
            </div>

            if let Some(title) = pending_title {
                <DeleteModal
                    product={title}
                    error={state.delete_error.clone().map(AttrValue::from)}
                    deleting={state.deleting}
                    on_confirm={on_confirm_delete}
                    on_cancel={on_cancel_delete}
                />
            }
        </div>
    }
}
