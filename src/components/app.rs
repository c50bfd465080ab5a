use yew::prelude::*;

use super::{DashboardPage, Layout, LoginScreen, ProductsPage};
use crate::context::AppContext;
use crate::dom::{BrowserNavigator, POP_STATE_EVENT, ROUTE_CHANGE_EVENT};
use crate::hooks::{use_observed, use_window_event};
use crate::state::Route;

#[function_component(App)]
pub fn app() -> Html {
    let ctx = use_state(AppContext::new);
    let route = use_state(BrowserNavigator::current_route);

    // Login / logout cambian la ruta efectiva
    use_observed(&ctx.session);

    let on_location = {
        let route = route.clone();
        Callback::from(move |_| route.set(BrowserNavigator::current_route()))
    };
    use_window_event(ROUTE_CHANGE_EVENT, on_location.clone());
    use_window_event(POP_STATE_EVENT, on_location);

    let on_focus = {
        let queries = ctx.queries.clone();
        Callback::from(move |_| {
            queries.on_window_focus();
        })
    };
    use_window_event("focus", on_focus);

    let requested = *route;
    let effective = Route::guard(requested, ctx.session.is_authenticated());
    {
        let navigator = ctx.navigator.clone();
        use_effect_with((requested, effective), move |(requested, effective)| {
            if requested != effective {
                log::warn!("🚧 {} no permitido, redirigiendo a {}", requested.path(), effective.path());
                navigator.navigate(*effective);
            }
        });
    }

    let context = (*ctx).clone();
    match effective {
        Route::Login => html! { <LoginScreen ctx={context} /> },
        Route::Dashboard => html! {
            <Layout ctx={context.clone()} route={effective}>
                <DashboardPage ctx={context} />
            </Layout>
        },
        Route::Products => html! {
            <Layout ctx={context.clone()} route={effective}>
                <ProductsPage ctx={context} />
            </Layout>
        },
    }
}
