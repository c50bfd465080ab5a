use yew::prelude::*;

use crate::context::AppContext;
use crate::state::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub ctx: AppContext,
    pub route: Route,
    pub children: Children,
}

/// Sidebar + cabecera con logout
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let nav_link = |target: Route| {
        let navigator = props.ctx.navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.navigate(target);
        });
        let class = if props.route == target { "nav-link active" } else { "nav-link" };
        html! {
            <a href={target.path()} {class} {onclick}>{target.title()}</a>
        }
    };

    let on_logout = {
        let auth = props.ctx.auth.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🚪 Logout");
            auth.logout();
        })
    };

    html! {
        <div class="admin-layout">
            <aside class="sidebar">
                <div class="sidebar-logo">{"📦 Catalog Admin"}</div>
                <nav class="sidebar-nav">
                    { nav_link(Route::Dashboard) }
                    { nav_link(Route::Products) }
                </nav>
            </aside>
            <div class="admin-main">
                <header class="admin-header">
                    <h1>{props.route.title()}</h1>
                    <button type="button" class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                </header>
                <main class="admin-content">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
