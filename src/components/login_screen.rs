use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::PageProps;
use crate::hooks::use_observed;
use crate::viewmodels::LoginViewModel;

#[function_component(LoginScreen)]
pub fn login_screen(props: &PageProps) -> Html {
    let vm = {
        let ctx = props.ctx.clone();
        use_state(move || LoginViewModel::new(ctx.auth.clone(), ctx.navigator.clone()))
    };
    use_observed(&*vm);
    let form = vm.form();

    let on_username = {
        let vm = (*vm).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            vm.set_username(input.value());
        })
    };

    let on_password = {
        let vm = (*vm).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            vm.set_password(input.value());
        })
    };

    let on_submit = {
        let vm = (*vm).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.submit().await {
                    log::warn!("⚠️ Login fallido: {}", e);
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"📦"}</div>
                    <h1>{"Catalog Admin"}</h1>
                    <p>{"Sign in to manage the product catalog"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Enter your username"
                            value={form.username.clone()}
                            oninput={on_username}
                            disabled={form.loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            value={form.password.clone()}
                            oninput={on_password}
                            disabled={form.loading}
                        />
                    </div>

                    if let Some(error) = &form.error {
                        <div class="form-error" role="alert">{error}</div>
                    }

                    <button type="submit" class="btn-login" disabled={form.loading}>
                        { if form.loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
