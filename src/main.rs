#[cfg(target_arch = "wasm32")]
fn main() {
    use catalog_admin::components::App;
    use catalog_admin::config::CONFIG;

    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Catalog Admin starting...");

    yew::Renderer::<App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("catalog-admin se ejecuta en el navegador: compílalo con `trunk serve` (wasm32-unknown-unknown)");
}
