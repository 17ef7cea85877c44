mod web_app;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::logging::log!(
        "explorer storage strategy: {}",
        platform_host_web::storage_strategy_name()
    );
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
