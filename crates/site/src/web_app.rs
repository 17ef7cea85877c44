use explorer_app::ExplorerApp;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="File Explorer" />
        <Meta name="description" content="A virtual file explorer that keeps its tree in browser storage." />

        <main class="site-root">
            <ExplorerApp />
        </main>
    }
}
