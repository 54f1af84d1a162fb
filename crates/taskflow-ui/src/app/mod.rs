use crate::core::breakpoints;
use crate::core::config::{DASHBOARD_PAGE, NOT_FOUND_PAGE, SiteConfig};
use crate::core::store::{AppStore, apply_width};
use crate::features::dashboard::DashboardPage;
use crate::features::navigation::routes::{Route, RouteView};
use document::{
    PageHead, apply_breakpoint, apply_theme_tokens, current_breakpoint, current_width,
    install_embed_script,
};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

mod document;

#[function_component(TaskflowApp)]
pub(crate) fn taskflow_app() -> Html {
    let config = use_memo(|_| load_config(), ());

    {
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                apply_theme_tokens();
                if let Some(script) = &config.embed_script {
                    install_embed_script(script);
                }
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        |_| {
            let dispatch = Dispatch::<AppStore>::new();
            dispatch.reduce_mut(|store| {
                apply_width(store, current_width());
            });
            apply_breakpoint(current_breakpoint());
            let handler = EventListener::new(&window(), "resize", move |_event| {
                let width = current_width();
                let mut changed = false;
                dispatch.reduce_mut(|store| {
                    changed = apply_width(store, width);
                });
                if changed {
                    let bp = breakpoints::for_width(width);
                    console::debug!("breakpoint changed", bp.name, width);
                    apply_breakpoint(bp);
                }
            });
            move || drop(handler)
        },
        (),
    );

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn switch(route: Route) -> Html {
    match route.view() {
        RouteView::RedirectToDashboard => html! { <Redirect<Route> to={Route::Dashboard} /> },
        RouteView::Dashboard => dashboard(),
        RouteView::NotFound => not_found(),
    }
}

fn dashboard() -> Html {
    html! {
        <>
            <PageHead page={DASHBOARD_PAGE} />
            <DashboardPage />
        </>
    }
}

fn not_found() -> Html {
    html! {
        <main class="flex flex-col justify-center items-center w-full min-h-screen bg-[#171717] text-[#fcfcfc] font-['Inter']">
            <PageHead page={NOT_FOUND_PAGE} />
            <h1 class="text-[28px] font-medium mb-4">{"Not found"}</h1>
            <Link<Route> to={Route::Dashboard} classes="opacity-70 hover:opacity-100">
                {"Back to the dashboard"}
            </Link<Route>>
        </main>
    }
}

fn load_config() -> SiteConfig {
    SiteConfig::load().unwrap_or_else(|err| {
        console::error!("site configuration rejected", err.to_string());
        SiteConfig::default()
    })
}

/// Mount the app into the configured root element, or the body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let root_id = load_config().root_element_id;
    if let Some(root) = gloo::utils::document().get_element_by_id(&root_id) {
        yew::Renderer::<TaskflowApp>::with_root(root).render();
    } else {
        yew::Renderer::<TaskflowApp>::new().render();
    }
}
