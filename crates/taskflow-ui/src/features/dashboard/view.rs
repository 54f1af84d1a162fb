use crate::components::sidebar::Sidebar;
use crate::core::config::SiteConfig;
use crate::features::dashboard::state::DashboardState;
use crate::features::navigation::state::MenuEntry;
use gloo::console;
use yew::prelude::*;

use super::welcome::WelcomePanel;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let state = use_state(DashboardState::default);
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let on_menu_item_click = {
        let state = state.clone();
        Callback::from(move |entry: MenuEntry| {
            console::debug!("menu selection", entry.id, entry.target);
            let mut next = (*state).clone();
            next.select(&entry);
            state.set(next);
        })
    };
    let on_toggle_collapse = Callback::from(|()| ());
    let brand = AttrValue::from(config.brand);

    html! {
        <main class="flex flex-row justify-start items-center w-full min-h-screen bg-[#171717]">
            <div class="flex flex-row justify-start items-start w-full px-[20px] sm:px-[30px] lg:px-[40px] mt-[23px] sm:mt-[35px] lg:mt-[46px] mb-[23px] sm:mb-[35px] lg:mb-[46px]">
                <Sidebar
                    {on_menu_item_click}
                    {on_toggle_collapse}
                    active_item={state.active_menu_item.clone()}
                    is_collapsed={false}
                    brand={brand.clone()}
                    class="bg-[#323232]"
                />
                <WelcomePanel {brand} />
            </div>
        </main>
    }
}
