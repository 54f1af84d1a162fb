//! Responsive sidebar: fixed column on desktop, off-canvas drawer below it.

use crate::components::atoms::icons::{IconMenu, IconX};
use crate::components::sidebar_menu::SidebarMenu;
use crate::core::config::DEFAULT_BRAND;
use crate::core::store::AppStore;
use crate::features::navigation::actions::close_then_forward;
use crate::features::navigation::layout::{
    CLOSE_BUTTON, FOOTER, FOOTER_BRAND, MENU_CONTAINER, OVERLAY, PANEL_CONTENT, SidebarWidth,
    TOGGLE_BUTTON, panel_classes, spacer_classes,
};
use crate::features::navigation::state::{
    DEFAULT_MENU_ITEM, MenuEntry, MobileMenu, MobileMenuEvent,
};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarProps {
    /// Extra panel classes; later utilities win over the defaults.
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub on_menu_item_click: Option<Callback<MenuEntry>>,
    #[prop_or(AttrValue::Static(DEFAULT_MENU_ITEM))]
    pub active_item: AttrValue,
    #[prop_or_default]
    pub is_collapsed: bool,
    /// Accepted for callers that track collapse; the sidebar has no collapse control.
    #[allow(dead_code)]
    #[prop_or_default]
    pub on_toggle_collapse: Option<Callback<()>>,
    #[prop_or(AttrValue::Static(DEFAULT_BRAND))]
    pub brand: AttrValue,
}

#[function_component(Sidebar)]
pub(crate) fn sidebar(props: &SidebarProps) -> Html {
    let mobile_menu = use_state(MobileMenu::default);
    let is_desktop = use_selector(|store: &AppStore| store.viewport.is_desktop());
    let width = SidebarWidth::for_collapsed(props.is_collapsed);

    let dispatch_menu = |event: MobileMenuEvent| {
        let mobile_menu = mobile_menu.clone();
        move || mobile_menu.set(mobile_menu.apply(event))
    };
    let on_toggle = {
        let apply = dispatch_menu(MobileMenuEvent::ToggleControl);
        Callback::from(move |_: MouseEvent| apply())
    };
    let on_close = {
        let apply = dispatch_menu(MobileMenuEvent::CloseControl);
        Callback::from(move |_: MouseEvent| apply())
    };
    let on_overlay = {
        let apply = dispatch_menu(MobileMenuEvent::Overlay);
        Callback::from(move |_: MouseEvent| apply())
    };
    let on_menu_item_click = {
        let apply = dispatch_menu(MobileMenuEvent::MenuItemActivated);
        close_then_forward(
            Callback::from(move |()| apply()),
            props.on_menu_item_click.clone(),
        )
    };

    let is_open = mobile_menu.is_open();
    let panel_hidden = (!*is_desktop && !is_open).then_some(AttrValue::from("true"));

    html! {
        <>
            <button
                type="button"
                class={TOGGLE_BUTTON}
                onclick={on_toggle}
                aria-label="Toggle navigation menu"
                aria-expanded={is_open.to_string()}
            >
                if is_open {
                    <IconX class="w-6 h-6" />
                } else {
                    <IconMenu class="w-6 h-6" />
                }
            </button>

            if is_open {
                <div class={OVERLAY} onclick={on_overlay} aria-hidden="true" />
            }

            <aside
                class={classes!(panel_classes(*mobile_menu, width, &props.class))}
                role="navigation"
                aria-label="Main navigation"
                aria-hidden={panel_hidden}
            >
                <button
                    type="button"
                    class={CLOSE_BUTTON}
                    onclick={on_close}
                    aria-label="Close navigation menu"
                >
                    <IconX class="w-5 h-5" />
                </button>
                <div class={PANEL_CONTENT}>
                    <div class={MENU_CONTAINER}>
                        <SidebarMenu
                            on_menu_item_click={on_menu_item_click}
                            active_item={props.active_item.clone()}
                            class="space-y-1"
                        />
                    </div>
                    <div class={FOOTER}>
                        <p class={FOOTER_BRAND}>{props.brand.clone()}</p>
                    </div>
                </div>
            </aside>

            <div class={classes!(spacer_classes(width))} aria-hidden="true" />
        </>
    }
}
