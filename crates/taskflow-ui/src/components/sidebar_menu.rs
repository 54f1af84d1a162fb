//! Ordered list of dashboard sections.

use crate::components::atoms::MenuItem;
use crate::features::navigation::actions::row_activation;
use crate::features::navigation::layout::menu_nav_classes;
use crate::features::navigation::state::{DEFAULT_MENU_ITEM, MENU_ENTRIES, MenuEntry, MenuSelection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarMenuProps {
    /// Notified with the activated entry; the owner feeds the new id back.
    #[prop_or_default]
    pub on_menu_item_click: Option<Callback<MenuEntry>>,
    /// Selected entry id.
    #[prop_or(AttrValue::Static(DEFAULT_MENU_ITEM))]
    pub active_item: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(SidebarMenu)]
pub(crate) fn sidebar_menu(props: &SidebarMenuProps) -> Html {
    let selection = MenuSelection::new(&props.active_item);

    let rows = MENU_ENTRIES.iter().map(|entry| {
        let entry = *entry;
        let on_activate = row_activation(entry, props.on_menu_item_click.clone());
        html! {
            <MenuItem
                key={entry.id}
                text={entry.label}
                href={AttrValue::Static(entry.target)}
                is_active={selection.is_active(&entry)}
                {on_activate}
                class="w-full"
            />
        }
    });

    html! {
        <nav class={classes!(menu_nav_classes(&props.class))} role="navigation" aria-label="Sidebar menu">
            {for rows}
        </nav>
    }
}
