use crate::components::atoms::MenuText;
use crate::core::ui::{emit_optional, is_activation_key};
use crate::features::navigation::layout::menu_row_classes;
use crate::features::navigation::routes::{MenuLink, Route};
use yew::prelude::*;
use yew_router::prelude::*;

/// Props for one clickable navigation row.
#[derive(Properties, PartialEq)]
pub(crate) struct MenuItemProps {
    pub text: AttrValue,
    /// Destination; absent or `#` renders a plain row.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub is_active: bool,
    /// Fired on click and on Enter/Space.
    #[prop_or_default]
    pub on_activate: Option<Callback<()>>,
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(MenuItem)]
pub(crate) fn menu_item(props: &MenuItemProps) -> Html {
    let onclick = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| {
            emit_optional(on_activate.as_ref(), ());
        })
    };
    let onkeydown = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                emit_optional(on_activate.as_ref(), ());
            }
        })
    };
    let aria_current = props.is_active.then_some(AttrValue::from("page"));

    let row = html! {
        <div
            class={classes!(menu_row_classes(props.is_active, &props.class))}
            role="menuitem"
            tabindex="0"
            aria-current={aria_current}
            {onclick}
            {onkeydown}
        >
            <MenuText text={props.text.clone()} class="mt-[6px] mb-[6px]" />
        </div>
    };

    match MenuLink::for_target(props.href.as_deref()) {
        MenuLink::Route(route) => html! {
            <Link<Route> to={route} classes="w-full">{row}</Link<Route>>
        },
        MenuLink::Anchor(target) => html! { <a href={target} class="w-full">{row}</a> },
        MenuLink::None => row,
    }
}
