use yew::prelude::*;

/// Icons are decorative; the owning control carries the accessible label.
#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

fn icon_svg(props: &IconProps, path: &'static str) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

#[function_component(IconMenu)]
pub(crate) fn icon_menu(props: &IconProps) -> Html {
    icon_svg(props, "M4 6h16M4 12h16M4 18h16")
}

#[function_component(IconX)]
pub(crate) fn icon_x(props: &IconProps) -> Html {
    icon_svg(props, "M6 18L18 6M6 6l12 12")
}
