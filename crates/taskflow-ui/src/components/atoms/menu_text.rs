use crate::features::navigation::layout::menu_text_classes;
use yew::prelude::*;

/// Props for a menu row label.
#[derive(Properties, PartialEq)]
pub(crate) struct MenuTextProps {
    #[prop_or_default]
    pub text: AttrValue,
    /// Extra classes; later utilities win over the defaults.
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(MenuText)]
pub(crate) fn menu_text(props: &MenuTextProps) -> Html {
    html! {
        <span class={classes!(menu_text_classes(&props.class))}>
            {props.text.clone()}
        </span>
    }
}
