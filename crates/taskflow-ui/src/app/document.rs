//! Document-level side effects: head metadata, theme tokens, scripts, viewport.

use crate::core::breakpoints::{self, Breakpoint};
use crate::core::config::{EmbedScript, SiteConfig};
use crate::core::metadata::{MetaTag, ResolvedMetadata, resolve};
use crate::core::store::FALLBACK_WIDTH;
use crate::core::theme::root_rule;
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};
use yew::prelude::*;

const THEME_STYLE_ID: &str = "taskflow-theme-tokens";
const EMBED_SCRIPT_ID: &str = "taskflow-embed-script";

#[derive(Properties, PartialEq)]
pub(crate) struct PageHeadProps {
    /// Key into the configured page metadata.
    pub page: AttrValue,
}

/// Writes the resolved title and meta tags for `page` into the document head.
#[function_component(PageHead)]
pub(crate) fn page_head(props: &PageHeadProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    use_effect_with_deps(
        |(config, page)| {
            apply_metadata(&resolve(&config.layout, config.page(page)));
            || ()
        },
        (config, props.page.clone()),
    );
    html! {}
}

pub(crate) fn apply_metadata(meta: &ResolvedMetadata) {
    let document = document();
    document.set_title(&meta.title);
    for tag in meta.tags() {
        if let Err(err) = upsert_meta(&document, &tag) {
            console::error!("meta tag update failed", tag.key, err);
        }
    }
}

fn upsert_meta(document: &Document, tag: &MetaTag) -> Result<(), JsValue> {
    let existing = document.query_selector(&tag.selector())?;
    match (&tag.content, existing) {
        (Some(content), Some(element)) => element.set_attribute("content", content),
        (Some(content), None) => {
            let created = document.create_element("meta")?;
            created.set_attribute(tag.attr.as_str(), tag.key)?;
            created.set_attribute("content", content)?;
            append_to_head(document, &created)
        }
        (None, Some(stale)) => {
            stale.remove();
            Ok(())
        }
        (None, None) => Ok(()),
    }
}

pub(crate) fn apply_theme_tokens() {
    let document = document();
    if document.get_element_by_id(THEME_STYLE_ID).is_some() {
        return;
    }
    let installed = document.create_element("style").and_then(|style| {
        style.set_id(THEME_STYLE_ID);
        style.set_text_content(Some(&root_rule()));
        append_to_head(&document, &style)
    });
    if let Err(err) = installed {
        console::error!("theme token injection failed", err);
    }
}

/// Appends the configured third-party script once per document.
pub(crate) fn install_embed_script(script: &EmbedScript) {
    let document = document();
    if document.get_element_by_id(EMBED_SCRIPT_ID).is_some() {
        return;
    }
    let installed = document.create_element("script").and_then(|element| {
        element.set_id(EMBED_SCRIPT_ID);
        if script.module {
            element.set_attribute("type", "module")?;
        }
        element.set_attribute("src", &script.src)?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
        body.append_child(&element).map(drop)
    });
    if let Err(err) = installed {
        console::error!("embed script install failed", script.src.as_str(), err);
    }
}

fn append_to_head(document: &Document, element: &Element) -> Result<(), JsValue> {
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document head unavailable"))?;
    head.append_child(element).map(drop)
}

pub(crate) fn apply_breakpoint(bp: Breakpoint) {
    if let Some(body) = document().body() {
        if let Err(err) = body.set_attribute("data-bp", bp.name) {
            console::error!("breakpoint attribute update failed", err);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn current_width() -> u16 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(FALLBACK_WIDTH, |width| {
            width.clamp(0.0, f64::from(u16::MAX)) as u16
        })
}

pub(crate) fn current_breakpoint() -> Breakpoint {
    breakpoints::for_width(current_width())
}
