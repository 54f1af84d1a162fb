//! Declarative page metadata and its resolution into document head tags.
//!
//! # Design
//! - The root layout owns title templates; pages only contribute plain strings.
//! - A page's open-graph block replaces the layout block wholesale, while its title
//!   still flows through the layout's open-graph title template.

use serde::Deserialize;

/// Placeholder substituted by page titles inside a template.
pub const TITLE_PLACEHOLDER: &str = "%s";

const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1";

/// Default title plus a template applied to page titles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TitleTemplate {
    /// Title used when the page does not declare one.
    pub default: String,
    /// Template containing [`TITLE_PLACEHOLDER`].
    pub template: String,
}

impl TitleTemplate {
    /// Apply the template to a page title, falling back to the default.
    #[must_use]
    pub fn render(&self, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.trim().is_empty() => {
                self.template.replacen(TITLE_PLACEHOLDER, title, 1)
            }
            _ => self.default.clone(),
        }
    }
}

/// Open-graph block declared by the root layout.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LayoutOpenGraph {
    /// `og:type` value.
    #[serde(rename = "type", default)]
    pub og_type: Option<String>,
    /// Title template for `og:title`.
    pub title: TitleTemplate,
    /// `og:description` value.
    #[serde(default)]
    pub description: Option<String>,
}

/// Metadata declared once for every page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LayoutMetadata {
    /// Document title template.
    pub title: TitleTemplate,
    /// Default description.
    pub description: String,
    /// Default comma-separated keywords.
    pub keywords: String,
    /// Viewport meta content.
    #[serde(default = "default_viewport")]
    pub viewport: String,
    /// Default open-graph block.
    pub open_graph: LayoutOpenGraph,
}

fn default_viewport() -> String {
    DEFAULT_VIEWPORT.to_string()
}

impl LayoutMetadata {
    /// Minimal layout metadata naming only the brand.
    #[must_use]
    pub fn for_brand(brand: &str) -> Self {
        let title = TitleTemplate {
            default: brand.to_string(),
            template: format!("{brand} | {TITLE_PLACEHOLDER}"),
        };
        Self {
            title: title.clone(),
            description: String::new(),
            keywords: String::new(),
            viewport: default_viewport(),
            open_graph: LayoutOpenGraph {
                og_type: Some("website".to_string()),
                title,
                description: None,
            },
        }
    }
}

/// Open-graph block declared by a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageOpenGraph {
    /// `og:type` override.
    #[serde(rename = "type", default)]
    pub og_type: Option<String>,
    /// Page title fed through the layout's open-graph template.
    #[serde(default)]
    pub title: Option<String>,
    /// `og:description` override.
    #[serde(default)]
    pub description: Option<String>,
}

/// Metadata declared by a single page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageMetadata {
    /// Page title fed through the layout template.
    #[serde(default)]
    pub title: Option<String>,
    /// Description override.
    #[serde(default)]
    pub description: Option<String>,
    /// Keywords override.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Open-graph block replacing the layout's.
    #[serde(default)]
    pub open_graph: Option<PageOpenGraph>,
}

/// Attribute a meta tag is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name=...>`.
    Name,
    /// `<meta property=...>` (open graph).
    Property,
}

impl MetaAttr {
    /// Attribute name used in the selector and on the element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// Desired state of one `<meta>` tag in the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    /// Keying attribute.
    pub attr: MetaAttr,
    /// Attribute value, e.g. `description` or `og:title`.
    pub key: &'static str,
    /// Tag content; `None` means any existing tag must be removed.
    pub content: Option<String>,
}

impl MetaTag {
    /// CSS selector matching an existing tag with the same key.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attr.as_str(), self.key)
    }
}

/// Final metadata for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedMetadata {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Meta keywords.
    pub keywords: String,
    /// Viewport meta content.
    pub viewport: String,
    /// `og:type`, absent when the page block omits it.
    pub og_type: Option<String>,
    /// `og:title`.
    pub og_title: String,
    /// `og:description`.
    pub og_description: Option<String>,
}

impl ResolvedMetadata {
    /// Every managed meta tag; empty or missing values carry no content.
    #[must_use]
    pub fn tags(&self) -> Vec<MetaTag> {
        let candidates = [
            (MetaAttr::Name, "description", Some(&self.description)),
            (MetaAttr::Name, "keywords", Some(&self.keywords)),
            (MetaAttr::Name, "viewport", Some(&self.viewport)),
            (MetaAttr::Property, "og:type", self.og_type.as_ref()),
            (MetaAttr::Property, "og:title", Some(&self.og_title)),
            (
                MetaAttr::Property,
                "og:description",
                self.og_description.as_ref(),
            ),
        ];
        candidates
            .into_iter()
            .map(|(attr, key, content)| MetaTag {
                attr,
                key,
                content: content.filter(|value| !value.is_empty()).cloned(),
            })
            .collect()
    }
}

/// Merge layout and page metadata.
#[must_use]
pub fn resolve(layout: &LayoutMetadata, page: Option<&PageMetadata>) -> ResolvedMetadata {
    let page_title = page.and_then(|page| page.title.as_deref());
    let (og_type, og_title, og_description) =
        match page.and_then(|page| page.open_graph.as_ref()) {
            Some(og) => (
                og.og_type.clone(),
                layout.open_graph.title.render(og.title.as_deref()),
                og.description.clone(),
            ),
            None => (
                layout.open_graph.og_type.clone(),
                layout.open_graph.title.render(None),
                layout.open_graph.description.clone(),
            ),
        };
    ResolvedMetadata {
        title: layout.title.render(page_title),
        description: page
            .and_then(|page| page.description.clone())
            .unwrap_or_else(|| layout.description.clone()),
        keywords: page
            .and_then(|page| page.keywords.clone())
            .unwrap_or_else(|| layout.keywords.clone()),
        viewport: layout.viewport.clone(),
        og_type,
        og_title,
        og_description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutMetadata {
        let mut layout = LayoutMetadata::for_brand("TaskFlow Pro");
        layout.description = "Layout description".to_string();
        layout.keywords = "task management".to_string();
        layout.open_graph.description = Some("Layout og".to_string());
        layout
    }

    #[test]
    fn title_template_wraps_page_title() {
        let resolved = resolve(
            &layout(),
            Some(&PageMetadata {
                title: Some("Dashboard".to_string()),
                ..PageMetadata::default()
            }),
        );
        assert_eq!(resolved.title, "TaskFlow Pro | Dashboard");
        assert_eq!(resolved.description, "Layout description");
        assert_eq!(resolved.keywords, "task management");
    }

    #[test]
    fn missing_page_uses_layout_defaults() {
        let resolved = resolve(&layout(), None);
        assert_eq!(resolved.title, "TaskFlow Pro");
        assert_eq!(resolved.og_type.as_deref(), Some("website"));
        assert_eq!(resolved.og_title, "TaskFlow Pro");
        assert_eq!(resolved.og_description.as_deref(), Some("Layout og"));
    }

    #[test]
    fn page_open_graph_replaces_layout_block() {
        let page = PageMetadata {
            title: Some("Dashboard".to_string()),
            description: Some("Page description".to_string()),
            keywords: None,
            open_graph: Some(PageOpenGraph {
                og_type: None,
                title: Some("Board".to_string()),
                description: Some("Page og".to_string()),
            }),
        };
        let resolved = resolve(&layout(), Some(&page));
        assert_eq!(resolved.og_type, None);
        assert_eq!(resolved.og_title, "TaskFlow Pro | Board");
        assert_eq!(resolved.og_description.as_deref(), Some("Page og"));
        assert_eq!(resolved.description, "Page description");
    }

    #[test]
    fn empty_values_are_marked_for_removal() {
        let mut layout = layout();
        layout.keywords.clear();
        let tags = resolve(&layout, None).tags();
        let present: Vec<&str> = tags
            .iter()
            .filter(|tag| tag.content.is_some())
            .map(|tag| tag.key)
            .collect();
        assert_eq!(
            present,
            vec!["description", "viewport", "og:type", "og:title", "og:description"]
        );
        assert_eq!(tags[1].key, "keywords");
        assert_eq!(tags[1].content, None);
        assert_eq!(tags[0].selector(), "meta[name=\"description\"]");
        assert_eq!(
            tags[2].content.as_deref(),
            Some("width=device-width, initial-scale=1")
        );
        assert_eq!(tags[3].attr, MetaAttr::Property);
    }

    #[test]
    fn page_without_og_type_removes_layout_og_type() {
        let home = resolve(&layout(), None).tags();
        let page = PageMetadata {
            open_graph: Some(PageOpenGraph::default()),
            ..PageMetadata::default()
        };
        let dashboard = resolve(&layout(), Some(&page)).tags();
        let og_type = |tags: &[MetaTag]| {
            tags.iter()
                .find(|tag| tag.key == "og:type")
                .and_then(|tag| tag.content.clone())
        };
        assert_eq!(og_type(&home).as_deref(), Some("website"));
        assert_eq!(og_type(&dashboard), None);
        assert_eq!(home.len(), dashboard.len());
    }

    #[test]
    fn blank_title_renders_default() {
        let template = TitleTemplate {
            default: "Home".to_string(),
            template: "App | %s".to_string(),
        };
        assert_eq!(template.render(Some("  ")), "Home");
        assert_eq!(template.render(Some("Tasks")), "App | Tasks");
    }
}
