//! Utility-class merging with later-argument precedence.
//!
//! # Design
//! - A class conflicts with an earlier one when both target the same utility group
//!   under the same variant set and `!important` flag.
//! - Groups are recognised for the utilities the shell actually emits; anything else
//!   is kept verbatim and only deduplicated against identical tokens.
//! - Responsive resolution evaluates a merged list at a viewport width so layout
//!   behaviour can be asserted without a browser.

use crate::core::breakpoints;
use std::collections::HashSet;

const KEYWORD_GROUPS: &[(&str, &[&str])] = &[
    (
        "position",
        &["static", "fixed", "absolute", "relative", "sticky"],
    ),
    (
        "display",
        &[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "grid",
            "inline-grid",
            "table",
            "contents",
            "flow-root",
            "list-item",
            "hidden",
        ],
    ),
    ("visibility", &["visible", "invisible"]),
    (
        "transform",
        &["transform", "transform-gpu", "transform-cpu", "transform-none"],
    ),
    (
        "flex-direction",
        &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"],
    ),
    ("flex-wrap", &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"]),
    ("flex", &["flex-1", "flex-auto", "flex-initial", "flex-none"]),
    ("shrink", &["shrink", "shrink-0", "flex-shrink", "flex-shrink-0"]),
    ("grow", &["grow", "grow-0", "flex-grow", "flex-grow-0"]),
    (
        "text-align",
        &[
            "text-left",
            "text-center",
            "text-right",
            "text-justify",
            "text-start",
            "text-end",
        ],
    ),
    (
        "font-weight",
        &[
            "font-thin",
            "font-extralight",
            "font-light",
            "font-normal",
            "font-medium",
            "font-semibold",
            "font-bold",
            "font-extrabold",
            "font-black",
        ],
    ),
    (
        "transition",
        &[
            "transition",
            "transition-all",
            "transition-colors",
            "transition-opacity",
            "transition-shadow",
            "transition-transform",
            "transition-none",
        ],
    ),
    (
        "border-style",
        &[
            "border-solid",
            "border-dashed",
            "border-dotted",
            "border-double",
            "border-hidden",
            "border-none",
        ],
    ),
    (
        "outline-style",
        &[
            "outline",
            "outline-none",
            "outline-dashed",
            "outline-dotted",
            "outline-double",
        ],
    ),
];

// Longer roots sharing a prefix with a shorter one must come first.
const PREFIX_GROUPS: &[&str] = &[
    "translate-x",
    "translate-y",
    "inset-x",
    "inset-y",
    "inset",
    "top",
    "right",
    "bottom",
    "left",
    "z",
    "min-w",
    "max-w",
    "w",
    "min-h",
    "max-h",
    "h",
    "px",
    "py",
    "pt",
    "pr",
    "pb",
    "pl",
    "p",
    "mx",
    "my",
    "mt",
    "mr",
    "mb",
    "ml",
    "m",
    "space-x",
    "space-y",
    "gap",
    "bg-opacity",
    "opacity",
    "duration",
    "delay",
    "ease",
    "leading",
    "tracking",
    "cursor",
    "justify-items",
    "justify-self",
    "justify",
    "items",
    "self",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded",
    "border-opacity",
    "overflow-x",
    "overflow-y",
    "overflow",
    "order",
];

// Sides before the bare root so `border-t-2` is not read as a colour.
const BORDER_GROUPS: &[(&str, &str, &str)] = &[
    ("border-x", "border-w-x", "border-color-x"),
    ("border-y", "border-w-y", "border-color-y"),
    ("border-t", "border-w-t", "border-color-t"),
    ("border-r", "border-w-r", "border-color-r"),
    ("border-b", "border-w-b", "border-color-b"),
    ("border-l", "border-w-l", "border-color-l"),
    ("border", "border-w", "border-color"),
];

const SHADOW_SIZES: &[&str] = &["", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

/// A single class token split into its variant prefixes and utility.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    variants: Vec<&'a str>,
    important: bool,
    /// Utility without variants, `!` or the negative sign.
    utility: &'a str,
    /// Utility as written after the variants (keeps `!` and `-`).
    written: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut variants = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (idx, ch) in token.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    variants.push(&token[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }
        let written = &token[start..];
        let (important, rest) = written
            .strip_prefix('!')
            .map_or((false, written), |rest| (true, rest));
        let utility = rest.strip_prefix('-').unwrap_or(rest);
        variants.sort_unstable();
        Self {
            variants,
            important,
            utility,
            written,
        }
    }

    fn group(&self) -> Option<&'static str> {
        class_group(self.utility)
    }

    fn key(&self, group: &str) -> String {
        format!(
            "{}:{}{group}",
            self.variants.join(":"),
            if self.important { "!" } else { "" }
        )
    }
}

fn class_group(utility: &str) -> Option<&'static str> {
    if let Some((group, _)) = KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| *keyword == utility))
    {
        return Some(*group);
    }
    if let Some(root) = PREFIX_GROUPS
        .iter()
        .find(|root| value_of(utility, root).is_some())
    {
        return Some(*root);
    }
    if let Some(value) = value_of(utility, "text") {
        return Some(if FONT_SIZES.iter().any(|size| *size == value) || is_arbitrary_length(value) {
            "font-size"
        } else {
            "text-color"
        });
    }
    if let Some(value) = value_of(utility, "bg") {
        return Some(if value.starts_with("[url(") {
            "bg-image"
        } else {
            "bg-color"
        });
    }
    if let Some(value) = value_of(utility, "shadow") {
        return Some(
            if SHADOW_SIZES.iter().any(|size| *size == value) || value.starts_with('[') {
                "shadow-size"
            } else {
                "shadow-color"
            },
        );
    }
    if let Some((value, width, color)) = BORDER_GROUPS
        .iter()
        .find_map(|(root, width, color)| value_of(utility, root).map(|value| (value, *width, *color)))
    {
        return Some(if is_border_width(value) { width } else { color });
    }
    if value_of(utility, "font").is_some() {
        return Some("font-family");
    }
    if let Some(value) = value_of(utility, "ring") {
        return Some(if value.is_empty() || value == "inset" || value.parse::<u8>().is_ok() {
            "ring-width"
        } else if value.starts_with("offset") {
            "ring-offset"
        } else {
            "ring-color"
        });
    }
    None
}

/// Returns the value after `root-`, or an empty value when the utility is the bare root.
fn value_of<'a>(utility: &'a str, root: &str) -> Option<&'a str> {
    if utility == root {
        return Some("");
    }
    utility.strip_prefix(root)?.strip_prefix('-')
}

fn is_arbitrary_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|inner| inner.chars().next())
        .is_some_and(|first| first.is_ascii_digit() || first == '.')
}

fn is_border_width(value: &str) -> bool {
    value.is_empty()
        || value.chars().all(|ch| ch.is_ascii_digit())
        || is_arbitrary_length(value)
}

fn overridden_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "rounded" => &["rounded-t", "rounded-r", "rounded-b", "rounded-l"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

/// Join class lists, dropping earlier classes overridden by later ones.
///
/// Empty parts are skipped, so conditional classes can be passed as `""`.
#[must_use]
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = parts
        .into_iter()
        .flat_map(|part| part.split_whitespace())
        .collect();
    let mut claimed = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens.into_iter().rev() {
        let parsed = ParsedClass::parse(token);
        let Some(group) = parsed.group() else {
            if claimed.insert(format!("raw:{token}")) {
                kept.push(token);
            }
            continue;
        };
        let key = parsed.key(group);
        if claimed.contains(&key) {
            continue;
        }
        for overridden in overridden_groups(group) {
            claimed.insert(parsed.key(overridden));
        }
        claimed.insert(key);
        kept.push(token);
    }
    kept.reverse();
    kept.join(" ")
}

/// Utilities that apply at `width`, with variant prefixes stripped.
///
/// Only unprefixed and responsive-prefixed classes take part; per utility group the
/// class with the widest satisfied breakpoint wins, later classes winning ties.
#[must_use]
pub fn resolve_at_width(classes: &str, width: u16) -> Vec<&str> {
    let mut slots: Vec<(String, u16, &str)> = Vec::new();
    for token in classes.split_whitespace() {
        let parsed = ParsedClass::parse(token);
        let mut threshold = 0u16;
        let mut responsive_only = true;
        for variant in &parsed.variants {
            match breakpoints::by_variant(variant) {
                Some(bp) => threshold = threshold.max(bp.min_width),
                None => responsive_only = false,
            }
        }
        if !responsive_only || threshold > width {
            continue;
        }
        let key = parsed.group().map_or_else(
            || format!("raw:{}", parsed.written),
            |group| format!("{}{group}", if parsed.important { "!" } else { "" }),
        );
        match slots.iter().position(|(existing, _, _)| *existing == key) {
            Some(idx) if threshold >= slots[idx].1 => {
                slots[idx].1 = threshold;
                slots[idx].2 = parsed.written;
            }
            Some(_) => {}
            None => slots.push((key, threshold, parsed.written)),
        }
    }
    slots.into_iter().map(|(_, _, utility)| utility).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_classes_override_same_group() {
        assert_eq!(
            merge_classes(["p-2 bg-red-500", "bg-blue-500"]),
            "p-2 bg-blue-500"
        );
        assert_eq!(
            merge_classes(["-translate-x-full", "translate-x-0"]),
            "translate-x-0"
        );
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(merge_classes(["w-full lg:w-20", "w-16"]), "lg:w-20 w-16");
        assert_eq!(
            merge_classes(["hover:lg:bg-gray-600", "lg:hover:bg-gray-700"]),
            "lg:hover:bg-gray-700"
        );
        assert_eq!(merge_classes(["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn shorthand_padding_overrides_axis_padding() {
        assert_eq!(merge_classes(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge_classes(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge_classes(["mt-4 mx-2", "m-0"]), "m-0");
    }

    #[test]
    fn text_size_and_color_are_separate_groups() {
        assert_eq!(
            merge_classes(["text-[30px] text-[#fcfcfc]", "text-lg"]),
            "text-[#fcfcfc] text-lg"
        );
        assert_eq!(
            merge_classes(["text-left text-sm", "text-center"]),
            "text-sm text-center"
        );
    }

    #[test]
    fn unknown_classes_are_kept_and_empty_parts_skipped() {
        assert_eq!(merge_classes(["foo", "", "foo bar"]), "foo bar");
        assert_eq!(merge_classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn ring_width_and_color_do_not_conflict() {
        assert_eq!(
            merge_classes(["focus:ring-2 focus:ring-gray-400", "focus:ring-4"]),
            "focus:ring-gray-400 focus:ring-4"
        );
    }

    #[test]
    fn shadow_size_and_color_do_not_conflict() {
        assert_eq!(
            merge_classes(["shadow-lg", "shadow-red-500"]),
            "shadow-lg shadow-red-500"
        );
        assert_eq!(merge_classes(["shadow shadow-black", "shadow-none"]), "shadow-black shadow-none");
    }

    #[test]
    fn border_width_conflicts_resolve_to_the_later_class() {
        assert_eq!(merge_classes(["border-2", "border-4"]), "border-4");
        assert_eq!(
            merge_classes(["border border-gray-600", "border-red-500"]),
            "border border-red-500"
        );
        assert_eq!(merge_classes(["border-t-4 border-l-2", "border-2"]), "border-2");
        assert_eq!(merge_classes(["border-2", "border-t-4"]), "border-2 border-t-4");
        assert_eq!(
            merge_classes(["border-solid border-2", "border-dashed"]),
            "border-2 border-dashed"
        );
    }

    #[test]
    fn resolution_picks_widest_satisfied_breakpoint() {
        assert_eq!(resolve_at_width("block lg:hidden", 500), vec!["block"]);
        assert_eq!(resolve_at_width("block lg:hidden", 1024), vec!["hidden"]);
        assert_eq!(
            resolve_at_width("w-full sm:w-1/2 lg:w-20", 800),
            vec!["w-1/2"]
        );
    }

    #[test]
    fn resolution_ignores_state_variants() {
        assert_eq!(
            resolve_at_width("bg-red-500 hover:bg-gray-600 focus:outline-none", 320),
            vec!["bg-red-500"]
        );
    }
}
