//! Design tokens for the TaskFlow dashboard, emitted as CSS custom properties.

/// A single CSS custom property with its default value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeToken {
    /// Custom property name, including the leading `--`.
    pub name: &'static str,
    /// CSS value assigned on the document root.
    pub value: &'static str,
}

const fn token(name: &'static str, value: &'static str) -> ThemeToken {
    ThemeToken { name, value }
}

/// Page and surface colors.
pub const COLORS: [ThemeToken; 5] = [
    token("--global-bg-primary", "#171717"),
    token("--global-bg-secondary", "#323232"),
    token("--global-text-primary", "#fcfcfc"),
    token("--sidebar-bg", "#323232"),
    token("--menu-text-color", "#fcfcfc"),
];

/// Typography used by menu labels.
pub const TYPOGRAPHY: [ThemeToken; 4] = [
    token("--font-size-lg", "30px"),
    token("--font-weight-normal", "400"),
    token("--line-height-lg", "37px"),
    token("--font-family-primary", "'Inter', sans-serif"),
];

/// Spacing scale, smallest first.
pub const SPACING: [ThemeToken; 7] = [
    token("--spacing-xs", "4px"),
    token("--spacing-sm", "6px"),
    token("--spacing-md", "10px"),
    token("--spacing-lg", "20px"),
    token("--spacing-xl", "30px"),
    token("--spacing-2xl", "40px"),
    token("--spacing-3xl", "46px"),
];

/// Layout widths referenced by the Tailwind `width` extension.
pub const WIDTHS: [ThemeToken; 4] = [
    token("--width-sidebar", "36%"),
    token("--width-auto", "auto"),
    token("--width-flex", "1"),
    token("--width-full", "100%"),
];

/// Every token in emission order.
pub fn all_tokens() -> impl Iterator<Item = ThemeToken> {
    COLORS
        .into_iter()
        .chain(TYPOGRAPHY)
        .chain(SPACING)
        .chain(WIDTHS)
}

/// Render the tokens as a `:root` rule for the document head.
#[must_use]
pub fn root_rule() -> String {
    let body: String = all_tokens()
        .map(|token| format!("{}:{};", token.name, token.value))
        .collect();
    format!(":root{{{body}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn token_names_are_unique_custom_properties() {
        let mut seen = HashSet::new();
        for token in all_tokens() {
            assert!(token.name.starts_with("--"), "{}", token.name);
            assert!(seen.insert(token.name), "duplicate {}", token.name);
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn root_rule_contains_sidebar_background() {
        let rule = root_rule();
        assert!(rule.starts_with(":root{"));
        assert!(rule.contains("--sidebar-bg:#323232;"));
        assert!(rule.ends_with('}'));
    }
}
