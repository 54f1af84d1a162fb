//! Responsive breakpoint definitions shared with the Tailwind config.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Variant prefix used in class names (`xs` is the unprefixed base).
    pub name: &'static str,
    /// Inclusive minimum viewport width in CSS pixels.
    pub min_width: u16,
    /// Inclusive maximum viewport width, `None` for the widest tier.
    pub max_width: Option<u16>,
}

/// Base tier below the first Tailwind breakpoint.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(639),
};
/// `sm:` tier.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 640,
    max_width: Some(767),
};
/// `md:` tier.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// `lg:` tier.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: Some(1279),
};
/// `xl:` tier.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1280,
    max_width: Some(1535),
};
/// `2xl:` tier.
pub const XXL: Breakpoint = Breakpoint {
    name: "2xl",
    min_width: 1536,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 6] = [XS, SM, MD, LG, XL, XXL];

/// Width at which the sidebar switches from the off-canvas drawer to a static column.
pub const SIDEBAR_DESKTOP: Breakpoint = LG;

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XXL)
}

/// Look up a responsive class prefix (`sm`, `md`, `lg`, `xl`, `2xl`).
///
/// `xs` is not a Tailwind variant, so it is not returned here.
#[must_use]
pub fn by_variant(variant: &str) -> Option<Breakpoint> {
    BREAKPOINTS
        .iter()
        .copied()
        .skip(1)
        .find(|bp| bp.name == variant)
}

/// Whether the sidebar renders as a static desktop column at this width.
#[must_use]
pub const fn is_desktop(width: u16) -> bool {
    width >= SIDEBAR_DESKTOP.min_width
}
