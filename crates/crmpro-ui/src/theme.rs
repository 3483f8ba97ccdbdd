//! Theme configuration for CRM Pro.
//!
//! Light surfaces with an indigo accent, tuned for long-session dashboard
//! use: system fonts, restrained shadows, fast transitions.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PAGE: &str = "#f3f4f6";
        /// Panel/card surfaces.
        pub const SURFACE: &str = "#ffffff";
        /// Hover state for interactive rows.
        pub const HOVER: &str = "#f9fafb";
        /// Active navigation entry.
        pub const ACTIVE: &str = "#eef2ff";
    }

    /// Text colors.
    pub mod text {
        /// Primary text.
        pub const PRIMARY: &str = "#111827";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#4b5563";
        /// Tertiary text for de-emphasized rows.
        pub const MUTED: &str = "#9ca3af";
        /// Text on the active navigation entry.
        pub const ACTIVE: &str = "#4f46e5";
    }

    /// Accent colors.
    pub mod accent {
        /// Primary accent - indigo.
        pub const PRIMARY: &str = "#4f46e5";
        /// Darker indigo for hover states.
        pub const PRIMARY_DIM: &str = "#4338ca";
    }

    /// Border colors.
    pub mod border {
        /// Default hairline border.
        pub const DEFAULT: &str = "#e5e7eb";
        /// Sub-list guide line.
        pub const GUIDE: &str = "#d1d5db";
    }

    /// Overlay/shadow colors.
    pub mod shadow {
        /// Mobile overlay behind the sidebar.
        pub const OVERLAY: &str = "rgba(75, 85, 99, 0.75)";
        /// Soft shadow for floating panels.
        pub const SOFT: &str = "0 4px 12px rgba(17, 24, 39, 0.08)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family - system stack.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Small text (sub-items, identifiers).
        pub const SM: &str = "0.875rem";
        /// Base text.
        pub const BASE: &str = "1rem";
        /// Large text (brand, section titles).
        pub const LG: &str = "1.25rem";
        /// Heading.
        pub const HEADING: &str = "1.5rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Extra small spacing.
    pub const XS: &str = "0.25rem";
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.5rem";
}

/// Border radius values.
pub mod radius {
    /// Small radius for rows and buttons.
    pub const SM: &str = "0.375rem";
    /// Medium radius for panels.
    pub const MD: &str = "0.625rem";
}

/// Sidebar layout metrics.
pub mod layout {
    /// Expanded sidebar width.
    pub const SIDEBAR_WIDTH: &str = "16rem";
    /// Icon-only sidebar width.
    pub const SIDEBAR_WIDTH_COLLAPSED: &str = "5rem";
    /// Topbar height.
    pub const TOPBAR_HEIGHT: &str = "4rem";
    /// Mobile breakpoint; keep in sync with `types::MOBILE_BREAKPOINT_PX`.
    pub const MOBILE_BREAKPOINT: &str = "768px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Fast transition for interactive elements.
    pub const FAST: &str = "0.15s ease-in-out";
    /// Smooth transition for panel resizing and sliding.
    pub const SMOOTH: &str = "0.3s ease-in-out";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-page: {bg_page};
  --bg-surface: {bg_surface};
  --bg-hover: {bg_hover};
  --bg-active: {bg_active};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-muted: {text_muted};
  --text-active: {text_active};

  /* Accent colors */
  --accent-primary: {accent_primary};
  --accent-primary-dim: {accent_primary_dim};

  /* Border colors */
  --border-default: {border_default};
  --border-guide: {border_guide};

  /* Overlay/shadow */
  --overlay-bg: {overlay_bg};
  --shadow-soft: {shadow_soft};

  /* Typography */
  --font-family: {font_family};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-lg: {font_lg};
  --font-size-heading: {font_heading};

  /* Spacing */
  --spacing-xs: {spacing_xs};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};

  /* Sidebar layout */
  --sidebar-width: {sidebar_width};
  --sidebar-width-collapsed: {sidebar_width_collapsed};
  --topbar-height: {topbar_height};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-smooth: {transition_smooth};
}}",
        bg_page = colors::background::PAGE,
        bg_surface = colors::background::SURFACE,
        bg_hover = colors::background::HOVER,
        bg_active = colors::background::ACTIVE,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_muted = colors::text::MUTED,
        text_active = colors::text::ACTIVE,
        accent_primary = colors::accent::PRIMARY,
        accent_primary_dim = colors::accent::PRIMARY_DIM,
        border_default = colors::border::DEFAULT,
        border_guide = colors::border::GUIDE,
        overlay_bg = colors::shadow::OVERLAY,
        shadow_soft = colors::shadow::SOFT,
        font_family = typography::FONT_FAMILY,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        font_heading = typography::sizes::HEADING,
        spacing_xs = spacing::XS,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        sidebar_width = layout::SIDEBAR_WIDTH,
        sidebar_width_collapsed = layout::SIDEBAR_WIDTH_COLLAPSED,
        topbar_height = layout::TOPBAR_HEIGHT,
        transition_fast = animation::FAST,
        transition_smooth = animation::SMOOTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-surface"));
        assert!(css.contains("--accent-primary"));
        assert!(css.contains("--sidebar-width"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::SURFACE.starts_with('#'));
        assert!(colors::accent::PRIMARY.starts_with('#'));
    }

    #[test]
    fn test_breakpoint_matches_types() {
        let css_px: f64 = layout::MOBILE_BREAKPOINT
            .trim_end_matches("px")
            .parse()
            .unwrap_or(0.0);
        assert!((css_px - crate::types::MOBILE_BREAKPOINT_PX).abs() < f64::EPSILON);
    }
}
