//! Shared types for the CRM Pro UI.
//!
//! The navigation data model is pure data: display labels, stable keys and
//! target view identifiers. Icon resolution lives in the component layer so
//! the hierarchy itself stays testable on the native target.

use std::collections::HashSet;

/// Viewport width (CSS pixels) below which the app is considered mobile.
///
/// Sampled synchronously at interaction time, not observed reactively.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Returns true when the given viewport width should get mobile behavior
/// (the sidebar auto-hides after navigating).
#[must_use]
pub fn below_mobile_breakpoint(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// Identifier for a glyph in the icon table.
///
/// Navigation entries reference icons by id; the SVG path data is resolved
/// in `components::navigation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Dashboard grid.
    Dashboard,
    /// Magnifying glass (prospection).
    Search,
    /// Lightning bolt (automations).
    Bolt,
    /// Two-person group (leads).
    Users,
    /// Handset (calls).
    Phone,
    /// Calendar page (call planning).
    Calendar,
    /// Graduation cap (sales training).
    School,
    /// Currency symbol (deals).
    Dollar,
    /// Bar chart (analytics).
    BarChart,
    /// Gear (settings).
    Settings,
    /// Envelope (e-mail marketing).
    Mail,
    /// Funnel rows (traffic filters).
    Filter,
    /// Clipboard sheet (scripts, proposals).
    Clipboard,
    /// Office building (company analysis).
    Building,
    /// Trophy (coach, conversions).
    Trophy,
    /// Three-person group (influencers, personas).
    Group,
    /// Robot head (brand mark).
    Bot,
}

/// A leaf navigation entry mapping to a single view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLeaf {
    /// Display label.
    pub label: &'static str,
    /// Optional glyph shown next to the label.
    pub icon: Option<Icon>,
    /// Target view identifier; a leaf without one is inert.
    pub view: Option<&'static str>,
}

impl NavLeaf {
    /// Whether this leaf matches the host application's current view.
    ///
    /// Leaf matching is exact; prefix conventions apply to categories only.
    #[must_use]
    pub fn is_active(&self, current_view: &str) -> bool {
        self.view == Some(current_view)
    }
}

/// A navigation category grouping leaf entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavCategory {
    /// Stable key, also the view-path prefix for active-parent matching.
    /// Never derived from the display label.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Glyph shown next to the label.
    pub icon: Icon,
    /// Optional default view opened when the header is clicked while the
    /// panel is expanded.
    pub view: Option<&'static str>,
    /// Ordered child entries.
    pub children: &'static [NavLeaf],
}

impl NavCategory {
    /// Whether this category should carry active-parent styling.
    ///
    /// Collapsed mode never highlights a parent: the sub-context that would
    /// justify the highlight is hidden.
    #[must_use]
    pub fn is_active_parent(&self, current_view: &str, panel_collapsed: bool) -> bool {
        !panel_collapsed && is_view_under(current_view, self.key)
    }

    /// The view a header click should navigate to, if any.
    ///
    /// Header clicks always toggle the open flag; they additionally navigate
    /// to the category's default view only while the panel is expanded.
    #[must_use]
    pub const fn header_click_target(&self, panel_collapsed: bool) -> Option<&'static str> {
        if panel_collapsed { None } else { self.view }
    }
}

/// One node of the navigation hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavNode {
    /// A top-level entry with no children.
    Leaf(NavLeaf),
    /// A group of entries that expands and collapses independently of the
    /// panel's own collapse state.
    Category(NavCategory),
}

/// Whether `view` lies under the path `prefix`.
///
/// Views are `/`-segmented identifiers. A match requires either equality or
/// a segment boundary right after the prefix, so `"leads"` covers
/// `"leads/archive"` but never `"leads2"`.
#[must_use]
pub fn is_view_under(view: &str, prefix: &str) -> bool {
    match view.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// The set of currently expanded categories, keyed by stable key.
///
/// Panel-local, reset on remount. Collapsing the panel does not clear it:
/// open flags are remembered while not visibly meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenCategories(HashSet<&'static str>);

impl OpenCategories {
    /// Empty set: every category starts closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the category with this key is expanded.
    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Flip the open flag for one key, leaving all others untouched.
    pub fn toggle(&mut self, key: &'static str) {
        if !self.0.remove(key) {
            self.0.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAF: NavLeaf = NavLeaf {
        label: "Leads",
        icon: Some(Icon::Users),
        view: Some("leads"),
    };

    const CATEGORY: NavCategory = NavCategory {
        key: "prospection",
        label: "Prospection",
        icon: Icon::Search,
        view: None,
        children: &[NavLeaf {
            label: "Inbound Lead Gen",
            icon: None,
            view: Some("prospection/inbound"),
        }],
    };

    #[test]
    fn test_leaf_active_is_exact_match() {
        assert!(LEAF.is_active("leads"));
        assert!(!LEAF.is_active("leads2"));
        assert!(!LEAF.is_active("leads/archive"));
        assert!(!LEAF.is_active("lead"));
    }

    #[test]
    fn test_leaf_without_view_never_active() {
        let inert = NavLeaf {
            label: "Placeholder",
            icon: None,
            view: None,
        };
        assert!(!inert.is_active("placeholder"));
        assert!(!inert.is_active(""));
    }

    #[test]
    fn test_view_under_requires_segment_boundary() {
        assert!(is_view_under("prospection", "prospection"));
        assert!(is_view_under("prospection/inbound", "prospection"));
        assert!(is_view_under("prospection/inbound/detail", "prospection"));
        // "lead" must not prefix-match "leads", nor "leads" match "leads2"
        assert!(!is_view_under("leads", "lead"));
        assert!(!is_view_under("leads2", "leads"));
        assert!(!is_view_under("dashboard", "prospection"));
    }

    #[test]
    fn test_active_parent_suppressed_while_collapsed() {
        assert!(CATEGORY.is_active_parent("prospection/inbound", false));
        assert!(!CATEGORY.is_active_parent("prospection/inbound", true));
        assert!(!CATEGORY.is_active_parent("leads", false));
    }

    #[test]
    fn test_header_click_navigates_only_while_expanded() {
        let with_default = NavCategory {
            key: "salesTraining",
            label: "Sales Training",
            icon: Icon::School,
            view: Some("salesTraining"),
            children: &[],
        };
        assert_eq!(
            with_default.header_click_target(false),
            Some("salesTraining")
        );
        assert_eq!(with_default.header_click_target(true), None);
        // No default view: header clicks only ever toggle
        assert_eq!(CATEGORY.header_click_target(false), None);
        assert_eq!(CATEGORY.header_click_target(true), None);
    }

    #[test]
    fn test_toggle_flips_exactly_one_key() {
        let mut open = OpenCategories::new();
        assert!(!open.is_open("prospection"));

        open.toggle("prospection");
        assert!(open.is_open("prospection"));
        assert!(!open.is_open("deals"));

        open.toggle("deals");
        assert!(open.is_open("prospection"));
        assert!(open.is_open("deals"));

        open.toggle("prospection");
        assert!(!open.is_open("prospection"));
        assert!(open.is_open("deals"));
    }

    #[test]
    fn test_toggle_twice_restores_initial_state() {
        let mut open = OpenCategories::new();
        let initial = open.clone();
        open.toggle("automations");
        open.toggle("automations");
        assert_eq!(open, initial);
    }

    #[test]
    fn test_mobile_breakpoint_threshold() {
        assert!(below_mobile_breakpoint(600.0));
        assert!(below_mobile_breakpoint(767.9));
        assert!(!below_mobile_breakpoint(768.0));
        assert!(!below_mobile_breakpoint(1024.0));
    }
}
