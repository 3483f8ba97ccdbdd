//! Declarative menu configuration for the sidebar.
//!
//! The hierarchy below is the single source of truth for the product's
//! navigation: an ordered sequence of leaves and categories, fixed at build
//! time. Changing what appears in the sidebar means editing this structure.

use crate::types::{Icon, NavCategory, NavLeaf, NavNode};

/// SVG path data for the 24x24 glyphs used across the app.
pub mod icons {
    /// Dashboard grid.
    pub const DASHBOARD: &str = "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z";
    /// Magnifying glass.
    pub const SEARCH: &str = "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z";
    /// Lightning bolt.
    pub const BOLT: &str = "M7 2v11h3v9l7-12h-4l4-8z";
    /// Two-person group.
    pub const USERS: &str = "M16 11c1.66 0 2.99-1.34 2.99-3S17.66 5 16 5c-1.66 0-3 1.34-3 3s1.34 3 3 3zm-8 0c1.66 0 2.99-1.34 2.99-3S9.66 5 8 5C6.34 5 5 6.34 5 8s1.34 3 3 3zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5c0-2.33-4.67-3.5-7-3.5zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5z";
    /// Telephone handset.
    pub const PHONE: &str = "M6.62 10.79c1.44 2.83 3.76 5.14 6.59 6.59l2.2-2.2c.27-.27.67-.36 1.02-.24 1.12.37 2.33.57 3.57.57.55 0 1 .45 1 1V20c0 .55-.45 1-1 1-9.39 0-17-7.61-17-17 0-.55.45-1 1-1h3.5c.55 0 1 .45 1 1 0 1.25.2 2.45.57 3.57.11.35.03.74-.25 1.02l-2.2 2.2z";
    /// Calendar page.
    pub const CALENDAR: &str = "M17 12h-5v5h5v-5zM16 1v2H8V1H6v2H5c-1.11 0-1.99.9-1.99 2L3 19c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2h-1V1h-2zm3 18H5V8h14v11z";
    /// Graduation cap.
    pub const SCHOOL: &str = "M5 13.18v4L12 21l7-3.82v-4L12 17l-7-3.82zM12 3L1 9l11 6 9-4.91V17h2V9L12 3z";
    /// Currency symbol.
    pub const DOLLAR: &str = "M11.8 10.9c-2.27-.59-3-1.2-3-2.15 0-1.09 1.01-1.85 2.7-1.85 1.78 0 2.44.85 2.5 2.1h2.21c-.07-1.72-1.12-3.3-3.21-3.81V3h-3v2.16c-1.94.42-3.5 1.68-3.5 3.61 0 2.31 1.91 3.46 4.7 4.13 2.5.6 3 1.48 3 2.41 0 .69-.49 1.79-2.7 1.79-2.06 0-2.87-.92-2.98-2.1h-2.2c.12 2.19 1.76 3.42 3.68 3.83V21h3v-2.15c1.95-.37 3.5-1.5 3.5-3.55 0-2.84-2.43-3.81-4.7-4.4z";
    /// Bar chart.
    pub const BAR_CHART: &str = "M5 9.2h3V19H5zM10.6 5h2.8v14h-2.8zm5.6 8H19v6h-2.8z";
    /// Gear.
    pub const SETTINGS: &str = "M19.14 12.94c.04-.31.06-.63.06-.94 0-.31-.02-.63-.06-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.04.31-.06.63-.06.94 0 .31.02.63.06.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z";
    /// Envelope.
    pub const MAIL: &str = "M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z";
    /// Funnel rows.
    pub const FILTER: &str = "M10 18h4v-2h-4v2zM3 6v2h18V6H3zm3 7h12v-2H6v2z";
    /// Clipboard sheet.
    pub const CLIPBOARD: &str = "M19 3h-4.18C14.4 1.84 13.3 1 12 1c-1.3 0-2.4.84-2.82 2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm-7 0c.55 0 1 .45 1 1s-.45 1-1 1-1-.45-1-1 .45-1 1-1zm2 14H7v-2h7v2zm3-4H7v-2h10v2zm0-4H7V7h10v2z";
    /// Office building.
    pub const BUILDING: &str = "M12 7V3H2v18h20V7H12zM6 19H4v-2h2v2zm0-4H4v-2h2v2zm0-4H4V9h2v2zm0-4H4V5h2v2zm4 12H8v-2h2v2zm0-4H8v-2h2v2zm0-4H8V9h2v2zm0-4H8V5h2v2zm10 12h-8v-2h2v-2h-2v-2h2v-2h-2V9h8v10zm-2-8h-2v2h2v-2zm0 4h-2v2h2v-2z";
    /// Trophy.
    pub const TROPHY: &str = "M19 5h-2V3H7v2H5c-1.1 0-2 .9-2 2v1c0 2.55 1.92 4.63 4.39 4.94.63 1.5 1.98 2.63 3.61 2.96V19H7v2h10v-2h-4v-3.1c1.63-.33 2.98-1.46 3.61-2.96C19.08 12.63 21 10.55 21 8V7c0-1.1-.9-2-2-2zM5 8V7h2v3.82C5.84 10.4 5 9.3 5 8zm14 0c0 1.3-.84 2.4-2 2.82V7h2v1z";
    /// Three-person group.
    pub const GROUP: &str = "M12 12.75c1.63 0 3.07.39 4.24.9 1.08.48 1.76 1.56 1.76 2.73V18H6v-1.61c0-1.18.68-2.26 1.76-2.73 1.17-.52 2.61-.91 4.24-.91zM4 13c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm1.13 1.1c-.37-.06-.74-.1-1.13-.1-.99 0-1.93.21-2.78.58C.48 14.9 0 15.62 0 16.43V18h4.5v-1.61c0-.83.23-1.61.63-2.29zM20 13c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm4 3.43c0-.81-.48-1.53-1.22-1.85-.85-.37-1.79-.58-2.78-.58-.39 0-.76.04-1.13.1.4.68.63 1.46.63 2.29V18H24v-1.57zM12 6c1.66 0 3 1.34 3 3s-1.34 3-3 3-3-1.34-3-3 1.34-3 3-3z";
    /// Robot head (brand mark).
    pub const BOT: &str = "M20 9V7c0-1.1-.9-2-2-2h-3c0-1.66-1.34-3-3-3S9 3.34 9 5H6c-1.1 0-2 .9-2 2v2c-1.66 0-3 1.34-3 3s1.34 3 3 3v4c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2v-4c1.66 0 3-1.34 3-3s-1.34-3-3-3zM7.5 11.5c0-.83.67-1.5 1.5-1.5s1.5.67 1.5 1.5S9.83 13 9 13s-1.5-.67-1.5-1.5zM16 17H8v-2h8v2zm-1-4c-.83 0-1.5-.67-1.5-1.5S14.17 10 15 10s1.5.67 1.5 1.5S15.83 13 15 13z";
    /// Downward chevron (dropdown indicator).
    pub const CHEVRON_DOWN: &str = "M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6z";
    /// Leftward chevron (collapse).
    pub const CHEVRON_LEFT: &str = "M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z";
    /// Rightward chevron (expand).
    pub const CHEVRON_RIGHT: &str = "M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z";
    /// Close cross.
    pub const CLOSE: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
    /// Hamburger menu.
    pub const MENU: &str = "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z";
}

impl Icon {
    /// SVG path data for this glyph.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => icons::DASHBOARD,
            Self::Search => icons::SEARCH,
            Self::Bolt => icons::BOLT,
            Self::Users => icons::USERS,
            Self::Phone => icons::PHONE,
            Self::Calendar => icons::CALENDAR,
            Self::School => icons::SCHOOL,
            Self::Dollar => icons::DOLLAR,
            Self::BarChart => icons::BAR_CHART,
            Self::Settings => icons::SETTINGS,
            Self::Mail => icons::MAIL,
            Self::Filter => icons::FILTER,
            Self::Clipboard => icons::CLIPBOARD,
            Self::Building => icons::BUILDING,
            Self::Trophy => icons::TROPHY,
            Self::Group => icons::GROUP,
            Self::Bot => icons::BOT,
        }
    }
}

/// The CRM Pro navigation hierarchy, in display order.
static HIERARCHY: &[NavNode] = &[
    NavNode::Leaf(NavLeaf {
        label: "Dashboard",
        icon: Some(Icon::Dashboard),
        view: Some("dashboard"),
    }),
    NavNode::Category(NavCategory {
        key: "prospection",
        label: "Prospection",
        icon: Icon::Search,
        view: None,
        children: &[
            NavLeaf {
                label: "Inbound Lead Gen",
                icon: None,
                view: Some("prospection/inbound"),
            },
            NavLeaf {
                label: "Outbound Lead Gen",
                icon: None,
                view: Some("prospection/outbound"),
            },
            NavLeaf {
                label: "E-mail Marketing",
                icon: Some(Icon::Mail),
                view: Some("prospection/email"),
            },
            NavLeaf {
                label: "Tráfego Pago",
                icon: Some(Icon::Filter),
                view: Some("prospection/paid"),
            },
            NavLeaf {
                label: "Tráfego Orgânico",
                icon: Some(Icon::Filter),
                view: Some("prospection/organic"),
            },
        ],
    }),
    NavNode::Category(NavCategory {
        key: "automations",
        label: "Automations",
        icon: Icon::Bolt,
        view: None,
        children: &[NavLeaf {
            label: "CRM Automation",
            icon: None,
            view: Some("automations/crm"),
        }],
    }),
    NavNode::Leaf(NavLeaf {
        label: "Leads",
        icon: Some(Icon::Users),
        view: Some("leads"),
    }),
    NavNode::Leaf(NavLeaf {
        label: "Calls",
        icon: Some(Icon::Phone),
        view: Some("calls"),
    }),
    NavNode::Category(NavCategory {
        key: "callPlanning",
        label: "Call Planning",
        icon: Icon::Calendar,
        view: None,
        children: &[
            NavLeaf {
                label: "Influenciadores",
                icon: Some(Icon::Group),
                view: Some("callPlanning/influencers"),
            },
            NavLeaf {
                label: "Company Analysis",
                icon: Some(Icon::Building),
                view: Some("callPlanning/companyAnalysis"),
            },
        ],
    }),
    NavNode::Category(NavCategory {
        key: "salesTraining",
        label: "Sales Training",
        icon: Icon::School,
        view: Some("salesTraining"),
        children: &[
            NavLeaf {
                label: "ICP and Persona",
                icon: Some(Icon::Group),
                view: Some("salesTraining/icp"),
            },
            NavLeaf {
                label: "Sales Coach",
                icon: Some(Icon::Trophy),
                view: Some("salesTraining/coach"),
            },
            NavLeaf {
                label: "Sales Script",
                icon: Some(Icon::Clipboard),
                view: Some("salesTraining/script"),
            },
        ],
    }),
    NavNode::Category(NavCategory {
        key: "deals",
        label: "Deals",
        icon: Icon::Dollar,
        view: None,
        children: &[
            NavLeaf {
                label: "Proposals",
                icon: Some(Icon::Clipboard),
                view: Some("deals/proposals"),
            },
            // Conversions predates the deals/ grouping and keeps its
            // standalone view id
            NavLeaf {
                label: "Conversions",
                icon: Some(Icon::Trophy),
                view: Some("conversion"),
            },
        ],
    }),
    NavNode::Leaf(NavLeaf {
        label: "Analytics",
        icon: Some(Icon::BarChart),
        view: Some("analytics"),
    }),
    NavNode::Leaf(NavLeaf {
        label: "Settings",
        icon: Some(Icon::Settings),
        view: Some("settings"),
    }),
];

/// The ordered navigation hierarchy consumed by the sidebar.
#[must_use]
pub fn navigation_hierarchy() -> &'static [NavNode] {
    HIERARCHY
}

/// Display label for a view identifier, if the hierarchy knows it.
///
/// Category default views resolve to the category label.
#[must_use]
pub fn label_for_view(view: &str) -> Option<&'static str> {
    for node in HIERARCHY {
        match node {
            NavNode::Leaf(leaf) => {
                if leaf.view == Some(view) {
                    return Some(leaf.label);
                }
            }
            NavNode::Category(category) => {
                if category.view == Some(view) {
                    return Some(category.label);
                }
                for child in category.children {
                    if child.view == Some(view) {
                        return Some(child.label);
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_icons_are_valid() {
        // Ensure all icons are non-empty
        assert!(!icons::DASHBOARD.is_empty());
        assert!(!icons::SEARCH.is_empty());
        assert!(!icons::CHEVRON_DOWN.is_empty());
        assert!(!icons::MENU.is_empty());
    }

    #[test]
    fn test_every_icon_id_resolves() {
        let all = [
            Icon::Dashboard,
            Icon::Search,
            Icon::Bolt,
            Icon::Users,
            Icon::Phone,
            Icon::Calendar,
            Icon::School,
            Icon::Dollar,
            Icon::BarChart,
            Icon::Settings,
            Icon::Mail,
            Icon::Filter,
            Icon::Clipboard,
            Icon::Building,
            Icon::Trophy,
            Icon::Group,
            Icon::Bot,
        ];
        for icon in all {
            assert!(!icon.path().is_empty(), "no path data for {icon:?}");
        }
    }

    #[test]
    fn test_category_keys_are_unique() {
        let mut seen = HashSet::new();
        for node in navigation_hierarchy() {
            if let NavNode::Category(category) = node {
                assert!(
                    seen.insert(category.key),
                    "duplicate category key {}",
                    category.key
                );
                assert!(!category.key.is_empty());
            }
        }
    }

    #[test]
    fn test_view_ids_are_unique() {
        let mut seen = HashSet::new();
        let mut check = |view: Option<&'static str>| {
            if let Some(view) = view {
                assert!(seen.insert(view), "duplicate view id {view}");
            }
        };
        for node in navigation_hierarchy() {
            match node {
                NavNode::Leaf(leaf) => check(leaf.view),
                NavNode::Category(category) => {
                    check(category.view);
                    for child in category.children {
                        check(child.view);
                    }
                }
            }
        }
    }

    #[test]
    fn test_categories_have_children() {
        for node in navigation_hierarchy() {
            if let NavNode::Category(category) = node {
                assert!(
                    !category.children.is_empty(),
                    "category {} has no entries",
                    category.key
                );
            }
        }
    }

    #[test]
    fn test_child_views_sit_under_category_key() {
        // The lone exception is Conversions, linked to the standalone
        // "conversion" view
        for node in navigation_hierarchy() {
            if let NavNode::Category(category) = node {
                for child in category.children {
                    let Some(view) = child.view else { continue };
                    if view == "conversion" {
                        continue;
                    }
                    assert!(
                        crate::types::is_view_under(view, category.key),
                        "{view} does not sit under {}",
                        category.key
                    );
                }
            }
        }
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_for_view("dashboard"), Some("Dashboard"));
        assert_eq!(label_for_view("prospection/inbound"), Some("Inbound Lead Gen"));
        assert_eq!(label_for_view("salesTraining"), Some("Sales Training"));
        assert_eq!(label_for_view("conversion"), Some("Conversions"));
        assert_eq!(label_for_view("nope"), None);
    }
}
