//! CRM Pro UI - Leptos-based frontend.
//!
//! This crate provides the dashboard shell and the collapsible hierarchical
//! side-navigation panel for the CRM Pro application.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod components;
pub mod theme;
pub mod types;

pub use app::App;
pub use types::{Icon, NavCategory, NavLeaf, NavNode, OpenCategories};
