//! Collapsible side-navigation panel.
//!
//! Renders the navigation hierarchy, tracks which categories are expanded
//! and whether the panel is in icon-only mode, and forwards navigation
//! intents to the host through callbacks. The host stays in charge of what
//! the current view actually is.

use leptos::ev;
use leptos::prelude::*;

use crate::components::navigation::{icons, navigation_hierarchy};
use crate::types::{below_mobile_breakpoint, NavCategory, NavLeaf, NavNode, OpenCategories};

/// Current viewport width in CSS pixels, if a browser window is available.
fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Whether interactions should get mobile treatment right now.
///
/// Width is sampled at call time; outside a browser this degrades to
/// desktop behavior.
fn viewport_is_mobile() -> bool {
    viewport_width().is_some_and(below_mobile_breakpoint)
}

/// The side-navigation panel.
///
/// Escape, the mobile overlay, the close button, and navigating on a narrow
/// viewport all report back through `on_close`; the panel never hides
/// itself directly.
#[component]

pub fn Sidebar(
    /// Whether the panel is slid into view on narrow viewports.
    #[prop(into)]
    is_open: Signal<bool>,
    /// Invoked when the panel should hide.
    on_close: Callback<()>,
    /// View identifier currently shown by the host application.
    #[prop(into)]
    current_view: Signal<String>,
    /// Invoked with the target view identifier when an entry is clicked.
    on_navigate: Callback<String>,
) -> impl IntoView {
    let (is_collapsed, set_is_collapsed) = signal(false);
    let (open_categories, set_open_categories) = signal(OpenCategories::new());

    // Close on Escape for as long as the panel is mounted
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    // Navigating always notifies the host; on a narrow viewport the panel
    // additionally asks to be hidden
    let select = Callback::new(move |view: String| {
        on_navigate.run(view);
        if viewport_is_mobile() {
            on_close.run(());
        }
    });

    view! {
        // Scrim behind the panel; CSS keeps it off wide viewports
        <Show when=move || is_open.get()>
            <div class="sidebar-overlay" on:click=move |_| on_close.run(())></div>
        </Show>

        <aside
            class="sidebar"
            class:open=move || is_open.get()
            class:collapsed=move || is_collapsed.get()
        >
            <div class="sidebar-header">
                <div class="sidebar-brand">
                    <svg class="sidebar-brand-icon" viewBox="0 0 24 24" width="28" height="28" fill="currentColor">
                        <path d=icons::BOT />
                    </svg>
                    <Show when=move || !is_collapsed.get()>
                        <span class="sidebar-brand-text">"CRM Pro"</span>
                    </Show>
                </div>
                <button
                    class="sidebar-close btn btn-ghost btn-icon"
                    on:click=move |_| on_close.run(())
                    aria-label="Close navigation"
                >
                    <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                        <path d=icons::CLOSE />
                    </svg>
                </button>
            </div>

            <nav class="sidebar-nav">
                {navigation_hierarchy()
                    .iter()
                    .map(|node| match node {
                        NavNode::Leaf(leaf) => view! {
                            <EntryRow
                                leaf=*leaf
                                current_view=current_view
                                collapsed=is_collapsed
                                on_select=select
                            />
                        }
                        .into_any(),
                        NavNode::Category(category) => {
                            let category = *category;
                            let open = Signal::derive(move || {
                                open_categories.get().is_open(category.key)
                            });
                            let on_toggle = Callback::new(move |()| {
                                set_open_categories.update(|categories| categories.toggle(category.key));
                            });
                            view! {
                                <CategoryGroup
                                    category=category
                                    current_view=current_view
                                    collapsed=is_collapsed
                                    open=open
                                    on_toggle=on_toggle
                                    on_select=select
                                />
                            }
                            .into_any()
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <button
                    class="sidebar-collapse btn btn-ghost"
                    on:click=move |_| set_is_collapsed.update(|collapsed| *collapsed = !*collapsed)
                    aria-label=move || {
                        if is_collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                    }
                >
                    <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                        {move || if is_collapsed.get() {
                            view! { <path d=icons::CHEVRON_RIGHT /> }.into_any()
                        } else {
                            view! { <path d=icons::CHEVRON_LEFT /> }.into_any()
                        }}
                    </svg>
                </button>
            </div>
        </aside>
    }
}

/// A single clickable entry, top-level or nested under a category.
#[component]
fn EntryRow(
    /// The entry to render.
    leaf: NavLeaf,
    /// View identifier currently shown by the host.
    #[prop(into)]
    current_view: Signal<String>,
    /// Whether the panel is in icon-only mode.
    #[prop(into)]
    collapsed: Signal<bool>,
    /// Invoked with the entry's view identifier on click.
    on_select: Callback<String>,
    /// Renders with sub-item styling when set.
    #[prop(default = false)]
    nested: bool,
) -> impl IntoView {
    let is_active = move || leaf.is_active(&current_view.get());

    let handle_click = move |_| {
        // Entries without a target view are inert
        if let Some(view) = leaf.view {
            on_select.run(view.to_string());
        }
    };

    view! {
        <button
            class="nav-item"
            class:nav-subitem=nested
            class:active=is_active
            on:click=handle_click
        >
            {leaf.icon.map(|icon| view! {
                <svg class="nav-item-icon" viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                    <path d=icon.path() />
                </svg>
            })}
            <Show when=move || nested || !collapsed.get()>
                <span class="nav-item-label">{leaf.label}</span>
            </Show>
        </button>
    }
}

/// A category header plus its collapsible list of sub-entries.
#[component]
fn CategoryGroup(
    /// The category to render.
    category: NavCategory,
    /// View identifier currently shown by the host.
    #[prop(into)]
    current_view: Signal<String>,
    /// Whether the panel is in icon-only mode.
    #[prop(into)]
    collapsed: Signal<bool>,
    /// Whether this category's sub-list is expanded.
    #[prop(into)]
    open: Signal<bool>,
    /// Invoked when the header is clicked, before any navigation.
    on_toggle: Callback<()>,
    /// Invoked with a view identifier when navigation is requested.
    on_select: Callback<String>,
) -> impl IntoView {
    let is_active_parent =
        move || category.is_active_parent(&current_view.get(), collapsed.get());

    let handle_header_click = move |_| {
        on_toggle.run(());
        // The default view opens only while labels are visible
        if let Some(view) = category.header_click_target(collapsed.get()) {
            on_select.run(view.to_string());
        }
    };

    view! {
        <div class="nav-group">
            <button
                class="nav-item nav-category"
                class:active=is_active_parent
                on:click=handle_header_click
                aria-expanded=move || open.get().to_string()
            >
                <span class="nav-item-main">
                    <svg class="nav-item-icon" viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                        <path d=category.icon.path() />
                    </svg>
                    <Show when=move || !collapsed.get()>
                        <span class="nav-item-label">{category.label}</span>
                    </Show>
                </span>
                // Dropdown indicator disappears in icon-only mode
                <Show when=move || !collapsed.get()>
                    <svg
                        class="nav-item-chevron"
                        class:rotated=move || open.get()
                        viewBox="0 0 24 24"
                        width="18"
                        height="18"
                        fill="currentColor"
                    >
                        <path d=icons::CHEVRON_DOWN />
                    </svg>
                </Show>
            </button>

            <Show when=move || open.get() && !collapsed.get()>
                <div class="nav-sublist">
                    {category
                        .children
                        .iter()
                        .map(|child| view! {
                            <EntryRow
                                leaf=*child
                                current_view=current_view
                                collapsed=collapsed
                                on_select=on_select
                                nested=true
                            />
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_sidebar_compiles() {
        // Compile coverage only - interaction is exercised in the browser
    }
}
