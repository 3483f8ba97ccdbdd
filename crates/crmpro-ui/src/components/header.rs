//! Topbar component.

use leptos::prelude::*;

use crate::components::navigation::icons;

/// Application topbar with the mobile menu toggle and current view title.
#[component]

pub fn Topbar(
    /// Title of the view being shown.
    #[prop(into)]
    title: Signal<String>,
    /// Invoked when the menu button is pressed.
    on_menu_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="topbar">
            <button
                class="topbar-menu-toggle btn btn-ghost btn-icon"
                on:click=move |_| on_menu_toggle.run(())
                aria-label="Toggle navigation"
            >
                <svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
                    <path d=icons::MENU />
                </svg>
            </button>
            <h1 class="topbar-title">{move || title.get()}</h1>
        </header>
    }
}
