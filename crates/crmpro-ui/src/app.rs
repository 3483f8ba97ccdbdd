//! Main application component.

use leptos::prelude::*;

use crate::components::{Sidebar, Topbar, label_for_view};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <AppShell />
    }
}

/// Inner shell wiring the sidebar to the content stage.
#[component]
fn AppShell() -> impl IntoView {
    // The view shown on the content stage; the sidebar only observes it
    let (current_view, set_current_view) = signal("dashboard".to_string());
    // Mobile visibility of the sidebar
    let (sidebar_open, set_sidebar_open) = signal(false);

    let on_navigate = Callback::new(move |view: String| {
        leptos::logging::log!("Navigating to {view}");
        set_current_view.set(view);
    });

    let on_close = Callback::new(move |()| {
        set_sidebar_open.set(false);
    });

    let on_menu_toggle = Callback::new(move |()| {
        set_sidebar_open.update(|open| *open = !*open);
    });

    // Unknown identifiers fall back to the raw view id
    let title = Signal::derive(move || {
        let view = current_view.get();
        match label_for_view(&view) {
            Some(label) => label.to_string(),
            None => view,
        }
    });

    view! {
        <div class="app-layout">
            <Sidebar
                is_open=sidebar_open
                on_close=on_close
                current_view=current_view
                on_navigate=on_navigate
            />
            <div class="app-main">
                <Topbar title=title on_menu_toggle=on_menu_toggle />
                <main class="app-content">
                    <ViewStage title=title current_view=current_view />
                </main>
            </div>
        </div>
    }
}

/// Placeholder stage for the active view.
///
/// The real product mounts its view router here; the shell only needs
/// something for the sidebar to drive.
#[component]
fn ViewStage(
    /// Resolved display title.
    #[prop(into)]
    title: Signal<String>,
    /// Raw view identifier.
    #[prop(into)]
    current_view: Signal<String>,
) -> impl IntoView {
    view! {
        <section class="view-stage">
            <h2 class="view-stage-title">{move || title.get()}</h2>
            <p class="view-stage-id">{move || current_view.get()}</p>
        </section>
    }
}
