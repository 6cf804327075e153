//! Status bar component.
//!
//! Shows the active section, the navigation mode with its key hints, and
//! the local time.

use leptos::prelude::*;
use leptos_icons::Icon;
use termfolio_core::NavigationMode;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_VERSION;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Section, mode, key hints, version, clock |
/// | Mobile (< 768px) | Section and clock |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let section = Signal::derive(move || ctx.session.with(|s| s.active_section().to_string()));
    let mode = Memo::new(move |_| ctx.session.with(|s| s.mode()));
    let mode_label = move || match mode.get() {
        NavigationMode::Files => "FILES",
        NavigationMode::Content => "CONTENT",
    };
    let key_hints = move || match mode.get() {
        NavigationMode::Files => "↑↓ select · Enter open · →/Tab content · ` terminal",
        NavigationMode::Content => "↑↓←→ move · Enter activate · Esc files · Tab terminal",
    };

    view! {
        <footer class=css::bar>
            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelIcon><Icon icon=ic::FILE_TEXT /></span>
                    <span class=css::value>{section}</span>
                </span>
                <span class=css::mode>{mode_label}</span>
                <span class=css::hints>{key_hints}</span>
            </div>
            <div class=css::section>
                <span class=css::hints>{format!("v{}", APP_VERSION)}</span>
                <span class=css::labelCyan>
                    <span class=css::labelIcon><Icon icon=ic::CLOCK /></span>
                    <span class=css::value>{move || ctx.clock_text.get()}</span>
                </span>
            </div>
        </footer>
    }
}
