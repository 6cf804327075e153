//! Root application module.
//!
//! Contains the App component, the [`AppContext`] holding the session
//! signal, and the glue that applies core [`Effect`]s to the browser.

use gloo_timers::callback::{Interval, Timeout};
use leptos::{ev, prelude::*};
use termfolio_core::{Effect, Focus, KeyInput, OutputLine, Section, Session, SessionError};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::components::Desktop;
use crate::config::{BANNER, CLOCK_TICK_MS, SiteConfig};
use crate::utils::{self, BrowserClock, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`. `Copy` because every field is an
/// arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation, shell and output state.
    pub session: RwSignal<Session>,
    /// Site content loaded from `site.toml`.
    pub site: StoredValue<SiteConfig>,
    /// Status bar clock text.
    pub clock_text: RwSignal<String>,
}

impl AppContext {
    pub fn new(site: SiteConfig) -> Result<Self, SessionError> {
        let mut session = Session::new(site.files.clone(), BrowserClock)?;
        session.print(BANNER.lines().map(OutputLine::info));
        session.print([OutputLine::comment(termfolio_core::config::HELP_HINT)]);
        for content in &site.sections {
            session.set_section_items(content.section, content.items.clone());
        }

        Ok(Self {
            session: RwSignal::new(session),
            site: StoredValue::new(site),
            clock_text: RwSignal::new(utils::status_time()),
        })
    }

    /// Mutates the session and applies the effects it returns.
    pub fn dispatch(&self, f: impl FnOnce(&mut Session) -> Vec<Effect>) {
        let effects = self.session.try_update(f).unwrap_or_default();
        self.apply(effects);
    }

    /// Mutates the session where no effects can result.
    pub fn update(&self, f: impl FnOnce(&mut Session)) {
        self.session.update(f);
    }

    pub fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScrollIntoView(index) => dom::scroll_content_into_view(index),
                Effect::ScrollPage(direction) => dom::scroll_page(direction),
                Effect::FollowLink(url) => dom::open_in_new_tab(&url),
                Effect::Trigger(action) => self.trigger(&action),
                Effect::FocusShell => dom::focus_shell_input(),
                Effect::BlurShell => dom::blur_active(),
                Effect::Schedule { delay_ms, line } => {
                    let ctx = *self;
                    Timeout::new(delay_ms, move || ctx.update(|s| s.print([line]))).forget();
                }
            }
        }
    }

    /// Runs a button action from `site.toml`.
    ///
    /// Recognized forms: `section:<id>`, `focus-shell`, `copy:<text>`.
    fn trigger(&self, action: &str) {
        if action == "focus-shell" {
            self.apply(vec![Effect::FocusShell]);
        } else if let Some(id) = action.strip_prefix("section:") {
            match id.parse::<Section>() {
                Ok(section) => self.update(|s| {
                    s.open_section(section);
                }),
                Err(e) => log::warn!("button action: {}", e),
            }
        } else if let Some(text) = action.strip_prefix("copy:") {
            self.copy_to_clipboard(text.to_string());
        } else {
            log::warn!("unknown button action: {}", action);
        }
    }

    fn copy_to_clipboard(&self, text: String) {
        let Some(window) = dom::window() else { return };
        let promise = window.navigator().clipboard().write_text(&text);
        let ctx = *self;
        spawn_local(async move {
            let line = match JsFuture::from(promise).await {
                Ok(_) => OutputLine::success(format!("Copied to clipboard: {}", text)),
                Err(_) => {
                    log::warn!("clipboard write rejected");
                    OutputLine::error("Could not copy to clipboard")
                }
            };
            ctx.update(|s| s.print([line]));
        });
    }
}

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Translates a DOM key event for the core.
fn key_input(ev: &ev::KeyboardEvent) -> KeyInput {
    let focus = if dom::shell_has_focus() {
        Focus::Shell
    } else {
        Focus::Page
    };
    KeyInput::from_dom(&ev.key(), ev.ctrl_key(), ev.shift_key(), focus)
}

/// Routes every key press on the page through the session.
fn setup_keyboard(ctx: AppContext) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        let input = key_input(&ev);
        let outcome = ctx
            .session
            .try_update(|s| s.handle_key(input))
            .unwrap_or_default();
        if outcome.consumed {
            ev.prevent_default();
        }
        ctx.apply(outcome.effects);
    });
    on_cleanup(move || handle.remove());
}

/// Loads the project feed once at startup.
fn setup_project_feed(ctx: AppContext) {
    let url = ctx.site.with_value(|site| site.repos_url());
    spawn_local(async move {
        match utils::fetch_repositories(&url).await {
            Ok(repos) => ctx.dispatch(|s| s.projects_loaded(repos)),
            Err(e) => {
                log::error!("repository fetch failed: {}", e);
                ctx.dispatch(|s| s.projects_failed());
            }
        }
    });
}

fn setup_status_clock(ctx: AppContext) {
    Interval::new(CLOCK_TICK_MS, move || {
        ctx.clock_text.set(utils::status_time());
    })
    .forget();
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// Builds the [`AppContext`] from the bundled site configuration, wires
/// up the global listeners and renders the [`Desktop`].
#[component]
pub fn App() -> impl IntoView {
    let desktop = AppContext::new(SiteConfig::load()).map(|ctx| {
        provide_context(ctx);
        setup_keyboard(ctx);
        setup_project_feed(ctx);
        setup_status_clock(ctx);
        view! { <Desktop /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"The terminal failed to start. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            {desktop}
        </ErrorBoundary>
    }
}
