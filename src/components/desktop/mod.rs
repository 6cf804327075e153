//! Desktop surface: the terminal window, its chrome, the desktop icon
//! shown after closing, and the dock.

use leptos::prelude::*;
use leptos_icons::Icon;
use termfolio_core::WindowState;
use termfolio_core::config::USER_NAME;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sections::SectionView;
use crate::components::sidebar::Sidebar;
use crate::components::status::Status;
use crate::components::terminal::Terminal;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/desktop/desktop.module.css");

#[component]
pub fn Desktop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = Memo::new(move |_| ctx.session.with(|s| s.window()));

    let restore = move |_| match state.get_untracked() {
        WindowState::Minimized => ctx.update(|s| s.restore_from_dock()),
        WindowState::Closed => ctx.update(|s| s.reopen_window()),
        WindowState::Normal | WindowState::Maximized => {}
    };

    view! {
        <div class=css::desktop>
            <Show when=move || state.get() == WindowState::Closed>
                <button
                    class=css::desktopIcon
                    title="Double-click to open"
                    on:dblclick=move |_| ctx.update(|s| s.reopen_window())
                >
                    <Icon icon=ic::TERMINAL />
                    <span>"Terminal"</span>
                </button>
            </Show>

            <section class=css::window data-state=move || state.get().class()>
                <TitleBar />
                <div class=css::body>
                    <Sidebar />
                    <div class=css::main>
                        <TabBar />
                        <SectionView />
                        <Terminal />
                    </div>
                </div>
                <Status />
            </section>

            <nav class=css::dock>
                <button
                    class=move || {
                        if state.get().is_visible() {
                            css::dockItem.to_string()
                        } else {
                            format!("{} {}", css::dockItem, css::dockItemHidden)
                        }
                    }
                    title="Terminal"
                    on:click=restore
                >
                    <Icon icon=ic::TERMINAL />
                </button>
            </nav>
        </div>
    }
}

#[component]
fn TitleBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <header class=css::titleBar>
            <div class=css::controls>
                <button
                    class=css::controlClose
                    title="Close (Ctrl+W)"
                    on:click=move |_| ctx.update(|s| s.close_window())
                >
                    <Icon icon=ic::CLOSE />
                </button>
                <button
                    class=css::controlMinimize
                    title="Minimize (Ctrl+M)"
                    on:click=move |_| ctx.update(|s| s.toggle_minimize())
                >
                    <Icon icon=ic::MINIMIZE />
                </button>
                <button
                    class=css::controlMaximize
                    title="Maximize (Ctrl+Shift+M)"
                    on:click=move |_| ctx.update(|s| s.toggle_maximize())
                >
                    <Icon icon=ic::MAXIMIZE />
                </button>
            </div>
            <span class=css::title>{format!("{}@{}: ~/portfolio", USER_NAME, APP_NAME)}</span>
        </header>
    }
}

/// Editor tab for the active section's file.
#[component]
fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let tab_name = move || {
        let section = ctx.session.with(|s| s.active_section());
        ctx.site.with_value(|site| {
            site.files
                .iter()
                .find(|f| f.section == section)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| section.to_string())
        })
    };

    view! {
        <div class=css::tabBar>
            <div class=css::tab>
                <Icon icon=ic::FILE_TEXT />
                <span>{tab_name}</span>
                <button
                    class=css::tabClose
                    title="Close tab"
                    on:click=move |_| ctx.update(|s| s.close_tab())
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </div>
    }
}
