//! File explorer sidebar.
//!
//! Renders the host-supplied file items. The keyboard mark follows the
//! explorer cursor while file mode is active.

use leptos::prelude::*;
use leptos_icons::Icon;
use termfolio_core::{FileItem, NavigationMode};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let files = ctx.site.with_value(|site| site.files.clone());
    let files_mode = move || ctx.session.with(|s| s.mode() == NavigationMode::Files);

    view! {
        <aside
            class=move || {
                if files_mode() {
                    format!("{} {}", css::sidebar, css::focused)
                } else {
                    css::sidebar.to_string()
                }
            }
            aria-label="Explorer"
        >
            <div class=css::heading>"EXPLORER"</div>
            <ul class=css::list role="listbox">
                {files
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| view! { <FileRow index=index item=item /> })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
fn FileRow(index: usize, item: FileItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let section = item.section;
    let is_folder = item.is_folder();

    let row_class = move || {
        ctx.session.with(|s| {
            let mut class = css::row.to_string();
            if s.is_active(section) {
                class.push(' ');
                class.push_str(css::active);
            }
            if s.file_marked(index) {
                class.push(' ');
                class.push_str(css::marked);
            }
            class
        })
    };

    let icon = move || {
        if !is_folder {
            ic::FILE
        } else if ctx.session.with(|s| s.explorer().is_expanded(index)) {
            ic::FOLDER_OPEN
        } else {
            ic::FOLDER
        }
    };

    let label = if is_folder {
        format!("{}/", item.name)
    } else {
        item.name
    };

    view! {
        <li
            class=row_class
            role="option"
            data-file-index=index.to_string()
            on:click=move |_| ctx.update(|s| s.click_file(index))
        >
            <span class=css::icon>{move || view! { <Icon icon=icon() /> }}</span>
            <span class=css::name>{label}</span>
        </li>
    }
}
