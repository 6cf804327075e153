//! Content views for the five sections.
//!
//! Every navigable element carries `data-content-index` in the same order
//! as the content items registered with the session, so keyboard marks,
//! clicks and scroll-into-view agree on positions.

mod projects;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use termfolio_core::{ContentItem, ContentRole, NavigationMode, Section};

use crate::app::AppContext;
use crate::components::icons as ic;

pub use projects::ProjectsView;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Class list for a navigable element, with the keyboard mark applied.
pub(crate) fn item_class(
    ctx: AppContext,
    base: &'static str,
    index: usize,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if ctx.session.with(|s| s.content_marked(index)) {
            format!("{} {}", base, css::marked)
        } else {
            base.to_string()
        }
    }
}

#[component]
pub fn SectionView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let section = Memo::new(move |_| ctx.session.with(|s| s.active_section()));
    let content_mode =
        Memo::new(move |_| ctx.session.with(|s| s.mode() == NavigationMode::Content));

    view! {
        <article
            class=move || {
                if content_mode.get() {
                    format!("{} {}", css::view, css::focused)
                } else {
                    css::view.to_string()
                }
            }
            data-section=move || section.get().id()
        >
            {move || match section.get() {
                Section::Projects => view! { <ProjectsView /> }.into_any(),
                other => view! { <StaticSection section=other /> }.into_any(),
            }}
        </article>
    }
}

/// A section described entirely by `site.toml`.
#[component]
fn StaticSection(section: Section) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let Some(content) = ctx.site.with_value(|site| site.section(section).cloned()) else {
        return view! { <p class=css::empty>{format!("{} is empty", section)}</p> }.into_any();
    };

    let body = content
        .body
        .into_iter()
        .map(|line| {
            if let Some(heading) = line.strip_prefix("# ") {
                let heading = heading.to_string();
                view! { <h2 class=css::heading>{heading}</h2> }.into_any()
            } else {
                view! { <p class=css::paragraph>{line}</p> }.into_any()
            }
        })
        .collect_view();

    let items = content
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| view! { <SectionItem index=index item=item /> })
        .collect_view();

    view! {
        <div class=css::page>
            <h1 class=css::title>{content.title}</h1>
            {body}
            <div class=css::items>{items}</div>
        </div>
    }
    .into_any()
}

#[component]
fn SectionItem(index: usize, item: ContentItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let activate = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(|s| s.click_content(index));
    };

    match item.role {
        ContentRole::Link => view! {
            <a
                class=item_class(ctx, css::link, index)
                href=item.target.unwrap_or_default()
                target="_blank"
                rel="noopener noreferrer"
                data-content-index=index.to_string()
                on:click=activate
            >
                <span>{item.label}</span>
                <Icon icon=ic::EXTERNAL_LINK />
            </a>
        }
        .into_any(),
        _ => view! {
            <button
                class=item_class(ctx, css::button, index)
                data-content-index=index.to_string()
                on:click=activate
            >
                {item.label}
            </button>
        }
        .into_any(),
    }
}
