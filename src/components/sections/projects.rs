//! Projects section: repository cards fed by the GitHub API.

use leptos::prelude::*;
use leptos_icons::Icon;
use termfolio_core::{FeedState, Repository};

use super::{css, item_class};
use crate::app::AppContext;
use crate::components::icons as ic;

#[component]
pub fn ProjectsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = Memo::new(move |_| ctx.session.with(|s| s.projects().state()));

    view! {
        <div class=css::page>
            <h1 class=css::title>"projects/"</h1>
            {move || match state.get() {
                FeedState::Loading => view! {
                    <p class=css::status>"Loading repositories..."</p>
                }
                .into_any(),
                FeedState::Failed => view! {
                    <p class=css::statusError>
                        "Unable to load repositories from GitHub. Please try again later."
                    </p>
                }
                .into_any(),
                FeedState::Loaded => view! { <ProjectGrid /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProjectGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let visible = Memo::new(move |_| ctx.session.with(|s| s.projects().visible().to_vec()));
    let load_more = Memo::new(move |_| {
        ctx.session.with(|s| {
            let feed = s.projects();
            feed.has_more().then(|| feed.load_more_label())
        })
    });

    view! {
        <Show
            when=move || !visible.with(|v| v.is_empty())
            fallback=|| view! { <p class=css::status>"No public repositories yet."</p> }
        >
            <div class=css::grid>
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, repo)| view! { <ProjectCard index=index repo=repo /> })
                        .collect_view()
                }}
                {move || {
                    load_more.get().map(|label| {
                        let index = visible.with(|v| v.len());
                        view! {
                            <button
                                class=item_class(ctx, css::loadMore, index)
                                data-content-index=index.to_string()
                                on:click=move |_| ctx.dispatch(|s| s.click_content(index))
                            >
                                {label}
                            </button>
                        }
                    })
                }}
            </div>
        </Show>
    }
}

#[component]
fn ProjectCard(index: usize, repo: Repository) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let tags = repo
        .tags()
        .into_iter()
        .map(|tag| view! { <span class=css::tag>{tag.to_string()}</span> })
        .collect_view();
    let description = repo.description_or_default().to_string();
    let updated = repo.updated_date().to_string();

    view! {
        <div
            class=item_class(ctx, css::card, index)
            role="link"
            data-content-index=index.to_string()
            on:click=move |_| ctx.dispatch(|s| s.click_content(index))
        >
            <h3 class=css::cardTitle>{repo.name}</h3>
            <p class=css::cardDescription>{description}</p>
            <div class=css::tags>{tags}</div>
            <div class=css::cardMeta>
                <span><Icon icon=ic::STAR />{repo.stargazers_count}</span>
                <span><Icon icon=ic::FORK />{repo.forks_count}</span>
                <span><Icon icon=ic::CLOCK />{updated}</span>
            </div>
        </div>
    }
}
