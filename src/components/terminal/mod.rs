//! Terminal panel: output log and command input.

mod input;
mod output;

use leptos::prelude::*;

use crate::app::AppContext;

use input::Input;
use output::Output;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line in view.
    let line_count = Memo::new(move |_| ctx.session.with(|s| s.output().len()));
    Effect::new(move || {
        line_count.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div class=css::terminal>
            <div class=css::output node_ref=output_ref>
                <For
                    each=move || ctx.session.with(|s| s.output().entries().to_vec())
                    key=|entry| entry.id
                    let:entry
                >
                    <Output line=entry.line />
                </For>
            </div>
            <Input />
        </div>
    }
}
