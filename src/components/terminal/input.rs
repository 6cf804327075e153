//! Terminal input with a ghost-text completion hint.
//!
//! Submission, history replay and Tab completion arrive through the
//! page-wide key listener; this component only mirrors the input buffer.

use leptos::{ev, prelude::*};
use termfolio_core::config::USER_NAME;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::utils::dom::SHELL_INPUT_ID;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

#[component]
pub fn Input() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let value = Memo::new(move |_| ctx.session.with(|s| s.input().to_string()));
    let hint = Memo::new(move |_| ctx.session.with(|s| s.input_hint()));

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    // Replayed history lands with the cursor at the end.
    Effect::new(move || {
        value.track();
        move_cursor_to_end();
    });

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.update(|s| s.set_input(input.value()));
    };

    // ArrowRight at the end of the line accepts the hint.
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() != "ArrowRight" {
            return;
        }
        let Some(suffix) = hint.get_untracked() else { return };
        let at_end = input_ref.get().is_some_and(|input| {
            let pos = input.selection_start().ok().flatten().unwrap_or(0) as usize;
            pos == input.value().len()
        });
        if at_end {
            ev.prevent_default();
            let completed = format!("{}{}", value.get_untracked(), suffix);
            ctx.update(|s| s.set_input(completed));
        }
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{format!("{}@{}:~", USER_NAME, APP_NAME)}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    // Ghost text overlay (shows input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || value.get()}</span>
                        <span class=css::ghostHint>{move || hint.get().unwrap_or_default()}</span>
                    </div>
                    <input
                        node_ref=input_ref
                        id=SHELL_INPUT_ID
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        aria-label="Terminal input"
                        prop:value=move || value.get()
                        on:input=handle_input
                        on:keydown=handle_keydown
                        on:focus=move |_| ctx.update(|s| s.shell_focused())
                    />
                </div>
            </div>
        </div>
    }
}
