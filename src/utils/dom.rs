//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Element id of the shell's text input.
pub const SHELL_INPUT_ID: &str = "shell-input";

/// Vertical distance of one page scroll step, in pixels.
const SCROLL_STEP_PX: f64 = 60.0;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

#[inline]
pub fn focus_shell_input() {
    focus_element(&format!("#{}", SHELL_INPUT_ID));
}

/// Remove focus from whatever element holds it.
pub fn blur_active() {
    if let Some(document) = document()
        && let Some(element) = document.active_element()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        let _ = html_element.blur();
    }
}

/// Whether the shell input currently has keyboard focus.
pub fn shell_has_focus() -> bool {
    document()
        .and_then(|d| d.active_element())
        .is_some_and(|el| el.id() == SHELL_INPUT_ID)
}

/// Smooth-scroll the content item with `data-content-index="{index}"` to
/// the center of the viewport.
pub fn scroll_content_into_view(index: usize) {
    let selector = format!("[data-content-index=\"{}\"]", index);
    if let Some(document) = document()
        && let Some(element) = document.query_selector(&selector).ok().flatten()
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Scroll the page by one step up (`-1`) or down (`1`).
pub fn scroll_page(direction: i32) {
    if let Some(window) = window() {
        window.scroll_by_with_x_and_y(0.0, SCROLL_STEP_PX * f64::from(direction));
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && window.open_with_url_and_target(url, "_blank").is_err()
    {
        log::warn!("could not open {}", url);
    }
}
