use leptos::prelude::*;
use termfolio_core::{OutputLine, Style};
use termfolio_core::config::USER_NAME;

use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a line style
fn style_class(style: Style) -> &'static str {
    match style {
        Style::Plain | Style::Prompt => css::textFg,
        Style::Info => css::textYellow,
        Style::Success => css::textGreen,
        Style::Error => css::textRed,
        Style::Warning => css::textOrange,
        Style::Comment => css::textDim,
        Style::Highlight => css::textCyan,
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.style {
        Style::Prompt => view! {
            <div class=css::command>
                <span class=format!("{} glow", css::textGreen)>
                    {format!("{}@{}:~", USER_NAME, APP_NAME)}
                </span>
                <span class=css::textFg>{line.text}</span>
            </div>
        }
        .into_any(),
        _ if line.text.is_empty() => view! { <div class=css::lineEmpty></div> }.into_any(),
        style => view! {
            <div class=format!("{} {}", css::line, style_class(style))>{line.text}</div>
        }
        .into_any(),
    }
}
