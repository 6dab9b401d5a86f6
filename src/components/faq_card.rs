//! FAQ Card
//!
//! Collapsible question/answer card. A card can start expanded when
//! the list was deep-linked with `openId`.

use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::models::Faq;

#[component]
pub fn FaqCard(faq: Faq, #[prop(optional)] initially_open: bool) -> impl IntoView {
    let (open, set_open) = signal(initially_open);

    view! {
        <article class="faq-card">
            <button class="faq-question" on:click=move |_| set_open.update(|o| *o = !*o)>
                <span class="faq-toggle">{move || if open.get() { "▾" } else { "▸" }}</span>
                {faq.question.clone()}
            </button>
            <Show when=move || open.get()>
                <div class="faq-answer" inner_html=render_markdown(&faq.answer)></div>
                <p class="faq-meta">
                    "Answered by " {faq.author_username.clone()} " on " {faq.created_at.clone()}
                </p>
            </Show>
        </article>
    }
}
