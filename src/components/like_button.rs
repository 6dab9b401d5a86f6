//! Like Button
//!
//! Optimistic like control. Disabled for logged-out visitors, so no
//! request is ever issued without a session.

use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn LikeButton(
    #[prop(into)] liked: Signal<bool>,
    #[prop(into)] count: Signal<i64>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    view! {
        <button
            class=move || if liked.get() { "like-btn liked" } else { "like-btn" }
            disabled=move || !session.is_logged_in()
            title=move || {
            if session.is_logged_in() { "".to_string() } else { "Log in to like".to_string() }
            }
            on:click=move |ev| {
                ev.stop_propagation();
                if session.is_logged_in() {
                    on_toggle.run(());
                }
            }
        >
            <span class="like-heart">{move || if liked.get() { "♥" } else { "♡" }}</span>
            <span class="like-count">{move || count.get()}</span>
        </button>
    }
}
