//! Search Bar
//!
//! Submits the trimmed search text; clearing submits an empty string,
//! which callers treat as returning to browse mode.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        on_submit.run(text.get());
    };

    view! {
        <form class="search-bar" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || disabled.get()>
                "Search"
            </button>
            <Show when=move || !text.get().is_empty()>
                <button
                    type="button"
                    class="clear-btn"
                    on:click=move |_| {
                        set_text.set(String::new());
                        on_submit.run(String::new());
                    }
                >
                    "×"
                </button>
            </Show>
        </form>
    }
}
