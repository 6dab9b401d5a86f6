//! Sort Select
//!
//! Order dropdown shared by the list views. Disabled while the list's
//! page request is in flight so an order change is never dropped by
//! the single-flight guard.

use leptos::prelude::*;

#[component]
pub fn SortSelect(
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] current: Signal<&'static str>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|(key, label)| {
                    view! {
                        <option value=*key selected=move || current.get() == *key>
                            {*label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
