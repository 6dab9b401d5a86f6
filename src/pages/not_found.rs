//! Not Found Page

use leptos::prelude::*;

use crate::routes::{self, Route};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found-page">
            <h2>"Page not found"</h2>
            <p>"The page you were looking for doesn't exist."</p>
            <button on:click=move |_| routes::navigate(&Route::Home)>"Go home"</button>
        </section>
    }
}
