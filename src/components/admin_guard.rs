//! Admin Route Guard
//!
//! Gates admin-only views behind the async permission check: a
//! loading state until resolved, then either the guarded content or a
//! redirect home.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{self, Route};
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum GuardState {
    Checking,
    Allowed,
    Denied,
}

#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let (state, set_state) = signal(GuardState::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            let allowed = session.ensure_user().await.is_some_and(|u| u.admin);
            if allowed {
                set_state.set(GuardState::Allowed);
            } else {
                set_state.set(GuardState::Denied);
                routes::navigate(&Route::Home);
            }
        });
    });

    move || match state.get() {
        GuardState::Checking => view! { <p class="loading">"Checking permissions…"</p> }.into_any(),
        GuardState::Allowed => children().into_any(),
        GuardState::Denied => ().into_any(),
    }
}
