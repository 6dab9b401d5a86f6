//! Auth Page
//!
//! Login and registration forms. Validation failures render next to
//! the offending input; a successful login stores the token and
//! returns home.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::routes::{self, Route};
use crate::session::{use_session, Session};

async fn finish_login(session: Session, token: &str) {
    session.set_token(token);
    if let Ok(user) = api::user::current().await {
        session.set_user(user);
    }
    routes::navigate(&Route::Home);
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (registering, set_registering) = signal(false);

    view! {
        <section class="page auth-page">
            <div class="auth-tabs">
                <button
                    class=move || if registering.get() { "auth-tab" } else { "auth-tab active" }
                    on:click=move |_| set_registering.set(false)
                >
                    "Log in"
                </button>
                <button
                    class=move || if registering.get() { "auth-tab active" } else { "auth-tab" }
                    on:click=move |_| set_registering.set(true)
                >
                    "Register"
                </button>
            </div>

            {move || {
                if registering.get() {
                    view! { <RegisterForm /> }.into_any()
                } else {
                    view! { <LoginForm /> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = use_session();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();

        spawn_local(async move {
            match api::user::login(&api::user::Credentials {
                username: &username,
                password: &password,
            })
            .await
            {
                Ok(resp) => {
                    set_error.set(None);
                    finish_login(session, &resp.token).await;
                }
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    let field_error = move |name: &'static str| {
        error
            .get()
            .and_then(|e| e.field(name).map(|m| m.to_string()))
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            {move || field_error("username").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || field_error("password").map(|m| view! { <p class="field-error">{m}</p> })}

            {move || {
                error
                    .get()
                    .filter(|e| e.validation.is_empty())
                    .map(|e| view! { <p class="form-error">{e.message}</p> })
            }}

            <button type="submit">"Log in"</button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let session = use_session();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        let full_name = full_name.get();
        let email = email.get();

        spawn_local(async move {
            match api::user::register(&api::user::Registration {
                username: &username,
                password: &password,
                full_name: &full_name,
                email: &email,
            })
            .await
            {
                Ok(resp) => {
                    set_error.set(None);
                    finish_login(session, &resp.token).await;
                }
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    let field_error = move |name: &'static str| {
        error
            .get()
            .and_then(|e| e.field(name).map(|m| m.to_string()))
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            {move || field_error("username").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="text"
                placeholder="Full name"
                prop:value=move || full_name.get()
                on:input=move |ev| set_full_name.set(event_target_value(&ev))
            />
            {move || field_error("fullName").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            {move || field_error("email").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || field_error("password").map(|m| view! { <p class="field-error">{m}</p> })}

            {move || {
                error
                    .get()
                    .filter(|e| e.validation.is_empty())
                    .map(|e| view! { <p class="form-error">{e.message}</p> })
            }}

            <button type="submit">"Create account"</button>
        </form>
    }
}
