//! FosterLink Frontend App
//!
//! Application shell: contexts, theme, header, the routed page, and
//! the globally mounted dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reactive_stores::Store;

use crate::components::{ConfirmDialog, ConfirmService, StatusDialog, StatusService};
use crate::pages::{
    AgenciesPage, AuthPage, FaqsPage, HiddenFaqsPage, HiddenThreadsPage, HomePage, NotFoundPage,
    PendingAgenciesPage, PendingFaqsPage, ProfilePage, ThreadDetailPage, ThreadsPage,
};
use crate::routes::{self, Route};
use crate::session::{use_session, Session};
use crate::store::AppState;
use crate::theme::{self, Theme};

#[component]
pub fn App() -> impl IntoView {
    let session = Session::load();
    let router = routes::init_router();
    let store = Store::new(AppState::default());
    let confirm = ConfirmService::new();
    let status = StatusService::new();
    let (current_theme, set_theme) = signal(theme::load());

    // Provide context to all children
    provide_context(session);
    provide_context(router);
    provide_context(store);
    provide_context(confirm);
    provide_context(status);

    // Apply and persist the theme preference
    Effect::new(move |_| {
        let theme = current_theme.get();
        theme::apply(theme);
        theme::store(theme);
    });

    // Restore the cached user when a token survived a reload
    Effect::new(move |_| {
        spawn_local(async move {
            let _ = session.ensure_user().await;
        });
    });

    let route = router.route();

    view! {
        <div class="app-shell">
            <Header current_theme=current_theme set_theme=set_theme />

            <main class="main-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Auth => view! { <AuthPage /> }.into_any(),
                    Route::Threads => view! { <ThreadsPage /> }.into_any(),
                    Route::ThreadDetail(id) => view! { <ThreadDetailPage id=id /> }.into_any(),
                    Route::HiddenThreads => view! { <HiddenThreadsPage /> }.into_any(),
                    Route::Faqs => view! { <FaqsPage /> }.into_any(),
                    Route::PendingFaqs => view! { <PendingFaqsPage /> }.into_any(),
                    Route::HiddenFaqs => view! { <HiddenFaqsPage /> }.into_any(),
                    Route::Agencies => view! { <AgenciesPage /> }.into_any(),
                    Route::PendingAgencies => view! { <PendingAgenciesPage /> }.into_any(),
                    Route::Profile(username) => {
                        view! { <ProfilePage username=username /> }.into_any()
                    }
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>

            <ConfirmDialog />
            <StatusDialog />
        </div>
    }
}

/// Header with navigation, theme toggle, and the session menu
#[component]
fn Header(current_theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let session = use_session();

    view! {
        <header class="app-header">
            <a class="brand" on:click=move |_| routes::navigate(&Route::Home)>
                "FosterLink"
            </a>

            <nav class="main-nav">
                <button on:click=move |_| routes::navigate(&Route::Threads)>"Forum"</button>
                <button on:click=move |_| routes::navigate(&Route::Faqs)>"FAQ"</button>
                <button on:click=move |_| routes::navigate(&Route::Agencies)>"Agencies"</button>
            </nav>

            <div class="header-actions">
                <button
                    class="theme-toggle"
                    title=move || {
                        match current_theme.get() {
                            Theme::Light => "Switch to dark mode",
                            Theme::Dark => "Switch to light mode",
                        }
                    }
                    on:click=move |_| set_theme.update(|t| *t = t.toggled())
                >
                    {move || match current_theme.get() {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀",
                    }}
                </button>

                {move || {
                    if session.is_logged_in() {
                        view! { <UserMenu /> }.into_any()
                    } else {
                        view! {
                            <button
                                class="login-btn"
                                on:click=move |_| routes::navigate(&Route::Auth)
                            >
                                "Log in"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}

/// Logged-in user's corner of the header: profile shortcut carrying
/// the prefetch fields, and logout.
#[component]
fn UserMenu() -> impl IntoView {
    let session = use_session();

    let open_profile = move |_| {
        let Some(user) = session.user().get_untracked() else {
            return;
        };
        let mut query = format!(
            "username={}&fullName={}&joinDate={}",
            encode(&user.username),
            encode(&user.full_name),
            encode(&user.join_date),
        );
        if let Some(url) = &user.profile_pic_url {
            query.push_str(&format!("&profilePicUrl={}", encode(url)));
        }
        routes::navigate_with_query(&Route::Profile(user.username.clone()), Some(&query));
    };

    view! {
        <div class="user-menu">
            <button class="profile-btn" on:click=open_profile>
                {move || session.username().unwrap_or_default()}
            </button>
            <button class="logout-btn" on:click=move |_| session.logout()>
                "Log out"
            </button>
        </div>
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
