//! Thread Card
//!
//! One row of the thread list. Like state is read from the store by
//! id, so an optimistic delta shows up in every renderer of the
//! thread at once.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Thread;
use crate::routes::{self, Route};
use crate::store::{
    store_revert_thread_like, store_toggle_thread_like, use_app_store, AppStateStoreFields,
};

use super::like_button::LikeButton;

#[component]
pub fn ThreadCard(thread: Thread) -> impl IntoView {
    let store = use_app_store();
    let id = thread.id;
    let author = thread.author_username.clone();

    let liked = Signal::derive(move || {
        store
            .threads()
            .get()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.liked_by_me)
            .unwrap_or(false)
    });
    let count = Signal::derive(move || {
        store
            .threads()
            .get()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.like_count)
            .unwrap_or(0)
    });

    let on_toggle = Callback::new(move |()| {
        let Some(delta) = store_toggle_thread_like(&store, id) else {
            return;
        };
        spawn_local(async move {
            let result = if delta.is_like() {
                api::thread::like(id).await
            } else {
                api::thread::unlike(id).await
            };
            if result.is_err() {
                // Silent revert; a retry is one tap away.
                store_revert_thread_like(&store, id, delta);
            }
        });
    });

    view! {
        <article class="thread-card" on:click=move |_| routes::navigate(&Route::ThreadDetail(id))>
            <h3 class="thread-title">{thread.title.clone()}</h3>
            <p class="thread-meta">
                <a
                    class="author-link"
                    on:click={
                        let author = author.clone();
                        move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            routes::navigate_with_query(
                                &Route::Profile(author.clone()),
                                Some(&format!("username={author}")),
                            );
                        }
                    }
                >
                    {author.clone()}
                </a>
                <span class="thread-date">{thread.created_at.clone()}</span>
                <span class="reply-count">{thread.reply_count} " replies"</span>
            </p>
            <LikeButton liked=liked count=count on_toggle=on_toggle />
        </article>
    }
}
