//! Reply Item
//!
//! One reply on the thread detail page, with optimistic like and an
//! admin hide action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::use_confirm;
use crate::components::status_dialog::use_status;
use crate::markdown::render_markdown;
use crate::models::Reply;
use crate::routes::{self, Route};
use crate::session::use_session;
use crate::store::{
    store_remove_reply, store_revert_reply_like, store_toggle_reply_like, use_app_store,
    AppStateStoreFields,
};

use super::like_button::LikeButton;

#[component]
pub fn ReplyItem(reply: Reply) -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let confirm = use_confirm();
    let status = use_status();
    let id = reply.id;
    let author = reply.author_username.clone();

    let liked = Signal::derive(move || {
        store
            .replies()
            .get()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.liked_by_me)
            .unwrap_or(false)
    });
    let count = Signal::derive(move || {
        store
            .replies()
            .get()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.like_count)
            .unwrap_or(0)
    });

    let on_toggle = Callback::new(move |()| {
        let Some(delta) = store_toggle_reply_like(&store, id) else {
            return;
        };
        spawn_local(async move {
            let result = if delta.is_like() {
                api::thread::like_reply(id).await
            } else {
                api::thread::unlike_reply(id).await
            };
            if result.is_err() {
                store_revert_reply_like(&store, id, delta);
            }
        });
    });

    let hide = move |_| {
        spawn_local(async move {
            if !confirm
                .confirm("Hide reply?", "The reply will no longer be visible to members.")
                .await
            {
                return;
            }
            match api::thread::hide_reply(id).await {
                Ok(()) => store_remove_reply(&store, id),
                Err(err) => status.error(err.message),
            }
        });
    };

    view! {
        <article class="reply-item">
            <p class="reply-meta">
                <a
                    class="author-link"
                    on:click={
                        let author = author.clone();
                        move |_| {
                            routes::navigate_with_query(
                                &Route::Profile(author.clone()),
                                Some(&format!("username={author}")),
                            );
                        }
                    }
                >
                    {author.clone()}
                </a>
                <span class="reply-date">{reply.created_at.clone()}</span>
            </p>
            <div class="reply-body" inner_html=render_markdown(&reply.body)></div>
            <div class="reply-actions">
                <LikeButton liked=liked count=count on_toggle=on_toggle />
                <Show when=move || session.is_admin()>
                    <button class="hide-btn" on:click=hide>
                        "Hide"
                    </button>
                </Show>
            </div>
        </article>
    }
}
