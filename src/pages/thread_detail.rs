//! Thread Detail Page
//!
//! One thread with its paginated replies, a reply form, moderation
//! actions, and a copy-link shortcut.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::components::{use_confirm, use_status, LikeButton, ReplyItem};
use crate::markdown::render_markdown;
use crate::models::Thread;
use crate::optimistic;
use crate::routes::{self, Route};
use crate::session::use_session;
use crate::store::{
    store_remove_thread, store_replace_replies, use_app_store, AppStateStoreFields,
};

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Found(Thread),
    Missing,
}

#[component]
pub fn ThreadDetailPage(id: u64) -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let confirm = use_confirm();
    let status = use_status();

    let thread_state = RwSignal::new(DetailState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::thread::get(id).await {
                Ok(thread) => thread_state.set(DetailState::Found(thread)),
                Err(_) => thread_state.set(DetailState::Missing),
            }
        });
    });

    let replies = PagedQuery::new(
        move |page| async move {
            api::thread::replies_page(id, page)
                .await
                .map(|p| Page {
                    items: p.replies,
                    total_pages: p.total_pages,
                })
                .map_err(|e| e.message)
        },
        move |items| store_replace_replies(&store, items),
    );
    {
        let replies = replies.clone();
        Effect::new(move |_| {
            replies.request_reset();
        });
    }

    let liked = Signal::derive(move || match thread_state.get() {
        DetailState::Found(t) => t.liked_by_me,
        _ => false,
    });
    let like_count = Signal::derive(move || match thread_state.get() {
        DetailState::Found(t) => t.like_count,
        _ => 0,
    });

    let on_toggle = Callback::new(move |()| {
        let mut applied = None;
        thread_state.update(|state| {
            if let DetailState::Found(thread) = state {
                applied = Some(optimistic::toggle(
                    &mut thread.liked_by_me,
                    &mut thread.like_count,
                ));
            }
        });
        let Some(delta) = applied else {
            return;
        };
        spawn_local(async move {
            let result = if delta.is_like() {
                api::thread::like(id).await
            } else {
                api::thread::unlike(id).await
            };
            if result.is_err() {
                // No-op if the page state was already discarded.
                thread_state.update(|state| {
                    if let DetailState::Found(thread) = state {
                        optimistic::revert(&mut thread.liked_by_me, &mut thread.like_count, delta);
                    }
                });
            }
        });
    });

    let hide_thread = move |_| {
        spawn_local(async move {
            if !confirm
                .confirm(
                    "Hide thread?",
                    "The thread will no longer be visible to members.",
                )
                .await
            {
                return;
            }
            match api::thread::hide(id).await {
                Ok(()) => {
                    store_remove_thread(&store, id);
                    status.success("Thread hidden.");
                    routes::navigate(&Route::Threads);
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let copy_link = move |_| {
        spawn_local(async move {
            let Some(win) = web_sys::window() else {
                return;
            };
            let Ok(origin) = win.location().origin() else {
                return;
            };
            let url = format!("{origin}{}", Route::ThreadDetail(id).path());
            let promise = win.navigator().clipboard().write_text(&url);
            if JsFuture::from(promise).await.is_ok() {
                status.transient("Link copied.");
            }
        });
    };

    let paginator_replies = replies.clone();
    let reply_form_replies = replies.clone();

    view! {
        <section class="page thread-detail-page">
            {move || match thread_state.get() {
                DetailState::Loading => view! { <p class="loading">"Loading thread…"</p> }.into_any(),
                DetailState::Missing => {
                    view! {
                        <div class="not-found">
                            <h2>"Thread not found"</h2>
                            <p>"It may have been removed by a moderator."</p>
                            <button on:click=move |_| routes::navigate(&Route::Threads)>
                                "Back to the forum"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                DetailState::Found(thread) => {
                    view! {
                        <article class="thread-detail">
                            <h2 class="thread-title">{thread.title.clone()}</h2>
                            <p class="thread-meta">
                                <a
                                    class="author-link"
                                    on:click={
                                        let author = thread.author_username.clone();
                                        move |_| {
                                            routes::navigate_with_query(
                                                &Route::Profile(author.clone()),
                                                Some(&format!("username={author}")),
                                            );
                                        }
                                    }
                                >
                                    {thread.author_username.clone()}
                                </a>
                                <span class="thread-date">{thread.created_at.clone()}</span>
                            </p>
                            <div class="thread-body" inner_html=render_markdown(&thread.body)></div>
                            <div class="thread-actions">
                                <LikeButton liked=liked count=like_count on_toggle=on_toggle />
                                <button class="copy-link-btn" on:click=copy_link>
                                    "Copy link"
                                </button>
                                <Show when=move || session.is_admin()>
                                    <button class="hide-btn" on:click=hide_thread>
                                        "Hide thread"
                                    </button>
                                </Show>
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}

            <section class="replies">
                <h3>"Replies"</h3>
                <For
                    each=move || store.replies().get()
                    key=|reply| reply.id
                    children=move |reply| view! { <ReplyItem reply=reply /> }
                />
                <Paginator query=paginator_replies.clone() />

                <Show
                    when=move || session.is_logged_in()
                    fallback=|| view! { <p class="login-note">"Log in to join the conversation."</p> }
                >
                    <ReplyForm
                        thread_id=id
                        on_posted=Callback::new({
                            let replies = reply_form_replies.clone();
                            move |()| {
                                let page = replies.current_page().get_untracked();
                                replies.request(page);
                            }
                        })
                    />
                </Show>
            </section>
        </section>
    }
}

#[component]
fn ReplyForm(thread_id: u64, #[prop(into)] on_posted: Callback<()>) -> impl IntoView {
    let (body, set_body) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = body.get();
        if body.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match api::thread::create_reply(thread_id, &api::thread::NewReply { body: &body }).await
            {
                Ok(_) => {
                    set_body.set(String::new());
                    set_error.set(None);
                    on_posted.run(());
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        });
    };

    view! {
        <form class="reply-form" on:submit=submit>
            <textarea
                placeholder="Write a reply…"
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|m| view! { <p class="form-error">{m}</p> })}
            <button type="submit">"Reply"</button>
        </form>
    }
}
