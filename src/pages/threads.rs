//! Threads Page
//!
//! Forum thread list: server-ordered browsing with exact page counts,
//! search with heuristic page counts, and a new-thread form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api::{self, ApiError};
use crate::browse::{search_total_pages, sort_threads, BrowseMode, ThreadOrder};
use crate::components::{SearchBar, SortSelect, ThreadCard};
use crate::routes::{self, Route};
use crate::session::use_session;
use crate::store::{store_replace_threads, use_app_store, AppStateStoreFields};

#[component]
pub fn ThreadsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();

    let (order, set_order) = signal(ThreadOrder::default());
    let (mode, set_mode) = signal(BrowseMode::default());
    let (creating, set_creating) = signal(routes::query_flag("creating"));

    let query = PagedQuery::new(
        move |page| {
            let mode = mode.get_untracked();
            let order = order.get_untracked();
            async move {
                match mode {
                    BrowseMode::Idle => api::thread::page(page, order)
                        .await
                        .map(|p| Page {
                            items: p.threads,
                            total_pages: p.total_pages,
                        })
                        .map_err(|e| e.message),
                    BrowseMode::Searching(term) => api::thread::search(&term, page)
                        .await
                        .map(|mut items| {
                            let total_pages = search_total_pages(page, items.len());
                            sort_threads(&mut items, order);
                            Page { items, total_pages }
                        })
                        .map_err(|e| e.message),
                }
            }
        },
        move |items| store_replace_threads(&store, items),
    );

    // Mode changes restart at page 1. Order changes re-fetch while
    // browsing but only re-sort the fetched set while searching.
    {
        let query = query.clone();
        Effect::new(move |prev: Option<(BrowseMode, ThreadOrder)>| {
            let mode_now = mode.get();
            let order_now = order.get();
            match prev {
                None => query.request_reset(),
                Some((prev_mode, _)) if prev_mode != mode_now => query.request_reset(),
                Some((_, prev_order)) if prev_order != order_now => {
                    if mode_now.is_searching() {
                        sort_threads(store.threads().write().as_mut_slice(), order_now);
                    } else {
                        query.request_reset();
                    }
                }
                Some(_) => {}
            }
            (mode_now, order_now)
        });
    }

    let on_search = Callback::new(move |text: String| {
        set_mode.set(BrowseMode::submit(&text));
    });
    let on_order = Callback::new(move |key: String| {
        set_order.set(ThreadOrder::from_key(&key));
    });

    let busy = query.in_flight();
    let paginator_query = query.clone();
    let reload_query = query.clone();

    view! {
        <section class="page threads-page">
            <header class="page-header">
                <h2>"Community Forum"</h2>
                <SearchBar placeholder="Search threads…" on_submit=on_search disabled=busy />
                <SortSelect
                    options=ThreadOrder::OPTIONS
                    current=Signal::derive(move || order.get().query_key())
                    on_change=on_order
                    disabled=busy
                />
                <Show when=move || session.is_logged_in()>
                    <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                        "New thread"
                    </button>
                </Show>
            </header>

            <Show when=move || mode.get().is_searching()>
                <p class="search-note">
                    {move || match mode.get() {
                        BrowseMode::Searching(term) => format!("Results for “{term}”"),
                        BrowseMode::Idle => String::new(),
                    }}
                </p>
            </Show>

            {move || {
                creating
                    .get()
                    .then(|| {
                        let query = reload_query.clone();
                        view! {
                            <NewThreadForm
                                on_done=Callback::new(move |created: Option<u64>| {
                                    set_creating.set(false);
                                    match created {
                                        Some(id) => routes::navigate(&Route::ThreadDetail(id)),
                                        None => query.request_reset(),
                                    }
                                })
                            />
                        }
                    })
            }}

            <div class="thread-list">
                <For
                    each=move || store.threads().get()
                    key=|thread| thread.id
                    children=move |thread| view! { <ThreadCard thread=thread /> }
                />
            </div>

            <Show when=move || !busy.get() && store.threads().get().is_empty()>
                <p class="empty-note">"No threads found."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}

/// Inline form for posting a new thread. Field-level validation
/// errors render next to the offending input.
#[component]
fn NewThreadForm(#[prop(into)] on_done: Callback<Option<u64>>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let body = body.get();
        if title.trim().is_empty() || body.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match api::thread::create(&api::thread::NewThread {
                title: &title,
                body: &body,
            })
            .await
            {
                Ok(thread) => {
                    set_error.set(None);
                    on_done.run(Some(thread.id));
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
        <form class="new-thread-form" on:submit=submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            {move || field_error("title").map(|m| view! { <p class="field-error">{m}</p> })}

            <textarea
                placeholder="Share your question or experience…"
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            ></textarea>
            {move || field_error("body").map(|m| view! { <p class="field-error">{m}</p> })}

            {move || {
                error
                    .get()
                    .filter(|e| e.validation.is_empty())
                    .map(|e| view! { <p class="form-error">{e.message}</p> })
            }}

            <div class="form-actions">
                <button type="submit">"Post"</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_done.run(None)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
