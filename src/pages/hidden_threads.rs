//! Hidden Threads Page
//!
//! Moderation view over hidden threads: restore, or delete
//! permanently. Admin-only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api;
use crate::components::{use_confirm, use_status, AdminGuard};
use crate::store::{
    store_remove_hidden_thread, store_replace_hidden_threads, use_app_store, AppStateStoreFields,
};

#[component]
pub fn HiddenThreadsPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <HiddenThreadsList />
        </AdminGuard>
    }
}

#[component]
fn HiddenThreadsList() -> impl IntoView {
    let store = use_app_store();
    let confirm = use_confirm();
    let status = use_status();

    let query = PagedQuery::new(
        move |page| async move {
            api::thread::hidden_page(page)
                .await
                .map(|p| Page {
                    items: p.threads,
                    total_pages: p.total_pages,
                })
                .map_err(|e| e.message)
        },
        move |items| store_replace_hidden_threads(&store, items),
    );
    {
        let query = query.clone();
        Effect::new(move |_| {
            query.request_reset();
        });
    }

    let restore = move |id: u64| {
        spawn_local(async move {
            if !confirm
                .confirm("Restore thread?", "The thread will be visible to members again.")
                .await
            {
                return;
            }
            match api::thread::restore(id).await {
                Ok(()) => {
                    store_remove_hidden_thread(&store, id);
                    status.success("Thread restored.");
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            if !confirm
                .confirm("Delete thread permanently?", "This cannot be undone.")
                .await
            {
                return;
            }
            match api::thread::delete(id).await {
                Ok(()) => {
                    store_remove_hidden_thread(&store, id);
                    status.success("Thread permanently deleted.");
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let busy = query.in_flight();
    let paginator_query = query.clone();

    view! {
        <section class="page hidden-threads-page">
            <h2>"Hidden Threads"</h2>

            <div class="moderation-list">
                <For
                    each=move || store.hidden_threads().get()
                    key=|thread| thread.id
                    children=move |thread| {
                        let id = thread.id;
                        view! {
                            <article class="moderation-row">
                                <div class="moderation-summary">
                                    <h3>{thread.title.clone()}</h3>
                                    <p class="thread-meta">
                                        {thread.author_username.clone()} " · " {thread.created_at.clone()}
                                    </p>
                                </div>
                                <div class="moderation-actions">
                                    <button class="restore-btn" on:click=move |_| restore(id)>
                                        "Restore"
                                    </button>
                                    <button class="delete-btn" on:click=move |_| delete(id)>
                                        "Delete permanently"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || !busy.get() && store.hidden_threads().get().is_empty()>
                <p class="empty-note">"No hidden threads."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}
