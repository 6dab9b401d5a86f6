//! Hidden FAQs Page
//!
//! Moderation view over hidden FAQ entries: restore, or delete
//! permanently. Admin-only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api;
use crate::components::{use_confirm, use_status, AdminGuard, FaqCard};
use crate::store::{
    store_remove_hidden_faq, store_replace_hidden_faqs, use_app_store, AppStateStoreFields,
};

#[component]
pub fn HiddenFaqsPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <HiddenFaqsList />
        </AdminGuard>
    }
}

#[component]
fn HiddenFaqsList() -> impl IntoView {
    let store = use_app_store();
    let confirm = use_confirm();
    let status = use_status();

    let query = PagedQuery::new(
        move |page| async move {
            api::faq::hidden_page(page)
                .await
                .map(|p| Page {
                    items: p.faqs,
                    total_pages: p.total_pages,
                })
                .map_err(|e| e.message)
        },
        move |items| store_replace_hidden_faqs(&store, items),
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
                .confirm("Restore FAQ?", "The entry will be published again.")
                .await
            {
                return;
            }
            match api::faq::restore(id).await {
                Ok(()) => {
                    store_remove_hidden_faq(&store, id);
                    status.success("FAQ restored.");
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            if !confirm
                .confirm("Delete FAQ permanently?", "This cannot be undone.")
                .await
            {
                return;
            }
            match api::faq::delete(id).await {
                Ok(()) => {
                    store_remove_hidden_faq(&store, id);
                    status.success("FAQ permanently deleted.");
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let busy = query.in_flight();
    let paginator_query = query.clone();

    view! {
        <section class="page hidden-faqs-page">
            <h2>"Hidden FAQs"</h2>

            <div class="moderation-list">
                <For
                    each=move || store.hidden_faqs().get()
                    key=|faq| faq.id
                    children=move |faq| {
                        let id = faq.id;
                        view! {
                            <article class="moderation-row">
                                <FaqCard faq=faq />
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

            <Show when=move || !busy.get() && store.hidden_faqs().get().is_empty()>
                <p class="empty-note">"No hidden FAQ entries."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}
