//! Pending FAQs Page
//!
//! Moderation queue for submitted FAQ entries. Admin-only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api;
use crate::components::{use_confirm, use_status, AdminGuard, FaqCard};
use crate::store::{
    store_remove_pending_faq, store_replace_pending_faqs, use_app_store, AppStateStoreFields,
};

#[component]
pub fn PendingFaqsPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <PendingFaqsList />
        </AdminGuard>
    }
}

#[component]
fn PendingFaqsList() -> impl IntoView {
    let store = use_app_store();
    let confirm = use_confirm();
    let status = use_status();

    let query = PagedQuery::new(
        move |page| async move {
            api::faq::pending_page(page)
                .await
                .map(|p| Page {
                    items: p.faqs,
                    total_pages: p.total_pages,
                })
                .map_err(|e| e.message)
        },
        move |items| store_replace_pending_faqs(&store, items),
    );
    {
        let query = query.clone();
        Effect::new(move |_| {
            query.request_reset();
        });
    }

    let decide = move |id: u64, approved: bool| {
        spawn_local(async move {
            let (title, body) = if approved {
                ("Approve FAQ?", "The entry will be published to the knowledge base.")
            } else {
                ("Deny FAQ?", "The entry will be discarded.")
            };
            if !confirm.confirm(title, body).await {
                return;
            }
            match api::faq::decide(id, approved).await {
                Ok(()) => {
                    store_remove_pending_faq(&store, id);
                    if approved {
                        status.success("FAQ approved and published.");
                    } else {
                        status.success("FAQ denied.");
                    }
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let busy = query.in_flight();
    let paginator_query = query.clone();

    view! {
        <section class="page pending-faqs-page">
            <h2>"Pending FAQs"</h2>

            <div class="moderation-list">
                <For
                    each=move || store.pending_faqs().get()
                    key=|faq| faq.id
                    children=move |faq| {
                        let id = faq.id;
                        view! {
                            <article class="moderation-row">
                                <FaqCard faq=faq initially_open=true />
                                <div class="moderation-actions">
                                    <button class="approve-btn" on:click=move |_| decide(id, true)>
                                        "Approve"
                                    </button>
                                    <button class="deny-btn" on:click=move |_| decide(id, false)>
                                        "Deny"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || !busy.get() && store.pending_faqs().get().is_empty()>
                <p class="empty-note">"Nothing waiting for review."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}
