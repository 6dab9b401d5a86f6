//! Pending Agencies Page
//!
//! Moderation queue for submitted agency listings. Approval removes
//! the row; denial keeps it, marked denied with the decider recorded.
//! Admin-only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api;
use crate::components::{use_confirm, use_status, AdminGuard, AgencyCard};
use crate::store::{
    store_apply_agency_decision, store_replace_pending_agencies, use_app_store, AppStateStoreFields,
};

#[component]
pub fn PendingAgenciesPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <PendingAgenciesList />
        </AdminGuard>
    }
}

#[component]
fn PendingAgenciesList() -> impl IntoView {
    let store = use_app_store();
    let confirm = use_confirm();
    let status = use_status();

    let query = PagedQuery::new(
        move |page| async move {
            api::agency::pending_page(page)
                .await
                .map(|p| Page {
                    items: p.agencies,
                    total_pages: p.total_pages,
                })
                .map_err(|e| e.message)
        },
        move |items| store_replace_pending_agencies(&store, items),
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
                ("Approve agency?", "The listing will appear in the public directory.")
            } else {
                ("Deny agency?", "The listing will stay out of the directory.")
            };
            if !confirm.confirm(title, body).await {
                return;
            }
            match api::agency::decide(id, approved).await {
                Ok(updated) => {
                    store_apply_agency_decision(&store, &updated, approved);
                    if approved {
                        status.success("Agency approved.");
                    } else {
                        status.success("Agency denied.");
                    }
                }
                Err(err) => status.error(err.message),
            }
        });
    };

    let busy = query.in_flight();
    let paginator_query = query.clone();

    view! {
        <section class="page pending-agencies-page">
            <h2>"Pending Agencies"</h2>

            <div class="moderation-list">
                <For
                    each=move || store.pending_agencies().get()
                    key=|agency| agency.id
                    children=move |agency| {
                        let id = agency.id;
                        let decided_by = agency.approved_by_username.clone();
                        view! {
                            <article class="moderation-row">
                                <AgencyCard agency=agency />
                                {decided_by
                                    .map(|username| {
                                        view! { <p class="decider-note">"Reviewed by " {username}</p> }
                                    })}
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

            <Show when=move || !busy.get() && store.pending_agencies().get().is_empty()>
                <p class="empty-note">"Nothing waiting for review."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}
