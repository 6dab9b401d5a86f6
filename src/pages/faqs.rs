//! FAQs Page
//!
//! Knowledge-base list with search and a submission form for FAQ
//! authors. `openId` in the query string expands one entry on load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api::{self, ApiError};
use crate::browse::{search_total_pages, BrowseMode};
use crate::components::{use_confirm, use_status, FaqCard, SearchBar};
use crate::routes;
use crate::session::use_session;
use crate::store::{store_remove_faq, store_replace_faqs, use_app_store, AppStateStoreFields};

#[component]
pub fn FaqsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let confirm = use_confirm();
    let status = use_status();

    let (mode, set_mode) = signal(BrowseMode::default());
    let (creating, set_creating) = signal(routes::query_flag("creating"));
    let open_id = routes::query_param("openId").and_then(|v| v.parse::<u64>().ok());

    let query = PagedQuery::new(
        move |page| {
            let mode = mode.get_untracked();
            async move {
                match mode {
                    BrowseMode::Idle => api::faq::page(page)
                        .await
                        .map(|p| Page {
                            items: p.faqs,
                            total_pages: p.total_pages,
                        })
                        .map_err(|e| e.message),
                    BrowseMode::Searching(term) => api::faq::search(&term, page)
                        .await
                        .map(|items| {
                            let total_pages = search_total_pages(page, items.len());
                            Page { items, total_pages }
                        })
                        .map_err(|e| e.message),
                }
            }
        },
        move |items| store_replace_faqs(&store, items),
    );

    {
        let query = query.clone();
        Effect::new(move |_| {
            let _ = mode.get();
            query.request_reset();
        });
    }

    let on_search = Callback::new(move |text: String| {
        set_mode.set(BrowseMode::submit(&text));
    });

    let hide = move |id: u64| {
        spawn_local(async move {
            if !confirm
                .confirm("Hide FAQ?", "The entry will no longer appear in the knowledge base.")
                .await
            {
                return;
            }
            match api::faq::hide(id).await {
                Ok(()) => store_remove_faq(&store, id),
                Err(err) => status.error(err.message),
            }
        });
    };

    let busy = query.in_flight();
    let paginator_query = query.clone();
    let reload_query = query.clone();

    view! {
        <section class="page faqs-page">
            <header class="page-header">
                <h2>"Foster Care FAQ"</h2>
                <SearchBar
                    placeholder="Search the knowledge base…"
                    on_submit=on_search
                    disabled=busy
                />
                <Show when=move || session.can_author_faqs()>
                    <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                        "New FAQ"
                    </button>
                </Show>
            </header>

            {move || {
                creating
                    .get()
                    .then(|| {
                        let query = reload_query.clone();
                        view! {
                            <NewFaqForm on_done=Callback::new(move |submitted: bool| {
                                set_creating.set(false);
                                if submitted {
                                    query.request_reset();
                                }
                            }) />
                        }
                    })
            }}

            <div class="faq-list">
                <For
                    each=move || store.faqs().get()
                    key=|faq| faq.id
                    children=move |faq| {
                        let id = faq.id;
                        let initially_open = open_id == Some(faq.id);
                        view! {
                            <div class="faq-row">
                                <FaqCard faq=faq initially_open=initially_open />
                                <Show when=move || session.is_admin()>
                                    <button class="hide-btn" on:click=move |_| hide(id)>
                                        "Hide"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !busy.get() && store.faqs().get().is_empty()>
                <p class="empty-note">"No FAQ entries found."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}

#[component]
fn NewFaqForm(#[prop(into)] on_done: Callback<bool>) -> impl IntoView {
    let status = crate::components::use_status();
    let (question, set_question) = signal(String::new());
    let (answer, set_answer) = signal(String::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let question = question.get();
        let answer = answer.get();
        if question.trim().is_empty() || answer.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match api::faq::create(&api::faq::NewFaq {
                question: &question,
                answer: &answer,
            })
            .await
            {
                Ok(_) => {
                    set_error.set(None);
                    status.success("FAQ submitted for review.");
                    on_done.run(true);
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
        <form class="new-faq-form" on:submit=submit>
            <input
                type="text"
                placeholder="Question"
                prop:value=move || question.get()
                on:input=move |ev| set_question.set(event_target_value(&ev))
            />
            {move || field_error("question").map(|m| view! { <p class="field-error">{m}</p> })}

            <textarea
                placeholder="Answer"
                prop:value=move || answer.get()
                on:input=move |ev| set_answer.set(event_target_value(&ev))
            ></textarea>
            {move || field_error("answer").map(|m| view! { <p class="field-error">{m}</p> })}

            {move || {
                error
                    .get()
                    .filter(|e| e.validation.is_empty())
                    .map(|e| view! { <p class="form-error">{e.message}</p> })
            }}

            <div class="form-actions">
                <button type="submit">"Submit"</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_done.run(false)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
