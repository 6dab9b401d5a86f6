//! Agencies Page
//!
//! Directory of approved foster agencies: search, sort, and a
//! submission form whose addresses are verified upstream.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{Page, PagedQuery, Paginator};

use crate::api::{self, ApiError};
use crate::browse::{search_total_pages, sort_agencies, AgencyOrder, BrowseMode};
use crate::components::{AgencyCard, SearchBar, SortSelect};
use crate::routes;
use crate::session::use_session;
use crate::store::{store_replace_agencies, use_app_store, AppStateStoreFields};

#[component]
pub fn AgenciesPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();

    let (order, set_order) = signal(AgencyOrder::default());
    let (mode, set_mode) = signal(BrowseMode::default());
    let (creating, set_creating) = signal(routes::query_flag("creating"));

    let query = PagedQuery::new(
        move |page| {
            let mode = mode.get_untracked();
            let order = order.get_untracked();
            async move {
                match mode {
                    BrowseMode::Idle => api::agency::page(page, order)
                        .await
                        .map(|p| Page {
                            items: p.agencies,
                            total_pages: p.total_pages,
                        })
                        .map_err(|e| e.message),
                    BrowseMode::Searching(term) => api::agency::search(&term, page)
                        .await
                        .map(|mut items| {
                            let total_pages = search_total_pages(page, items.len());
                            sort_agencies(&mut items, order);
                            Page { items, total_pages }
                        })
                        .map_err(|e| e.message),
                }
            }
        },
        move |items| store_replace_agencies(&store, items),
    );

    {
        let query = query.clone();
        Effect::new(move |prev: Option<(BrowseMode, AgencyOrder)>| {
            let mode_now = mode.get();
            let order_now = order.get();
            match prev {
                None => query.request_reset(),
                Some((prev_mode, _)) if prev_mode != mode_now => query.request_reset(),
                Some((_, prev_order)) if prev_order != order_now => {
                    if mode_now.is_searching() {
                        sort_agencies(store.agencies().write().as_mut_slice(), order_now);
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
        set_order.set(AgencyOrder::from_key(&key));
    });

    let busy = query.in_flight();
    let paginator_query = query.clone();

    view! {
        <section class="page agencies-page">
            <header class="page-header">
                <h2>"Agency Directory"</h2>
                <SearchBar placeholder="Search agencies…" on_submit=on_search disabled=busy />
                <SortSelect
                    options=AgencyOrder::OPTIONS
                    current=Signal::derive(move || order.get().query_key())
                    on_change=on_order
                    disabled=busy
                />
                <Show when=move || session.is_logged_in()>
                    <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                        "Submit an agency"
                    </button>
                </Show>
            </header>

            {move || {
                creating
                    .get()
                    .then(|| {
                        view! {
                            <NewAgencyForm on_done=Callback::new(move |()| set_creating.set(false)) />
                        }
                    })
            }}

            <div class="agency-list">
                <For
                    each=move || store.agencies().get()
                    key=|agency| agency.id
                    children=move |agency| view! { <AgencyCard agency=agency /> }
                />
            </div>

            <Show when=move || !busy.get() && store.agencies().get().is_empty()>
                <p class="empty-note">"No agencies found."</p>
            </Show>

            <Paginator query=paginator_query.clone() />
        </section>
    }
}

#[component]
fn NewAgencyForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let status = crate::components::use_status();
    let (name, set_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (state, set_state) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (website, set_website) = signal(String::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let address = address.get();
        let city = city.get();
        let state = state.get();
        let phone = phone.get();
        let website = website.get();
        if name.trim().is_empty() || address.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let new_agency = api::agency::NewAgency {
                name: &name,
                address: &address,
                city: &city,
                state: &state,
                phone: (!phone.trim().is_empty()).then_some(phone.as_str()),
                website: (!website.trim().is_empty()).then_some(website.as_str()),
            };
            match api::agency::create(&new_agency).await {
                Ok(_) => {
                    set_error.set(None);
                    status.success("Agency submitted for review.");
                    on_done.run(());
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
        <form class="new-agency-form" on:submit=submit>
            <input
                type="text"
                placeholder="Agency name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            {move || field_error("name").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="text"
                placeholder="Street address"
                prop:value=move || address.get()
                on:input=move |ev| set_address.set(event_target_value(&ev))
            />
            {move || field_error("address").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="text"
                placeholder="City"
                prop:value=move || city.get()
                on:input=move |ev| set_city.set(event_target_value(&ev))
            />
            {move || field_error("city").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="text"
                placeholder="State"
                prop:value=move || state.get()
                on:input=move |ev| set_state.set(event_target_value(&ev))
            />
            {move || field_error("state").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="tel"
                placeholder="Phone (optional)"
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />

            <input
                type="url"
                placeholder="Website (optional)"
                prop:value=move || website.get()
                on:input=move |ev| set_website.set(event_target_value(&ev))
            />

            {move || {
                error
                    .get()
                    .filter(|e| e.validation.is_empty())
                    .map(|e| view! { <p class="form-error">{e.message}</p> })
            }}

            <div class="form-actions">
                <button type="submit">"Submit"</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_done.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
