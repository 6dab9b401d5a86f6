//! Profile Page
//!
//! Public profile for any member. Prefetch fields in the query string
//! render the header immediately; the full fetch reconciles it. The
//! `tab` parameter selects the user or admin tab; the admin tab links
//! the moderation queues and is shown to admins only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::use_status;
use crate::models::Profile;
use crate::routes::{self, Route};
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    User,
    Admin,
}

#[derive(Clone, PartialEq)]
enum ProfileState {
    Loading,
    Found(Profile),
    Missing,
}

#[component]
pub fn ProfilePage(username: String) -> impl IntoView {
    let session = use_session();

    // Header fields available before the fetch resolves.
    let prefetch_full_name = routes::query_param("fullName");
    let prefetch_join_date = routes::query_param("joinDate");
    let prefetch_pic_url = routes::query_param("profilePicUrl");

    let (tab, set_tab) = signal(match routes::query_param("tab").as_deref() {
        Some("admin") => Tab::Admin,
        _ => Tab::User,
    });

    let profile_state = RwSignal::new(ProfileState::Loading);
    {
        let username = username.clone();
        Effect::new(move |_| {
            let username = username.clone();
            spawn_local(async move {
                match api::user::profile(&username).await {
                    Ok(profile) => profile_state.set(ProfileState::Found(profile)),
                    Err(_) => profile_state.set(ProfileState::Missing),
                }
            });
        });
    }

    let header_name = {
        let username = username.clone();
        move || match profile_state.get() {
            ProfileState::Found(p) => p.full_name,
            _ => prefetch_full_name.clone().unwrap_or_else(|| username.clone()),
        }
    };
    let header_join_date = move || match profile_state.get() {
        ProfileState::Found(p) => Some(p.join_date),
        _ => prefetch_join_date.clone(),
    };
    let header_pic_url = move || match profile_state.get() {
        ProfileState::Found(p) => p.profile_pic_url,
        _ => prefetch_pic_url.clone(),
    };

    let display_username = username.clone();

    view! {
        <section class="page profile-page">
            <header class="profile-header">
                {move || {
                    header_pic_url()
                        .map(|url| view! { <img class="profile-pic" src=url alt="Profile picture" /> })
                }}
                <div class="profile-names">
                    <h2>{header_name}</h2>
                    <p class="profile-username">"@" {display_username.clone()}</p>
                    {move || {
                        header_join_date()
                            .map(|date| view! { <p class="profile-joined">"Member since " {date}</p> })
                    }}
                </div>
            </header>

            <div class="profile-tabs">
                <button
                    class=move || if tab.get() == Tab::User { "profile-tab active" } else { "profile-tab" }
                    on:click=move |_| set_tab.set(Tab::User)
                >
                    "Profile"
                </button>
                <Show when=move || session.is_admin()>
                    <button
                        class=move || {
                            if tab.get() == Tab::Admin { "profile-tab active" } else { "profile-tab" }
                        }
                        on:click=move |_| set_tab.set(Tab::Admin)
                    >
                        "Moderation"
                    </button>
                </Show>
            </div>

            {move || match tab.get() {
                Tab::User => {
                    view! {
                        <div class="profile-body">
                            {match profile_state.get() {
                                ProfileState::Loading => {
                                    view! { <p class="loading">"Loading profile…"</p> }.into_any()
                                }
                                ProfileState::Missing => {
                                    view! {
                                        <div class="not-found">
                                            <h3>"Profile not found"</h3>
                                            <p>"No user goes by that name."</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                                ProfileState::Found(profile) => {
                                    let own_profile = session.username().as_deref()
                                        == Some(profile.username.as_str());
                                    view! {
                                        <div class="profile-details">
                                            {profile
                                                .bio
                                                .clone()
                                                .map(|bio| view! { <p class="profile-bio">{bio}</p> })}
                                            <p class="profile-stats">
                                                {profile.thread_count} " threads · " {profile.reply_count}
                                                " replies"
                                            </p>
                                            <Show when=move || own_profile>
                                                <EditProfileForm
                                                    profile=profile.clone()
                                                    on_saved=Callback::new(move |updated: Profile| {
                                                        profile_state.set(ProfileState::Found(updated));
                                                    })
                                                />
                                            </Show>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    }
                        .into_any()
                }
                Tab::Admin => {
                    view! {
                        <div class="profile-body admin-shortcuts">
                            <button on:click=move |_| routes::navigate(&Route::HiddenThreads)>
                                "Hidden threads"
                            </button>
                            <button on:click=move |_| routes::navigate(&Route::PendingFaqs)>
                                "Pending FAQs"
                            </button>
                            <button on:click=move |_| routes::navigate(&Route::HiddenFaqs)>
                                "Hidden FAQs"
                            </button>
                            <button on:click=move |_| routes::navigate(&Route::PendingAgencies)>
                                "Pending agencies"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Edit form shown on one's own profile.
#[component]
fn EditProfileForm(profile: Profile, #[prop(into)] on_saved: Callback<Profile>) -> impl IntoView {
    let status = use_status();
    let (full_name, set_full_name) = signal(profile.full_name.clone());
    let (bio, set_bio) = signal(profile.bio.clone().unwrap_or_default());
    let (pic_url, set_pic_url) = signal(profile.profile_pic_url.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<ApiError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let full_name = full_name.get();
        let bio = bio.get();
        let pic_url = pic_url.get();
        if full_name.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let update = api::user::ProfileUpdate {
                full_name: &full_name,
                bio: (!bio.trim().is_empty()).then_some(bio.as_str()),
                profile_pic_url: (!pic_url.trim().is_empty()).then_some(pic_url.as_str()),
            };
            match api::user::update_profile(&update).await {
                Ok(updated) => {
                    set_error.set(None);
                    status.success("Profile updated.");
                    on_saved.run(updated);
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
        <form class="edit-profile-form" on:submit=submit>
            <h4>"Edit profile"</h4>
            <input
                type="text"
                placeholder="Full name"
                prop:value=move || full_name.get()
                on:input=move |ev| set_full_name.set(event_target_value(&ev))
            />
            {move || field_error("fullName").map(|m| view! { <p class="field-error">{m}</p> })}

            <textarea
                placeholder="A little about your family…"
                prop:value=move || bio.get()
                on:input=move |ev| set_bio.set(event_target_value(&ev))
            ></textarea>
            {move || field_error("bio").map(|m| view! { <p class="field-error">{m}</p> })}

            <input
                type="url"
                placeholder="Profile picture URL"
                prop:value=move || pic_url.get()
                on:input=move |ev| set_pic_url.set(event_target_value(&ev))
            />
            {move || field_error("profilePicUrl").map(|m| view! { <p class="field-error">{m}</p> })}

            {move || {
                error
                    .get()
                    .filter(|e| e.validation.is_empty())
                    .map(|e| view! { <p class="form-error">{e.message}</p> })
            }}

            <button type="submit">"Save"</button>
        </form>
    }
}
