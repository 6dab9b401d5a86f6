//! Home Page
//!
//! Landing view with shortcuts into the forum, the FAQ knowledge
//! base, and the agency directory, plus the latest forum activity.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browse::ThreadOrder;
use crate::models::Thread;
use crate::routes::{self, Route};

#[component]
pub fn HomePage() -> impl IntoView {
    let (recent, set_recent) = signal(Vec::<Thread>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(page) = api::thread::page(1, ThreadOrder::Newest).await {
                set_recent.set(page.threads.into_iter().take(5).collect());
            }
        });
    });

    view! {
        <section class="page home-page">
            <div class="hero">
                <h1>"FosterLink"</h1>
                <p>"A community for foster families, by foster families."</p>
            </div>

            <div class="home-cards">
                <button class="home-card" on:click=move |_| routes::navigate(&Route::Threads)>
                    <h3>"Community Forum"</h3>
                    <p>"Ask questions and share experiences with other foster parents."</p>
                </button>
                <button class="home-card" on:click=move |_| routes::navigate(&Route::Faqs)>
                    <h3>"Foster Care FAQ"</h3>
                    <p>"Answers to the questions every foster family runs into."</p>
                </button>
                <button class="home-card" on:click=move |_| routes::navigate(&Route::Agencies)>
                    <h3>"Agency Directory"</h3>
                    <p>"Find licensed foster agencies near you."</p>
                </button>
            </div>

            <section class="recent-threads">
                <h2>"Latest from the forum"</h2>
                <ul>
                    <For
                        each=move || recent.get()
                        key=|thread| thread.id
                        children=move |thread| {
                            let id = thread.id;
                            view! {
                                <li>
                                    <a on:click=move |_| routes::navigate(&Route::ThreadDetail(id))>
                                        {thread.title.clone()}
                                    </a>
                                    <span class="thread-meta">
                                        " — " {thread.author_username.clone()}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </section>
    }
}
