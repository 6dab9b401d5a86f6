//! Leptos Pagination Utilities
//!
//! Generic paginated-list reconciliation for Leptos: one `PagedQuery`
//! drives fetch, publish, and page tracking for any list view, and the
//! `Paginator` component renders the page controls for it.

mod query;
mod window;

pub use query::{Page, PagedQuery};
pub use window::{page_window, PageWindow, WINDOW_WIDTH};

use leptos::prelude::*;

/// Page controls for a [`PagedQuery`].
///
/// Renders nothing when there is a single page. Numbered buttons use a
/// sliding window of at most [`WINDOW_WIDTH`] pages centered on the
/// current page, with ellipsis markers when the window excludes the
/// first or last page. All controls are disabled while a page request
/// is in flight.
#[component]
pub fn Paginator<T: Send + Sync + 'static>(query: PagedQuery<T>) -> impl IntoView {
    let current = query.current_page();
    let count = query.page_count();
    let busy = query.in_flight();

    let prev = query.clone();
    let next = query.clone();
    let numbered = query.clone();

    view! {
        <Show when={move || count.get() > 1}>
            <nav class="paginator">
                <button
                    class="page-btn nav"
                    disabled=move || busy.get() || current.get() <= 1
                    on:click={
                        let q = prev.clone();
                        move |_| {
                            let p = q.current_page().get_untracked();
                            q.request(p.saturating_sub(1));
                        }
                    }
                >
                    "‹"
                </button>

                {
                    let q = numbered.clone();
                    move || {
                        let win = page_window(current.get(), count.get());
                        let leading = win.leading_gap;
                        let trailing = win.trailing_gap;
                        let buttons = win
                            .pages
                            .iter()
                            .map(|&p| {
                                let q = q.clone();
                                let is_current = move || current.get() == p;
                                view! {
                                    <button
                                        class=move || {
                                            if is_current() { "page-btn active" } else { "page-btn" }
                                        }
                                        disabled=move || busy.get()
                                        on:click=move |_| q.request(p)
                                    >
                                        {p}
                                    </button>
                                }
                            })
                            .collect_view();
                        view! {
                            <Show when=move || leading>
                                <span class="page-ellipsis">"…"</span>
                            </Show>
                            {buttons}
                            <Show when=move || trailing>
                                <span class="page-ellipsis">"…"</span>
                            </Show>
                        }
                    }
                }

                <button
                    class="page-btn nav"
                    disabled={move || busy.get() || current.get() >= count.get()}
                    on:click={
                        let q = next.clone();
                        move |_| {
                            let p = q.current_page().get_untracked();
                            q.request(p + 1);
                        }
                    }
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
