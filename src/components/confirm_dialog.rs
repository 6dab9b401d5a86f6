//! Confirmation Dialog
//!
//! Promise-based confirmation: callers await `ConfirmService::confirm`
//! and the single mounted `ConfirmDialog` resolves it. Requests queue
//! FIFO, one dialog at a time.

use std::collections::VecDeque;

use futures::channel::oneshot;
use leptos::prelude::*;

pub struct ConfirmRequest {
    title: String,
    body: String,
    respond: Option<oneshot::Sender<bool>>,
}

/// Injected via context; `ConfirmDialog` must be mounted once at the
/// app root for requests to resolve.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    queue: RwSignal<VecDeque<ConfirmRequest>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(VecDeque::new()),
        }
    }

    /// Suspend until the user answers. A dismissed dialog counts as
    /// "no".
    pub async fn confirm(&self, title: &str, body: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        self.queue.update(|q| {
            q.push_back(ConfirmRequest {
                title: title.to_string(),
                body: body.to_string(),
                respond: Some(tx),
            });
        });
        rx.await.unwrap_or(false)
    }

    fn active(&self) -> Option<(String, String)> {
        self.queue
            .with(|q| q.front().map(|r| (r.title.clone(), r.body.clone())))
    }

    fn resolve(&self, answer: bool) {
        self.queue.update(|q| {
            if let Some(mut request) = q.pop_front() {
                if let Some(respond) = request.respond.take() {
                    let _ = respond.send(answer);
                }
            }
        });
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the confirmation service from context
pub fn use_confirm() -> ConfirmService {
    expect_context::<ConfirmService>()
}

/// The single mounted yes/no dialog
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let service = use_confirm();

    view! {
        <Show when=move || service.active().is_some()>
            <div class="dialog-backdrop">
                <div class="dialog confirm-dialog">
                    <h3>{move || service.active().map(|(title, _)| title).unwrap_or_default()}</h3>
                    <p>{move || service.active().map(|(_, body)| body).unwrap_or_default()}</p>
                    <div class="dialog-actions">
                        <button class="confirm-btn" on:click=move |_| service.resolve(true)>
                            "Yes"
                        </button>
                        <button class="cancel-btn" on:click=move |_| service.resolve(false)>
                            "No"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn confirm_resolves_with_the_user_answer() {
        let owner = Owner::new();
        owner.set();

        let service = ConfirmService::new();
        block_on(async {
            let pending = service.confirm("Delete thread?", "This cannot be undone.");
            futures::pin_mut!(pending);
            assert!(futures::poll!(pending.as_mut()).is_pending());
            assert_eq!(
                service.active().map(|(title, _)| title),
                Some("Delete thread?".to_string())
            );

            service.resolve(true);
            assert!(pending.await);
            assert!(service.active().is_none());
        });
    }

    #[test]
    fn requests_queue_one_at_a_time() {
        let owner = Owner::new();
        owner.set();

        let service = ConfirmService::new();
        block_on(async {
            let first = service.confirm("First?", "");
            let second = service.confirm("Second?", "");
            futures::pin_mut!(first);
            futures::pin_mut!(second);
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(futures::poll!(second.as_mut()).is_pending());

            assert_eq!(service.active().map(|(t, _)| t), Some("First?".to_string()));
            service.resolve(false);
            assert!(!first.await);

            assert_eq!(service.active().map(|(t, _)| t), Some("Second?".to_string()));
            service.resolve(true);
            assert!(second.await);
        });
    }
}
