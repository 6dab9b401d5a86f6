//! Status Dialog
//!
//! Modal success/error feedback. Transient confirmations auto-close
//! after a fixed delay; everything else waits for explicit dismissal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const TRANSIENT_CLOSE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct StatusService {
    current: RwSignal<Option<StatusMessage>>,
    /// Bumped per show; lets an expired auto-close timer recognize it
    /// is stale.
    epoch: RwSignal<u32>,
}

impl StatusService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(StatusKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(StatusKind::Error, text.into());
    }

    /// Success feedback that closes itself after
    /// [`TRANSIENT_CLOSE_MS`].
    pub fn transient(&self, text: impl Into<String>) {
        self.show(StatusKind::Success, text.into());
        let shown = self.epoch.get_untracked();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TRANSIENT_CLOSE_MS).await;
            if this.epoch.get_untracked() == shown {
                this.current.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, kind: StatusKind, text: String) {
        self.epoch.update(|e| *e += 1);
        self.current.set(Some(StatusMessage { kind, text }));
    }

    fn message(&self) -> Option<StatusMessage> {
        self.current.get()
    }
}

impl Default for StatusService {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the status service from context
pub fn use_status() -> StatusService {
    expect_context::<StatusService>()
}

/// The single mounted status dialog
#[component]
pub fn StatusDialog() -> impl IntoView {
    let service = use_status();

    view! {
        <Show when=move || service.message().is_some()>
            <div class="dialog-backdrop">
                <div class=move || {
                    match service.message().map(|m| m.kind) {
                        Some(StatusKind::Error) => "dialog status-dialog error",
                        _ => "dialog status-dialog success",
                    }
                }>
                    <p>{move || service.message().map(|m| m.text).unwrap_or_default()}</p>
                    <button class="dismiss-btn" on:click=move |_| service.dismiss()>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_dismiss() {
        let owner = Owner::new();
        owner.set();

        let service = StatusService::new();
        assert!(service.message().is_none());

        service.success("Agency approved.");
        let message = service.message().unwrap();
        assert_eq!(message.kind, StatusKind::Success);
        assert!(message.text.contains("approved"));

        service.dismiss();
        assert!(service.message().is_none());
    }

    #[test]
    fn a_newer_dialog_invalidates_older_auto_close_timers() {
        let owner = Owner::new();
        owner.set();

        let service = StatusService::new();
        service.success("Link copied.");
        let first_epoch = service.epoch.get_untracked();

        service.error("Could not delete the thread.");
        // The first dialog's timer would compare against a stale epoch
        // and leave the newer dialog alone.
        assert_ne!(service.epoch.get_untracked(), first_epoch);
        assert_eq!(service.message().unwrap().kind, StatusKind::Error);
    }
}
