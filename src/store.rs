//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each
//! collection holds exactly the page last fetched for its view. Entity
//! mutations go through id-keyed helpers so every renderer of an
//! entity sees the same state; nothing mutates objects passed
//! positionally through the tree.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{agency_status, Agency, Faq, Reply, Thread};
use crate::optimistic::{self, LikeDelta};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current page of the thread list (browse or search results)
    pub threads: Vec<Thread>,
    /// Current page of replies on the open thread
    pub replies: Vec<Reply>,
    /// Current page of the FAQ list
    pub faqs: Vec<Faq>,
    /// Current page of the agency directory
    pub agencies: Vec<Agency>,
    /// Moderation views
    pub hidden_threads: Vec<Thread>,
    pub pending_faqs: Vec<Faq>,
    pub hidden_faqs: Vec<Faq>,
    pub pending_agencies: Vec<Agency>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Page replacement
// ========================

pub fn store_replace_threads(store: &AppStore, items: Vec<Thread>) {
    *store.threads().write() = items;
}

pub fn store_replace_replies(store: &AppStore, items: Vec<Reply>) {
    *store.replies().write() = items;
}

pub fn store_replace_faqs(store: &AppStore, items: Vec<Faq>) {
    *store.faqs().write() = items;
}

pub fn store_replace_agencies(store: &AppStore, items: Vec<Agency>) {
    *store.agencies().write() = items;
}

pub fn store_replace_hidden_threads(store: &AppStore, items: Vec<Thread>) {
    *store.hidden_threads().write() = items;
}

pub fn store_replace_pending_faqs(store: &AppStore, items: Vec<Faq>) {
    *store.pending_faqs().write() = items;
}

pub fn store_replace_hidden_faqs(store: &AppStore, items: Vec<Faq>) {
    *store.hidden_faqs().write() = items;
}

pub fn store_replace_pending_agencies(store: &AppStore, items: Vec<Agency>) {
    *store.pending_agencies().write() = items;
}

// ========================
// Optimistic like deltas
// ========================

/// Apply an optimistic like toggle to a thread; `None` when the thread
/// is no longer in the store.
pub fn store_toggle_thread_like(store: &AppStore, id: u64) -> Option<LikeDelta> {
    let threads_field = store.threads();
    let mut threads = threads_field.write();
    let thread = threads.iter_mut().find(|t| t.id == id)?;
    Some(optimistic::toggle(
        &mut thread.liked_by_me,
        &mut thread.like_count,
    ))
}

/// Roll back a failed like toggle. A thread that already left the
/// store (navigation, page change) makes this a no-op.
pub fn store_revert_thread_like(store: &AppStore, id: u64, delta: LikeDelta) {
    let threads_field = store.threads();
    let mut threads = threads_field.write();
    if let Some(thread) = threads.iter_mut().find(|t| t.id == id) {
        optimistic::revert(&mut thread.liked_by_me, &mut thread.like_count, delta);
    }
}

pub fn store_toggle_reply_like(store: &AppStore, id: u64) -> Option<LikeDelta> {
    let replies_field = store.replies();
    let mut replies = replies_field.write();
    let reply = replies.iter_mut().find(|r| r.id == id)?;
    Some(optimistic::toggle(
        &mut reply.liked_by_me,
        &mut reply.like_count,
    ))
}

pub fn store_revert_reply_like(store: &AppStore, id: u64, delta: LikeDelta) {
    let replies_field = store.replies();
    let mut replies = replies_field.write();
    if let Some(reply) = replies.iter_mut().find(|r| r.id == id) {
        optimistic::revert(&mut reply.liked_by_me, &mut reply.like_count, delta);
    }
}

// ========================
// Moderation decisions
// ========================

/// Result of applying a moderation decision to a pending row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOutcome {
    Removed,
    Updated,
    Missing,
}

/// Approval removes the row from the pending list; denial keeps it,
/// marked denied with the decider recorded.
pub fn apply_agency_decision(
    items: &mut Vec<Agency>,
    updated: &Agency,
    approved: bool,
) -> DecisionOutcome {
    let Some(pos) = items.iter().position(|a| a.id == updated.id) else {
        return DecisionOutcome::Missing;
    };
    if approved {
        items.remove(pos);
        DecisionOutcome::Removed
    } else {
        items[pos] = updated.clone();
        DecisionOutcome::Updated
    }
}

pub fn store_apply_agency_decision(
    store: &AppStore,
    updated: &Agency,
    approved: bool,
) -> DecisionOutcome {
    apply_agency_decision(&mut store.pending_agencies().write(), updated, approved)
}

pub fn store_remove_pending_faq(store: &AppStore, id: u64) {
    store.pending_faqs().write().retain(|f| f.id != id);
}

pub fn store_remove_thread(store: &AppStore, id: u64) {
    store.threads().write().retain(|t| t.id != id);
}

pub fn store_remove_hidden_thread(store: &AppStore, id: u64) {
    store.hidden_threads().write().retain(|t| t.id != id);
}

pub fn store_remove_faq(store: &AppStore, id: u64) {
    store.faqs().write().retain(|f| f.id != id);
}

pub fn store_remove_hidden_faq(store: &AppStore, id: u64) {
    store.hidden_faqs().write().retain(|f| f.id != id);
}

pub fn store_remove_reply(store: &AppStore, id: u64) {
    store.replies().write().retain(|r| r.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_agency(id: u64, name: &str) -> Agency {
        Agency {
            id,
            name: name.to_string(),
            address: "10 Grove St".to_string(),
            city: "Dayton".to_string(),
            state: "OH".to_string(),
            phone: None,
            website: None,
            approved: agency_status::PENDING,
            approved_by_username: None,
        }
    }

    #[test]
    fn approval_removes_the_pending_row() {
        let mut items = vec![pending_agency(1, "Arbor"), pending_agency(2, "Beacon")];
        let mut updated = pending_agency(1, "Arbor");
        updated.approved = agency_status::APPROVED;
        updated.approved_by_username = Some("admin_kim".to_string());

        let outcome = apply_agency_decision(&mut items, &updated, true);

        assert_eq!(outcome, DecisionOutcome::Removed);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn denial_keeps_the_row_marked_denied() {
        let mut items = vec![pending_agency(1, "Arbor")];
        let mut updated = pending_agency(1, "Arbor");
        updated.approved = agency_status::DENIED;
        updated.approved_by_username = Some("admin_kim".to_string());

        let outcome = apply_agency_decision(&mut items, &updated, false);

        assert_eq!(outcome, DecisionOutcome::Updated);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].approved, agency_status::DENIED);
        assert_eq!(
            items[0].approved_by_username.as_deref(),
            Some("admin_kim")
        );
    }

    #[test]
    fn deciding_a_departed_row_is_a_no_op() {
        let mut items = vec![pending_agency(2, "Beacon")];
        let updated = pending_agency(1, "Arbor");
        assert_eq!(
            apply_agency_decision(&mut items, &updated, true),
            DecisionOutcome::Missing
        );
        assert_eq!(items.len(), 1);
    }
}
