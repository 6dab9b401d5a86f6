//! Frontend Models
//!
//! Data structures mirroring backend REST responses.

use serde::{Deserialize, Serialize};

/// Forum thread (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author_username: String,
    pub created_at: String,
    pub like_count: i64,
    pub liked_by_me: bool,
    pub reply_count: u32,
    #[serde(default)]
    pub hidden: bool,
}

/// Reply to a thread (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: u64,
    pub thread_id: u64,
    pub body: String,
    pub author_username: String,
    pub created_at: String,
    pub like_count: i64,
    pub liked_by_me: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// FAQ entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub author_username: String,
    pub created_at: String,
}

/// Approval codes for agency listings.
pub mod agency_status {
    pub const PENDING: u8 = 1;
    pub const APPROVED: u8 = 2;
    pub const DENIED: u8 = 3;
}

/// Foster agency listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub approved: u8,
    pub approved_by_username: Option<String>,
}

/// Logged-in user summary with permission flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    pub full_name: String,
    pub join_date: String,
    pub profile_pic_url: Option<String>,
    pub admin: bool,
    pub agent: bool,
    pub faq_author: bool,
}

/// Public profile of any user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub full_name: String,
    pub join_date: String,
    pub profile_pic_url: Option<String>,
    pub bio: Option<String>,
    pub thread_count: u32,
    pub reply_count: u32,
}

// ========================
// Page envelopes
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPage {
    pub threads: Vec<Thread>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPage {
    pub replies: Vec<Reply>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    pub faqs: Vec<Faq>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyPage {
    pub agencies: Vec<Agency>,
    pub total_pages: u32,
}
