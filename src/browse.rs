//! Browse State
//!
//! Search/sort state shared by the list views. Browsing fetches
//! server-ordered pages with an exact page count; searching holds a
//! client-side result set whose page count is a heuristic, and sort
//! changes while searching re-sort that set locally instead of
//! re-fetching.

use crate::models::{Agency, Thread};

/// Server page size for list endpoints.
pub const PAGE_SIZE: usize = 10;

/// Search results carry no true total: a full page is taken to mean at
/// least one more page exists; a short page closes the set.
pub fn search_total_pages(current_page: u32, fetched: usize) -> u32 {
    if fetched >= PAGE_SIZE {
        current_page + 1
    } else {
        current_page.max(1)
    }
}

/// Whether a list view is browsing server-ordered pages or holding a
/// search result set.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum BrowseMode {
    #[default]
    Idle,
    Searching(String),
}

impl BrowseMode {
    /// Submitting search text: non-empty enters search, empty returns
    /// to browsing. Either transition restarts at page 1.
    pub fn submit(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Self::Idle
        } else {
            Self::Searching(text.to_string())
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching(_))
    }
}

// ========================
// Sort orders
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThreadOrder {
    #[default]
    Newest,
    Oldest,
    MostLiked,
}

impl ThreadOrder {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("newest", "Newest"),
        ("oldest", "Oldest"),
        ("mostLiked", "Most liked"),
    ];

    pub fn query_key(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::MostLiked => "mostLiked",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "oldest" => Self::Oldest,
            "mostLiked" => Self::MostLiked,
            _ => Self::Newest,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AgencyOrder {
    #[default]
    Name,
    City,
}

impl AgencyOrder {
    pub const OPTIONS: &'static [(&'static str, &'static str)] =
        &[("name", "Name"), ("city", "City")];

    pub fn query_key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "city" => Self::City,
            _ => Self::Name,
        }
    }
}

/// Client-side re-sort for thread search results (browsing re-fetches
/// in the new order instead). Timestamps are ISO-8601 strings, so they
/// order lexicographically.
pub fn sort_threads(threads: &mut [Thread], order: ThreadOrder) {
    match order {
        ThreadOrder::Newest => threads.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ThreadOrder::Oldest => threads.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ThreadOrder::MostLiked => threads.sort_by(|a, b| {
            b.like_count
                .cmp(&a.like_count)
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }
}

/// Client-side re-sort for agency search results.
pub fn sort_agencies(agencies: &mut [Agency], order: AgencyOrder) {
    match order {
        AgencyOrder::Name => {
            agencies.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        AgencyOrder::City => agencies.sort_by(|a, b| {
            a.city
                .to_lowercase()
                .cmp(&b.city.to_lowercase())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(id: u64, created_at: &str, like_count: i64) -> Thread {
        Thread {
            id,
            title: format!("Thread {id}"),
            body: String::new(),
            author_username: "casey".to_string(),
            created_at: created_at.to_string(),
            like_count,
            liked_by_me: false,
            reply_count: 0,
            hidden: false,
        }
    }

    #[test]
    fn full_search_page_implies_a_further_page() {
        assert_eq!(search_total_pages(1, 10), 2);
        assert_eq!(search_total_pages(2, 10), 3);
    }

    #[test]
    fn short_search_page_closes_the_set() {
        assert_eq!(search_total_pages(1, 3), 1);
        assert_eq!(search_total_pages(2, 9), 2);
        assert_eq!(search_total_pages(1, 0), 1);
    }

    #[test]
    fn submit_trims_and_switches_modes() {
        assert_eq!(BrowseMode::submit("  "), BrowseMode::Idle);
        assert_eq!(
            BrowseMode::submit(" foster "),
            BrowseMode::Searching("foster".to_string())
        );
        assert!(BrowseMode::submit("foster").is_searching());
    }

    #[test]
    fn thread_sorts() {
        let mut threads = vec![
            thread(1, "2026-01-05T10:00:00Z", 2),
            thread(2, "2026-03-01T10:00:00Z", 9),
            thread(3, "2026-02-10T10:00:00Z", 9),
        ];

        sort_threads(&mut threads, ThreadOrder::Newest);
        assert_eq!(threads.iter().map(|t| t.id).collect::<Vec<_>>(), [2, 3, 1]);

        sort_threads(&mut threads, ThreadOrder::Oldest);
        assert_eq!(threads.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 3, 2]);

        sort_threads(&mut threads, ThreadOrder::MostLiked);
        assert_eq!(threads.iter().map(|t| t.id).collect::<Vec<_>>(), [2, 3, 1]);
    }

    #[test]
    fn agency_sort_is_case_insensitive() {
        let mut agencies = vec![
            Agency {
                id: 1,
                name: "beacon House".to_string(),
                address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                phone: None,
                website: None,
                approved: crate::models::agency_status::APPROVED,
                approved_by_username: None,
            },
            Agency {
                id: 2,
                name: "Arbor Family Services".to_string(),
                address: "2 Oak Ave".to_string(),
                city: "albany".to_string(),
                state: "NY".to_string(),
                phone: None,
                website: None,
                approved: crate::models::agency_status::APPROVED,
                approved_by_username: None,
            },
        ];

        sort_agencies(&mut agencies, AgencyOrder::Name);
        assert_eq!(agencies[0].id, 2);

        sort_agencies(&mut agencies, AgencyOrder::City);
        assert_eq!(agencies[0].city, "albany");
    }
}
