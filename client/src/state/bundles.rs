//! Admin bundle-browser model: query scope, search and pagination window.

#[cfg(test)]
#[path = "bundles_test.rs"]
mod bundles_test;

use crate::net::types::Bundle;

/// Most page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Which listing the bundle browser is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BundleScope {
    /// Every bundle, one server page at a time.
    All { page: u32 },
    /// One owner's bundles, unpaginated.
    Owner { user_id: String },
}

impl BundleScope {
    /// Scope for the owner select's value (`""` means all owners).
    pub fn from_selection(user_id: &str, page: u32) -> Self {
        if user_id.is_empty() {
            Self::All { page: page.max(1) }
        } else {
            Self::Owner { user_id: user_id.to_owned() }
        }
    }
}

/// Page numbers to show: at most [`PAGE_WINDOW`], centred on `current` and
/// clamped to `1..=last`.
pub fn page_window(current: u32, last: u32) -> Vec<u32> {
    if last == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, last);
    let len = PAGE_WINDOW.min(last);
    let half = PAGE_WINDOW / 2;
    let start = if last <= PAGE_WINDOW || current <= half + 1 {
        1
    } else if current + half >= last {
        last - PAGE_WINDOW + 1
    } else {
        current - half
    };
    (start..start + len).collect()
}

/// Page-number navigation is shown only when there is more than one page.
pub fn needs_pagination(last_page: u32) -> bool {
    last_page > 1
}

/// Case-insensitive search over title, slug and owner name.
pub fn filter_bundles(bundles: &[Bundle], search: &str) -> Vec<Bundle> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return bundles.to_vec();
    }
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&needle));
    bundles
        .iter()
        .filter(|b| {
            contains(Some(b.display_title()))
                || contains(b.slug.as_deref())
                || contains(b.user.as_ref().and_then(|u| u.name.as_deref()))
        })
        .cloned()
        .collect()
}

pub const DELETE_PROMPT: &str = "Delete this bundle? This cannot be undone.";
