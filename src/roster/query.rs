//! # Query Engine
//!
//! Pure transformations over a record snapshot. The session composes these
//! in a fixed order — search, then department/role filtering, then sort,
//! then pagination — and each function here is independently testable with
//! no store in sight.

use crate::model::{Employee, SortField, SortOrder};
use serde::Serialize;

/// One page of results plus the metadata the view layer needs to draw
/// pagination controls.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub employees: Vec<Employee>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Case-insensitive substring search over first name, last name and email.
/// An empty or whitespace-only term matches everything.
pub fn search(records: &[Employee], term: &str) -> Vec<Employee> {
    if term.trim().is_empty() {
        return records.to_vec();
    }
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|e| {
            e.first_name.to_lowercase().contains(&term)
                || e.last_name.to_lowercase().contains(&term)
                || e.email.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Exact-match filtering on department and role. An empty value places no
/// constraint on its field.
pub fn filter_by(records: &[Employee], department: &str, role: &str) -> Vec<Employee> {
    records
        .iter()
        .filter(|e| {
            let dept_match = department.is_empty() || e.department == department;
            let role_match = role.is_empty() || e.role == role;
            dept_match && role_match
        })
        .cloned()
        .collect()
}

/// Stable sort by the named field. String keys compare case-insensitively;
/// records with equal keys keep their relative order from the input.
pub fn sort(records: &[Employee], field: SortField, order: SortOrder) -> Vec<Employee> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let key_a = field.key_of(a).to_lowercase();
        let key_b = field.key_of(b).to_lowercase();
        match order {
            SortOrder::Asc => key_a.cmp(&key_b),
            SortOrder::Desc => key_b.cmp(&key_a),
        }
    });
    sorted
}

/// Slice out one 1-based page, clipped to the collection bounds. A page past
/// the end yields an empty slice rather than an error; `items_per_page` of
/// zero yields zero pages.
pub fn paginate(records: &[Employee], page: usize, items_per_page: usize) -> Page {
    let total_items = records.len();
    let total_pages = if items_per_page == 0 {
        0
    } else {
        total_items.div_ceil(items_per_page)
    };

    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    let end = start.saturating_add(items_per_page).min(total_items);
    let employees = if start < end {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        employees,
        pagination: PaginationMeta {
            current_page: page,
            total_pages,
            total_items,
            items_per_page,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    }
}
