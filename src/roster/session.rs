//! # Directory Session
//!
//! [`DirectorySession`] is the facade the view layer talks to. It owns the
//! store plus the current search/filter/sort/pagination state and composes
//! the query engine in a fixed order: search, then department/role
//! filtering, then sort, then pagination. Stages whose criteria are at
//! their defaults pass the collection through untouched.
//!
//! State rules the view layer relies on:
//! - changing search, a filter or the sort resets the page to 1 (the result
//!   set changed, so the old page position is meaningless);
//! - explicit page navigation via [`DirectorySession::set_pagination`] is
//!   never overridden;
//! - `add` and a successful `delete` also reset to page 1.

use crate::error::Result;
use crate::model::{Employee, EmployeeDraft, EmployeeUpdate, SortField, SortOrder};
use crate::query;
use crate::query::Page;
use crate::store::EmployeeStore;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Current search/filter/sort configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub department: String,
    pub role: String,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

/// Current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Stateful view over an [`EmployeeStore`].
#[derive(Debug)]
pub struct DirectorySession {
    store: EmployeeStore,
    filters: FilterState,
    page: PageState,
}

impl DirectorySession {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store,
            filters: FilterState::default(),
            page: PageState::default(),
        }
    }

    /// Run the full pipeline against the store's current records and return
    /// the requested page.
    pub fn get_employees(&self) -> Page {
        let mut employees = self.store.get_all();

        if !self.filters.search.trim().is_empty() {
            employees = query::search(&employees, &self.filters.search);
        }
        if !self.filters.department.is_empty() || !self.filters.role.is_empty() {
            employees = query::filter_by(&employees, &self.filters.department, &self.filters.role);
        }
        if let Some(field) = self.filters.sort_by {
            employees = query::sort(&employees, field, self.filters.sort_order);
        }

        query::paginate(&employees, self.page.current_page, self.page.items_per_page)
    }

    // --- filter state ---

    pub fn set_search_filter(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
        self.reset_page();
    }

    pub fn set_department_filter(&mut self, department: impl Into<String>) {
        self.filters.department = department.into();
        self.reset_page();
    }

    pub fn set_role_filter(&mut self, role: impl Into<String>) {
        self.filters.role = role.into();
        self.reset_page();
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.filters.sort_by = Some(field);
        self.filters.sort_order = order;
        self.reset_page();
    }

    /// Explicit page navigation. Does not touch the filter state and is not
    /// subject to the page-reset rule.
    pub fn set_pagination(&mut self, page: usize, items_per_page: usize) {
        self.page.current_page = page;
        self.page.items_per_page = items_per_page;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.reset_page();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.search.is_empty()
            || !self.filters.department.is_empty()
            || !self.filters.role.is_empty()
            || self.filters.sort_by.is_some()
    }

    pub fn current_filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn current_pagination(&self) -> PageState {
        self.page
    }

    fn reset_page(&mut self) {
        self.page.current_page = 1;
    }

    // --- record mutations, delegated to the store ---

    pub fn add(&mut self, draft: EmployeeDraft) -> Employee {
        let employee = self.store.add(draft);
        self.reset_page();
        employee
    }

    pub fn update(&mut self, id: u32, update: &EmployeeUpdate) -> Result<Employee> {
        self.store.update(id, update)
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let deleted = self.store.delete(id);
        if deleted {
            self.reset_page();
        }
        deleted
    }

    pub fn get_by_id(&self, id: u32) -> Result<Employee> {
        self.store.get_by_id(id)
    }

    /// Restore the store to its seed content and drop all session state.
    pub fn reset_data(&mut self) {
        self.store.reset();
        self.clear_filters();
    }

    // --- lookups over the full record set ---

    /// Distinct departments across all records, in order of first
    /// occurrence. Backs the filter dropdown, so it ignores active filters.
    pub fn get_departments(&self) -> Vec<String> {
        distinct(self.store.get_all().into_iter().map(|e| e.department))
    }

    /// Distinct roles across all records, in order of first occurrence.
    pub fn get_roles(&self) -> Vec<String> {
        distinct(self.store.get_all().into_iter().map(|e| e.role))
    }

    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    /// Number of records surviving search and filtering, before pagination.
    pub fn filtered_count(&self) -> usize {
        self.get_employees().pagination.total_items
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
