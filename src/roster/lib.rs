//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee directory library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! That distinction drives the architecture: everything under `lib.rs` takes
//! plain Rust arguments, returns plain Rust types, and never touches
//! stdout/stderr or a terminal. The same core could back a web UI, a TUI or
//! a REST service.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs + print.rs, binary only)      │
//! │  - Parses arguments, renders tables, maps errors to exits   │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - Owns search/filter/sort/pagination state                 │
//! │  - Composes the query pipeline against the store            │
//! │  - Enforces the page-reset rules                            │
//! └─────────────────────────────────────────────────────────────┘
//!                     │                       │
//!                     ▼                       ▼
//! ┌───────────────────────────┐ ┌─────────────────────────────┐
//! │  Query Engine (query.rs)  │ │  Record Store (store.rs)    │
//! │  - Pure search/filter/    │ │  - Owns the record vec      │
//! │    sort/paginate functions│ │  - Monotone id allocation   │
//! │  - No state, no store     │ │  - Clone-out snapshots      │
//! └───────────────────────────┘ └─────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Validation Engine (validate.rs) — independent of the rest  │
//! │  - Field rules in a fixed order, full-form error maps       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query pipeline
//!
//! `DirectorySession::get_employees` always applies stages in the same
//! order: search → department/role filter → sort → paginate. A stage whose
//! criteria are at their defaults passes the collection through untouched.
//! Filtering runs over the *search-narrowed* set, so combining search with
//! a department filter yields the intersection, not a union.
//!
//! ## Error model
//!
//! Expected conditions are values, not panics: a missing id comes back as
//! [`error::RosterError::EmployeeNotFound`] for the caller to branch on,
//! and bad form input comes back as an error map from
//! [`validate::validate_form`]. The library performs no I/O of its own
//! (seed loading from a file lives in the CLI), so there is no transient
//! failure class.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Employee`, drafts/updates, sort enums)
//! - [`store`]: The owned record collection and id allocation
//! - [`query`]: Pure query functions and pagination metadata
//! - [`session`]: The stateful facade the view layer drives
//! - [`validate`]: Form validation rules and error maps
//! - [`error`]: Error types

pub mod error;
pub mod model;
pub mod query;
pub mod session;
pub mod store;
pub mod validate;
