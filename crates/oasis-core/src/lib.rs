//! Business logic and domain model for the Oasis resource directory.
//!
//! This crate sits between `oasis-api` (raw HTTP clients) and UI
//! consumers (the CLI):
//!
//! - **Domain model** ([`model`]) — canonical types (`Resource`,
//!   `Category`, `DaySchedule`, `SavedSet`) converted from the wire
//!   records the backend returns.
//!
//! - **[`filter_and_sort`]** — the pure filter/sort engine: given a
//!   fetched resource list and a [`FilterCriteria`], produce the ordered
//!   subset to display. Referentially transparent; safe to re-run on
//!   every state change.
//!
//! - **[`hours`]** — the operating-hours evaluator: is a resource open
//!   at a given timestamp? Schedule rows are matched by weekday *name*,
//!   never by positional index.
//!
//! - **[`geo`]** — haversine distance and the mile conversion constant.
//!
//! - **[`Directory`]** — a one-shot facade over the backend and auth
//!   clients. Fetches are single request-response cycles with no retry,
//!   cache, or background refresh; a missing payload degrades to an
//!   empty list.

pub mod convert;
pub mod directory;
pub mod error;
pub mod filter;
pub mod geo;
pub mod hours;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use directory::{Directory, DirectoryConfig};
pub use error::CoreError;
pub use filter::{CostCeiling, FilterCriteria, SortKey, filter_and_sort};
pub use hours::is_open_at;

pub use model::{
    Category,
    Contact,
    Cost,
    Day,
    DaySchedule,
    FinancialAid,
    InternalNote,
    Period,
    PhoneNumber,
    Resource,
    SavedSet,
};
