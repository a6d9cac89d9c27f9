// ── Unified domain model ──
//
// Every type in this module is the canonical representation of a
// directory entity. They are converted from the wire records in
// `oasis-api` into a single clean interface that consumers (the CLI)
// depend on.

pub mod category;
pub mod cost;
pub mod resource;
pub mod saved;
pub mod schedule;

// ── Re-exports ──────────────────────────────────────────────────────

pub use category::Category;
pub use cost::Cost;
pub use resource::{Contact, FinancialAid, InternalNote, PhoneNumber, Resource};
pub use saved::SavedSet;
pub use schedule::{Day, DaySchedule, Period};
