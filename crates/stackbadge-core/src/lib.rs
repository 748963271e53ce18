//! # stackbadge-core - Technology Badge Registry
//!
//! Static mapping from short technology identifiers (e.g. `"angular"`,
//! `"mysql"`) to the display metadata the web UI needs to render a
//! technology/skill badge: display name, icon identifier, and an optional
//! styling class.
//!
//! The registry is built once from a literal table and never mutated.
//! Lookups are total: an unknown key resolves to the designated fallback
//! badge instead of an error, so rendering code always has something to
//! draw.
//!
//! ## Public API
//!
//! ### Types (`badge`)
//! - [`Badge`] - Display metadata for one badge (name, icon, optional class)
//!
//! ### Registry (`registry`)
//! - [`lookup`] - Resolve a key to its badge, falling back on a miss
//! - [`get`] - Miss-visible variant returning `Option`
//! - [`fallback`] - The designated fallback badge
//! - [`contains`], [`keys`], [`badges`], [`len`], [`is_empty`] - Read-only
//!   table access
//!
//! ## Example
//!
//! ```rust
//! use stackbadge_core::lookup;
//!
//! let badge = lookup("python");
//! assert_eq!(badge.name, "Python");
//! assert_eq!(badge.icon_name, "python");
//!
//! // Unknown keys resolve to the fallback badge.
//! assert_eq!(lookup("not-a-technology").name, "HTML 5");
//! ```

pub mod badge;
pub mod registry;

pub use badge::Badge;
pub use registry::{
    badges, contains, fallback, get, is_empty, keys, len, lookup, FALLBACK_KEY,
};
