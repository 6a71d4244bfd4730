//! Screen state, decoupled from any rendering toolkit.
//!
//! # Design
//! Each screen is a plain struct holding exactly the state its view needs,
//! constructed and mutated through explicit methods instead of living
//! inside a UI framework. Network effects follow the crate-wide
//! host-does-IO pattern: a screen hands the host an `HttpRequest`, the host
//! executes it, and the outcome is folded back in through an `apply_*`
//! method. That keeps every state transition testable without a network.

pub mod details;
pub mod form;
pub mod list;

pub use details::DetailsScreen;
pub use form::{FormScreen, Submission};
pub use list::ListScreen;
