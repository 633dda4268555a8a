//! Client state: the reactive session handle and page-local models.
//!
//! DESIGN
//! ======
//! `auth` is the only shared state. The other modules hold pure derivations
//! over collections that each page fetches and owns itself.

pub mod analytics;
pub mod appeals;
pub mod auth;
pub mod bundles;
pub mod users;
