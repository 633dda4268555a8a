//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its own fetches, filters and
//! redirects) and delegates rendering details to `components`. Every page
//! receives the session handle as a prop.

pub mod admin_appeals;
pub mod admin_bundles;
pub mod admin_users;
pub mod analytics;
pub mod banned;
pub mod dashboard;
pub mod google_callback;
pub mod login;
pub mod register;
