//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, guards, badges, dialogs)
//! and take the session handle and callbacks as explicit props.

pub mod decision_modal;
pub mod layout;
pub mod pagination;
pub mod route_guard;
pub mod stat_card;
pub mod status_badge;
pub mod toast;
