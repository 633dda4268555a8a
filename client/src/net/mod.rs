//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` moves requests over `fetch`, `api` names the endpoints each page
//! uses, and `types` defines the JSON schema they return.

pub mod api;
pub mod http;
pub mod types;
