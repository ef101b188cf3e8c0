//! Per-resource REST service wrappers.
//!
//! ARCHITECTURE
//! ============
//! Each module exposes the CRUD subset its resource supports, builds URLs
//! from the configured base path, and delegates to `net::http`. Services own
//! no state; the session store and pages do.

pub mod auth;
pub mod authors;
pub mod comments;
pub mod news;
pub mod oauth2;
pub mod tags;
