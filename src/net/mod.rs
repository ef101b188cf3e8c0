//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` wraps fetch with auth and error normalization, `error_codes`
//! translates backend codes, `query` builds list parameters, and `types`
//! defines the wire schema.

pub mod error_codes;
pub mod http;
pub mod query;
pub mod types;
