//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `news_list`, `toasts`) so individual
//! components can depend on small focused models. Each lives in a
//! `RwSignal` provided via context by the root component.

pub mod news_list;
pub mod session;
pub mod toasts;
