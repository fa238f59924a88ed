//! API wire protocol shared with the JuriFy backend

pub mod types;

pub use types::*;
