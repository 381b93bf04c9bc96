#![deny(clippy::unwrap_used)]

pub mod api;
pub mod text;

pub use crate::api::*;
pub use crate::text::*;
