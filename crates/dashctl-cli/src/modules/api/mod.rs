pub(crate) mod actions;
pub(crate) mod args;
mod error;
pub(crate) mod http;

pub(crate) use actions::handle_api;
pub(crate) use error::ApiError;
pub(crate) use http::{dispatch, ApiMethod, RequestOptions};
