pub(crate) mod actions;
pub(crate) mod args;
mod store;

pub(crate) use actions::{
    handle_forgot_password, handle_login, handle_logout, handle_register, handle_whoami,
};
pub(crate) use store::load_access_token;
#[cfg(test)]
pub(crate) use store::{clear_keyring_mock, lock_keyring_tests_async, store_access_token};
