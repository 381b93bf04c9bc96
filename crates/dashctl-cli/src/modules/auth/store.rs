//! The access token lives in the OS keyring, one slot per context. The user
//! profile is deliberately stored elsewhere (in the config file): token and
//! profile are two separate named slots, never the same key.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};
#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
use tracing::debug;
#[cfg(not(test))]
use tracing::warn;

#[cfg(not(test))]
const KEYRING_SERVICE: &str = "dashctl";

fn keyring_key(context_name: &str) -> String {
    format!("access::{context_name}")
}

#[cfg(not(test))]
fn keyring_entry(context_name: &str) -> anyhow::Result<keyring::Entry> {
    keyring::Entry::new(KEYRING_SERVICE, &keyring_key(context_name))
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(context_name: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(context_name)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store access token: {err}"))
}

#[cfg(not(test))]
fn keyring_get(context_name: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(context_name)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load access token from keychain for context '{}': {err}",
            context_name
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(context_name: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(context_name)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => {
            warn!(context = %context_name, "failed to delete access token: {err}");
            Ok(())
        }
    }
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
pub(crate) fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(test)]
pub(crate) async fn lock_keyring_tests_async() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .lock()
        .await
}

#[cfg(test)]
fn keyring_set(context_name: &str, value: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(keyring_key(context_name), value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(context_name: &str) -> anyhow::Result<Option<String>> {
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(&keyring_key(context_name)).cloned())
}

#[cfg(test)]
fn keyring_delete(context_name: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(&keyring_key(context_name));
    Ok(())
}

#[cfg(test)]
pub(crate) fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}

pub(crate) fn store_access_token(context_name: &str, token: &str) -> anyhow::Result<()> {
    keyring_set(context_name, token)?;
    debug!(context = %context_name, "stored access token in keyring");
    Ok(())
}

pub(crate) fn load_access_token(context_name: &str) -> anyhow::Result<Option<String>> {
    keyring_get(context_name)
}

pub(crate) fn delete_access_token(context_name: &str) -> anyhow::Result<()> {
    keyring_delete(context_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyring_access_roundtrip() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        store_access_token("ctx", "access")?;
        assert_eq!(load_access_token("ctx")?, Some("access".to_string()));
        delete_access_token("ctx")?;
        assert_eq!(load_access_token("ctx")?, None);
        Ok(())
    }

    #[test]
    fn contexts_use_distinct_slots() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        store_access_token("dev", "access-dev")?;
        store_access_token("prod", "access-prod")?;
        assert_eq!(load_access_token("dev")?, Some("access-dev".to_string()));
        assert_eq!(load_access_token("prod")?, Some("access-prod".to_string()));
        delete_access_token("dev")?;
        assert_eq!(load_access_token("prod")?, Some("access-prod".to_string()));
        Ok(())
    }
}
