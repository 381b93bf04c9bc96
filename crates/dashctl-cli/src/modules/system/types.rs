use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use dashctl_core::UserProfile;

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: HashMap<String, CliContext>,
}

/// One named server. The profile slot holds the signed-in user; the access
/// token for the same context lives in the keyring, not here.
#[derive(Serialize, Deserialize, Clone)]
pub struct CliContext {
    pub addr: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

pub struct CommandContext<'a> {
    pub client: &'a reqwest::Client,
    pub addr: &'a str,
    pub context_name: Option<String>,
    pub config: &'a mut CliConfig,
}
