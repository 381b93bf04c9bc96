use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::cli_args::ApiArgs;
use crate::modules::api::{dispatch, ApiMethod, RequestOptions};
use crate::modules::auth::load_access_token;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_api(args: ApiArgs, ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let method: ApiMethod = args.method.parse()?;
    let payload = args
        .data
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .context("--data must be valid JSON")?;

    let mut options = RequestOptions::default();
    if let Some(seconds) = args.timeout {
        options.deadline = Some(Duration::from_secs(seconds));
    }
    if let Some(context_name) = ctx.context_name.as_deref() {
        if let Some(token) = load_access_token(context_name)? {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            options.headers.insert(AUTHORIZATION, value);
        }
    }

    let envelope = dispatch(ctx.client, ctx.addr, method, &args.path, payload, options).await?;
    println!("{}", serde_json::to_string_pretty(envelope.body())?);
    Ok(())
}
