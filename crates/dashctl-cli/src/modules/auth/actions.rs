use anyhow::anyhow;
use tracing::debug;

use dashctl_core::{
    two_initials, ForgotPasswordRequest, LoginRequest, RegisterRequest, UserProfile,
};

use super::store::{delete_access_token, store_access_token};
use crate::cli_args::{ForgotPasswordArgs, LoginArgs, RegisterArgs};
use crate::modules::api::{dispatch, ApiError, ApiMethod, RequestOptions};
use crate::modules::system::{CliContext, CommandContext};
use crate::prompt_password;

pub(crate) async fn handle_login(
    args: LoginArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    validate_email(&args.email)?;
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    let context_name = args
        .context
        .or_else(|| ctx.context_name.clone())
        .unwrap_or_else(|| "default".to_string());

    let payload = LoginRequest {
        email: args.email,
        password,
    };
    let envelope = dispatch(
        ctx.client,
        ctx.addr,
        ApiMethod::Post,
        "/api/auth/login",
        Some(serde_json::to_value(&payload)?),
        RequestOptions::default(),
    )
    .await
    .map_err(|err| report_transport("login", err))?;

    if !envelope.ok() {
        anyhow::bail!(
            "{}",
            envelope.message().unwrap_or("login failed, please try again")
        );
    }
    let token: String = envelope
        .field("token")
        .ok_or_else(|| anyhow!("login response missing token"))?;
    let profile: UserProfile = envelope
        .field("user")
        .ok_or_else(|| anyhow!("login response missing user"))?;

    // Token and profile go to two separate slots: keyring and config file.
    store_access_token(&context_name, &token)?;
    let entry = ctx
        .config
        .contexts
        .entry(context_name.clone())
        .or_insert_with(|| CliContext {
            addr: ctx.addr.to_string(),
            profile: None,
        });
    entry.addr = ctx.addr.to_string();
    entry.profile = Some(profile);
    ctx.config.current_context = Some(context_name);

    println!("Logged in");
    Ok(())
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("name is required");
    }
    validate_email(&args.email)?;
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }

    let payload = RegisterRequest {
        name: args.name,
        email: args.email,
        password,
    };
    let envelope = dispatch(
        ctx.client,
        ctx.addr,
        ApiMethod::Post,
        "/api/auth/register",
        Some(serde_json::to_value(&payload)?),
        RequestOptions::default(),
    )
    .await
    .map_err(|err| report_transport("registration", err))?;

    if !envelope.ok() {
        anyhow::bail!(
            "{}",
            envelope
                .message()
                .unwrap_or("registration failed, please try again")
        );
    }
    println!("Registered; run `dashctl login` to sign in");
    Ok(())
}

pub(crate) async fn handle_forgot_password(
    args: ForgotPasswordArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    validate_email(&args.email)?;

    let payload = ForgotPasswordRequest { email: args.email };
    let envelope = dispatch(
        ctx.client,
        ctx.addr,
        ApiMethod::Post,
        "/api/auth/forgot-password",
        Some(serde_json::to_value(&payload)?),
        RequestOptions::default(),
    )
    .await
    .map_err(|err| report_transport("password reset", err))?;

    if !envelope.ok() {
        anyhow::bail!(
            "{}",
            envelope
                .message()
                .unwrap_or("password reset failed, please try again")
        );
    }
    println!(
        "{}",
        envelope.message().unwrap_or("Password reset email sent")
    );
    Ok(())
}

pub(crate) fn handle_logout(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let context_name = ctx
        .context_name
        .clone()
        .ok_or_else(|| anyhow!("no active session; nothing to log out"))?;
    delete_access_token(&context_name)?;
    if let Some(context) = ctx.config.contexts.get_mut(&context_name) {
        context.profile = None;
    }
    println!("Logged out");
    Ok(())
}

pub(crate) fn handle_whoami(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let profile = ctx
        .context_name
        .as_deref()
        .and_then(|name| ctx.config.contexts.get(name))
        .and_then(|context| context.profile.as_ref())
        .ok_or_else(|| anyhow!("no stored session; run `dashctl login`"))?;
    println!("{} [{}]", profile.name, two_initials(&profile.name));
    println!("{}", profile.email);
    Ok(())
}

fn validate_email(email: &str) -> anyhow::Result<()> {
    if !dashctl_core::is_valid_email(email) {
        anyhow::bail!("enter a valid email address");
    }
    Ok(())
}

// Transport failures surface as a generic message; the cause only goes
// to the debug log.
fn report_transport(action: &str, err: ApiError) -> anyhow::Error {
    debug!(action = %action, error = %err, "request failed");
    anyhow!("{action} failed, please try again")
}
