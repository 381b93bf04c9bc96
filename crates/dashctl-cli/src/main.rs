use clap::Parser;
use std::io::{self, Write};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::Cli;
use crate::cli_command::handle_command;
use crate::modules::system::{load_config, resolve_addr, save_config, CommandContext};
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_ADDR: &str = "http://localhost:5000";
pub(crate) const CONFIG_DIR_ENV: &str = "DASHCTL_CONFIG_DIR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let client = reqwest::Client::builder().build()?;
    let mut config = load_config()?;

    let context_name = cli.context.clone().or_else(|| config.current_context.clone());
    let addr = resolve_addr(cli.addr.clone(), context_name.clone(), &config)?;

    let mut ctx = CommandContext {
        client: &client,
        addr: &addr,
        context_name,
        config: &mut config,
    };
    handle_command(cli.command, &mut ctx).await?;
    save_config(ctx.config)?;
    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
