use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    SetContext(SetContextArgs),
    UseContext(UseContextArgs),
    CurrentContext,
    GetContexts,
}

#[derive(Args)]
pub struct SetContextArgs {
    pub name: String,
    #[arg(long)]
    pub addr: Option<String>,
}

#[derive(Args)]
pub struct UseContextArgs {
    pub name: String,
}
