use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::api::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "dashctl")]
#[command(about = "Admin dashboard CLI")]
pub struct Cli {
    #[arg(long, env = "DASHCTL_ADDR")]
    pub addr: Option<String>,
    #[arg(long)]
    pub context: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
    ForgotPassword(ForgotPasswordArgs),
    Logout,
    Whoami,
    #[command(about = "Send a raw request to the dashboard API")]
    Api(ApiArgs),
    Config(ConfigArgs),
}
