use crate::cli_args::Command;
use crate::modules::api::handle_api;
use crate::modules::auth::{
    handle_forgot_password, handle_login, handle_logout, handle_register, handle_whoami,
};
use crate::modules::system::{handle_config_command, CommandContext};

pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => handle_login(args, ctx).await?,
        Command::Register(args) => handle_register(args, ctx).await?,
        Command::ForgotPassword(args) => handle_forgot_password(args, ctx).await?,
        Command::Logout => handle_logout(ctx)?,
        Command::Whoami => handle_whoami(ctx)?,
        Command::Api(args) => handle_api(args, ctx).await?,
        Command::Config(args) => handle_config_command(args, ctx.config)?,
    }
    Ok(())
}
