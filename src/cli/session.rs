//! Session inspection and manual refresh

use clap::Subcommand;

use super::CliContext;
use crate::api::AuthApi;
use crate::error::BarberResult;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show whether a session is stored
    Status,
    /// Exchange the stored refresh token for a new access token
    Refresh,
}

pub async fn handle_session_command(ctx: &CliContext, cmd: SessionCommands) -> BarberResult<()> {
    let session = ctx.client.session();

    match cmd {
        SessionCommands::Status => {
            println!("API:           {}", ctx.client.base_url());
            println!("Archivo:       {}", ctx.paths.session_file().display());
            println!(
                "Sesión:        {}",
                if session.is_authenticated() {
                    "activa"
                } else {
                    "sin sesión"
                }
            );
            println!(
                "Refresh token: {}",
                if session.refresh_token().is_some() {
                    "guardado"
                } else {
                    "ninguno"
                }
            );
        }
        SessionCommands::Refresh => {
            AuthApi::new(&ctx.client).refresh().await?;
            println!("Sesión renovada.");
        }
    }

    Ok(())
}
