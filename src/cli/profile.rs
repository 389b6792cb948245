//! Profile commands

use clap::Subcommand;

use super::CliContext;
use crate::api::UsersApi;
use crate::error::BarberResult;
use crate::models::{ServerStats, UpdateProfileRequest, User};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the signed-in user's profile
    Show,
    /// Statistics kept by the backend
    Stats,
    /// Update profile fields
    Update {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        /// Avatar image URL
        #[arg(long)]
        avatar: Option<String>,
    },
}

pub async fn handle_profile_command(ctx: &CliContext, cmd: ProfileCommands) -> BarberResult<()> {
    let users = UsersApi::new(&ctx.client);

    match cmd {
        ProfileCommands::Show => {
            let user = users.profile().await?;
            print!("{}", format_profile(&user, &ctx.settings.date_format));
        }
        ProfileCommands::Stats => {
            let stats = users.stats().await?;
            print!("{}", format_server_stats(&stats));
        }
        ProfileCommands::Update {
            name,
            phone,
            avatar,
        } => {
            let request = UpdateProfileRequest {
                name,
                phone,
                avatar,
            };
            let user = users.update_profile(&request).await?;
            println!("Perfil actualizado.");
            print!("{}", format_profile(&user, &ctx.settings.date_format));
        }
    }

    Ok(())
}

fn format_profile(user: &User, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Nombre:   {}\n", user.name));
    output.push_str(&format!("Email:    {}\n", user.email));
    if let Some(phone) = &user.phone {
        output.push_str(&format!("Teléfono: {}\n", phone));
    }
    if let Some(created) = user.created_at {
        output.push_str(&format!(
            "Miembro desde: {}\n",
            crate::display::format_date(created.date_naive(), date_format)
        ));
    }
    output
}

fn format_server_stats(stats: &ServerStats) -> String {
    let mut output = String::new();
    if let Some(total) = stats.total_appointments {
        output.push_str(&format!("Citas totales:    {}\n", total));
    }
    if let Some(upcoming) = stats.upcoming_appointments {
        output.push_str(&format!("Próximas:         {}\n", upcoming));
    }
    if let Some(barber) = &stats.favorite_barber {
        output.push_str(&format!("Barbero favorito: {}\n", barber));
    }
    if let Some(since) = &stats.member_since {
        output.push_str(&format!("Miembro desde:    {}\n", since));
    }
    if let Some(points) = stats.loyalty_points {
        output.push_str(&format!("Puntos:           {}\n", points));
    }
    if let Some(rating) = stats.average_rating {
        output.push_str(&format!("Calificación:     {:.1}\n", rating));
    }
    if output.is_empty() {
        output.push_str("Sin estadísticas todavía.\n");
    }
    output
}
