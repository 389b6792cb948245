//! Dashboard and landing screens

use super::CliContext;
use crate::api::{AppointmentsApi, UsersApi};
use crate::dashboard::{split_appointments, UserStats};
use crate::display::{format_appointment_table, format_user_stats};
use crate::error::BarberResult;

pub async fn handle_dashboard(ctx: &CliContext) -> BarberResult<()> {
    let user = UsersApi::new(&ctx.client).profile().await?;
    let appointments = AppointmentsApi::new(&ctx.client).list_for_user().await?;

    let stats = UserStats::from_appointments(&appointments);
    let split = split_appointments(&appointments);

    print!("{}", format_user_stats(&stats, Some(&user), &ctx.settings));
    println!();
    println!("Próximas citas");
    print!(
        "{}",
        format_appointment_table(&split.upcoming, &ctx.settings, "No tienes citas próximas.")
    );
    println!();
    println!("Run 'barber book' to make a new booking.");
    Ok(())
}

/// Shown to signed-out users
pub fn handle_home() {
    println!("barber - reserva tu cita desde la terminal");
    println!();
    println!("Run 'barber login' to sign in, or 'barber register' to create an account.");
    println!("Run 'barber --help' for usage information.");
}
