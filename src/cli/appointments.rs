//! Appointment management commands

use clap::Subcommand;

use super::prompt::confirm;
use super::CliContext;
use crate::api::AppointmentsApi;
use crate::dashboard::split_appointments;
use crate::display::{format_appointment_details, format_appointment_table, format_slot_list};
use crate::error::BarberResult;
use crate::models::{parse_date, AppointmentId, BarberId, DateTimeSlot};

#[derive(Subcommand)]
pub enum AppointmentsCommands {
    /// List your appointments
    List {
        /// Only confirmed or pending appointments
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,
        /// Only completed or cancelled appointments
        #[arg(long)]
        past: bool,
    },
    /// Show one appointment
    Show {
        /// Appointment ID
        id: String,
    },
    /// Cancel an appointment
    Cancel {
        /// Appointment ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move an appointment to another date and time
    Reschedule {
        /// Appointment ID
        id: String,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// New time (HH:MM)
        #[arg(short, long)]
        time: String,
    },
    /// List a barber's free slots on a date
    Slots {
        /// Barber ID
        barber: String,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },
}

pub async fn handle_appointments_command(
    ctx: &CliContext,
    cmd: AppointmentsCommands,
) -> BarberResult<()> {
    let api = AppointmentsApi::new(&ctx.client);

    match cmd {
        AppointmentsCommands::List { upcoming, past } => {
            let appointments = api.list_for_user().await?;
            let split = split_appointments(&appointments);

            if !past {
                println!("Próximas citas");
                print!(
                    "{}",
                    format_appointment_table(
                        &split.upcoming,
                        &ctx.settings,
                        "No tienes citas próximas."
                    )
                );
            }
            if !upcoming {
                if !past {
                    println!();
                }
                println!("Historial");
                print!(
                    "{}",
                    format_appointment_table(&split.past, &ctx.settings, "No hay citas anteriores.")
                );
            }
        }

        AppointmentsCommands::Show { id } => {
            let appointment = api.get(&AppointmentId::new(id)).await?;
            print!("{}", format_appointment_details(&appointment, &ctx.settings));
        }

        AppointmentsCommands::Cancel { id, yes } => {
            let id = AppointmentId::new(id);
            if !yes && !confirm(&format!("¿Cancelar la cita {}?", id), false)? {
                println!("La cita no fue cancelada.");
                return Ok(());
            }

            match api.cancel(&id).await? {
                Some(appointment) => {
                    println!("Cita cancelada.");
                    print!("{}", format_appointment_details(&appointment, &ctx.settings));
                }
                None => println!("Cita {} cancelada.", id),
            }
        }

        AppointmentsCommands::Reschedule { id, date, time } => {
            let slot = DateTimeSlot::parse(&date, &time)?;
            let appointment = api.reschedule(&AppointmentId::new(id), slot).await?;
            println!("Cita reprogramada.");
            print!("{}", format_appointment_details(&appointment, &ctx.settings));
        }

        AppointmentsCommands::Slots { barber, date } => {
            let date = parse_date(&date)?;
            let slots = api.available_slots(&BarberId::new(barber), date).await?;
            print!("{}", format_slot_list(&slots));
        }
    }

    Ok(())
}
