//! Booking wizard display formatting

use super::format_date;
use crate::booking::{BookingSelection, BookingWizard};
use crate::config::Settings;
use crate::models::Appointment;

const PROGRESS_WIDTH: usize = 30;

/// Header shown above each wizard step: title, progress bar and description
pub fn format_step_header(wizard: &BookingWizard) -> String {
    let step = wizard.step();
    let percent = usize::from(wizard.progress_percent());
    let filled = PROGRESS_WIDTH * percent / 100;

    format!(
        "\n{}  {:>3}%\n[{}{}]\n{}\n\n",
        step,
        percent,
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        step.description()
    )
}

/// Review of the whole selection before confirming
pub fn format_booking_summary(selection: &BookingSelection, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let summary = crate::booking::BookingSummary::of(selection);
    let mut output = String::new();

    output.push_str("Barbería y Barbero\n");
    match &selection.barbershop {
        Some(shop) => {
            output.push_str(&format!("  {}\n", shop.name));
            output.push_str(&format!("  {}\n", shop.address));
        }
        None => output.push_str("  (sin barbería)\n"),
    }
    match &selection.barber {
        Some(barber) => {
            output.push_str(&format!("  Barbero: {}\n", barber.name));
            if !barber.specialties.is_empty() {
                output.push_str(&format!("  {}\n", barber.specialties.join(", ")));
            }
        }
        None => output.push_str("  (sin barbero)\n"),
    }

    output.push_str("\nFecha y Hora\n");
    match &selection.date_time {
        Some(slot) => {
            output.push_str(&format!("  {}\n", format_date(slot.date, &settings.date_format)));
            output.push_str(&format!("  {}\n", slot.time));
        }
        None => output.push_str("  (sin fecha)\n"),
    }

    output.push_str("\nServicios\n");
    for service in &selection.services {
        output.push_str(&format!(
            "  {:30} {:>4} min {:>10}\n",
            service.name,
            service.duration,
            service.price.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!("  {}\n", "-".repeat(47)));
    output.push_str(&format!(
        "  {:30} {:>4} min {:>10}\n",
        "Total",
        summary.total_duration,
        summary.total_price.format_with_symbol(symbol)
    ));

    output
}

/// Message shown once the backend accepted the booking
pub fn format_confirmation(appointment: &Appointment, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("¡Reserva Confirmada!\n");
    output.push_str("Tu cita ha sido reservada exitosamente.\n\n");
    output.push_str(&format!("  Número de reserva: {}\n", appointment.id));
    output.push_str(&format!(
        "  Fecha:             {}\n",
        format_date(appointment.date_time.date, &settings.date_format)
    ));
    output.push_str(&format!("  Hora:              {}\n", appointment.date_time.time));
    output.push_str(&format!("  Estado:            {}\n", appointment.status));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingUpdate, ServiceChoice, ShopChoice};
    use crate::models::{BarbershopId, DateTimeSlot, Money, ServiceId};

    #[test]
    fn test_step_header_progress() {
        let wizard = BookingWizard::new();
        let output = format_step_header(&wizard);
        assert!(output.contains("Paso 1 de 5: Barbería"));
        assert!(output.contains(" 20%"));
        assert!(output.contains(&format!("[{}{}]", "#".repeat(6), "-".repeat(24))));
    }

    #[test]
    fn test_summary_totals_line() {
        let mut selection = BookingSelection::default();
        selection.merge(BookingUpdate::barbershop(ShopChoice {
            id: BarbershopId::new("1"),
            name: "Barbería Clásica".into(),
            address: "Av. Principal 123".into(),
        }));
        selection.toggle_service(ServiceChoice {
            id: ServiceId::new("s1"),
            name: "Corte de Cabello".into(),
            price: Money::from_units(25000),
            duration: 30,
        });
        selection.toggle_service(ServiceChoice {
            id: ServiceId::new("s2"),
            name: "Arreglo de Barba".into(),
            price: Money::from_units(15000),
            duration: 20,
        });
        selection.merge(BookingUpdate::date_time(
            DateTimeSlot::parse("2024-12-20", "14:30").unwrap(),
        ));

        let output = format_booking_summary(&selection, &Settings::default());
        assert!(output.contains("Barbería Clásica"));
        assert!(output.contains("(sin barbero)"));
        assert!(output.contains("14:30"));
        let total = output.lines().last().unwrap();
        assert!(total.contains("50 min"));
        assert!(total.contains("$40.000"));
    }
}
