//! Appointment display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_date, truncate};
use crate::config::Settings;
use crate::models::Appointment;

#[derive(Tabled)]
struct AppointmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fecha")]
    date: String,
    #[tabled(rename = "Hora")]
    time: String,
    #[tabled(rename = "Barbería")]
    barbershop: String,
    #[tabled(rename = "Barbero")]
    barber: String,
    #[tabled(rename = "Servicios")]
    services: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Estado")]
    status: String,
}

impl AppointmentRow {
    fn new(appointment: &Appointment, settings: &Settings) -> Self {
        let services = appointment
            .services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: appointment.id.to_string(),
            date: appointment.date_time.date.format("%Y-%m-%d").to_string(),
            time: appointment.date_time.time.clone(),
            barbershop: truncate(&appointment.barbershop.name, 24),
            barber: truncate(&appointment.barber.name, 20),
            services: truncate(&services, 32),
            total: appointment
                .total_price
                .format_with_symbol(&settings.currency_symbol),
            status: appointment.status.label().to_string(),
        }
    }
}

/// Format appointments as a table, or a placeholder message when empty
pub fn format_appointment_table(
    appointments: &[Appointment],
    settings: &Settings,
    empty_message: &str,
) -> String {
    if appointments.is_empty() {
        return format!("{}\n", empty_message);
    }

    let rows: Vec<AppointmentRow> = appointments
        .iter()
        .map(|a| AppointmentRow::new(a, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the full details of one appointment
pub fn format_appointment_details(appointment: &Appointment, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Cita:      {}\n", appointment.id));
    output.push_str(&format!("Estado:    {}\n", appointment.status));
    output.push_str(&format!(
        "Fecha:     {}\n",
        format_date(appointment.date_time.date, &settings.date_format)
    ));
    output.push_str(&format!("Hora:      {}\n", appointment.date_time.time));
    output.push_str(&format!("Barbería:  {}\n", appointment.barbershop.name));
    if !appointment.barbershop.address.is_empty() {
        output.push_str(&format!("Dirección: {}\n", appointment.barbershop.address));
    }
    if let Some(phone) = &appointment.barbershop.phone {
        output.push_str(&format!("Teléfono:  {}\n", phone));
    }
    output.push_str(&format!("Barbero:   {}\n", appointment.barber.name));

    if !appointment.services.is_empty() {
        output.push_str("Servicios:\n");
        for service in &appointment.services {
            output.push_str(&format!(
                "  - {:30} {:>10}\n",
                service.name,
                service.price.format_with_symbol(&settings.currency_symbol)
            ));
        }
    }

    output.push_str(&format!(
        "Total:     {}\n",
        appointment
            .total_price
            .format_with_symbol(&settings.currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        serde_json::from_str(
            r#"{
                "id": "1",
                "barbershop": {"name": "Barbería Clásica", "address": "Av. Principal 123, Centro", "phone": "+1234567890"},
                "barber": {"name": "Carlos Mendoza"},
                "services": [
                    {"name": "Corte de Cabello", "price": 25000},
                    {"name": "Arreglo de Barba", "price": 15000}
                ],
                "dateTime": {"date": "2024-12-20", "time": "14:30"},
                "status": "CONFIRMED",
                "totalPrice": 40000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_table_contains_row_values() {
        let output = format_appointment_table(&[sample()], &Settings::default(), "No hay citas");
        assert!(output.contains("Carlos Mendoza"));
        assert!(output.contains("2024-12-20"));
        assert!(output.contains("$40.000"));
        assert!(output.contains("Confirmada"));
    }

    #[test]
    fn test_empty_table_shows_message() {
        let output = format_appointment_table(&[], &Settings::default(), "No tienes citas próximas");
        assert_eq!(output, "No tienes citas próximas\n");
    }

    #[test]
    fn test_details_use_currency_symbol() {
        let settings = Settings {
            currency_symbol: "COP ".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let output = format_appointment_details(&sample(), &settings);
        assert!(output.contains("COP 40.000"));
        assert!(output.contains("20/12/2024"));
        assert!(output.contains("Arreglo de Barba"));
        assert!(output.contains("+1234567890"));
    }
}
