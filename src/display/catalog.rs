//! Catalog display formatting
//!
//! Numbered lists used by the booking prompts. Numbers are 1-based positions
//! in the slice passed in.

use crate::booking::BookingSelection;
use crate::config::Settings;
use crate::models::{services_by_category, Barber, Barbershop, Service};

/// Format barbershops as a numbered list
pub fn format_barbershop_list(shops: &[Barbershop]) -> String {
    if shops.is_empty() {
        return "No hay barberías disponibles.\n".to_string();
    }

    let mut output = String::new();
    for (i, shop) in shops.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}", i + 1, shop.name));
        if shop.rating > 0.0 {
            output.push_str(&format!("  ★ {:.1}", shop.rating));
        }
        output.push('\n');
        output.push_str(&format!("     {}\n", shop.address));
        if !shop.open_hours.is_empty() {
            output.push_str(&format!("     {}\n", shop.open_hours));
        }
        if !shop.services.is_empty() {
            output.push_str(&format!("     {}\n", shop.services.join(" · ")));
        }
    }
    output
}

/// Format barbers as a numbered list
pub fn format_barber_list(barbers: &[Barber]) -> String {
    if barbers.is_empty() {
        return "No hay barberos disponibles en esta barbería.\n".to_string();
    }

    let mut output = String::new();
    for (i, barber) in barbers.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}", i + 1, barber.name));
        if barber.rating > 0.0 {
            output.push_str(&format!("  ★ {:.1}", barber.rating));
        }
        if !barber.experience.is_empty() {
            output.push_str(&format!("  ({})", barber.experience));
        }
        output.push('\n');
        if !barber.specialties.is_empty() {
            output.push_str(&format!("     {}\n", barber.specialties.join(", ")));
        }
        if !barber.working_hours.is_empty() {
            output.push_str(&format!("     {}\n", barber.working_hours));
        }
    }
    output
}

/// Format services grouped by category, marking the ones already selected
pub fn format_service_menu(
    services: &[Service],
    selection: &BookingSelection,
    settings: &Settings,
) -> String {
    if services.is_empty() {
        return "Este barbero no tiene servicios disponibles.\n".to_string();
    }

    let mut output = String::new();
    for (category, members) in services_by_category(services) {
        let heading = if category.is_empty() { "Otros" } else { category };
        output.push_str(&format!("{}\n", heading));

        for service in members {
            let number = services
                .iter()
                .position(|s| std::ptr::eq(s, service))
                .map_or(0, |i| i + 1);
            let mark = if selection.is_service_selected(&service.id) {
                "[x]"
            } else {
                "[ ]"
            };
            output.push_str(&format!(
                "  {:>3}. {} {:30} {:>10} {:>4} min\n",
                number,
                mark,
                service.name,
                service.price.format_with_symbol(&settings.currency_symbol),
                service.duration
            ));
        }
    }
    output
}

/// Format free time slots as a numbered grid
pub fn format_slot_list(slots: &[String]) -> String {
    if slots.is_empty() {
        return "No hay horarios disponibles para esta fecha.\n".to_string();
    }

    let mut output = String::new();
    for (i, slot) in slots.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}", i + 1, slot));
        if (i + 1) % 4 == 0 || i + 1 == slots.len() {
            output.push('\n');
        } else {
            output.push_str("   ");
        }
    }
    output
}
