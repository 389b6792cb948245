//! Appointment split and user statistics
//!
//! Derived purely from the appointment list returned by the backend.

use std::collections::HashMap;

use crate::models::{Appointment, AppointmentStatus, Money};

/// Appointments partitioned for the dashboard tabs
#[derive(Debug, Clone, Default)]
pub struct AppointmentSplit {
    /// Confirmed or pending, soonest first
    pub upcoming: Vec<Appointment>,
    /// Completed or cancelled, most recent first
    pub past: Vec<Appointment>,
}

pub fn split_appointments(appointments: &[Appointment]) -> AppointmentSplit {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = appointments
        .iter()
        .cloned()
        .partition(|a| a.status.is_upcoming());

    upcoming.sort_by(|a, b| a.date_time.sort_key().cmp(&b.date_time.sort_key()));
    past.sort_by(|a, b| b.date_time.sort_key().cmp(&a.date_time.sort_key()));

    AppointmentSplit { upcoming, past }
}

/// Summary numbers for the dashboard sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Sum of completed appointments
    pub total_spent: Money,
    pub favorite_barber: Option<String>,
}

impl UserStats {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut stats = Self {
            total: appointments.len(),
            upcoming: 0,
            completed: 0,
            cancelled: 0,
            total_spent: Money::zero(),
            favorite_barber: None,
        };

        let mut barber_counts: HashMap<&str, usize> = HashMap::new();

        for appointment in appointments {
            match appointment.status {
                AppointmentStatus::Confirmed | AppointmentStatus::Pending => stats.upcoming += 1,
                AppointmentStatus::Completed => {
                    stats.completed += 1;
                    stats.total_spent += appointment.total_price;
                }
                AppointmentStatus::Cancelled => stats.cancelled += 1,
            }

            if appointment.status != AppointmentStatus::Cancelled {
                *barber_counts.entry(appointment.barber.name.as_str()).or_insert(0) += 1;
            }
        }

        // Highest count wins; ties go to the alphabetically first name
        stats.favorite_barber = barber_counts
            .into_iter()
            .max_by(|(name_a, count_a), (name_b, count_b)| {
                count_a.cmp(count_b).then_with(|| name_b.cmp(name_a))
            })
            .map(|(name, _)| name.to_string());

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentBarber, AppointmentId, AppointmentShop, DateTimeSlot};

    fn appointment(
        id: &str,
        barber: &str,
        status: AppointmentStatus,
        date: &str,
        price: i64,
    ) -> Appointment {
        Appointment {
            id: AppointmentId::new(id),
            barbershop: AppointmentShop {
                id: None,
                name: "Barbería Clásica".into(),
                address: "Av. Principal 123".into(),
                phone: None,
            },
            barber: AppointmentBarber {
                id: None,
                name: barber.into(),
                avatar: None,
            },
            services: Vec::new(),
            date_time: DateTimeSlot::parse(date, "10:00").unwrap(),
            status,
            total_price: Money::from_units(price),
        }
    }

    fn sample() -> Vec<Appointment> {
        vec![
            appointment("1", "Carlos", AppointmentStatus::Confirmed, "2024-12-20", 40000),
            appointment("2", "Miguel", AppointmentStatus::Pending, "2024-12-18", 25000),
            appointment("3", "Carlos", AppointmentStatus::Completed, "2024-11-01", 25000),
            appointment("4", "Miguel", AppointmentStatus::Completed, "2024-11-15", 15000),
            appointment("5", "Miguel", AppointmentStatus::Cancelled, "2024-10-01", 30000),
            appointment("6", "Miguel", AppointmentStatus::Cancelled, "2024-10-02", 30000),
        ]
    }

    #[test]
    fn test_split_by_status() {
        let split = split_appointments(&sample());
        let upcoming: Vec<_> = split.upcoming.iter().map(|a| a.id.as_str()).collect();
        let past: Vec<_> = split.past.iter().map(|a| a.id.as_str()).collect();

        assert_eq!(upcoming, vec!["2", "1"]);
        assert_eq!(past, vec!["4", "3", "6", "5"]);
    }

    #[test]
    fn test_stats_counts_and_spend() {
        let stats = UserStats::from_appointments(&sample());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.upcoming, 2);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.cancelled, 2);
        assert_eq!(stats.total_spent, Money::from_units(40000));
    }

    #[test]
    fn test_favorite_ignores_cancelled_and_breaks_ties_by_name() {
        // Two active each; Miguel's cancellations do not count
        let stats = UserStats::from_appointments(&sample());
        assert_eq!(stats.favorite_barber.as_deref(), Some("Carlos"));
    }

    #[test]
    fn test_empty_list() {
        let stats = UserStats::from_appointments(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.total_spent.is_zero());
        assert_eq!(stats.favorite_barber, None);
        assert!(split_appointments(&[]).upcoming.is_empty());
    }
}
