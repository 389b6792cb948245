//! Appointment model
//!
//! Appointments are owned by the server. The client reads them and asks
//! for cancellation or rescheduling; status changes are never made locally.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AppointmentId, BarberId, BarbershopId, ServiceId};
use super::money::Money;
use crate::error::{BarberError, BarberResult};

/// Server-authoritative appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Still ahead of the customer
    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Pending)
    }

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmada",
            Self::Pending => "Pendiente",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> BarberResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        BarberError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", date.trim()))
    })
}

/// Calendar date and `HH:MM` slot of an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeSlot {
    pub date: NaiveDate,
    pub time: String,
}

impl DateTimeSlot {
    /// Parse a `YYYY-MM-DD` date and an `HH:MM` time
    pub fn parse(date: &str, time: &str) -> BarberResult<Self> {
        Self::on(parse_date(date)?, time)
    }

    /// Pair an already parsed date with an `HH:MM` time
    pub fn on(date: NaiveDate, time: &str) -> BarberResult<Self> {
        let parsed = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
            BarberError::Validation(format!("Invalid time '{}'. Use HH:MM", time.trim()))
        })?;

        Ok(Self {
            date,
            time: parsed.format("%H:%M").to_string(),
        })
    }

    /// Chronological ordering key; `time` is always zero-padded `HH:MM`
    pub fn sort_key(&self) -> (NaiveDate, &str) {
        (self.date, self.time.as_str())
    }
}

impl fmt::Display for DateTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// Barbershop details embedded in an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentShop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BarbershopId>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Barber details embedded in an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentBarber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BarberId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Service line embedded in an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ServiceId>,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// An appointment as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub barbershop: AppointmentShop,
    pub barber: AppointmentBarber,
    #[serde(default)]
    pub services: Vec<AppointmentService>,
    pub date_time: DateTimeSlot,
    pub status: AppointmentStatus,
    pub total_price: Money,
}

/// Body of `POST /appointments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub barbershop_id: BarbershopId,
    pub barber_id: BarberId,
    pub service_ids: Vec<ServiceId>,
    pub date: NaiveDate,
    pub time: String,
}

/// Body of `PUT /appointments/:id` when rescheduling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub date: NaiveDate,
    pub time: String,
}

impl From<DateTimeSlot> for RescheduleRequest {
    fn from(slot: DateTimeSlot) -> Self {
        Self {
            date: slot.date,
            time: slot.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: AppointmentStatus = serde_json::from_str(r#""CONFIRMED""#).unwrap();
        assert_eq!(status, AppointmentStatus::Confirmed);
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Cancelled).unwrap(),
            r#""CANCELLED""#
        );
    }

    #[test]
    fn test_status_upcoming() {
        assert!(AppointmentStatus::Confirmed.is_upcoming());
        assert!(AppointmentStatus::Pending.is_upcoming());
        assert!(!AppointmentStatus::Completed.is_upcoming());
        assert!(!AppointmentStatus::Cancelled.is_upcoming());
    }

    #[test]
    fn test_parse_slot() {
        let slot = DateTimeSlot::parse("2024-12-20", "9:30").unwrap();
        assert_eq!(slot.date, NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
        assert_eq!(slot.time, "09:30");
    }

    #[test]
    fn test_parse_slot_rejects_garbage() {
        assert!(DateTimeSlot::parse("20/12/2024", "14:30").unwrap_err().is_validation());
        assert!(DateTimeSlot::parse("2024-12-20", "25:00").unwrap_err().is_validation());
    }

    #[test]
    fn test_appointment_from_backend_json() {
        let json = r#"{
            "id": "1",
            "barbershop": {"name": "Barbería Clásica", "address": "Av. Principal 123", "phone": "+1234567890"},
            "barber": {"name": "Carlos Mendoza", "avatar": "/barber-carlos.png"},
            "services": [
                {"name": "Corte de Cabello", "price": 25000},
                {"name": "Arreglo de Barba", "price": 15000}
            ],
            "dateTime": {"date": "2024-12-20", "time": "14:30"},
            "status": "CONFIRMED",
            "totalPrice": 40000
        }"#;
        let apt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(apt.services.len(), 2);
        assert_eq!(apt.total_price.units(), 40000);
        assert_eq!(apt.date_time.time, "14:30");
    }

    #[test]
    fn test_create_request_wire_shape() {
        let req = CreateAppointmentRequest {
            barbershop_id: "1".into(),
            barber_id: "b1".into(),
            service_ids: vec!["s1".into(), "s2".into()],
            date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            time: "14:30".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["barbershopId"], "1");
        assert_eq!(value["serviceIds"][1], "s2");
        assert_eq!(value["date"], "2024-12-20");
    }
}
