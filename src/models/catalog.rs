//! Catalog models: barbershops, barbers and the services they offer
//!
//! These mirror the backend's catalog payloads. Presentational fields the
//! server may omit default to empty values.

use serde::{Deserialize, Serialize};

use super::ids::{BarberId, BarbershopId, ServiceId};
use super::money::Money;

/// A barbershop as listed by `GET /barbershops`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barbershop {
    pub id: BarbershopId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub open_hours: String,
    /// Service categories advertised by the shop
    #[serde(default)]
    pub services: Vec<String>,
}

/// A barber working at a barbershop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: BarberId,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub working_hours: String,
}

/// A service a barber offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    /// Minutes
    pub duration: u32,
    #[serde(default)]
    pub category: String,
}

/// Group services by category, keeping first-seen category order
pub fn services_by_category(services: &[Service]) -> Vec<(&str, Vec<&Service>)> {
    let mut groups: Vec<(&str, Vec<&Service>)> = Vec::new();
    for service in services {
        match groups.iter_mut().find(|(cat, _)| *cat == service.category) {
            Some((_, members)) => members.push(service),
            None => groups.push((service.category.as_str(), vec![service])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, category: &str) -> Service {
        Service {
            id: ServiceId::new(id),
            name: id.to_uppercase(),
            description: String::new(),
            price: Money::from_units(10000),
            duration: 15,
            category: category.into(),
        }
    }

    #[test]
    fn test_barbershop_from_camel_case_json() {
        let json = r#"{
            "id": "1",
            "name": "Barbería Clásica",
            "address": "Av. Principal 123, Centro",
            "phone": "+1234567890",
            "rating": 4.8,
            "openHours": "9:00 AM - 8:00 PM",
            "services": ["Corte", "Barba"]
        }"#;
        let shop: Barbershop = serde_json::from_str(json).unwrap();
        assert_eq!(shop.id.as_str(), "1");
        assert_eq!(shop.open_hours, "9:00 AM - 8:00 PM");
        assert_eq!(shop.services.len(), 2);
    }

    #[test]
    fn test_optional_fields_default() {
        let barber: Barber = serde_json::from_str(r#"{"id":"b1","name":"Carlos"}"#).unwrap();
        assert!(barber.specialties.is_empty());
        assert_eq!(barber.avatar, None);
    }

    #[test]
    fn test_services_by_category_keeps_order() {
        let services = vec![
            service("s1", "Corte"),
            service("s2", "Barba"),
            service("s3", "Corte"),
        ];
        let groups = services_by_category(&services);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Corte");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Barba");
    }
}
