//! The accumulating booking selection
//!
//! Each wizard step contributes one field. Fields are merged, never rolled
//! back, so stepping backward keeps everything entered so far.

use crate::error::{BarberError, BarberResult};
use crate::models::{
    Barber, BarberId, Barbershop, BarbershopId, CreateAppointmentRequest, DateTimeSlot, Money,
    Service, ServiceId,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ShopChoice {
    pub id: BarbershopId,
    pub name: String,
    pub address: String,
}

impl From<&Barbershop> for ShopChoice {
    fn from(shop: &Barbershop) -> Self {
        Self {
            id: shop.id.clone(),
            name: shop.name.clone(),
            address: shop.address.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarberChoice {
    pub id: BarberId,
    pub name: String,
    pub specialties: Vec<String>,
}

impl From<&Barber> for BarberChoice {
    fn from(barber: &Barber) -> Self {
        Self {
            id: barber.id.clone(),
            name: barber.name.clone(),
            specialties: barber.specialties.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceChoice {
    pub id: ServiceId,
    pub name: String,
    pub price: Money,
    /// Minutes
    pub duration: u32,
}

impl From<&Service> for ServiceChoice {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            price: service.price,
            duration: service.duration,
        }
    }
}

/// Everything picked so far; an empty `services` list means none chosen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSelection {
    pub barbershop: Option<ShopChoice>,
    pub barber: Option<BarberChoice>,
    pub services: Vec<ServiceChoice>,
    pub date_time: Option<DateTimeSlot>,
}

/// A partial selection; `Some` fields overwrite, `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingUpdate {
    pub barbershop: Option<ShopChoice>,
    pub barber: Option<BarberChoice>,
    pub services: Option<Vec<ServiceChoice>>,
    pub date_time: Option<DateTimeSlot>,
}

impl BookingUpdate {
    pub fn barbershop(shop: impl Into<ShopChoice>) -> Self {
        Self {
            barbershop: Some(shop.into()),
            ..Default::default()
        }
    }

    pub fn barber(barber: impl Into<BarberChoice>) -> Self {
        Self {
            barber: Some(barber.into()),
            ..Default::default()
        }
    }

    pub fn services(services: Vec<ServiceChoice>) -> Self {
        Self {
            services: Some(services),
            ..Default::default()
        }
    }

    pub fn date_time(slot: DateTimeSlot) -> Self {
        Self {
            date_time: Some(slot),
            ..Default::default()
        }
    }
}

impl BookingSelection {
    /// Merge an update; later values for a field replace earlier ones
    pub fn merge(&mut self, update: BookingUpdate) {
        if let Some(shop) = update.barbershop {
            self.barbershop = Some(shop);
        }
        if let Some(barber) = update.barber {
            self.barber = Some(barber);
        }
        if let Some(services) = update.services {
            self.services = services;
        }
        if let Some(slot) = update.date_time {
            self.date_time = Some(slot);
        }
    }

    /// Add the service, or remove it if a service with the same id is selected
    pub fn toggle_service(&mut self, service: ServiceChoice) {
        if let Some(pos) = self.services.iter().position(|s| s.id == service.id) {
            self.services.remove(pos);
        } else {
            self.services.push(service);
        }
    }

    pub fn is_service_selected(&self, id: &ServiceId) -> bool {
        self.services.iter().any(|s| &s.id == id)
    }

    /// Build the create-appointment body from a complete selection
    pub fn to_create_request(&self) -> BarberResult<CreateAppointmentRequest> {
        let shop = self
            .barbershop
            .as_ref()
            .ok_or_else(|| BarberError::Validation("No barbershop selected".into()))?;
        let barber = self
            .barber
            .as_ref()
            .ok_or_else(|| BarberError::Validation("No barber selected".into()))?;
        if self.services.is_empty() {
            return Err(BarberError::Validation("No services selected".into()));
        }
        let slot = self
            .date_time
            .as_ref()
            .ok_or_else(|| BarberError::Validation("No date and time selected".into()))?;

        Ok(CreateAppointmentRequest {
            barbershop_id: shop.id.clone(),
            barber_id: barber.id.clone(),
            service_ids: self.services.iter().map(|s| s.id.clone()).collect(),
            date: slot.date,
            time: slot.time.clone(),
        })
    }
}
