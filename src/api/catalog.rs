//! Barbershop, barber and service catalog endpoints

use super::client::{endpoint, ApiClient};
use crate::error::BarberResult;
use crate::models::{Barber, BarberId, Barbershop, BarbershopId, Service};

pub struct CatalogApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CatalogApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /barbershops`
    pub async fn barbershops(&self) -> BarberResult<Vec<Barbershop>> {
        self.client.get("/barbershops").await
    }

    /// `GET /services`, every service across barbers
    pub async fn all_services(&self) -> BarberResult<Vec<Service>> {
        self.client.get("/services").await
    }

    /// `GET /barbershops/:id`
    pub async fn barbershop(&self, id: &BarbershopId) -> BarberResult<Barbershop> {
        self.client
            .get(&endpoint(&["barbershops", id.as_str()])?)
            .await
    }

    /// `GET /barbershops/:id/barbers`
    pub async fn barbers(&self, barbershop_id: &BarbershopId) -> BarberResult<Vec<Barber>> {
        self.client
            .get(&endpoint(&["barbershops", barbershop_id.as_str(), "barbers"])?)
            .await
    }

    /// `GET /barbers/:id`
    pub async fn barber(&self, id: &BarberId) -> BarberResult<Barber> {
        self.client.get(&endpoint(&["barbers", id.as_str()])?).await
    }

    /// `GET /barbers/:id/services`
    pub async fn services(&self, barber_id: &BarberId) -> BarberResult<Vec<Service>> {
        self.client
            .get(&endpoint(&["barbers", barber_id.as_str(), "services"])?)
            .await
    }
}
