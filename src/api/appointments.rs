//! Appointment endpoints
//!
//! Status changes are server-authoritative; the client only asks for
//! creation, rescheduling and cancellation.

use chrono::NaiveDate;
use serde::Deserialize;

use super::client::{endpoint, ApiClient};
use crate::error::BarberResult;
use crate::models::{
    Appointment, AppointmentId, BarberId, CreateAppointmentRequest, DateTimeSlot,
    RescheduleRequest,
};

pub struct AppointmentsApi<'a> {
    client: &'a ApiClient,
}

/// Cancellation may answer with the updated appointment or with nothing
#[derive(Deserialize)]
#[serde(untagged)]
enum CancelResponse {
    Appointment(Box<Appointment>),
    Other(serde_json::Value),
}

impl<'a> AppointmentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /appointments`
    pub async fn create(&self, request: &CreateAppointmentRequest) -> BarberResult<Appointment> {
        self.client.post("/appointments", request).await
    }

    /// `GET /appointments/user`
    pub async fn list_for_user(&self) -> BarberResult<Vec<Appointment>> {
        self.client.get("/appointments/user").await
    }

    /// `GET /appointments/:id`
    pub async fn get(&self, id: &AppointmentId) -> BarberResult<Appointment> {
        self.client
            .get(&endpoint(&["appointments", id.as_str()])?)
            .await
    }

    /// `PUT /appointments/:id` with a new date and time
    pub async fn reschedule(
        &self,
        id: &AppointmentId,
        slot: DateTimeSlot,
    ) -> BarberResult<Appointment> {
        let body = RescheduleRequest::from(slot);
        self.client
            .put(&endpoint(&["appointments", id.as_str()])?, &body)
            .await
    }

    /// `DELETE /appointments/:id`
    pub async fn cancel(&self, id: &AppointmentId) -> BarberResult<Option<Appointment>> {
        let response: CancelResponse = self
            .client
            .delete(&endpoint(&["appointments", id.as_str()])?)
            .await?;
        Ok(match response {
            CancelResponse::Appointment(appointment) => Some(*appointment),
            CancelResponse::Other(_) => None,
        })
    }

    /// `GET /barbers/:id/available-slots?date=YYYY-MM-DD`
    pub async fn available_slots(
        &self,
        barber_id: &BarberId,
        date: NaiveDate,
    ) -> BarberResult<Vec<String>> {
        self.client
            .get(&format!(
                "{}?date={}",
                endpoint(&["barbers", barber_id.as_str(), "available-slots"])?,
                date.format("%Y-%m-%d")
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json, FakeTransport};
    use crate::api::transport::{HttpMethod, HttpResponse};
    use crate::session::SessionStore;
    use serde_json::json as j;

    fn appointment_json(status: &str) -> serde_json::Value {
        j!({
            "id": "a1",
            "barbershop": {"name": "Modern Cuts", "address": "Calle 45"},
            "barber": {"name": "David Silva"},
            "services": [{"name": "Corte Fade", "price": 30000}],
            "dateTime": {"date": "2024-12-15", "time": "16:00"},
            "status": status,
            "totalPrice": 30000
        })
    }

    fn client(transport: std::sync::Arc<FakeTransport>) -> ApiClient {
        let session = SessionStore::in_memory();
        session.set_access_token("a1").unwrap();
        ApiClient::new("http://t/api", transport, session)
    }

    #[tokio::test]
    async fn test_available_slots_query() {
        let transport = FakeTransport::new(|_| json(200, j!(["09:00", "09:30"])));
        let client = client(transport.clone());

        let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let slots = AppointmentsApi::new(&client)
            .available_slots(&BarberId::new("b1"), date)
            .await
            .unwrap();

        assert_eq!(slots, vec!["09:00", "09:30"]);
        assert_eq!(
            transport.requests()[0].url,
            "http://t/api/barbers/b1/available-slots?date=2024-12-20"
        );
    }

    #[tokio::test]
    async fn test_typed_id_stays_in_its_segment() {
        let transport = FakeTransport::new(|_| json(200, appointment_json("PENDING")));
        let client = client(transport.clone());
        let api = AppointmentsApi::new(&client);

        api.get(&AppointmentId::new("a1/../../users/profile")).await.unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "http://t/api/appointments/a1%2F..%2F..%2Fusers%2Fprofile"
        );

        let err = api.cancel(&AppointmentId::new("..")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_reschedule_puts_new_slot() {
        let transport = FakeTransport::new(|req| {
            assert_eq!(req.method, HttpMethod::Put);
            assert_eq!(req.body, Some(j!({"date": "2024-12-22", "time": "10:00"})));
            json(200, appointment_json("PENDING"))
        });
        let client = client(transport);

        let slot = DateTimeSlot::parse("2024-12-22", "10:00").unwrap();
        let updated = AppointmentsApi::new(&client)
            .reschedule(&AppointmentId::new("a1"), slot)
            .await
            .unwrap();
        assert_eq!(updated.id.as_str(), "a1");
    }

    #[tokio::test]
    async fn test_cancel_accepts_empty_and_full_bodies() {
        let transport = FakeTransport::new(|req| {
            assert_eq!(req.method, HttpMethod::Delete);
            if req.url.ends_with("/a1") {
                Ok(HttpResponse::new(204, ""))
            } else {
                json(200, appointment_json("CANCELLED"))
            }
        });
        let client = client(transport);
        let api = AppointmentsApi::new(&client);

        assert!(api.cancel(&AppointmentId::new("a1")).await.unwrap().is_none());
        let cancelled = api.cancel(&AppointmentId::new("a2")).await.unwrap().unwrap();
        assert_eq!(cancelled.status, crate::models::AppointmentStatus::Cancelled);
    }
}
