//! Booking wizard state machine
//!
//! A linear five-step flow: barbershop, barber, services, date/time and
//! confirmation. Moving forward is gated on the current step being complete;
//! moving backward is always allowed and never discards data. Submitting at
//! the last step creates the appointment and freezes the wizard.

use std::fmt;

use tracing::{debug, info};

use super::selection::{BookingSelection, BookingUpdate, ServiceChoice};
use super::summary::BookingSummary;
use crate::api::AppointmentsApi;
use crate::error::{BarberError, BarberResult};
use crate::models::Appointment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingStep {
    #[default]
    ChooseShop = 1,
    ChooseBarber = 2,
    ChooseServices = 3,
    ChooseDateTime = 4,
    Confirm = 5,
}

impl BookingStep {
    pub const ALL: [BookingStep; 5] = [
        Self::ChooseShop,
        Self::ChooseBarber,
        Self::ChooseServices,
        Self::ChooseDateTime,
        Self::Confirm,
    ];

    pub const COUNT: u8 = 5;

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ChooseShop => "Barbería",
            Self::ChooseBarber => "Barbero",
            Self::ChooseServices => "Servicios",
            Self::ChooseDateTime => "Fecha y Hora",
            Self::Confirm => "Confirmación",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ChooseShop => "Selecciona tu barbería",
            Self::ChooseBarber => "Elige tu barbero preferido",
            Self::ChooseServices => "Selecciona los servicios",
            Self::ChooseDateTime => "Elige cuándo quieres tu cita",
            Self::Confirm => "Revisa y confirma tu reserva",
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paso {} de {}: {}",
            self.number(),
            Self::COUNT,
            self.title()
        )
    }
}

/// Whether `selection` satisfies the requirement for leaving `step`
pub fn can_proceed(step: BookingStep, selection: &BookingSelection) -> bool {
    match step {
        BookingStep::ChooseShop => selection.barbershop.is_some(),
        BookingStep::ChooseBarber => selection.barber.is_some(),
        BookingStep::ChooseServices => !selection.services.is_empty(),
        BookingStep::ChooseDateTime => selection.date_time.is_some(),
        BookingStep::Confirm => true,
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    step: BookingStep,
    selection: BookingSelection,
    /// Set once the backend accepted the booking; the wizard is then read-only
    confirmed: Option<Appointment>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary::of(&self.selection)
    }

    pub fn confirmed(&self) -> Option<&Appointment> {
        self.confirmed.as_ref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }

    pub fn can_proceed(&self) -> bool {
        can_proceed(self.step, &self.selection)
    }

    /// Percentage of the flow reached, rounded
    pub fn progress_percent(&self) -> u8 {
        let pct = f32::from(self.step.number()) / f32::from(BookingStep::COUNT) * 100.0;
        pct.round() as u8
    }

    /// Move to the next step if the current one is complete
    ///
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.is_confirmed() || !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                debug!(from = self.step.number(), to = next.number(), "Wizard advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step; entered data is kept
    pub fn retreat(&mut self) -> bool {
        if self.is_confirmed() {
            return false;
        }
        match self.step.previous() {
            Some(previous) => {
                debug!(from = self.step.number(), to = previous.number(), "Wizard retreated");
                self.step = previous;
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, update: BookingUpdate) {
        if !self.is_confirmed() {
            self.selection.merge(update);
        }
    }

    pub fn toggle_service(&mut self, service: ServiceChoice) {
        if !self.is_confirmed() {
            self.selection.toggle_service(service);
        }
    }

    /// Create the appointment; only valid at the confirmation step
    ///
    /// On failure the wizard stays at the confirmation step with its data,
    /// ready for the user to submit again.
    pub async fn submit(&mut self, api: &AppointmentsApi<'_>) -> BarberResult<&Appointment> {
        if self.is_confirmed() {
            return Err(BarberError::Validation("Booking already confirmed".into()));
        }
        if self.step != BookingStep::Confirm {
            return Err(BarberError::Validation(format!(
                "Booking can only be confirmed at step {}",
                BookingStep::Confirm.number()
            )));
        }

        let request = self.selection.to_create_request()?;
        let appointment = api.create(&request).await?;
        info!(appointment = %appointment.id, "Booking confirmed");

        Ok(&*self.confirmed.insert(appointment))
    }
}
