//! Booking command
//!
//! Drives the [`BookingWizard`] from the terminal. Flags prefill steps and the
//! remaining ones are asked interactively. At every prompt `b` goes back one
//! step, `q` abandons the booking and an empty line continues.

use clap::Args;
use tracing::debug;

use super::prompt::{parse_choice, parse_choices, prompt_string};
use super::CliContext;
use crate::api::{AppointmentsApi, CatalogApi};
use crate::booking::{BookingStep, BookingUpdate, BookingWizard, ServiceChoice};
use crate::display::{
    format_barber_list, format_barbershop_list, format_booking_summary, format_confirmation,
    format_service_menu, format_slot_list, format_step_header,
};
use crate::error::{BarberError, BarberResult};
use crate::models::{
    parse_date, Barber, BarberId, Barbershop, BarbershopId, DateTimeSlot, Service, ServiceId,
};

#[derive(Args)]
pub struct BookArgs {
    /// Barbershop ID
    #[arg(long)]
    pub shop: Option<String>,
    /// Barber ID
    #[arg(long, requires = "shop")]
    pub barber: Option<String>,
    /// Service ID; repeat for several services
    #[arg(long = "service", requires = "barber")]
    pub services: Vec<String>,
    /// Date (YYYY-MM-DD)
    #[arg(long, requires = "time")]
    pub date: Option<String>,
    /// Time (HH:MM)
    #[arg(long, requires = "date")]
    pub time: Option<String>,
    /// Confirm without asking once every step is filled
    #[arg(short, long)]
    pub yes: bool,
}

/// Catalog lists fetched while booking, reused until the parent choice changes
#[derive(Default)]
struct CatalogCache {
    shops: Option<Vec<Barbershop>>,
    barbers: Option<(BarbershopId, Vec<Barber>)>,
    services: Option<(BarberId, Vec<Service>)>,
}

impl CatalogCache {
    async fn shops(&mut self, api: &CatalogApi<'_>) -> BarberResult<&[Barbershop]> {
        if self.shops.is_none() {
            self.shops = Some(api.barbershops().await?);
        }
        Ok(self.shops.as_deref().unwrap_or_default())
    }

    async fn barbers(
        &mut self,
        api: &CatalogApi<'_>,
        shop: &BarbershopId,
    ) -> BarberResult<&[Barber]> {
        if !matches!(&self.barbers, Some((id, _)) if id == shop) {
            let barbers = api.barbers(shop).await?;
            self.barbers = Some((shop.clone(), barbers));
        }
        Ok(self
            .barbers
            .as_ref()
            .map(|(_, list)| list.as_slice())
            .unwrap_or_default())
    }

    async fn services(
        &mut self,
        api: &CatalogApi<'_>,
        barber: &BarberId,
    ) -> BarberResult<&[Service]> {
        if !matches!(&self.services, Some((id, _)) if id == barber) {
            let services = api.services(barber).await?;
            self.services = Some((barber.clone(), services));
        }
        Ok(self
            .services
            .as_ref()
            .map(|(_, list)| list.as_slice())
            .unwrap_or_default())
    }
}

/// What the user asked for at a prompt
enum Input {
    Continue,
    Back,
    Quit,
    Text(String),
}

fn read_input(prompt: &str) -> BarberResult<Input> {
    let line = prompt_string(prompt)?;
    Ok(match line.to_lowercase().as_str() {
        "" => Input::Continue,
        "b" | "atras" | "atrás" => Input::Back,
        "q" | "salir" => Input::Quit,
        _ => Input::Text(line),
    })
}

fn is_yes(text: &str) -> bool {
    matches!(text.to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
}

/// Outcome of one pass through a step
enum StepAction {
    Stay,
    Next,
    Back,
    Quit,
    Done,
}

impl From<Input> for StepAction {
    fn from(input: Input) -> Self {
        match input {
            Input::Continue => Self::Next,
            Input::Back => Self::Back,
            Input::Quit => Self::Quit,
            Input::Text(_) => Self::Stay,
        }
    }
}

struct BookingFlow<'a> {
    ctx: &'a CliContext,
    catalog: CatalogApi<'a>,
    appointments: AppointmentsApi<'a>,
    cache: CatalogCache,
    wizard: BookingWizard,
    auto_confirm: bool,
}

pub async fn handle_book_command(ctx: &CliContext, args: BookArgs) -> BarberResult<()> {
    let mut flow = BookingFlow {
        ctx,
        catalog: CatalogApi::new(&ctx.client),
        appointments: AppointmentsApi::new(&ctx.client),
        cache: CatalogCache::default(),
        wizard: BookingWizard::new(),
        auto_confirm: args.yes,
    };

    flow.prefill(&args).await?;
    flow.run().await
}

impl BookingFlow<'_> {
    /// Apply the choices given as flags, then skip every step they complete
    async fn prefill(&mut self, args: &BookArgs) -> BarberResult<()> {
        if let Some(shop_id) = &args.shop {
            let id = BarbershopId::new(shop_id.as_str());
            let shop = self
                .cache
                .shops(&self.catalog)
                .await?
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| BarberError::barbershop_not_found(shop_id))?;
            self.wizard.update(BookingUpdate::barbershop(shop));

            if let Some(barber_id) = &args.barber {
                let id = BarberId::new(barber_id.as_str());
                let barber = self
                    .cache
                    .barbers(&self.catalog, &BarbershopId::new(shop_id.as_str()))
                    .await?
                    .iter()
                    .find(|b| b.id == id)
                    .ok_or_else(|| BarberError::barber_not_found(barber_id))?;
                self.wizard.update(BookingUpdate::barber(barber));

                if !args.services.is_empty() {
                    let offered = self.cache.services(&self.catalog, &id).await?;
                    let chosen = args
                        .services
                        .iter()
                        .map(|sid| {
                            let sid_typed = ServiceId::new(sid.as_str());
                            offered
                                .iter()
                                .find(|s| s.id == sid_typed)
                                .map(ServiceChoice::from)
                                .ok_or_else(|| BarberError::service_not_found(sid))
                        })
                        .collect::<BarberResult<Vec<_>>>()?;
                    self.wizard.update(BookingUpdate::services(chosen));
                }
            }
        }

        if let (Some(date), Some(time)) = (&args.date, &args.time) {
            self.wizard
                .update(BookingUpdate::date_time(DateTimeSlot::parse(date, time)?));
        }

        while self.wizard.advance() {}
        debug!(step = self.wizard.step().number(), "Booking prefilled");
        Ok(())
    }

    async fn run(&mut self) -> BarberResult<()> {
        loop {
            print!("{}", format_step_header(&self.wizard));

            let action = match self.wizard.step() {
                BookingStep::ChooseShop => self.choose_shop().await?,
                BookingStep::ChooseBarber => self.choose_barber().await?,
                BookingStep::ChooseServices => self.choose_services().await?,
                BookingStep::ChooseDateTime => self.choose_date_time().await?,
                BookingStep::Confirm => self.confirm().await?,
            };

            match action {
                StepAction::Stay => {}
                StepAction::Next => {
                    if !self.wizard.advance() {
                        println!("Completa este paso para continuar.");
                    }
                }
                StepAction::Back => {
                    if !self.wizard.retreat() {
                        println!("Ya estás en el primer paso.");
                    }
                }
                StepAction::Quit => {
                    println!("Reserva cancelada.");
                    return Ok(());
                }
                StepAction::Done => return Ok(()),
            }
        }
    }

    async fn choose_shop(&mut self) -> BarberResult<StepAction> {
        let shops = self.cache.shops(&self.catalog).await?;
        print!("{}", format_barbershop_list(shops));
        if let Some(current) = &self.wizard.selection().barbershop {
            println!("Seleccionada: {}", current.name);
        }

        let text = match read_input("Barbería (número): ")? {
            Input::Text(text) => text,
            other => return Ok(other.into()),
        };

        match parse_choice(&text, shops.len()) {
            Some(index) => {
                let choice = BookingUpdate::barbershop(&shops[index]);
                self.wizard.update(choice);
                Ok(StepAction::Next)
            }
            None => {
                println!("Opción inválida: {}", text);
                Ok(StepAction::Stay)
            }
        }
    }

    async fn choose_barber(&mut self) -> BarberResult<StepAction> {
        let Some(shop) = self.wizard.selection().barbershop.clone() else {
            return Ok(StepAction::Back);
        };
        let barbers = self.cache.barbers(&self.catalog, &shop.id).await?;
        print!("{}", format_barber_list(barbers));
        if let Some(current) = &self.wizard.selection().barber {
            println!("Seleccionado: {}", current.name);
        }

        let text = match read_input("Barbero (número): ")? {
            Input::Text(text) => text,
            other => return Ok(other.into()),
        };

        match parse_choice(&text, barbers.len()) {
            Some(index) => {
                let choice = BookingUpdate::barber(&barbers[index]);
                self.wizard.update(choice);
                Ok(StepAction::Next)
            }
            None => {
                println!("Opción inválida: {}", text);
                Ok(StepAction::Stay)
            }
        }
    }

    async fn choose_services(&mut self) -> BarberResult<StepAction> {
        let Some(barber) = self.wizard.selection().barber.clone() else {
            return Ok(StepAction::Back);
        };
        let services = self.cache.services(&self.catalog, &barber.id).await?;
        print!(
            "{}",
            format_service_menu(services, self.wizard.selection(), &self.ctx.settings)
        );
        let summary = self.wizard.summary();
        println!(
            "Total: {} · {} min",
            summary
                .total_price
                .format_with_symbol(&self.ctx.settings.currency_symbol),
            summary.total_duration
        );

        let prompt = "Servicios (números para marcar/desmarcar, Enter para seguir): ";
        let text = match read_input(prompt)? {
            Input::Text(text) => text,
            other => return Ok(other.into()),
        };

        match parse_choices(&text, services.len()) {
            Some(indices) => {
                let toggled: Vec<ServiceChoice> =
                    indices.iter().map(|&i| ServiceChoice::from(&services[i])).collect();
                for service in toggled {
                    self.wizard.toggle_service(service);
                }
            }
            None => println!("Opción inválida: {}", text),
        }
        Ok(StepAction::Stay)
    }

    async fn choose_date_time(&mut self) -> BarberResult<StepAction> {
        let Some(barber) = self.wizard.selection().barber.clone() else {
            return Ok(StepAction::Back);
        };
        if let Some(current) = &self.wizard.selection().date_time {
            println!("Seleccionado: {}", current);
        }

        let text = match read_input("Fecha (YYYY-MM-DD): ")? {
            Input::Text(text) => text,
            other => return Ok(other.into()),
        };
        let date = match parse_date(&text) {
            Ok(date) => date,
            Err(err) => {
                println!("{}", err);
                return Ok(StepAction::Stay);
            }
        };

        let slots = self.appointments.available_slots(&barber.id, date).await?;
        print!("{}", format_slot_list(&slots));
        if slots.is_empty() {
            return Ok(StepAction::Stay);
        }

        let text = match read_input("Hora (número o HH:MM): ")? {
            Input::Text(text) => text,
            other => return Ok(other.into()),
        };
        let time = parse_choice(&text, slots.len())
            .map(|i| slots[i].clone())
            .unwrap_or(text);

        match DateTimeSlot::on(date, &time) {
            Ok(slot) => {
                self.wizard.update(BookingUpdate::date_time(slot));
                Ok(StepAction::Next)
            }
            Err(err) => {
                println!("{}", err);
                Ok(StepAction::Stay)
            }
        }
    }

    async fn confirm(&mut self) -> BarberResult<StepAction> {
        print!(
            "{}",
            format_booking_summary(self.wizard.selection(), &self.ctx.settings)
        );
        println!();

        if !std::mem::take(&mut self.auto_confirm) {
            let input = read_input("Confirmar reserva? (Enter confirma, b atrás, q salir): ")?;
            match input {
                Input::Continue => {}
                Input::Text(text) if is_yes(&text) => {}
                Input::Text(text) => {
                    println!("Opción inválida: {}", text);
                    return Ok(StepAction::Stay);
                }
                other => return Ok(other.into()),
            }
        }

        println!("Confirmando...");
        match self.wizard.submit(&self.appointments).await {
            Ok(appointment) => {
                println!();
                print!("{}", format_confirmation(appointment, &self.ctx.settings));
                println!();
                println!("Run 'barber dashboard' to see all your appointments.");
                Ok(StepAction::Done)
            }
            Err(err) if err.is_session_expired() => Err(err),
            Err(err) => {
                println!("No se pudo confirmar la reserva: {}", err);
                Ok(StepAction::Stay)
            }
        }
    }
}
