//! Catalog browsing commands

use clap::Subcommand;

use super::CliContext;
use crate::api::CatalogApi;
use crate::display::{format_barber_list, format_barbershop_list, format_service_menu};
use crate::booking::BookingSelection;
use crate::error::BarberResult;
use crate::models::{BarberId, BarbershopId};

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List barbershops
    Shops,
    /// Show a barbershop and its barbers
    Shop {
        /// Barbershop ID
        id: String,
    },
    /// List the services a barber offers, or every service
    Services {
        /// Barber ID; omit to list all services
        barber: Option<String>,
    },
}

pub async fn handle_catalog_command(ctx: &CliContext, cmd: CatalogCommands) -> BarberResult<()> {
    let catalog = CatalogApi::new(&ctx.client);

    match cmd {
        CatalogCommands::Shops => {
            let shops = catalog.barbershops().await?;
            print!("{}", format_barbershop_list(&shops));
        }

        CatalogCommands::Shop { id } => {
            let id = BarbershopId::new(id);
            let shop = catalog.barbershop(&id).await?;
            let barbers = catalog.barbers(&id).await?;

            println!("{}", shop.name);
            println!("  Dirección: {}", shop.address);
            if !shop.phone.is_empty() {
                println!("  Teléfono:  {}", shop.phone);
            }
            if !shop.open_hours.is_empty() {
                println!("  Horario:   {}", shop.open_hours);
            }
            println!();
            println!("Barberos:");
            print!("{}", format_barber_list(&barbers));
        }

        CatalogCommands::Services { barber } => {
            let services = match barber {
                Some(barber) => catalog.services(&BarberId::new(barber)).await?,
                None => catalog.all_services().await?,
            };
            print!(
                "{}",
                format_service_menu(&services, &BookingSelection::default(), &ctx.settings)
            );
        }
    }

    Ok(())
}
