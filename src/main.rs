use anyhow::Result;
use clap::{Parser, Subcommand};

use barber_cli::api::ApiClient;
use barber_cli::cli::{
    handle_appointments_command, handle_book_command, handle_catalog_command, handle_dashboard,
    handle_home, handle_login, handle_logout, handle_profile_command, handle_register,
    handle_session_command, AppointmentsCommands, BookArgs, CatalogCommands, CliContext,
    LoginArgs, ProfileCommands, RegisterArgs, SessionCommands,
};
use barber_cli::config::{BarberPaths, Settings};
use barber_cli::error::{BarberError, BarberResult};
use barber_cli::router::{self, RouteDecision};
use barber_cli::session::SessionStore;
use barber_cli::telemetry;

#[derive(Parser)]
#[command(
    name = "barber",
    version,
    about = "Book barbershop appointments from the terminal",
    long_about = "barber-cli talks to the barbershop booking backend. Sign in, \
                  pick a barbershop, barber, services and time slot, and manage \
                  your appointments without leaving the terminal."
)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8080/api
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password, or a Google identity token
    Login(LoginArgs),

    /// Create an account
    Register(RegisterArgs),

    /// Forget the stored session
    Logout,

    /// Stats and upcoming appointments
    #[command(alias = "home")]
    Dashboard,

    /// Book an appointment
    Book(BookArgs),

    /// Manage your appointments
    #[command(subcommand, alias = "apt")]
    Appointments(AppointmentsCommands),

    /// Browse barbershops, barbers and services
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// View or edit your profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Inspect or renew the stored session
    #[command(subcommand)]
    Session(SessionCommands),

    /// Show current configuration and paths
    Config {
        /// Persist a new backend base URL
        #[arg(long)]
        set_api_url: Option<String>,
        /// Persist a request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,
    },
}

impl Commands {
    /// Application route this command stands for; `None` skips the guard
    fn route(&self) -> Option<&'static str> {
        match self {
            Self::Login(_) => Some("/login"),
            Self::Register(_) => Some("/register"),
            Self::Dashboard => Some(router::DASHBOARD),
            Self::Book(_) => Some("/booking"),
            Self::Appointments(_) => Some("/dashboard/appointments"),
            Self::Profile(_) => Some("/dashboard/profile"),
            Self::Catalog(_) => Some("/barbershops"),
            Self::Logout | Self::Session(_) | Self::Config { .. } => None,
        }
    }
}

/// What to run once the route guard has spoken
enum Screen {
    Landing,
    Command(Commands),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        if let Some(target) = err.redirect() {
            eprintln!("Error: {}", err);
            if target == router::LANDING {
                eprintln!("Run 'barber login' to sign in again.");
            }
            std::process::exit(1);
        }
        return Err(err.into());
    }

    Ok(())
}

async fn run(cli: Cli) -> BarberResult<()> {
    let paths = BarberPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    telemetry::init_telemetry(&settings, cli.verbose);

    if let Some(Commands::Config {
        set_api_url,
        set_timeout,
    }) = &cli.command
    {
        if set_api_url.is_some() || set_timeout.is_some() {
            if let Some(url) = set_api_url {
                settings.api_base_url = url.trim_end_matches('/').to_string();
            }
            if let Some(secs) = set_timeout {
                settings.request_timeout_secs = Some(*secs).filter(|s| *s > 0);
            }
            settings.save(&paths)?;
            println!("Settings saved.");
            println!();
        }
        print_config(&paths, &settings, cli.api_url.as_deref());
        return Ok(());
    }

    let session = SessionStore::load(paths.clone())?;
    let base_url = settings.resolve_api_url(cli.api_url.as_deref());
    let client = ApiClient::from_settings(&settings, base_url, session)?;
    let has_token = client.session().is_authenticated();
    let ctx = CliContext {
        paths,
        settings,
        client,
    };

    let screen = match cli.command {
        Some(command) => Screen::Command(command),
        None => Screen::Landing,
    };
    let route = match &screen {
        Screen::Landing => Some(router::LANDING),
        Screen::Command(command) => command.route(),
    };

    let screen = match route.map(|path| router::guard(path, has_token)) {
        None | Some(RouteDecision::Allow) => screen,
        Some(RouteDecision::Redirect(target)) if target == router::DASHBOARD => {
            Screen::Command(Commands::Dashboard)
        }
        Some(RouteDecision::Redirect(_)) => return Err(BarberError::authentication_required()),
    };

    match screen {
        Screen::Landing => handle_home(),
        Screen::Command(command) => dispatch(&ctx, command).await?,
    }

    Ok(())
}

async fn dispatch(ctx: &CliContext, command: Commands) -> BarberResult<()> {
    match command {
        Commands::Login(args) => handle_login(ctx, args).await,
        Commands::Register(args) => handle_register(ctx, args).await,
        Commands::Logout => handle_logout(ctx),
        Commands::Dashboard => handle_dashboard(ctx).await,
        Commands::Book(args) => handle_book_command(ctx, args).await,
        Commands::Appointments(cmd) => handle_appointments_command(ctx, cmd).await,
        Commands::Catalog(cmd) => handle_catalog_command(ctx, cmd).await,
        Commands::Profile(cmd) => handle_profile_command(ctx, cmd).await,
        Commands::Session(cmd) => handle_session_command(ctx, cmd).await,
        // Handled before the client is built
        Commands::Config { .. } => Ok(()),
    }
}

fn print_config(paths: &BarberPaths, settings: &Settings, api_override: Option<&str>) {
    println!("barber-cli Configuration");
    println!("========================");
    println!("Data directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Session file:    {}", paths.session_file().display());
    println!();
    println!("Settings:");
    println!("  API base URL:    {}", settings.resolve_api_url(api_override));
    match settings.request_timeout_secs {
        Some(secs) => println!("  Request timeout: {}s", secs),
        None => println!("  Request timeout: default"),
    }
    println!("  Log level:       {}", settings.log_level);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    if let Some(client_id) = &settings.google_client_id {
        println!("  Google client:   {}", client_id);
    }
}
