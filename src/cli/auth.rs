//! Sign-in, registration and sign-out commands

use clap::Args;

use super::prompt::{prompt_password, prompt_required, prompt_string};
use super::CliContext;
use crate::api::AuthApi;
use crate::error::{BarberError, BarberResult};
use crate::models::{RegisterRequest, User};

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: Option<String>,
    /// Password; prompted without echo when omitted
    #[arg(long, env = "BARBER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Sign in with a Google identity token instead of a password
    #[arg(long, conflicts_with_all = ["email", "password"])]
    pub google_token: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub email: Option<String>,
    /// First name
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    /// Password; prompted twice without echo when omitted
    #[arg(long, env = "BARBER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub async fn handle_login(ctx: &CliContext, args: LoginArgs) -> BarberResult<()> {
    let auth = AuthApi::new(&ctx.client);

    let user = match args.google_token {
        Some(token) => auth.google(&token).await?,
        None => {
            let email = match args.email {
                Some(email) => email,
                None => prompt_required("Email: ")?,
            };
            let password = match args.password {
                Some(password) => password,
                None => prompt_password("Contraseña: ")?,
            };
            auth.login(&email, &password).await?
        }
    };

    print_welcome(&user);
    Ok(())
}

pub async fn handle_register(ctx: &CliContext, args: RegisterArgs) -> BarberResult<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt_required("Email: ")?,
    };
    let name = match args.name {
        Some(name) => name,
        None => prompt_required("Nombre: ")?,
    };
    let last_name = match args.last_name {
        Some(last_name) => Some(last_name),
        None => Some(prompt_string("Apellido (opcional): ")?).filter(|s| !s.is_empty()),
    };
    let phone = match args.phone {
        Some(phone) => phone,
        None => prompt_required("Teléfono: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_new_password()?,
    };

    let request = RegisterRequest {
        email,
        password,
        name,
        last_name,
        phone,
    };
    let user = AuthApi::new(&ctx.client).register(&request).await?;

    print_welcome(&user);
    Ok(())
}

pub fn handle_logout(ctx: &CliContext) -> BarberResult<()> {
    AuthApi::new(&ctx.client).logout()?;
    println!("Sesión cerrada.");
    Ok(())
}

fn prompt_new_password() -> BarberResult<String> {
    let first = prompt_password("Contraseña: ")?;
    let second = prompt_password("Confirma la contraseña: ")?;
    if first != second {
        return Err(BarberError::Validation("Passwords do not match".into()));
    }
    Ok(first)
}

fn print_welcome(user: &User) {
    println!("Bienvenido, {}.", user.name);
    println!();
    println!("Run 'barber dashboard' to see your appointments");
    println!("or 'barber book' to make a new booking.");
}
