//! Dashboard display formatting

use crate::config::Settings;
use crate::dashboard::UserStats;
use crate::models::User;

/// Format the statistics panel, greeting the user when known
pub fn format_user_stats(stats: &UserStats, user: Option<&User>, settings: &Settings) -> String {
    let mut output = String::new();

    if let Some(user) = user {
        output.push_str(&format!("Hola, {}\n\n", user.name));
    }

    output.push_str("Estadísticas\n");
    output.push_str(&format!("  Citas totales:    {}\n", stats.total));
    output.push_str(&format!("  Próximas citas:   {}\n", stats.upcoming));
    output.push_str(&format!("  Completadas:      {}\n", stats.completed));
    output.push_str(&format!("  Canceladas:       {}\n", stats.cancelled));
    output.push_str(&format!(
        "  Total gastado:    {}\n",
        stats.total_spent.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "  Barbero favorito: {}\n",
        stats.favorite_barber.as_deref().unwrap_or("-")
    ));

    output
}
