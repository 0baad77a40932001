mod commands;
mod logging;
mod notify;
mod render;
mod strings;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use luach_core::City;
use luach_core::hebcal::{DEFAULT_BASE_URL, HebcalClient};
use luach_core::preferences::Preferences;
use luach_core::view::ViewState;

#[derive(Parser)]
#[command(name = "luach")]
#[command(about = "Holiday, Shabbat and fast times for Israeli cities, from Hebcal")]
struct Cli {
    /// City name or GeoNames id (overrides the saved city for this run)
    #[arg(short, long, global = true)]
    city: Option<String>,

    /// Display language: en or he
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// IANA time zone used to display times
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Hebcal base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL, hide_default_value = true)]
    hebcal_url: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's holiday and the next start/end times (default)
    Today {
        /// Also list every timed event
        #[arg(short, long)]
        details: bool,
    },
    /// Every candle lighting, fast and havdalah time for the week
    Times,
    /// Solar and prayer times for today
    Zmanim,
    /// Holidays of the current month
    Month,
    /// Live countdown, refreshed every second until Ctrl-C
    Watch,
    /// List supported cities
    Cities {
        /// Latitude for a nearest-city lookup
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude for a nearest-city lookup
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Show or change saved preferences
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Write a holiday of this month to an .ics file
    Export {
        /// Number shown by `luach month`, or the holiday title
        holiday: String,

        /// Output path (defaults to <title>.ics in the current directory)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Print a shareable description of a holiday of this month
    Share {
        /// Number shown by `luach month`, or the holiday title
        holiday: String,

        /// Link appended to the shared text
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        url: String,
    },
    /// Wait and show a desktop notification before the next start time
    Notify {
        /// How long before the start to notify (e.g. "15m", "1h")
        #[arg(short, long, default_value = "15m")]
        before: humantime::Duration,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Save a preference
    Set { key: ConfigKey, value: String },
    /// Flip the language or theme
    Toggle { key: ToggleKey },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigKey {
    City,
    Lang,
    Tz,
    Theme,
}

#[derive(Clone, Copy, ValueEnum)]
enum ToggleKey {
    Lang,
    Theme,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let client = HebcalClient::new(cli.hebcal_url);
    let view = resolve_view(cli.city.as_deref(), cli.lang.as_deref(), cli.tz.as_deref())?;

    match cli.command.unwrap_or(Commands::Today { details: false }) {
        Commands::Today { details } => commands::today::run(&client, &view, details).await,
        Commands::Times => commands::times::run(&client, &view).await,
        Commands::Zmanim => commands::zmanim::run(&client, &view).await,
        Commands::Month => commands::month::run(&client, &view).await,
        Commands::Watch => commands::watch::run(&client, &view).await,
        Commands::Cities { lat, lon } => commands::cities::run(&view, lat.zip(lon)),
        Commands::Config { action } => match action {
            None => commands::config::show(&view),
            Some(ConfigAction::Set { key, value }) => commands::config::set(&client, key, &value).await,
            Some(ConfigAction::Toggle { key }) => commands::config::toggle(&client, key).await,
        },
        Commands::Export { holiday, output } => {
            commands::export::run(&client, &view, &holiday, output).await
        }
        Commands::Share { holiday, url } => commands::share::run(&client, &view, &holiday, &url).await,
        Commands::Notify { before } => commands::notify::run(&client, &view, before.into()).await,
    }
}

/// Saved preferences with this run's command-line overrides applied.
fn resolve_view(city: Option<&str>, lang: Option<&str>, tz: Option<&str>) -> Result<ViewState> {
    let prefs = Preferences::load().unwrap_or_else(|e| {
        tracing::warn!("using default preferences: {e}");
        Preferences::default()
    });
    let mut view = ViewState::from_preferences(&prefs);

    if let Some(city) = city {
        view.select_city(City::lookup(city)?);
    }
    if let Some(lang) = lang {
        view.set_locale(lang.parse()?);
    }
    if let Some(tz) = tz {
        view.set_timezone(tz)?;
    }

    Ok(view)
}
