use anyhow::{Context, Result};
use luach_core::City;
use luach_core::hebcal::HebcalClient;
use luach_core::preferences::{Preferences, Theme};
use luach_core::view::{Effect, ViewState};
use owo_colors::OwoColorize;

use crate::commands::today;
use crate::{ConfigKey, ToggleKey};

pub fn show(view: &ViewState) -> Result<()> {
    let config_path = Preferences::config_path()?;

    println!("{}", "Preferences".bold());
    println!("  City:       {} ({})", view.city.name, view.city.geonameid);
    println!("  Time zone:  {}", view.timezone.name());
    println!("  Language:   {}", view.locale);
    println!("  Theme:      {}", theme_name(view.theme));
    println!();
    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());

    Ok(())
}

/// Save one preference. A change that affects what Hebcal returns
/// reloads and shows today's card in the new setting.
pub async fn set(client: &HebcalClient, key: ConfigKey, value: &str) -> Result<()> {
    let mut view = saved_view();
    let effect = apply_set(&mut view, key, value)?;
    save(&view)?;
    follow_up(client, &view, effect).await
}

pub async fn toggle(client: &HebcalClient, key: ToggleKey) -> Result<()> {
    let mut view = saved_view();
    let effect = match key {
        ToggleKey::Lang => view.toggle_locale(),
        ToggleKey::Theme => view.toggle_theme(),
    };
    save(&view)?;
    follow_up(client, &view, effect).await
}

fn apply_set(view: &mut ViewState, key: ConfigKey, value: &str) -> Result<Effect> {
    Ok(match key {
        ConfigKey::City => view.select_city(City::lookup(value)?),
        ConfigKey::Lang => view.set_locale(value.parse()?),
        ConfigKey::Tz => view.set_timezone(value)?,
        ConfigKey::Theme => view.set_theme(parse_theme(value)?),
    })
}

async fn follow_up(client: &HebcalClient, view: &ViewState, effect: Effect) -> Result<()> {
    match effect {
        Effect::Refresh => {
            println!();
            today::run(client, view, false).await
        }
        Effect::Redraw => Ok(()),
    }
}

/// The view exactly as saved, without this run's overrides.
fn saved_view() -> ViewState {
    let prefs = Preferences::load().unwrap_or_else(|e| {
        tracing::warn!("starting from default preferences: {e}");
        Preferences::default()
    });
    ViewState::from_preferences(&prefs)
}

fn save(view: &ViewState) -> Result<()> {
    view.to_preferences().save().context("Failed to save preferences")?;

    println!(
        "{} {} · {} · {} · {}",
        "Saved".green(),
        view.city.name,
        view.timezone.name(),
        view.locale,
        theme_name(view.theme)
    );
    Ok(())
}

fn parse_theme(value: &str) -> Result<Theme> {
    match value.trim().to_lowercase().as_str() {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        other => anyhow::bail!("Unknown theme '{}'. Expected 'light' or 'dark'", other),
    }
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}
