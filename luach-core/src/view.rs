//! Transient UI state shared by all views.
//!
//! The state is passed explicitly to whatever renders it. Transitions
//! report what they invalidate; callers decide when to persist.

use chrono_tz::Tz;

use crate::city::City;
use crate::error::LuachResult;
use crate::locale::Locale;
use crate::preferences::{Preferences, Theme};
use crate::timefmt::parse_tz;

/// What a state transition invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Data must be fetched again (city or language changed).
    Refresh,
    /// Only the presentation changed.
    Redraw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub city: &'static City,
    pub timezone: Tz,
    pub locale: Locale,
    pub theme: Theme,
}

impl Default for ViewState {
    fn default() -> Self {
        let city = City::default_city();
        ViewState {
            city,
            timezone: city_tz(city),
            locale: Locale::default(),
            theme: Theme::default(),
        }
    }
}

impl ViewState {
    /// Build from saved preferences. An unknown saved city or zone falls
    /// back to the default rather than failing.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let city = prefs
            .city
            .and_then(City::by_geonameid)
            .unwrap_or_else(City::default_city);

        let timezone = prefs
            .timezone
            .as_deref()
            .and_then(|name| match parse_tz(name) {
                Ok(tz) => Some(tz),
                Err(e) => {
                    tracing::warn!("ignoring saved time zone: {e}");
                    None
                }
            })
            .unwrap_or_else(|| city_tz(city));

        ViewState {
            city,
            timezone,
            locale: prefs.language,
            theme: prefs.theme,
        }
    }

    pub fn to_preferences(&self) -> Preferences {
        let timezone = if self.timezone == city_tz(self.city) {
            None
        } else {
            Some(self.timezone.name().to_string())
        };

        Preferences {
            city: Some(self.city.geonameid),
            timezone,
            language: self.locale,
            theme: self.theme,
        }
    }

    /// Switch city. The time zone follows the city.
    pub fn select_city(&mut self, city: &'static City) -> Effect {
        self.city = city;
        self.timezone = city_tz(city);
        Effect::Refresh
    }

    pub fn set_timezone(&mut self, name: &str) -> LuachResult<Effect> {
        self.timezone = parse_tz(name)?;
        Ok(Effect::Redraw)
    }

    pub fn set_locale(&mut self, locale: Locale) -> Effect {
        self.locale = locale;
        Effect::Refresh
    }

    pub fn toggle_locale(&mut self) -> Effect {
        self.set_locale(self.locale.toggled())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Effect {
        self.theme = theme;
        Effect::Redraw
    }

    pub fn toggle_theme(&mut self) -> Effect {
        self.set_theme(self.theme.toggled())
    }
}

fn city_tz(city: &City) -> Tz {
    parse_tz(city.tz).unwrap_or(chrono_tz::Asia::Jerusalem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_jerusalem_in_english() {
        let view = ViewState::default();
        assert_eq!(view.city.name, "Jerusalem");
        assert_eq!(view.timezone, chrono_tz::Asia::Jerusalem);
        assert_eq!(view.locale, Locale::English);
    }

    #[test]
    fn selecting_a_city_resets_timezone() {
        let mut view = ViewState::default();
        view.set_timezone("UTC").unwrap();
        assert_eq!(view.timezone, Tz::UTC);

        let haifa = City::lookup("Haifa").unwrap();
        assert_eq!(view.select_city(haifa), Effect::Refresh);
        assert_eq!(view.timezone, chrono_tz::Asia::Jerusalem);
    }

    #[test]
    fn toggles_report_their_effect() {
        let mut view = ViewState::default();
        assert_eq!(view.toggle_locale(), Effect::Refresh);
        assert_eq!(view.locale, Locale::Hebrew);
        assert_eq!(view.toggle_theme(), Effect::Redraw);
        assert_eq!(view.theme, Theme::Dark);
    }

    #[test]
    fn preferences_round_trip() {
        let mut view = ViewState::default();
        view.select_city(City::lookup("Afula").unwrap());
        view.set_timezone("UTC").unwrap();
        view.toggle_locale();

        let prefs = view.to_preferences();
        assert_eq!(prefs.city, Some(295740));
        assert_eq!(prefs.timezone.as_deref(), Some("UTC"));
        assert_eq!(ViewState::from_preferences(&prefs), view);
    }

    #[test]
    fn city_zone_is_not_saved_as_override() {
        assert_eq!(ViewState::default().to_preferences().timezone, None);
    }

    #[test]
    fn bad_saved_values_fall_back() {
        let prefs = Preferences {
            city: Some(1),
            timezone: Some("Nowhere/Special".into()),
            ..Default::default()
        };
        let view = ViewState::from_preferences(&prefs);
        assert_eq!(view.city.name, "Jerusalem");
        assert_eq!(view.timezone, chrono_tz::Asia::Jerusalem);
    }
}
