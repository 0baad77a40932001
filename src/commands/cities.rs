use anyhow::Result;
use luach_core::City;
use luach_core::city::ISRAEL_CITIES;
use luach_core::view::ViewState;
use owo_colors::OwoColorize;

use crate::render::Render;

/// List cities, or print the one nearest to a position.
pub fn run(view: &ViewState, position: Option<(f64, f64)>) -> Result<()> {
    if let Some((lat, lon)) = position {
        let city = City::nearest(lat, lon);
        println!("{} ({})", city.name, city.geonameid);
        return Ok(());
    }

    println!("{}", "Cities".bold());
    for city in ISRAEL_CITIES {
        println!("{}", city.render(view));
    }

    Ok(())
}
