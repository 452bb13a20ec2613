use meteo_core::{CurrentWeather, DayForecast, Place};

/// `<icon> <current>(<feels like>)°C`
pub fn short(icon: &str, current: &CurrentWeather) -> String {
    format!("{icon} {}({})°C", current.temperature, current.feels_like)
}

pub fn long(icon: &str, place: &Place, current: &CurrentWeather, today: &DayForecast) -> String {
    let mut out = format!("{icon} {}, {}\n", place.name, place.country);
    out.push_str(&"-".repeat(10));
    out.push('\n');

    out.push_str(&format!("Current:\t {}°C\n", current.temperature));
    out.push_str(&format!("Feels like:\t {}°C\n", current.feels_like));
    out.push_str(&format!("Max:\t\t {}°C\n", today.max));
    out.push_str(&format!("Min:\t\t {}°C", today.min));

    out
}
