//! WMO weather code to emoji mapping.
//!
//! Exact-code table: only the codes Open-Meteo actually emits are listed, any
//! other value maps to [`FALLBACK_ICON`].

/// Glyph for codes missing from the table.
pub const FALLBACK_ICON: &str = "❓";

/// (code, icon, description), sorted by code.
const WMO_CODES: &[(i32, &str, &str)] = &[
    (0, "☀️", "Clear sky"),
    (1, "🌤️", "Mainly clear"),
    (2, "⛅", "Partly cloudy"),
    (3, "☁️", "Overcast"),
    (45, "🌫️", "Fog"),
    (48, "🌫️", "Depositing rime fog"),
    (51, "🌦️", "Light drizzle"),
    (53, "🌦️", "Moderate drizzle"),
    (55, "🌧️", "Dense drizzle"),
    (56, "🌨️", "Light freezing drizzle"),
    (57, "🌨️", "Dense freezing drizzle"),
    (61, "🌧️", "Slight rain"),
    (63, "🌧️", "Moderate rain"),
    (65, "🌧️", "Heavy rain"),
    (66, "🌨️", "Light freezing rain"),
    (67, "🌨️", "Heavy freezing rain"),
    (71, "🌨️", "Slight snow fall"),
    (73, "🌨️", "Moderate snow fall"),
    (75, "❄️", "Heavy snow fall"),
    (77, "🌨️", "Snow grains"),
    (80, "🌦️", "Slight rain showers"),
    (81, "🌧️", "Moderate rain showers"),
    (82, "🌧️", "Violent rain showers"),
    (85, "🌨️", "Slight snow showers"),
    (86, "❄️", "Heavy snow showers"),
    (95, "⛈️", "Thunderstorm"),
    (96, "⛈️", "Thunderstorm with slight hail"),
    (99, "⛈️", "Thunderstorm with heavy hail"),
];

fn lookup(code: i32) -> Option<&'static (i32, &'static str, &'static str)> {
    WMO_CODES
        .binary_search_by_key(&code, |&(c, _, _)| c)
        .ok()
        .map(|idx| &WMO_CODES[idx])
}

/// Icon for a WMO weather code. Never fails.
pub fn icon_for(code: i32) -> &'static str {
    lookup(code).map_or(FALLBACK_ICON, |&(_, icon, _)| icon)
}

/// Human-readable WMO condition, `"Unknown"` for unmapped codes.
pub fn describe(code: i32) -> &'static str {
    lookup(code).map_or("Unknown", |&(_, _, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(WMO_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn known_codes_map_to_their_icon() {
        assert_eq!(icon_for(0), "☀️");
        assert_eq!(icon_for(3), "☁️");
        assert_eq!(icon_for(45), "🌫️");
        assert_eq!(icon_for(63), "🌧️");
        assert_eq!(icon_for(99), "⛈️");
        assert_eq!(describe(95), "Thunderstorm");
    }

    #[test]
    fn every_table_code_has_a_real_icon() {
        for &(code, _, _) in WMO_CODES {
            assert_ne!(icon_for(code), FALLBACK_ICON, "code {code}");
        }
    }

    #[test]
    fn total_over_wmo_range() {
        for code in 0..=99 {
            assert!(!icon_for(code).is_empty(), "code {code}");
        }
    }

    #[test]
    fn unmapped_codes_fall_back() {
        assert_eq!(icon_for(-1), FALLBACK_ICON);
        assert_eq!(icon_for(4), FALLBACK_ICON);
        assert_eq!(icon_for(9999), FALLBACK_ICON);
        assert_eq!(describe(9999), "Unknown");
    }
}
