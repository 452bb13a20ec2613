use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use meteo_core::{Geocode, OpenMeteoClient, WeatherSource, describe, icon_for};
use tracing::debug;

use crate::render;

const EXAMPLES: &str = "Example usage:\n\tmeteo \"Berlin\"\n\tmeteo \"New York\"";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "meteo",
    version,
    about = "Current weather and today's forecast for a place",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Place name; several words are joined with spaces.
    #[arg(value_name = "PLACE")]
    pub place: Vec<String>,

    /// Short one line output.
    #[arg(short, long)]
    pub short: bool,

    /// Log requests and responses to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a run ended; decides the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Report,
    MissingPlace,
    PlaceNotFound,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Report => 0,
            Outcome::MissingPlace | Outcome::PlaceNotFound => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<Outcome> {
        let source = OpenMeteoClient::default();
        self.run_with(&source, &mut io::stdout()).await
    }

    /// Place words joined with single spaces, `None` when nothing was given.
    pub fn place_name(&self) -> Option<String> {
        let name = self
            .place
            .iter()
            .flat_map(|word| word.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ");

        (!name.is_empty()).then_some(name)
    }

    pub async fn run_with<S, W>(&self, source: &S, out: &mut W) -> anyhow::Result<Outcome>
    where
        S: WeatherSource + ?Sized,
        W: Write,
    {
        let Some(place_name) = self.place_name() else {
            writeln!(out, "meteo: No parameter passed.\n\n{EXAMPLES}")?;
            return Ok(Outcome::MissingPlace);
        };

        let geocode = source
            .resolve_geocode(&place_name)
            .await
            .with_context(|| format!("Failed to look up place {place_name:?}"))?;

        let Geocode::Found(place) = geocode else {
            writeln!(out, "Place not found.")?;
            return Ok(Outcome::PlaceNotFound);
        };

        let daily = source
            .fetch_daily(place.latitude, place.longitude)
            .await
            .context("Failed to fetch daily forecast")?;
        let current = source
            .fetch_current(place.latitude, place.longitude)
            .await
            .context("Failed to fetch current weather")?;

        let today = daily.today().context("Daily forecast is unusable")?;
        let icon = icon_for(today.weather_code);
        debug!(
            "Weather code {} ({}) -> {icon}",
            today.weather_code,
            describe(today.weather_code)
        );

        let text = if self.short {
            render::short(icon, &current)
        } else {
            render::long(icon, &place, &current, &today)
        };
        writeln!(out, "{text}")?;

        Ok(Outcome::Report)
    }
}
