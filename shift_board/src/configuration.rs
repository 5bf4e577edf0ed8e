use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;
use shared_kernel::configuration::{config, config_from_dir};
use std::path::Path;
use url::Url;
use use_cases::shifts_api::Address;

#[derive(Debug, Deserialize, Clone)]
pub struct ShiftsApiSettings {
    pub host: Url,
    pub address: Address,
    #[serde(default)]
    pub radius: Option<f32>,
    #[serde(default)]
    pub legacy_radius_key: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarSettings {
    pub timezone: Tz,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub shifts_api: ShiftsApiSettings,
    pub calendar: CalendarSettings,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Settings> {
        config::<Settings>().context("Failed to deserialize settings to shift_board settings")
    }

    pub fn from_dir(configuration_directory: impl AsRef<Path>) -> anyhow::Result<Settings> {
        config_from_dir::<Settings>(configuration_directory)
            .context("Failed to deserialize settings to shift_board settings")
    }
}
