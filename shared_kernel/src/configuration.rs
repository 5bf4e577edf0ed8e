use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads `Settings` from `./configuration` relative to the working directory.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    config_from_dir(base_path.join("configuration"))
}

/// `base.yaml` (or `test.yaml` under test) from `configuration_directory`,
/// overridden by `APP_` prefixed environment variables, e.g.
/// `APP_SHIFTS_API__ADDRESS="Austin, TX"`.
pub fn config_from_dir<Settings: DeserializeOwned>(
    configuration_directory: impl AsRef<Path>,
) -> anyhow::Result<Settings> {
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.as_ref().join(file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
