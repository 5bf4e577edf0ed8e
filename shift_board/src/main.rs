use shift_board::app::App;
use shift_board::configuration::Settings;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("shift_board", "warn")?;
    let settings = Settings::parse()?;

    let mut stdout = std::io::stdout();
    App::from_settings(&settings)
        .run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
}
