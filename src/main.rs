use todo_app::{config::Config, telemetry, tui};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config)?;
    tracing::info!(tick_ms = config.tick_rate.as_millis() as u64, "starting");
    tui::run(&config)
}
