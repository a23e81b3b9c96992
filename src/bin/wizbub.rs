use tracing::warn;
use wizbub::app::DesktopRuntime;
use wizbub::config::Settings;
use wizbub::{launcher, logging};

// Command-line arguments are not read.
fn main() -> anyhow::Result<()> {
    let (settings, load_error) = Settings::or_default(Settings::load_from_env());
    logging::init(&settings.logging);
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load settings, using defaults");
    }

    launcher::launch(&mut DesktopRuntime::new(), &settings)?;
    Ok(())
}
