use wizbub::config::LoggingSettings;
use wizbub::{health, logging};

fn main() {
    logging::init(&LoggingSettings {
        level: "warn".to_string(),
    });

    let report = health::run_all_checks();
    health::print_report(&report);

    std::process::exit(report.exit_code());
}
