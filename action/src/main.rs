use anyhow::Result;
use clap::Parser;
use sbom_action::command::{self, Status};
use sbom_action::{ActionArgs, Config, HttpClient};

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("SBOM_ACTION_LOG").unwrap_or_else(|_| "warn".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let config = Config::new(ActionArgs::parse());
    let dir = std::env::current_dir()?;
    let status = command::run(&HttpClient::new(), &config, &dir)?;
    if status == Status::Failed {
        std::process::exit(status.code());
    }
    Ok(())
}
