use color_eyre::Result;
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Registry};

fn registry(debug: bool) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = match (debug, std::env::var(EnvFilter::DEFAULT_ENV).is_ok()) {
        (true, false) => EnvFilter::new("debug"),
        _ => EnvFilter::from_default_env(),
    };

    Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(filter)
}

pub fn init(debug: bool) -> Result<()> {
    registry(debug).try_init()?;

    Ok(())
}
