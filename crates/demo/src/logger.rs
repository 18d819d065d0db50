use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    std::panic::set_hook(Box::new(tracing_panic::panic_hook));
}
