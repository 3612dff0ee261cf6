use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(verbose: bool, default_level: Option<&str>) -> EnvFilter {
    let fallback = match (verbose, default_level) {
        (true, _) => "shoptimal=debug,info".to_string(),
        (false, Some(level)) => format!("shoptimal={}", level),
        (false, None) => "shoptimal=info".to_string(),
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_cli_logger(verbose: bool, default_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, default_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one object per line for log collectors
        )
        .init();
}
