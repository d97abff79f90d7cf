use tracing_subscriber::{
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

pub fn init_cli_logger(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("usernamecrafter=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("usernamecrafter=info"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    // 只會啟用其中一種輸出格式
    let output_layer: Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync> = if json {
        Box::new(fmt_layer.json())
    } else {
        Box::new(fmt_layer.compact())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output_layer)
        .init();
}
