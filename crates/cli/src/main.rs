use stockroom_cli::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    stockroom_observability::init(config.log_format);

    let stdout = std::io::stdout();
    let items = run(&config, &mut stdout.lock())?;

    tracing::debug!(count = items.len(), "pipeline finished");
    Ok(())
}
