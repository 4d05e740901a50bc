use std::io;
use std::io::BufWriter;
use std::io::Write;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quadlife::LifeEngine;
use quadlife::config::Config;
use quadlife::config::ConfigError;
use quadlife::config::USAGE;
use quadlife::console;
use quadlife::plot;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("{USAGE}\n");
            return Err(e).context("Invalid arguments");
        }
    };

    let initial = match &config.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            plot::read_plot(&text).with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => {
            eprintln!("Enter coordinates line-by-line in (X,Y) format. Press Enter twice to finish.");

            console::read_coordinates(io::stdin().lock()).context("Failed to read stdin")?
        }
    };

    let mut engine = LifeEngine::with_rules(initial, config.rules);
    info!(
        population = engine.population(),
        steps = config.steps,
        rules = %config.rules,
        "starting"
    );

    engine.advance(config.steps);

    let mut out = BufWriter::new(io::stdout().lock());
    plot::write_plot(engine.cells(), &mut out).context("Failed to write plot")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
