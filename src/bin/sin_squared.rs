//! Estimates the integral of sin²(x) over [0, π].
//!
//! Set `RUST_LOG=debug` to see the effective sample count.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use montecarlo::io::{run, ArgumentCount, PromptCount, SampleCountProvider, WriterSink};
use montecarlo::math::monte_carlo::{IntegrationConfig, RandomSource, MIN_SAMPLES};

#[derive(Debug, Parser)]
#[command(about = "Monte Carlo estimate of the integral of sin²(x) over [0, π]")]
struct Cli {
    /// Number of samples; prompts for it when omitted
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    samples: Option<String>,

    /// Seed for a reproducible estimate
    #[arg(short, long)]
    seed: Option<u64>,

    /// Requests below this count are raised to it
    #[arg(long, default_value_t = MIN_SAMPLES)]
    min_samples: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = IntegrationConfig {
        min_samples: cli.min_samples,
    };

    let mut provider: Box<dyn SampleCountProvider> = match cli.samples {
        Some(raw) => Box::new(ArgumentCount::new(raw)),
        None => Box::new(PromptCount::default()),
    };
    let mut source = RandomSource::from_optional_seed(cli.seed);
    let mut sink = WriterSink::stdout();

    run(provider.as_mut(), &mut sink, &mut source, &config)?;
    Ok(())
}
