//! Console driver for the turret controller.
//!
//! Wires the engine to stdin/stdout and paces the dispatch loop with the
//! configured delay. Pacing lives here on purpose: the engine records the
//! delay but never sleeps on it.

use clap::Parser;
use std::thread;
use tracing::info;
use tracing_subscriber::EnvFilter;
use turret::engine::Engine;
use turret::io::{ConsoleCommandSource, ConsoleReporter, MonotonicClock};

#[derive(Parser, Debug)]
#[command(name = "turret", about = "Finite-state actuator controller", version)]
struct Args {
    /// Pacing delay between dispatch cycles, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Emit reports as one JSON object per line instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let reporter = ConsoleReporter::new(std::io::stdout(), args.json);
    let mut engine = Engine::new(MonotonicClock::new(), ConsoleCommandSource::stdio(), reporter);
    if let Some(ms) = args.delay_ms {
        engine.set_delay(std::time::Duration::from_millis(ms));
    }

    // Paced rendition of Engine::start: init dispatch, sleep the configured
    // delay between cycles, final dispatch runs shutdown reporting.
    engine.update();
    while !engine.current_state().is_terminal() {
        if let Some(delay) = engine.delay() {
            thread::sleep(delay);
        }
        engine.update();
    }
    engine.update();

    info!(
        duration_ms = engine.history().duration_ms(),
        errors = engine.error_count(),
        "controller halted"
    );
}
