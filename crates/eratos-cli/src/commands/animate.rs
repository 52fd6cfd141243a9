use crate::support::{engine_or_exit, exit_with, resolve_config_or_exit};
use eratos_kernel::{EntryState, SieveEngine, StepEvent};
use serde_json::json;
use std::time::Duration;

pub struct Args {
    pub bound: Option<i64>,
    pub config: Option<String>,
    pub interval_ms: Option<u64>,
    pub max_steps: Option<u64>,
    pub json: bool,
}

fn describe(event: &StepEvent) -> String {
    match *event {
        StepEvent::FoundPrime { prime } => format!("found prime {prime}"),
        StepEvent::MarkedComposite { value, by, fresh } => {
            if fresh {
                format!("struck {value} (multiple of {by})")
            } else {
                format!("struck {value} again (multiple of {by})")
            }
        }
        StepEvent::Advanced { next_prime } => format!("next candidate {next_prime}"),
        StepEvent::Completed { primes } => format!("complete: {primes} primes"),
        StepEvent::Idle => "idle".to_string(),
    }
}

/// One row of the grid: `.` unmarked, `P` prime, `x` composite, `1` unit.
fn render_grid(engine: &SieveEngine, width: usize) -> Vec<String> {
    let cells: Vec<char> = engine
        .table()
        .entries()
        .iter()
        .map(|entry| match entry.state() {
            EntryState::Unmarked => '.',
            EntryState::Prime => 'P',
            EntryState::Composite => 'x',
            EntryState::Unit => '1',
        })
        .collect();
    cells
        .chunks(width.max(1))
        .map(|row| row.iter().collect())
        .collect()
}

pub fn run(args: Args) {
    let config = resolve_config_or_exit(args.config.as_deref(), args.bound);
    let interval = Duration::from_millis(args.interval_ms.unwrap_or(config.step_interval_ms));
    let mut engine = engine_or_exit(&config);

    while !engine.is_complete() {
        if args.max_steps.is_some_and(|max| engine.steps_taken() >= max) {
            break;
        }
        let event = engine.step();
        if args.json {
            let line = json!({
                "step": engine.steps_taken(),
                "event": event,
                "cursor": engine.cursor(),
            });
            match serde_json::to_string(&line) {
                Ok(text) => println!("{text}"),
                Err(e) => exit_with(format!("json serialization: {e}")),
            }
        } else {
            println!("{:>6}  {}", engine.steps_taken(), describe(&event));
        }
        if !interval.is_zero() && !engine.is_complete() {
            std::thread::sleep(interval);
        }
    }

    if !args.json {
        println!();
        for row in render_grid(&engine, 10) {
            println!("  {row}");
        }
        let stats = engine.summarize();
        println!();
        println!(
            "  {} primes so far, estimate {}",
            stats.prime_count, stats.estimated_count
        );
    }
}
