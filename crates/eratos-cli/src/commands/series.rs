use crate::support::{engine_or_exit, print_json_or_exit, resolve_config_or_exit, yes_no};
use serde_json::json;

pub fn run(bound: Option<i64>, config: Option<String>, after_steps: Option<u64>, json_output: bool) {
    let config = resolve_config_or_exit(config.as_deref(), bound);
    let mut engine = engine_or_exit(&config);
    match after_steps {
        Some(steps) => {
            for _ in 0..steps {
                if engine.is_complete() {
                    break;
                }
                engine.step();
            }
        }
        None => {
            engine.run_to_completion();
        }
    }

    let stats = engine.summarize();

    if json_output {
        let payload = json!({
            "bound": engine.bound(),
            "steps": engine.steps_taken(),
            "cursor": engine.cursor(),
            "series": stats.series,
        });
        print_json_or_exit(&payload);
        return;
    }

    let cursor = engine.cursor();
    println!("eratos series --bound {}", engine.bound());
    println!(
        "  Steps: {} (complete: {})",
        engine.steps_taken(),
        yes_no(cursor.complete)
    );
    println!("  {:>8} {:>8} {:>10} {:>8}", "n", "actual", "estimated", "settled");
    for point in &stats.series {
        println!(
            "  {:>8} {:>8} {:>10.2} {:>8}",
            point.n,
            point.actual,
            point.estimated,
            yes_no(point.settled)
        );
    }
}
