use crate::support::{
    engine_or_exit, family_members, join_values, print_json_or_exit, resolve_config_or_exit,
};
use eratos_kernel::round_to;
use serde_json::json;

pub struct Args {
    pub bound: Option<i64>,
    pub config: Option<String>,
    pub one_is_prime: bool,
    pub json: bool,
}

pub fn run(args: Args) {
    let mut config = resolve_config_or_exit(args.config.as_deref(), args.bound);
    if args.one_is_prime {
        config.one_is_prime = true;
    }
    let mut engine = engine_or_exit(&config);
    let steps = engine.run_to_completion();

    let table = engine.table();
    let primes: Vec<u64> = table.primes().collect();
    let families = family_members(table);
    let stats = engine.summarize();
    let digest = table.digest();

    if args.json {
        let payload = json!({
            "bound": engine.bound(),
            "steps": steps,
            "oneIsPrime": config.one_is_prime,
            "primes": primes,
            "families": families,
            "stats": stats,
            "digest": digest,
        });
        print_json_or_exit(&payload);
        return;
    }

    println!("eratos run --bound {}", engine.bound());
    println!("  Steps: {steps}");
    println!("  Primes ({}): {}", primes.len(), join_values(&primes));
    println!("  Prime count: {}", stats.prime_count);
    println!("  Estimated (n/ln n): {}", stats.estimated_count);
    println!("  Density: {:.4}", stats.density);
    println!(
        "  Gaps: avg {}, max {}",
        round_to(stats.avg_gap, 2),
        stats.max_gap
    );
    for (family, members) in &families {
        println!("  {family}: {}", join_values(members));
    }
    println!("  Digest: {digest}");
}
