//! Timing probe for one phase-plane search on a speed-capped path.
//!
//! Purpose
//! - Give a reproducible data point for "how long does a default-sized
//!   search take, and how many nodes does it use?" on dynamics with a real
//!   velocity ceiling (admissible band closes above `sd = 3`).

use std::time::{Duration, Instant};

use phaserrt::api::{run, AccelBounds, Budget, FnDynamics, RrtCfg, Tree};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let dynamics = FnDynamics::new(5.0, |_s, sd| AccelBounds::new(-1.0 - sd, 3.0 - sd));
    let cfg = RrtCfg::default();
    let budget = Budget::new(500, Duration::from_secs(60));
    let mut tree = Tree::initialize(0.0, 1.0, cfg.fan_out).expect("valid start range");
    let mut rng = StdRng::seed_from_u64(42);

    let t0 = Instant::now();
    let report = run(&mut tree, &dynamics, &cfg, budget, &mut rng).expect("valid budget");
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    println!(
        "status={:?} iterations={} extend_calls={} nodes={}",
        report.status,
        report.iterations,
        report.extend_calls,
        tree.len()
    );
    println!(
        "max_reached_s={:.4} max_reached_sd={:.4}",
        tree.max_reached_s(),
        tree.max_reached_sd()
    );
    println!("run_time_ms={elapsed_ms:.3}");
    if let Ok(path) = tree.reconstruct_path() {
        println!("profile_len={}", path.len());
        for p in path {
            println!("  s={:.4} sd={:.4}", p.s, p.sd);
        }
    }
}
