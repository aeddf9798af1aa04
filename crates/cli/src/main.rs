use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use phaserrt::api::{run, Budget, ConstantBounds, RrtCfg, SearchStatus, Tree};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;

#[derive(Parser)]
#[command(name = "phaserrt")]
#[command(about = "Phase-plane RRT search for feasible speed profiles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search a constant-bounds path and write the profile (CSV or Parquet)
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Serialize, Debug)]
struct RunArgs {
    /// Path length (total arc length)
    #[arg(long, default_value_t = 1.0)]
    duration: f64,
    /// Lower acceleration bound alpha
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    alpha: f64,
    /// Upper acceleration bound beta
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    beta: f64,
    #[arg(long, default_value_t = 0.0)]
    sd_min: f64,
    #[arg(long, default_value_t = 1.0)]
    sd_max: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Steering sample step in s
    #[arg(long, default_value_t = RrtCfg::default().step)]
    step: f64,
    #[arg(long, default_value_t = RrtCfg::default().fan_out)]
    fan_out: usize,
    #[arg(long, default_value_t = RrtCfg::default().k_max)]
    k_max: usize,
    #[arg(long, default_value_t = Budget::default().max_nodes)]
    max_nodes: usize,
    #[arg(long, default_value_t = Budget::default().time_budget.as_secs_f64())]
    time_budget_secs: f64,
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Profile output; a `<stem>.provenance.json` sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
    /// Optional table of tree edges for plotting
    #[arg(long)]
    tree_out: Option<PathBuf>,
}

impl RunArgs {
    fn cfg(&self) -> RrtCfg {
        RrtCfg {
            fan_out: self.fan_out,
            k_max: self.k_max,
            step: self.step,
            ..RrtCfg::default()
        }
    }

    fn budget(&self) -> Result<Budget> {
        let time_budget = Duration::try_from_secs_f64(self.time_budget_secs)?;
        Ok(Budget {
            max_nodes: self.max_nodes,
            time_budget,
            max_iterations: self.max_iterations,
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run_search(args),
        Action::Report => report(),
    }
}

fn run_search(args: RunArgs) -> Result<()> {
    tracing::info!(?args, "run");
    let dynamics = ConstantBounds::new(args.duration, args.alpha, args.beta);
    let cfg = args.cfg();
    let budget = args.budget()?;
    let mut tree = Tree::initialize(args.sd_min, args.sd_max, cfg.fan_out)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let report = run(&mut tree, &dynamics, &cfg, budget, &mut rng)?;

    let mut outputs = Vec::new();
    if let Some(tree_out) = &args.tree_out {
        output::write_frame(&mut output::tree_frame(&tree)?, tree_out)?;
        outputs.push(tree_out.clone());
    }
    let outcome = serde_json::json!({
        "status": format!("{:?}", report.status),
        "iterations": report.iterations,
        "extend_calls": report.extend_calls,
        "nodes": tree.len(),
        "elapsed_ms": report.elapsed.as_secs_f64() * 1e3,
    });
    let solved = report.status == SearchStatus::Solved;
    if solved {
        let path = tree.reconstruct_path()?;
        output::write_frame(&mut output::profile_frame(&path)?, &args.out)?;
        outputs.push(args.out.clone());
    }
    let payload = provenance::Payload::new(serde_json::to_value(&args)?).with_outcome(outcome);
    let prov = provenance::write_sidecar(&args.out, &outputs, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote provenance");

    if !solved {
        bail!(
            "no feasible profile found ({:?} after {} iterations, {} nodes)",
            report.status,
            report.iterations,
            tree.len()
        );
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": phaserrt::VERSION,
        "defaults": {
            "fan_out": RrtCfg::default().fan_out,
            "k_max": RrtCfg::default().k_max,
            "step": RrtCfg::default().step,
            "max_nodes": Budget::default().max_nodes,
            "time_budget_secs": Budget::default().time_budget.as_secs_f64(),
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
