//! campus — a scripted walk through a three-box scavenger hunt.
//!
//! Replays a walk across the university grounds through the session and
//! prints the hint panel and notifications as they change.
//!
//! ```text
//! campus [config.json]
//! ```
//!
//! The optional JSON file overrides any `HuntConfig` field, e.g.
//! `{"threshold_m": 15.0}`.  Set `RUST_LOG=debug` to see every marker
//! transition.

mod course;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use hunt_config::{HuntConfig, load_targets_reader};
use hunt_output::ConsolePresenter;
use hunt_session::SessionBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:     u64 = 42;
const JITTER_M: f64 = 3.0; // typical phone GPS wander

fn load_config(path: Option<&Path>) -> Result<HuntConfig> {
    let Some(path) = path else {
        return Ok(HuntConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: HuntConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    println!("=== campus — geohunt demo ===");
    println!(
        "Threshold: {} m  |  Jitter: {JITTER_M} m  |  Seed: {SEED}",
        config.threshold_m
    );
    println!();

    // 1. Targets from the embedded CSV.
    let targets = load_targets_reader(Cursor::new(course::TARGETS_CSV))?;
    for target in &targets {
        log::debug!("target {target}");
    }

    // 2. Scripted walk visiting each target in turn.
    let mut feed = course::scripted_walk(&targets, SEED, Some(JITTER_M));

    // 3. Session.
    let mut session = SessionBuilder::new(targets).config(config).build()?;
    let mut presenter = ConsolePresenter::new(std::io::stdout());

    // 4. Run.
    let t0 = Instant::now();
    session.run(&mut feed, &mut presenter)?;
    let elapsed = t0.elapsed();

    if let Some(e) = presenter.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!(
        "Found {}/{} targets in {} of walking ({:.3} ms wall)",
        session.tracker.found_count(),
        session.tracker.targets().len(),
        session.now(),
        elapsed.as_secs_f64() * 1_000.0
    );
    println!("{:<6} {:<8} {:<10}", "Target", "Found", "Colour");
    println!("{}", "-".repeat(26));
    for (i, target) in session.tracker.targets().iter().enumerate() {
        let found = session.tracker.is_found(hunt_core::TargetIdx(i as u16));
        println!(
            "{:<6} {:<8} {:<10}",
            target.id,
            if found { "yes" } else { "no" },
            target.color.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
