use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride ledger workspace",
    long_about = "A unified CLI for running the dispatch demo, report exports,\n\
                  benchmarks, load tests and CI checks in the ride ledger workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference dispatch demo (two rides, one driver, one rider)
    Demo,
    /// Build a seeded scenario and export rides, driver summaries and the report
    Report {
        /// Scenario seed
        #[arg(long, default_value_t = 42, env = "RIDE_REPORT_SEED")]
        seed: u64,
        /// Number of rides to generate
        #[arg(long, default_value_t = 1_000)]
        rides: usize,
        /// Output directory for the exports
        #[arg(long, default_value = "target/reports")]
        output_dir: String,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Benchmark a git revision in a temporary worktree, then compare the working tree against it
    BenchCompare {
        /// Revision used as the baseline
        #[arg(long, default_value = "HEAD")]
        against: String,
        /// Criterion baseline name
        #[arg(long, default_value = "base")]
        baseline: String,
    },
    /// Run load tests (ignored tests in ride_core)
    LoadTest,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the demos
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn spawn(program: &str, args: &[&str]) -> ExitStatus {
    eprintln!("+ {program} {}", args.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to execute {program}: {error}");
            exit(1);
        }
    }
}

fn run(program: &str, args: &[&str]) {
    let status = spawn(program, args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_cargo(args: &[&str]) {
    run("cargo", args);
}

fn run_git(args: &[&str]) {
    run("git", args);
}

fn bench_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["bench", "--package", "ride_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    args
}

fn run_bench(extra: &[&str]) {
    run_cargo(&bench_args(extra));
}

/// Criterion keeps baselines under the target directory, so the worktree build
/// shares ours and the second run can compare against what the first one saved.
fn bench_compare(against: &str, baseline: &str) {
    let target_dir = match std::env::current_dir() {
        Ok(dir) => dir.join("target"),
        Err(error) => {
            eprintln!("cannot resolve the workspace directory: {error}");
            exit(1);
        }
    };
    let worktree = target_dir.join("bench-baseline");
    let worktree_str = worktree.to_string_lossy().into_owned();
    if worktree.exists() {
        run_git(&["worktree", "remove", "--force", &worktree_str]);
    }

    step(&format!("Checking out {against} into {worktree_str}"));
    run_git(&["worktree", "add", "--detach", &worktree_str, against]);

    step(&format!("Saving baseline '{baseline}' from {against}"));
    let save_args = bench_args(&["--save-baseline", baseline]);
    eprintln!("+ (in {worktree_str}) cargo {}", save_args.join(" "));
    let status = Command::new("cargo")
        .args(&save_args)
        .current_dir(&worktree)
        .env("CARGO_TARGET_DIR", &target_dir)
        .status();

    step("Removing baseline worktree");
    run_git(&["worktree", "remove", "--force", &worktree_str]);
    match status {
        Ok(status) if status.success() => {}
        Ok(status) => exit(status.code().unwrap_or(1)),
        Err(error) => {
            eprintln!("failed to execute cargo: {error}");
            exit(1);
        }
    }

    step(&format!("Comparing working tree against '{baseline}'"));
    run_bench(&["--baseline", baseline]);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test ride_core");
    run_cargo(&["test", "-p", "ride_core"]);

    step("Test ride_reports");
    run_cargo(&["test", "-p", "ride_reports"]);
}

fn ci_examples() {
    step("Run dispatch_demo");
    run_cargo(&["run", "-p", "ride_reports", "--example", "dispatch_demo"]);

    step("Run report_export (10K rides)");
    run_cargo(&[
        "run",
        "-p",
        "ride_reports",
        "--example",
        "report_export",
        "--release",
        "--",
        "--rides",
        "10000",
        "--output-dir",
        "target/reports",
    ]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_bench(&[]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            run_cargo(&["run", "-p", "ride_reports", "--example", "dispatch_demo"]);
        }
        Commands::Report {
            seed,
            rides,
            output_dir,
        } => {
            let seed = seed.to_string();
            let rides = rides.to_string();
            run_cargo(&[
                "run",
                "-p",
                "ride_reports",
                "--example",
                "report_export",
                "--release",
                "--",
                "--seed",
                &seed,
                "--rides",
                &rides,
                "--output-dir",
                &output_dir,
            ]);
        }
        Commands::Bench => run_bench(&[]),
        Commands::BenchCompare { against, baseline } => bench_compare(&against, &baseline),
        Commands::LoadTest => {
            run_cargo(&[
                "test",
                "-p",
                "ride_core",
                "--test",
                "load_tests",
                "--",
                "--ignored",
            ]);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
