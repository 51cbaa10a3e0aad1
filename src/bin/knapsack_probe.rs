use std::collections::HashMap;
use std::env;
use std::time::Instant;

use knapsack_dp::{solve_with, ItemBuffers, SolverConfig, TableMode};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack DP Probe: Performance and Correctness");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Table mode: {}", options.mode.as_str());
    eprintln!("  • small instances are checked against exhaustive subset enumeration");
    eprintln!(
        "  • larger instances (up to {} items) are checked against the other table mode",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock seconds; rss_delta_kib: resident memory delta");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Exhaustive cross-check on small instances...");
    measurements.extend(run_small(&options, &mut sys));
    eprintln!();

    eprintln!("[2/3] Growing item count at fixed capacity...");
    measurements.extend(run_items_sweep(&options, &mut sys));
    eprintln!();

    eprintln!("[3/3] Growing capacity at fixed item count...");
    measurements.extend(run_capacity_sweep(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("knapsack_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    mode: TableMode,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 256usize;
        let mut mode = TableMode::Full;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = || -> Result<String, String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {flag}")),
                }
            };
            match flag.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--verify-limit" => {
                    verify_limit = value()?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a positive integer".to_string())?
                }
                "--mode" => {
                    let v = value()?;
                    mode = TableMode::parse(&v).ok_or_else(|| format!("unknown mode '{v}'"))?
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            mode,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin knapsack_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest item count cross-checked against the other table mode (default: 256)
  --mode <full|rolling>         Table mode under test (default: full)
  -h, --help                    Print this help message
"
        );
    }

    fn config(&self, mode: TableMode) -> SolverConfig {
        SolverConfig {
            mode,
            ..SolverConfig::default()
        }
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn compare(expected: f64, got: f64) -> (VerificationStatus, Option<String>) {
    if expected.to_bits() == got.to_bits() {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {got}")),
        )
    }
}

fn other_mode(mode: TableMode) -> TableMode {
    match mode {
        TableMode::Full => TableMode::Rolling,
        TableMode::Rolling => TableMode::Full,
    }
}

fn run_small(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const ITEMS: &[usize] = &[1, 4, 8, 12, 15];
    let total = ITEMS.len();
    ITEMS
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] items={}... ", idx + 1, total, n);
            let items = deterministic_items(n, 40, 3 * n);
            let config = options.config(options.mode);
            let m = measure("small", format!("n={n},W={}", items.capacity()), sys, || {
                match solve_with(&items, &config) {
                    Ok(best) => compare(brute_force(&items), best),
                    Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
                }
            });
            eprintln!("{} time={:.3}s", m.verification_status.icon(), m.wall_s);
            m
        })
        .collect()
}

fn run_items_sweep(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const ITEMS: &[usize] = &[64, 256, 1024, 2048];
    const CAPACITY: usize = 10_000;
    sweep("items", ITEMS.iter().map(|&n| (n, CAPACITY)), options, sys)
}

fn run_capacity_sweep(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const ITEMS: usize = 128;
    const CAPACITIES: &[usize] = &[1_000, 10_000, 50_000, 200_000];
    sweep("capacity", CAPACITIES.iter().map(|&w| (ITEMS, w)), options, sys)
}

fn sweep<I>(
    scenario: &'static str,
    shapes: I,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement>
where
    I: ExactSizeIterator<Item = (usize, usize)>,
{
    let total = shapes.len();
    shapes
        .enumerate()
        .map(|(idx, (n, capacity))| {
            eprint!("      [{}/{}] items={} capacity={}... ", idx + 1, total, n, capacity);
            let items = deterministic_items(n, capacity / 8 + 1, capacity);
            let config = options.config(options.mode);
            let mut best_result = 0.0;
            let m = measure(scenario, format!("n={n},W={capacity}"), sys, || {
                let best = match solve_with(&items, &config) {
                    Ok(best) => best,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                best_result = best;
                if n > options.verify_limit {
                    return (VerificationStatus::NotChecked, None);
                }
                match solve_with(&items, &options.config(other_mode(options.mode))) {
                    Ok(baseline) => compare(baseline, best),
                    Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
                }
            });
            eprintln!(
                "{} best={:.2}, time={:.3}s, status={}",
                m.verification_status.icon(),
                best_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    let total = measurements.len().max(1) as f64;
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (items > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {}", detail);
                }
            }
        }
        eprintln!();
    }

    let mut by_scenario: HashMap<&str, Vec<&Measurement>> = HashMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in by_scenario.iter() {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!(
            "  {}: runs={}, max_time={:.3}s, max_rss_delta={} KiB",
            scenario,
            ms.len(),
            max_time,
            max_mem
        );
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},\"{}\",{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .chain(["scenario".len()])
        .max()
        .unwrap_or(0);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .chain(["size".len()])
        .max()
        .unwrap_or(0);

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Deterministic pseudo-random items; weights in `1..=max_weight`.
fn deterministic_items(n: usize, max_weight: usize, capacity: usize) -> ItemBuffers {
    let mut state = 0x9E37_79B9_7F4A_7C15u64 ^ n as u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let max_weight = max_weight.max(1) as u64;
    let mut values = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for _ in 0..n {
        weights.push((next() % max_weight + 1) as usize);
        values.push((next() % 10_000) as f64 / 100.0);
    }
    ItemBuffers::new(values, weights, capacity).unwrap_or_else(|err| {
        eprintln!("knapsack_probe: {err}");
        std::process::exit(1);
    })
}

/// Best value over every subset; only for small `n`.
fn brute_force(items: &ItemBuffers) -> f64 {
    let n = items.len();
    let mut best = 0.0f64;
    for mask in 0u32..(1u32 << n) {
        let mut weight = 0usize;
        let mut value = 0.0f64;
        for (k, (v, w)) in items.items().enumerate() {
            if mask & (1 << k) != 0 {
                weight += w;
                value += v;
            }
        }
        if weight <= items.capacity() && value > best {
            best = value;
        }
    }
    best
}
