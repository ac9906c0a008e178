//! Colorful console output for GroupSum.
//!
//! Provides a custom `tracing` layer that formats counting and sweep events
//! with colors, plus plain-text tables for sweep reports and solution lists.
//!
//! ## Log Levels
//!
//! - **INFO**: Sweep start/end
//! - **WARN**: Pool too small, skipped scenarios
//! - **DEBUG**: Per-count statistics, per-scenario counts

mod table;

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use table::{render_solutions, render_table};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SWEEP_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console logging at INFO.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    init_with_level("info");
}

/// Initializes console logging with a default level for GroupSum crates
/// (`"warn"`, `"info"`, `"debug"`, ...).
pub fn init_with_level(level: &str) {
    INIT.get_or_init(|| {
        let directive = format!("groupsum={level},groupsum_core={level},groupsum_scenario={level}");
        let filter = EnvFilter::builder()
            .parse_lossy(std::env::var("RUST_LOG").unwrap_or(directive));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GroupSumConsoleLayer)
            .try_init();
    });
}

/// Prints the GroupSum banner to stderr.
pub fn print_banner() {
    let banner = r#"
  ____                       ____
 / ___|_ __ ___  _   _ _ __ / ___| _   _ _ __ ___
| |  _| '__/ _ \| | | | '_ \\___ \| | | | '_ ` _ \
| |_| | | | (_) | |_| | |_) |___) | |_| | | | | | |
 \____|_|  \___/ \__,_| .__/|____/ \__,_|_| |_| |_|
                      |_|
"#;

    let version_line = format!("            v{} - Constrained-Sum Counter\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

// Marks the start of a sweep for elapsed time tracking.
fn mark_sweep_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SWEEP_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since sweep start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SWEEP_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats GroupSum events with colors on stderr.
pub struct GroupSumConsoleLayer;

impl<S: Subscriber> Layer<S> for GroupSumConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("groupsum") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    reason: Option<String>,
    vertices: Option<String>,
    targets: Option<String>,
    index: Option<u64>,
    available: Option<u64>,
    required: Option<u64>,
    scenario_count: Option<u64>,
    variable_count: Option<u64>,
    pool_size: Option<u64>,
    count: Option<u64>,
    solutions: Option<u64>,
    counted: Option<u64>,
    skipped: Option<u64>,
    solvable: Option<u64>,
    total_solutions: Option<u64>,
    slices_checked: Option<u64>,
    matching_arrangements: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "reason" => self.reason = Some(s),
            "vertices" => self.vertices = Some(s),
            "targets" => self.targets = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "index" => &mut self.index,
            "available" => &mut self.available,
            "required" => &mut self.required,
            "scenario_count" => &mut self.scenario_count,
            "variable_count" => &mut self.variable_count,
            "pool_size" => &mut self.pool_size,
            "count" => &mut self.count,
            "solutions" => &mut self.solutions,
            "counted" => &mut self.counted,
            "skipped" => &mut self.skipped,
            "solvable" => &mut self.solvable,
            "total_solutions" => &mut self.total_solutions,
            "slices_checked" => &mut self.slices_checked,
            "matching_arrangements" => &mut self.matching_arrangements,
            "duration_ms" => &mut self.duration_ms,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        "scenario_skipped" => format_scenario_skipped(v),
        "scenario_counted" => format_scenario_counted(v),
        "pool_too_small" => format_pool_too_small(v),
        "count_end" => format_count_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_num(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_sweep_start(v: &EventVisitor) -> String {
    mark_sweep_start();
    format!(
        "{} {} Sweeping │ {} scenarios │ {} variables each",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_num(v.scenario_count.unwrap_or(0)).bright_yellow(),
        format_num(v.variable_count.unwrap_or(0)).bright_yellow(),
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Sweep complete │ {} │ {} counted │ {} skipped │ {} solvable │ {} solutions",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_num(v.counted.unwrap_or(0)).white(),
        format_num(v.skipped.unwrap_or(0)).bright_red(),
        format_num(v.solvable.unwrap_or(0)).bright_green(),
        format_num(v.total_solutions.unwrap_or(0)).bright_magenta().bold(),
    )
}

fn format_scenario_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} Scenario {} {} skipped │ {}",
        format_elapsed(),
        "✗".bright_red(),
        v.index.map(|i| i + 1).unwrap_or(0),
        v.vertices.as_deref().unwrap_or(""),
        v.reason.as_deref().unwrap_or("unknown").bright_red(),
    )
}

fn format_scenario_counted(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let icon = if solutions > 0 {
        "✓".bright_green().to_string()
    } else {
        "·".bright_black().to_string()
    };
    format!(
        "{} {} Scenario {} {} → {} │ {} solutions",
        format_elapsed(),
        icon,
        v.index.map(|i| i + 1).unwrap_or(0),
        v.vertices.as_deref().unwrap_or(""),
        v.targets.as_deref().unwrap_or(""),
        format_num(solutions).bright_magenta(),
    )
}

fn format_pool_too_small(v: &EventVisitor) -> String {
    format!(
        "{} {} Pool size ({}) is too small. Need {} unique numbers.",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        v.available.unwrap_or(0).bright_red(),
        v.required.unwrap_or(0).bright_yellow(),
    )
}

fn format_count_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Counted {} solutions │ {} slices checked │ {} matching arrangements │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        format_num(v.count.unwrap_or(0)).bright_magenta().bold(),
        format_num(v.slices_checked.unwrap_or(0)).white(),
        format_num(v.matching_arrangements.unwrap_or(0)).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
