//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};

use groupsum::console::{print_banner, render_solutions, render_table};
use groupsum::{
    CanonicalSolution, ConstrainedSumCounter, CountOutcome, CountStatus, CsvExporter, SearchStats,
    SumSystem, SweepConfig, SweepReport, SweepRunner, ThreadCount,
};
use serde::Serialize;

use crate::{ConfigArgs, CountArgs, OutputFormat, SweepArgs, DEFAULT_CONFIG_FILE};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// JSON shape of `groupsum count --json`.
#[derive(Debug, Serialize)]
struct CountReport<'a> {
    targets: &'a [i64],
    group_sizes: &'a [usize],
    pool: &'a [i64],
    count: usize,
    #[serde(flatten)]
    status: CountStatus,
    stats: &'a SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    solutions: Option<&'a [CanonicalSolution]>,
}

impl<'a> CountReport<'a> {
    fn new(
        args: &'a CountArgs,
        outcome: &'a CountOutcome,
        solutions: Option<&'a [CanonicalSolution]>,
    ) -> Self {
        Self {
            targets: &args.targets,
            group_sizes: &args.sizes,
            pool: &args.pool,
            count: outcome.count,
            status: outcome.status,
            stats: &outcome.stats,
            solutions,
        }
    }
}

pub fn count(args: &CountArgs) -> CliResult {
    let system = SumSystem::new(&args.targets, &args.sizes)?;
    let counter = ConstrainedSumCounter::new(system);
    let outcome = counter.count_with_outcome(&args.pool);
    let solutions = if args.list {
        Some(counter.solutions(&args.pool))
    } else {
        None
    };

    if args.json {
        let report = CountReport::new(args, &outcome, solutions.as_deref());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let CountStatus::PoolTooSmall {
        available,
        required,
    } = outcome.status
    {
        eprintln!("pool has {} values, system needs {}", available, required);
    }
    match solutions {
        Some(solutions) => {
            print!("{}", render_solutions(&solutions));
            println!("{} solutions", outcome.count);
        }
        None => println!("{}", outcome.count),
    }
    Ok(())
}

pub fn sweep(args: &SweepArgs) -> CliResult {
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(threads) = args.threads {
        config = config.with_thread_count(thread_count(threads));
    }

    let report = SweepRunner::new(config)?.run()?;
    match (&args.output, args.format) {
        (Some(path), OutputFormat::Csv) => CsvExporter::to_file(&report, path)?,
        (Some(path), format) => fs::write(path, render_report(&report, format)?)?,
        (None, OutputFormat::Table) => {
            print_banner();
            print!("{}", render_table(&report));
        }
        (None, format) => print!("{}", render_report(&report, format)?),
    }
    Ok(())
}

pub fn config(args: &ConfigArgs) -> CliResult {
    let config = resolve_config(args.config.as_deref())?;
    config.validate()?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn render_report(report: &SweepReport, format: OutputFormat) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)? + "\n",
        OutputFormat::Csv => CsvExporter::to_string(report),
    })
}

/// Loads `path`, else `groupsum.toml` from the working directory, else the
/// defaults.
fn resolve_config(path: Option<&Path>) -> Result<SweepConfig, groupsum::ConfigError> {
    match path {
        Some(path) => SweepConfig::load(path),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if local.is_file() {
                SweepConfig::load(local)
            } else {
                Ok(SweepConfig::default())
            }
        }
    }
}

fn thread_count(threads: usize) -> ThreadCount {
    match threads {
        0 => ThreadCount::None,
        n => ThreadCount::Count(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn count_args(targets: &[i64], sizes: &[usize], pool: &[i64]) -> CountArgs {
        CountArgs {
            targets: targets.to_vec(),
            sizes: sizes.to_vec(),
            pool: pool.to_vec(),
            list: false,
            json: true,
        }
    }

    fn sweep_args(format: OutputFormat, output: &Path) -> SweepArgs {
        SweepArgs {
            config: None,
            format,
            threads: Some(0),
            output: Some(output.to_path_buf()),
        }
    }

    #[test]
    fn test_thread_count_mapping() {
        assert_eq!(thread_count(0), ThreadCount::None);
        assert_eq!(thread_count(3), ThreadCount::Count(3));
    }

    #[test]
    fn test_resolve_explicit_config() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "universe = [1, 2, 3, 4, 5, 6]").unwrap();
        writeln!(file, "group_sizes = [1, 1, 1]").unwrap();
        writeln!(file, "vertex_classes = [[1], [2], [3]]").unwrap();
        writeln!(file, "edges = [[0, 1], [1, 2], [2, 0]]").unwrap();

        let config = resolve_config(Some(file.path())).unwrap();
        assert_eq!(config.universe, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(config.group_sizes, vec![1, 1, 1]);
        assert_eq!(config.scenario_count(), 1);
    }

    #[test]
    fn test_resolve_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_count_rejects_mismatched_lengths() {
        let args = count_args(&[5, 5], &[2], &[1, 2, 3, 4]);
        assert!(count(&args).is_err());
    }

    #[test]
    fn test_count_json_status_is_flat() {
        let args = count_args(&[7, 7], &[2, 2], &[1, 2, 3, 4, 5, 6]);
        let outcome = groupsum::count_with_outcome(&args.targets, &args.sizes, &args.pool).unwrap();
        let json = serde_json::to_value(CountReport::new(&args, &outcome, None)).unwrap();

        assert_eq!(json["status"], "exhausted");
        assert_eq!(json["count"], 6);
        assert_eq!(json["group_sizes"][1], 2);
        assert!(json.get("solutions").is_none());
    }

    #[test]
    fn test_count_json_pool_too_small() {
        let args = count_args(&[7, 7], &[2, 2], &[1, 2, 3]);
        let outcome = groupsum::count_with_outcome(&args.targets, &args.sizes, &args.pool).unwrap();
        let solutions: Vec<CanonicalSolution> = Vec::new();
        let json =
            serde_json::to_value(CountReport::new(&args, &outcome, Some(&solutions))).unwrap();

        assert_eq!(json["status"], "pool_too_small");
        assert_eq!(json["available"], 3);
        assert_eq!(json["required"], 4);
        assert_eq!(json["count"], 0);
        assert_eq!(json["solutions"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_sweep_writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        sweep(&sweep_args(OutputFormat::Csv, &path)).unwrap();

        let csv = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 28);
        assert_eq!(lines[1], "1,1 2 3,14 13 12,17,2,");
    }

    #[test]
    fn test_sweep_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        sweep(&sweep_args(OutputFormat::Json, &path)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["rows"].as_array().map(Vec::len), Some(27));
    }
}
