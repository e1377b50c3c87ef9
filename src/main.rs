//! regrid - resample values from one 1-D grid onto another
//!
//! This is the main entry point for the regrid command-line tool.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use regrid::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_table_stats,
    log_timed_operation, ColumnDomain, ColumnKind, ColumnResampler, Config, Result, WeightTable,
};

/// A resampling job read from disk
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Job {
    /// Read a column stored on the fixed levels of a domain at query levels
    Column {
        kind: ColumnKind,
        levels: Vec<f64>,
        column: Vec<f64>,
        query: Vec<f64>,
        #[serde(default)]
        quadratic: bool,
    },
    /// Map values from `input_x` onto `output_x` with the configured policy
    Grid {
        input_x: Vec<f64>,
        output_x: Vec<f64>,
        values: Vec<f64>,
    },
}

/// The result printed on stdout
#[derive(Debug, Serialize)]
struct JobOutput {
    output_x: Vec<f64>,
    values: Vec<f64>,
}

fn main() -> Result<()> {
    // Load configuration
    let (config, job_path) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting regrid v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    run(&config, &job_path).map_err(|e| {
        log_error(&e, "resampling job");
        e
    })
}

fn run(config: &Config, job_path: &Path) -> Result<()> {
    let start = Instant::now();
    log_operation_start("resample", Some(&job_path.display().to_string()));

    let content = std::fs::read_to_string(job_path)?;
    let job: Job = serde_json::from_str(&content)?;

    let output = log_timed_operation("resample", || resample(config, job))?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    log_operation_end("resample", start, true);
    Ok(())
}

fn resample(config: &Config, job: Job) -> Result<JobOutput> {
    match job {
        Job::Grid {
            input_x,
            output_x,
            values,
        } => {
            let table = WeightTable::new(config.policy()?, &input_x, &output_x)?;
            log_table_stats(&table);
            let values = table.interpolate(&values)?;
            Ok(JobOutput { output_x, values })
        }
        Job::Column {
            kind,
            levels,
            column,
            query,
            quadratic,
        } => {
            let domain = ColumnDomain::new(kind, levels)?;
            let resampler = ColumnResampler::new(&domain, "column").with_tolerances(config.column);
            let mut values = vec![0.0; query.len()];
            if quadratic {
                resampler.get_column_quad(&column, &query, &mut values)?;
            } else {
                resampler.get_column_pl(&column, &query, &mut values)?;
            }
            Ok(JobOutput {
                output_x: query,
                values,
            })
        }
    }
}
