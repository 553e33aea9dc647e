use super::TripsSummary;
use crate::trips::{RejectionTally, TripAnalyzer, TripAnalyzerConfig, TripError};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Write, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TripsOperation {
    /// rank pickup zones by trip count
    TopZones {
        /// trip record file, rows of `id,zone,<hour column>...`
        #[arg(long)]
        input: String,
        /// number of rows to report. zero or negative reports nothing
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        k: i64,
        /// optional analyzer configuration file (toml or json)
        #[arg(long)]
        config_file: Option<String>,
        /// write csv here instead of stdout
        #[arg(long)]
        output_file: Option<String>,
    },
    /// rank (zone, hour) slots by trip count
    TopSlots {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        k: i64,
        #[arg(long)]
        config_file: Option<String>,
        #[arg(long)]
        output_file: Option<String>,
    },
    /// summarize accepted and rejected rows as json
    Summary {
        #[arg(long)]
        input: String,
        #[arg(long)]
        config_file: Option<String>,
        #[arg(long)]
        output_file: Option<String>,
    },
}

impl TripsOperation {
    pub fn run(&self) -> Result<(), TripError> {
        match self {
            TripsOperation::TopZones {
                input,
                k,
                config_file,
                output_file,
            } => {
                let (analyzer, _) = ingest(input, config_file.as_deref())?;
                write_csv(&analyzer.top_zones(*k), output_file.as_deref())
            }
            TripsOperation::TopSlots {
                input,
                k,
                config_file,
                output_file,
            } => {
                let (analyzer, _) = ingest(input, config_file.as_deref())?;
                write_csv(&analyzer.top_busy_slots(*k), output_file.as_deref())
            }
            TripsOperation::Summary {
                input,
                config_file,
                output_file,
            } => {
                let (analyzer, rejections) = ingest(input, config_file.as_deref())?;
                let summary = TripsSummary::new(input, &analyzer, rejections);
                let mut out = open_output(output_file.as_deref())?;
                serde_json::to_writer_pretty(&mut out, &summary)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }
}

fn ingest(
    input: &str,
    config_file: Option<&str>,
) -> Result<(TripAnalyzer, RejectionTally), TripError> {
    let config = match config_file {
        Some(f) => TripAnalyzerConfig::from_file(Path::new(f))?,
        None => TripAnalyzerConfig::default(),
    };
    let mut analyzer = TripAnalyzer::new(config);
    let mut rejections = RejectionTally::default();
    analyzer.try_ingest_file(Path::new(input), &mut rejections)?;
    if !rejections.is_empty() {
        log::info!("dropped {} rows from {input}", rejections.total());
    }
    Ok((analyzer, rejections))
}

fn open_output(output_file: Option<&str>) -> Result<Box<dyn Write>, TripError> {
    match output_file {
        Some(f) => Ok(Box::new(File::create(f)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn write_csv<T: Serialize>(rows: &[T], output_file: Option<&str>) -> Result<(), TripError> {
    let mut writer = csv::Writer::from_writer(open_output(output_file)?);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::TripsOperation;
    use std::path::PathBuf;

    fn resource(filename: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test")
            .join(filename)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_top_slots_writes_csv() {
        let output = std::env::temp_dir().join(format!("bambam_trips_slots_{}.csv", std::process::id()));
        let op = TripsOperation::TopSlots {
            input: resource("trips_sample.csv"),
            k: 2,
            config_file: None,
            output_file: Some(output.to_string_lossy().to_string()),
        };
        op.run().expect("operation should succeed");
        let written = std::fs::read_to_string(&output).expect("output should exist");
        let _ = std::fs::remove_file(&output);
        assert_eq!(written, "zone,hour,count\nZoneA,8,2\nZoneB,23,2\n");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let op = TripsOperation::TopZones {
            input: resource("does_not_exist.csv"),
            k: 2,
            config_file: None,
            output_file: None,
        };
        assert!(op.run().is_err());
    }
}
