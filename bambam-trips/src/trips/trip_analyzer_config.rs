use super::{HourColumns, TripError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// configures a [`super::TripAnalyzer`].
///
/// the canonical input is header-less. `header_lines` drops a fixed number
/// of leading lines for sources exported with a header row; it does not
/// change how the remaining rows are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripAnalyzerConfig {
    /// number of leading lines to skip before parsing rows
    pub header_lines: usize,
    /// candidate columns probed in order for the hour-of-day token
    pub hour_columns: HourColumns,
    /// if true, file ingestion reports progress over bytes read
    pub progress: bool,
}

impl TripAnalyzerConfig {
    /// reads a configuration file. the format (toml, json, yaml..) is taken
    /// from the file extension, and any omitted key keeps its default.
    pub fn from_file(path: &Path) -> Result<TripAnalyzerConfig, TripError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        let result = config.try_deserialize::<TripAnalyzerConfig>()?;
        log::debug!("loaded trip analyzer configuration: {result:?}");
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::TripAnalyzerConfig;
    use crate::trips::HourColumns;
    use std::path::PathBuf;

    fn resource(filename: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test")
            .join(filename)
    }

    #[test]
    fn test_defaults() {
        let conf = TripAnalyzerConfig::default();
        assert_eq!(conf.header_lines, 0);
        assert_eq!(conf.hour_columns, HourColumns::default());
        assert!(!conf.progress);
    }

    #[test]
    fn test_from_file() {
        let conf = TripAnalyzerConfig::from_file(&resource("trips_config.toml"))
            .expect("test config should load");
        assert_eq!(conf.header_lines, 1);
        assert_eq!(
            conf.hour_columns,
            HourColumns::try_new(vec![3, 2]).expect("valid columns")
        );
        assert!(!conf.progress);
    }

    #[test]
    fn test_from_file_rejects_id_column_as_hour() {
        let result = TripAnalyzerConfig::from_file(&resource("trips_config_invalid.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json() {
        let conf: TripAnalyzerConfig =
            serde_json::from_str(r#"{ "hour_columns": [2] }"#).expect("valid json");
        assert_eq!(conf.header_lines, 0);
        assert_eq!(conf.hour_columns.iter().count(), 1);
    }
}
