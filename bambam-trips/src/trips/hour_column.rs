use super::TripError;
use serde::{Deserialize, Serialize};

/// the first column that may carry an hour token. columns 0 and 1 are the
/// trip id and the pickup zone.
pub const MIN_HOUR_COLUMN: usize = 2;

/// a single candidate column to probe for an hour-of-day token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourColumn(usize);

impl HourColumn {
    pub fn index(&self) -> usize {
        self.0
    }

    /// reads the hour from this column of the line, if the column exists and
    /// holds a valid hour token.
    pub fn extract(&self, line: &str) -> Option<u8> {
        line.split(',').nth(self.0).and_then(parse_hour)
    }
}

/// ordered list of candidate hour columns, probed front to back until one
/// yields an hour. source files may or may not carry an optional column
/// (such as a drop-off zone) ahead of the timestamp, so the default probes
/// column 2 and then column 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct HourColumns(Vec<HourColumn>);

impl HourColumns {
    pub fn try_new(columns: Vec<usize>) -> Result<HourColumns, TripError> {
        if columns.is_empty() {
            return Err(TripError::InvalidConfiguration(String::from(
                "hour_columns must name at least one column",
            )));
        }
        if let Some(bad) = columns.iter().find(|c| **c < MIN_HOUR_COLUMN) {
            return Err(TripError::InvalidConfiguration(format!(
                "hour column {bad} overlaps the id/zone columns, must be >= {MIN_HOUR_COLUMN}"
            )));
        }
        Ok(HourColumns(columns.into_iter().map(HourColumn).collect()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourColumn> {
        self.0.iter()
    }

    /// probes each candidate in order. the first column holding a valid hour
    /// wins; missing or malformed columns fall through to the next one.
    pub fn extract(&self, line: &str) -> Option<u8> {
        self.0.iter().find_map(|column| column.extract(line))
    }
}

impl Default for HourColumns {
    fn default() -> Self {
        HourColumns(vec![HourColumn(2), HourColumn(3)])
    }
}

impl TryFrom<Vec<usize>> for HourColumns {
    type Error = TripError;

    fn try_from(value: Vec<usize>) -> Result<Self, Self::Error> {
        HourColumns::try_new(value)
    }
}

impl From<HourColumns> for Vec<usize> {
    fn from(value: HourColumns) -> Self {
        value.0.iter().map(HourColumn::index).collect()
    }
}

/// reads a two-digit hour from the characters immediately after the first
/// space in a field, as in `2024-01-01 08:15:00` or `xx 23 59`. both
/// characters must be digits inside the field and the value must lie in
/// [0, 23].
pub fn parse_hour(field: &str) -> Option<u8> {
    let space = field.find(' ')?;
    match field.as_bytes().get(space + 1..space + 3)? {
        [h1, h2] if h1.is_ascii_digit() && h2.is_ascii_digit() => {
            let hour = (h1 - b'0') * 10 + (h2 - b'0');
            (hour <= 23).then_some(hour)
        }
        _ => None,
    }
}
