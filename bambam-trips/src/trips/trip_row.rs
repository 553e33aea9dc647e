use super::{HourColumns, RowRejection};

/// the (zone, hour) pair read from one accepted trip row, borrowed from the
/// source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow<'a> {
    pub zone: &'a str,
    pub hour: u8,
}

impl<'a> TripRow<'a> {
    /// reads a trip row with layout `id,zone,<hour column candidates>...`.
    ///
    /// the id must be a non-empty run of ASCII digits and the zone must be
    /// non-empty and followed by a comma. the hour is read from the first
    /// candidate column that holds a valid hour token.
    ///
    /// # Arguments
    ///
    /// * `line`         - a single line with any trailing line terminator removed
    /// * `hour_columns` - candidate columns probed in order for the hour
    ///
    /// # Returns
    ///
    /// * the accepted row, or the reason the row was rejected
    pub fn parse(line: &'a str, hour_columns: &HourColumns) -> Result<TripRow<'a>, RowRejection> {
        let (id, rest) = line
            .split_once(',')
            .ok_or(RowRejection::MissingDelimiter)?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RowRejection::InvalidId);
        }
        let zone_end = rest.find(',');
        let zone = &rest[..zone_end.unwrap_or(rest.len())];
        if zone.is_empty() {
            return Err(RowRejection::EmptyZone);
        }
        if zone_end.is_none() {
            return Err(RowRejection::MissingDelimiter);
        }
        match hour_columns.extract(line) {
            Some(hour) => Ok(TripRow { zone, hour }),
            None => {
                let n_columns = line.bytes().filter(|b| *b == b',').count() + 1;
                if hour_columns.iter().any(|c| c.index() < n_columns) {
                    Err(RowRejection::InvalidHour)
                } else {
                    Err(RowRejection::MissingHourColumn)
                }
            }
        }
    }
}
