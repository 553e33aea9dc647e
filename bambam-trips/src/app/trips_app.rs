use super::TripsOperation;
use clap::Parser;

/// command line tool for ranking the busiest pickup zones and zone/hour
/// slots in a trip record file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripsApp {
    #[command(subcommand)]
    pub op: TripsOperation,
}

#[cfg(test)]
mod test {
    use super::TripsApp;
    use crate::app::TripsOperation;
    use clap::Parser;

    #[test]
    fn test_parses_negative_k() {
        let app = TripsApp::try_parse_from(["bambam_trips", "top-zones", "--input", "t.csv", "--k", "-5"])
            .expect("arguments should parse");
        match app.op {
            TripsOperation::TopZones { k, input, .. } => {
                assert_eq!(k, -5);
                assert_eq!(input, "t.csv");
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }
}
