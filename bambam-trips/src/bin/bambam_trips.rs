//! ranks the busiest pickup zones and zone/hour slots of a trip record file.
use bambam_trips::app::TripsApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = TripsApp::parse();
    log::info!("starting bambam_trips at {}", chrono::Local::now().to_rfc3339());
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
