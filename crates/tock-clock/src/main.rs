mod app;

use anyhow::Result;
use tock_engine::device::GpuInit;
use tock_engine::face::FaceStyle;
use tock_engine::logging::{init_logging, LoggingConfig};
use tock_engine::window::{Runtime, RuntimeConfig};

use app::ClockApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = ClockApp::new(FaceStyle::classic());
    Runtime::run(RuntimeConfig::default(), GpuInit::default(), app)
}
