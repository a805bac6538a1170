use crate::config;
use crate::error::Result;
use crate::init_config::InitConfig;
use tracing::info;

pub mod simulation_loop;

/// Frames between profiler reports when the `profiling` feature is enabled.
pub const PROFILE_REPORT_FRAMES: u64 = 100;

/// Load the scenario, build the engine and drive it on stdout until the frame limit.
pub fn run() -> Result<()> {
    let init = match InitConfig::load_default()? {
        Some(init) => {
            info!("Loaded initial configuration from {}", config::INIT_CONFIG_FILE);
            init
        }
        None => {
            info!("No {} found, running the demo scenario", config::INIT_CONFIG_FILE);
            InitConfig::demo()
        }
    };
    let mut engine = init.build_engine()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    simulation_loop::run_simulation_loop(&mut engine, &mut out)
}
