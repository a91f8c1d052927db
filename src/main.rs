use std::process::ExitCode;

use log::{error, info};

mod harness;
mod multipliers;
mod vectors;

use crate::harness::Harness;

const VECTOR_SIZE: usize = 1024;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut harness = Harness::new(VECTOR_SIZE);
    info!("vectorized multiplier using {}", harness.candidate().lanes());

    match harness.run() {
        Ok(report) => {
            debug_assert!(harness.state().is_terminal());
            println!("{}", report);
            ExitCode::from(report.exit_status())
        }
        Err(e) => {
            error!("harness aborted in {:?}: {}", harness.state(), e);
            ExitCode::from(2)
        }
    }
}
