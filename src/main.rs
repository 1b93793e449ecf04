//! Hopper Funnel entry point
//!
//! Runs the experiment once with fresh randomness and the fixed constants,
//! writing `rule_1.png` .. `rule_4.png` and `all_in.png` to the working directory.

use hopper_funnel::renderer::PngRenderer;
use hopper_funnel::{Experiment, ExperimentConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hopper funnel experiment starting...");

    let seed: u64 = rand::random();
    let config = ExperimentConfig::default();
    let mut renderer = PngRenderer::from_config(&config);

    match Experiment::new(config, seed).run(&mut renderer) {
        Ok(report) => {
            for path in &report.images {
                log::info!("Saved {}", path.display());
            }
        }
        Err(e) => {
            log::error!("Experiment aborted: {e}");
            std::process::exit(1);
        }
    }
}
