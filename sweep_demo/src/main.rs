//! Sweep demo application
//!
//! Headless stand-in for a render/input loop: builds a random scene, then
//! repeatedly "aims" the player at a random point and sweeps it there,
//! logging the safe position and any contact. With `apply_moves` on, the
//! player is moved to the safe position after each step, just as a click
//! would in an interactive version.
//!
//! Usage:
//!
//! ```text
//! sweep_demo [CONFIG.toml|CONFIG.ron]
//! sweep_demo --write-config PATH
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sweep_engine::foundation::logging;
use sweep_engine::prelude::*;

/// Driver state for one run
struct SweepDemoApp {
    config: ApplicationConfig,
    scene: Scene,
    rng: StdRng,
    hits: usize,
}

impl SweepDemoApp {
    fn new(config: ApplicationConfig) -> Result<Self, Box<dyn std::error::Error>> {
        log::info!("Generating scene...");
        let scene = Scene::generate(&config.scene)?;
        for (i, collider) in scene.colliders.targets().iter().enumerate() {
            log::debug!(
                "Collider {}: center ({:.1}, {:.1}) size {:.0}x{:.0}",
                i, collider.center.x, collider.center.y, collider.size.x, collider.size.y
            );
        }

        // Aim points use their own stream so the scene stays identical for a seed
        let rng = match config.scene.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, scene, rng, hits: 0 })
    }

    fn run(&mut self) {
        let steps = self.config.demo.steps;
        log::info!("Running {} sweep steps", steps);

        for step in 0..steps {
            let aim = self.random_point();
            let sweep = if self.config.demo.apply_moves {
                self.scene.step_towards(aim)
            } else {
                self.scene.probe(aim)
            };
            self.report(step, aim, &sweep);
        }

        log::info!(
            "Finished: {} of {} steps hit a collider, player at ({:.1}, {:.1})",
            self.hits, steps, self.scene.player.center.x, self.scene.player.center.y
        );
    }

    fn random_point(&mut self) -> Vec2 {
        let min = self.config.scene.bounds.min();
        let max = self.config.scene.bounds.max();
        Vec2::new(self.rng.gen_range(min.x..=max.x), self.rng.gen_range(min.y..=max.y))
    }

    fn report(&mut self, step: usize, aim: Vec2, sweep: &Sweep) {
        match &sweep.hit {
            Some(hit) => {
                self.hits += 1;
                log::info!(
                    "Step {}: aim ({:.1}, {:.1}) blocked at t={:.3}, safe pos ({:.1}, {:.1})",
                    step, aim.x, aim.y, sweep.time, sweep.pos.x, sweep.pos.y
                );
                log::debug!(
                    "  contact ({:.1}, {:.1}) normal ({}, {}) remaining ({:.1}, {:.1})",
                    hit.pos.x, hit.pos.y, hit.normal.x, hit.normal.y, hit.delta.x, hit.delta.y
                );
            }
            None => {
                log::info!(
                    "Step {}: aim ({:.1}, {:.1}) clear, moved to ({:.1}, {:.1})",
                    step, aim.x, aim.y, sweep.pos.x, sweep.pos.y
                );
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let [flag, path] = args.as_slice() {
        if flag == "--write-config" {
            ApplicationConfig::default().save_to_file(path)?;
            println!("Wrote default configuration to {path}");
            return Ok(());
        }
    }

    let config = match args.first() {
        Some(path) => ApplicationConfig::load_from_file(path)?,
        None => ApplicationConfig::default(),
    };
    config.validate()?;

    logging::init_with_level(&config.demo.log_level);
    log::info!("Starting Sweep Demo");

    let result = SweepDemoApp::new(config).map(|mut app| app.run());
    match result {
        Ok(()) => {
            log::info!("Sweep demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Application error: {}", e);
            Err(e)
        }
    }
}
