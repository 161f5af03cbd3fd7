use std::path::Path;
use std::time::Duration;

use crate::controllers::ports::render_observer::RenderObserver;
use crate::controllers::render_config::RenderConfig;

/// Prints run progress to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl RenderObserver for ConsoleObserver {
    fn evaluation_started(&mut self, config: &RenderConfig) {
        let threads = config
            .threads
            .unwrap_or_else(rayon::current_num_threads);

        println!("Rendering Mandelbrot set...");
        println!("Region: {}", config.region);
        println!("Image size: {}", config.resolution);
        println!("Max iterations: {}", config.max_iterations);
        println!("Mode: {}", config.mode);
        println!("Threads: {}", threads);
    }

    fn evaluation_finished(&mut self, elapsed: Duration) {
        println!("Duration:   {:?}", elapsed);
    }

    fn serialization_finished(&mut self, path: &Path, total: Duration) {
        println!("Saved to {}", path.display());
        println!("Total:      {:?}", total);
    }
}
