use std::path::Path;
use std::time::Duration;

use crate::controllers::render_config::RenderConfig;

/// Callbacks fired by the render controller at phase boundaries.
///
/// All methods default to doing nothing.
pub trait RenderObserver {
    fn evaluation_started(&mut self, _config: &RenderConfig) {}

    fn evaluation_finished(&mut self, _elapsed: Duration) {}

    fn serialization_finished(&mut self, _path: &Path, _total: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RenderObserver for NullObserver {}
