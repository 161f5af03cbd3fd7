/// Outcome of the escape-time test for one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationResult {
    iterations: u32,
    escaped: bool,
}

impl IterationResult {
    #[must_use]
    pub const fn new(iterations: u32, escaped: bool) -> Self {
        Self { iterations, escaped }
    }

    /// Recurrence steps taken, in `1..=max_iterations`.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn escaped(&self) -> bool {
        self.escaped
    }

    #[must_use]
    pub fn is_interior(&self) -> bool {
        !self.escaped
    }
}
