/// Outcome of the escape-time loop for a single pixel.
///
/// `escaped` is false exactly when the point survived the full iteration
/// budget and is presumed inside the set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationResult {
    pub iterations: u32,
    pub escaped: bool,
}

impl IterationResult {
    #[must_use]
    pub fn new(iterations: u32, max_iterations: u32) -> Self {
        Self {
            iterations,
            escaped: iterations < max_iterations,
        }
    }
}
