use crate::core::data::colour::Colour;
use std::error::Error;

/// Classifies an escape-iteration count as a displayable colour.
///
/// Implementations run inside render workers, so they must be shareable
/// across threads and their failures must travel back to the orchestrator.
pub trait ColourMap: Send + Sync {
    type Failure: Error + Send;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure>;
}
