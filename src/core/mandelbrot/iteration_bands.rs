use crate::core::data::colour::Colour;
use crate::core::render::ports::colour_map::ColourMap;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationBandsError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for IterationBandsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration count {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for IterationBandsError {}

/// Fixed four-band classification over the iteration cap: black for
/// presumed set members, then red, purple and near-white bands at the
/// (truncating) half and quarter thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationBands {
    max_iterations: u32,
}

impl IterationBands {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for IterationBands {
    type Failure = IterationBandsError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(IterationBandsError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        let colour = if iterations == self.max_iterations {
            Colour::BLACK
        } else if iterations > self.max_iterations / 2 {
            Colour { r: 234, g: 50, b: 60 }
        } else if iterations > self.max_iterations / 4 {
            Colour { r: 12, g: 2, b: 147 }
        } else {
            Colour {
                r: 230,
                g: 230,
                b: 235,
            }
        };

        Ok(colour)
    }
}
