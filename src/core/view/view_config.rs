use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewConfigError {
    NonPositiveBaseSize { base_width: f64, base_height: f64 },
    ZoomFactorOutOfRange { zoom_factor: f64 },
    ZeroMaxIterations,
    NonPositiveEscapeRadius { escape_radius: f64 },
}

impl fmt::Display for ViewConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBaseSize {
                base_width,
                base_height,
            } => {
                write!(
                    f,
                    "base plane size must be positive and finite: {}x{}",
                    base_width, base_height
                )
            }
            Self::ZoomFactorOutOfRange { zoom_factor } => {
                write!(
                    f,
                    "zoom factor must lie strictly between 0 and 1: {}",
                    zoom_factor
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveEscapeRadius { escape_radius } => {
                write!(
                    f,
                    "escape radius must be positive and finite: {}",
                    escape_radius
                )
            }
        }
    }
}

impl Error for ViewConfigError {}

/// Immutable numeric parameters of a viewing session. Passed in at
/// construction rather than baked in as globals so tests can vary them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewConfig {
    base_width: f64,
    base_height: f64,
    zoom_factor: f64,
    max_iterations: u32,
    escape_radius: f64,
}

impl ViewConfig {
    pub fn new(
        base_width: f64,
        base_height: f64,
        zoom_factor: f64,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, ViewConfigError> {
        if !(base_width.is_finite() && base_height.is_finite())
            || base_width <= 0.0
            || base_height <= 0.0
        {
            return Err(ViewConfigError::NonPositiveBaseSize {
                base_width,
                base_height,
            });
        }

        if !zoom_factor.is_finite() || zoom_factor <= 0.0 || zoom_factor >= 1.0 {
            return Err(ViewConfigError::ZoomFactorOutOfRange { zoom_factor });
        }

        if max_iterations == 0 {
            return Err(ViewConfigError::ZeroMaxIterations);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(ViewConfigError::NonPositiveEscapeRadius { escape_radius });
        }

        Ok(Self {
            base_width,
            base_height,
            zoom_factor,
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    #[must_use]
    pub fn base_height(&self) -> f64 {
        self.base_height
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

impl Default for ViewConfig {
    /// The classic session: a 4x4 base plane, halving zoom, 64 iterations,
    /// escape at |z| > 2.
    fn default() -> Self {
        Self {
            base_width: 4.0,
            base_height: 4.0,
            zoom_factor: 0.5,
            max_iterations: 64,
            escape_radius: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_constants() {
        let config = ViewConfig::default();

        assert_eq!(config.base_width(), 4.0);
        assert_eq!(config.base_height(), 4.0);
        assert_eq!(config.zoom_factor(), 0.5);
        assert_eq!(config.max_iterations(), 64);
        assert_eq!(config.escape_radius(), 2.0);
    }

    #[test]
    fn test_new_accepts_default_values() {
        let config = ViewConfig::new(4.0, 4.0, 0.5, 64, 2.0).unwrap();

        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_base_size_must_be_positive_and_finite() {
        assert!(matches!(
            ViewConfig::new(0.0, 4.0, 0.5, 64, 2.0),
            Err(ViewConfigError::NonPositiveBaseSize { .. })
        ));
        assert!(matches!(
            ViewConfig::new(4.0, -1.0, 0.5, 64, 2.0),
            Err(ViewConfigError::NonPositiveBaseSize { .. })
        ));
        assert!(matches!(
            ViewConfig::new(f64::INFINITY, 4.0, 0.5, 64, 2.0),
            Err(ViewConfigError::NonPositiveBaseSize { .. })
        ));
    }

    #[test]
    fn test_zoom_factor_must_shrink_the_view() {
        assert!(matches!(
            ViewConfig::new(4.0, 4.0, 0.0, 64, 2.0),
            Err(ViewConfigError::ZoomFactorOutOfRange { .. })
        ));
        assert!(matches!(
            ViewConfig::new(4.0, 4.0, 1.0, 64, 2.0),
            Err(ViewConfigError::ZoomFactorOutOfRange { .. })
        ));
        assert!(matches!(
            ViewConfig::new(4.0, 4.0, 2.0, 64, 2.0),
            Err(ViewConfigError::ZoomFactorOutOfRange { .. })
        ));
        assert!(ViewConfig::new(4.0, 4.0, 0.25, 64, 2.0).is_ok());
    }

    #[test]
    fn test_max_iterations_must_be_nonzero() {
        assert_eq!(
            ViewConfig::new(4.0, 4.0, 0.5, 0, 2.0),
            Err(ViewConfigError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_escape_radius_must_be_positive() {
        assert!(matches!(
            ViewConfig::new(4.0, 4.0, 0.5, 64, 0.0),
            Err(ViewConfigError::NonPositiveEscapeRadius { .. })
        ));
        assert!(matches!(
            ViewConfig::new(4.0, 4.0, 0.5, 64, f64::NAN),
            Err(ViewConfigError::NonPositiveEscapeRadius { .. })
        ));
    }
}
