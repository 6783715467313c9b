use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::view::view_config::ViewConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    NeedsRecompute,
    UpToDate,
}

/// Plane-unit dimensions of the visible window. Always derived from the
/// zoom level, never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneSize {
    pub x: f64,
    pub y: f64,
}

impl PlaneSize {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Where the session is looking and whether the buffer still matches it.
///
/// The visible size is a pure function of `zoom_level`, the aspect ratio and
/// the config, so zooming only ever touches the integer level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    zoom_level: i32,
    aspect_ratio: f64,
    status: ViewStatus,
}

impl ViewState {
    #[must_use]
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            center: Complex::ZERO,
            zoom_level: 0,
            aspect_ratio: grid.height() as f64 / grid.width() as f64,
            status: ViewStatus::NeedsRecompute,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn status(&self) -> ViewStatus {
        self.status
    }

    #[must_use]
    pub fn needs_recompute(&self) -> bool {
        self.status == ViewStatus::NeedsRecompute
    }

    #[must_use]
    pub fn size(&self, config: &ViewConfig) -> PlaneSize {
        let scale = config.zoom_factor().powi(self.zoom_level);

        PlaneSize {
            x: config.base_width() * scale,
            y: config.base_height() * self.aspect_ratio * scale,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_level += 1;
        self.status = ViewStatus::NeedsRecompute;
    }

    pub fn zoom_out(&mut self) {
        self.zoom_level -= 1;
        self.status = ViewStatus::NeedsRecompute;
    }

    pub fn set_center(&mut self, center: Complex) {
        self.center = center;
        self.status = ViewStatus::NeedsRecompute;
    }

    /// Called by the renderer once a full pass has repopulated the buffer.
    pub fn mark_up_to_date(&mut self) {
        self.status = ViewStatus::UpToDate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::new(width, height).unwrap()
    }

    #[test]
    fn test_new_starts_at_origin_needing_recompute() {
        let state = ViewState::new(grid(800, 600));

        assert_eq!(state.center(), Complex::ZERO);
        assert_eq!(state.zoom_level(), 0);
        assert_eq!(state.status(), ViewStatus::NeedsRecompute);
        assert!(state.needs_recompute());
    }

    #[test]
    fn test_aspect_ratio_is_height_over_width() {
        assert_eq!(ViewState::new(grid(800, 600)).aspect_ratio(), 0.75);
        assert_eq!(ViewState::new(grid(400, 400)).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_size_at_level_zero_is_base_size_times_aspect() {
        let config = ViewConfig::default();
        let state = ViewState::new(grid(800, 600));
        let size = state.size(&config);

        assert_eq!(size.x, 4.0);
        assert_eq!(size.y, 3.0);
    }

    #[test]
    fn test_zoom_in_halves_the_view() {
        let config = ViewConfig::default();
        let mut state = ViewState::new(grid(400, 400));

        state.zoom_in();
        let size = state.size(&config);

        assert_eq!(state.zoom_level(), 1);
        assert_eq!(size.x, 2.0);
        assert_eq!(size.y, 2.0);
        assert!(state.needs_recompute());
    }

    #[test]
    fn test_zoom_out_doubles_the_view() {
        let config = ViewConfig::default();
        let mut state = ViewState::new(grid(400, 400));

        state.zoom_out();
        let size = state.size(&config);

        assert_eq!(state.zoom_level(), -1);
        assert_eq!(size.x, 8.0);
        assert_eq!(size.y, 8.0);
    }

    #[test]
    fn test_zoom_in_then_out_restores_level_and_size_exactly() {
        let config = ViewConfig::default();
        let mut state = ViewState::new(grid(800, 600));
        let before = state.size(&config);

        state.zoom_in();
        state.zoom_out();

        assert_eq!(state.zoom_level(), 0);
        assert_eq!(state.size(&config), before);
    }

    #[test]
    fn test_set_center_invalidates_the_buffer() {
        let mut state = ViewState::new(grid(400, 400));
        state.mark_up_to_date();

        state.set_center(Complex::new(-0.5, 0.25));

        assert_eq!(state.center(), Complex::new(-0.5, 0.25));
        assert!(state.needs_recompute());
    }

    #[test]
    fn test_mark_up_to_date_completes_the_cycle() {
        let mut state = ViewState::new(grid(400, 400));

        state.zoom_in();
        state.mark_up_to_date();

        assert_eq!(state.status(), ViewStatus::UpToDate);
        assert!(!state.needs_recompute());
    }

    #[test]
    fn test_extreme_zoom_out_overflows_to_non_finite_size() {
        // no floor on the zoom level: after enough zoom-outs the derived
        // size leaves f64 range and the caller is expected to detect it
        let config = ViewConfig::default();
        let mut state = ViewState::new(grid(400, 400));

        for _ in 0..1100 {
            state.zoom_out();
        }

        assert!(!state.size(&config).is_finite());
    }
}
