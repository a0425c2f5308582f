use crate::error::ScatterError;
use glam::Vec2;
use rand::Rng;

/// The half-open axis-aligned rectangle `[min, max)` markers may land in.
///
/// A `Region` always has a positive span on both axes; degenerate bounds
/// are rejected at construction so sampling can never draw from an empty
/// range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    min: Vec2,
    max: Vec2,
}

impl Region {
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ScatterError> {
        let span = max - min;
        if !(span.x > 0.0 && span.y > 0.0) {
            return Err(ScatterError::EmptyRegion {
                width: span.x,
                height: span.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Builds the focus-map placement band for a viewport.
    ///
    /// Markers land in the lower half of the screen, clear of the reserved
    /// bottom strip, and inset by the marker extent so a marker drawn from
    /// its top-left corner never overflows the band:
    ///
    /// - `left ∈ [0, width - marker_extent)`
    /// - `top ∈ [height / 2, height - reserved_bottom - marker_extent)`
    ///
    /// ### Parameters
    /// - `width`, `height` - Full viewport dimensions.
    /// - `reserved_bottom` - Height of the bottom strip kept free for
    ///   bottom-anchored controls.
    /// - `marker_extent` - On-screen size of one marker.
    ///
    /// ### Returns
    /// The band as a [`Region`], or [`ScatterError::EmptyRegion`] when the
    /// viewport is too small to hold any marker.
    pub fn lower_band(
        width: f32,
        height: f32,
        reserved_bottom: f32,
        marker_extent: f32,
    ) -> Result<Self, ScatterError> {
        let min = Vec2::new(0.0, height / 2.0);
        let max = Vec2::new(
            width - marker_extent,
            height - reserved_bottom - marker_extent,
        );
        Self::new(min, max)
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Draws one candidate uniformly from the region.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        let x = rng.random_range(self.min.x..self.max.x);
        let y = rng.random_range(self.min.y..self.max.y);
        Vec2::new(x, y)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}
