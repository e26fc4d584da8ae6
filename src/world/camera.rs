//! Viewing parameters and the slice projection.
//!
//! The camera is fixed at construction: column count, focal length, cast
//! range and the derived pixel spacing/scale never change per frame.

/// Vertical pixel extent of one projected slice. `height` is never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenExtent {
    pub top: f32,
    pub height: f32,
}

/// Floor for the perpendicular distance so a sample sitting on the view
/// plane cannot divide the projection to infinity.
const MIN_Z: f32 = 1e-4;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Viewport size in pixels.
    pub width: f32,
    pub height: f32,
    /// Number of ray columns across the viewport.
    pub resolution: usize,
    /// Pixel width of one column (`width / resolution`).
    pub spacing: f32,
    /// Horizontal field of view, encoded as a focal length.
    pub focal: f32,
    /// Maximum ray distance in world units.
    pub range: f32,
    /// Distance at which the darkening overlay saturates.
    pub light_range: f32,
    /// Resolution-independent sprite/wall scale.
    pub scale: f32,
}

impl Camera {
    pub fn new(width: usize, height: usize, resolution: usize, focal: f32) -> Self {
        let width = width as f32;
        let height = height as f32;
        Self {
            width,
            height,
            resolution,
            spacing: width / resolution as f32,
            focal,
            range: 14.0,
            light_range: 5.0,
            scale: (width + height) / 1200.0,
        }
    }

    /// View-relative angle of one screen column.
    ///
    /// Column 0 looks half a view plane to the left, the last column half a
    /// view plane to the right.
    #[inline]
    pub fn column_angle(&self, column: usize) -> f32 {
        let x = column as f32 / self.resolution as f32 - 0.5;
        x.atan2(self.focal)
    }

    /// Project a wall of `height_code` world units seen at `distance` under
    /// `view_angle` onto the screen.
    ///
    /// The radial distance is converted to the perpendicular distance to the
    /// view plane (`z = distance / cos`), which is what keeps walls straight
    /// at the viewport edges. The slice is centred on the horizon and scaled
    /// by `height_code`, so a standard wall (code 1) fills symmetrically and
    /// a 0.1-unit rain band stays a thin stripe.
    pub fn project(&self, height_code: f32, view_angle: f32, distance: f32) -> ScreenExtent {
        let z = (distance / view_angle.cos().max(MIN_Z)).max(MIN_Z);
        let height = (self.height * self.scale * height_code / z).max(0.0);
        ScreenExtent {
            top: (self.height - height) * 0.5,
            height,
        }
    }
}
