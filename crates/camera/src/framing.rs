use glam::{Mat4, Vec2, Vec3};
use pathforge_common::Bounds2;

/// Orthographic camera that re-centers and re-zooms on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct FramingCamera {
    pub position: Vec2,
    /// Added to the framed center whenever the camera has to move.
    pub offset: Vec2,
    /// Extent divisor: `orthographic_size = extent / zoom_limiter`.
    pub zoom_limiter: f32,
    /// Extent used when the framed points have no width or height.
    pub fallback_extent: f32,
    /// Half the vertical view height in world units.
    pub orthographic_size: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Distance the eye sits in front of the level plane.
    pub distance: f32,
}

impl Default for FramingCamera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom_limiter: 50.0,
            fallback_extent: 10.0,
            orthographic_size: 5.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            distance: 10.0,
        }
    }
}

impl FramingCamera {
    pub fn with_zoom_limiter(zoom_limiter: f32) -> Self {
        Self {
            zoom_limiter,
            ..Self::default()
        }
    }

    /// Frame `points`. An empty set leaves the camera untouched.
    pub fn recalculate(&mut self, points: &[Vec2]) {
        let Some(bounds) = Bounds2::from_points(points.iter().copied()) else {
            return;
        };

        let mut center = if points.len() == 1 {
            points[0]
        } else {
            bounds.center()
        };
        if center != self.position {
            center += self.offset;
        }
        self.position = center;

        let extent = match bounds.greatest_extent() {
            e if e == 0.0 => self.fallback_extent,
            e => e,
        };
        self.orthographic_size = extent / self.zoom_limiter;

        tracing::debug!(
            targets = points.len(),
            center = %self.position,
            size = self.orthographic_size,
            "camera reframed"
        );
    }

    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position.extend(0.0);
        Mat4::look_at_rh(target + Vec3::Z * self.distance, target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_h = self.orthographic_size;
        let half_w = half_h * self.aspect;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
