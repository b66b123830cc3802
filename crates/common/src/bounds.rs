use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    /// Zero-size box around a single point.
    pub fn from_point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for p in iter {
            bounds.encapsulate(p);
        }
        Some(bounds)
    }

    /// Grow the box to contain `p`. Each axis updates its min and max independently.
    pub fn encapsulate(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Grow the box to contain `other`.
    pub fn merge(&mut self, other: &Bounds2) {
        self.encapsulate(other.min);
        self.encapsulate(other.max);
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Largest extent over both axes.
    pub fn greatest_extent(&self) -> f32 {
        self.size().max_element()
    }

    /// True when the box has no area on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.greatest_extent() == 0.0
    }

    /// The four corners, each pushed outward by `margin` on both axes.
    ///
    /// Order: top-right, bottom-right, bottom-left, top-left.
    pub fn padded_corners(&self, margin: f32) -> [Vec2; 4] {
        [
            Vec2::new(self.max.x + margin, self.max.y + margin),
            Vec2::new(self.max.x + margin, self.min.y - margin),
            Vec2::new(self.min.x - margin, self.min.y - margin),
            Vec2::new(self.min.x - margin, self.max.y + margin),
        ]
    }
}
