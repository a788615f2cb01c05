use glam::Vec2;

/// Fixed-length position history, most recent first.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail<const N: usize> {
    points: [Vec2; N],
}

impl<const N: usize> Trail<N> {
    /// Trail with every slot at `origin`.
    pub fn filled(origin: Vec2) -> Self {
        Self { points: [origin; N] }
    }

    /// Records `p` as the newest point and drops the oldest.
    #[inline]
    pub fn push(&mut self, p: Vec2) {
        if N == 0 {
            return;
        }
        self.points.rotate_right(1);
        self.points[0] = p;
    }

    /// Oldest retained point; the start of the rendered segment.
    #[inline]
    pub fn tail(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}
