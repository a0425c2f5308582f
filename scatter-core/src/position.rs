use glam::Vec2;

/// A marker position on the focus map, in viewport units.
///
/// `left`/`top` follow screen conventions: the marker's top-left corner,
/// with `top` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub left: f32,
    pub top: f32,
}

impl Position {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            left: v.x,
            top: v.y,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn distance(&self, other: &Position) -> f32 {
        (self.as_vec2() - other.as_vec2()).length()
    }
}

/// An ordered set of accepted marker positions.
///
/// Order is insertion order, i.e. the order in which candidates were
/// accepted by the scatter loop.
#[derive(Debug, Default)]
pub struct PositionSet {
    pub points: Vec<Position>,
}

impl PositionSet {
    pub fn from_positions(positions: Vec<Vec2>) -> Self {
        let points = positions.into_iter().map(Position::from_vec2).collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.points.iter()
    }

    /// Returns the smallest pairwise distance in the set, or `None` if the
    /// set holds fewer than two points.
    pub fn min_separation(&self) -> Option<f32> {
        let mut best: Option<f32> = None;
        for (i, a) in self.points.iter().enumerate() {
            for b in &self.points[i + 1..] {
                let d = a.distance(b);
                best = Some(best.map_or(d, |m| m.min(d)));
            }
        }
        best
    }
}
