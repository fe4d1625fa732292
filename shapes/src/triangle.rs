use crate::shape::Shape;

/// A triangle given by its three side lengths.
///
/// Sides are not validated. Lengths that violate the triangle inequality
/// give a `NaN` area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub side_a: f64,
    pub side_b: f64,
    pub side_c: f64,
}

impl Triangle {
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Self {
        Self {
            side_a,
            side_b,
            side_c,
        }
    }
}

impl Shape for Triangle {
    /// Heron's formula.
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        (s * (s - self.side_a) * (s - self.side_b) * (s - self.side_c)).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }
}
