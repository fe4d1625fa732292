use std::f64::consts::PI;

use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_radius_10() {
        let circle = Circle::new(10.0);
        assert!((circle.perimeter() - 62.83185307179586).abs() < 1e-9);
        assert!((circle.area() - 314.1592653589793).abs() < 1e-9);
    }

    #[test]
    fn zero_radius() {
        let circle = Circle::new(0.0);
        assert_eq!(circle.area(), 0.0);
        assert_eq!(circle.perimeter(), 0.0);
    }
}
