use crate::Point;

/// Traces one Lissajous figure around a fixed grid-cell centre. The position is
/// always recomputed from the shared timer, never integrated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    x_factor: u32,
    y_factor: u32,
    origin: Point,
    position: Point,
    previous: Point,
    color: [u8; 3],
}

impl Oscillator {
    pub fn new(x_factor: u32, y_factor: u32, origin: Point, radius: f64, color: [u8; 3]) -> Self {
        let start = Point::new(origin.x + radius, origin.y);
        Self {
            x_factor,
            y_factor,
            origin,
            position: start,
            previous: start,
            color,
        }
    }

    pub fn x_factor(&self) -> u32 {
        self.x_factor
    }

    pub fn y_factor(&self) -> u32 {
        self.y_factor
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn previous(&self) -> Point {
        self.previous
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn sample(&self, timer: f64, radius: f64) -> Point {
        Point::new(
            self.origin.x + radius * (timer * self.x_factor as f64).cos(),
            self.origin.y + radius * (timer * self.y_factor as f64).sin(),
        )
    }

    pub fn advance(&mut self, timer: f64, radius: f64) {
        self.previous = self.position;
        self.position = self.sample(timer, radius);
    }

    /// The stroke drawn for the latest advance.
    pub fn segment(&self) -> (Point, Point) {
        (self.previous, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    const EPS: f64 = 1e-9;

    #[test]
    fn starts_at_right_edge_of_circle() {
        let oscillator = Oscillator::new(3, 2, Point::new(10.0, 20.0), 5.0, [100, 100, 100]);
        assert_eq!(oscillator.position(), Point::new(15.0, 20.0));
        assert_eq!(oscillator.previous(), oscillator.position());
    }

    #[test]
    fn sample_at_zero_is_start_for_any_factors() {
        for (x_factor, y_factor) in [(0, 0), (1, 4), (7, 3)] {
            let oscillator = Oscillator::new(x_factor, y_factor, Point::new(0.0, 0.0), 2.0, [0; 3]);
            let sample = oscillator.sample(0.0, 2.0);
            assert!((sample.x - 2.0).abs() < EPS);
            assert!(sample.y.abs() < EPS);
        }
    }

    #[test]
    fn advance_keeps_previous_position() {
        let mut oscillator = Oscillator::new(1, 1, Point::new(50.0, 50.0), 10.0, [0; 3]);
        oscillator.advance(PI / 2.0, 10.0);
        let (from, to) = oscillator.segment();
        assert_eq!(from, Point::new(60.0, 50.0));
        assert!((to.x - 50.0).abs() < EPS);
        assert!((to.y - 60.0).abs() < EPS);

        oscillator.advance(PI, 10.0);
        assert_eq!(oscillator.previous(), to);
        assert!((oscillator.position().x - 40.0).abs() < EPS);
    }

    #[test]
    fn equal_factors_stay_on_circle() {
        let mut oscillator = Oscillator::new(4, 4, Point::new(30.0, 30.0), 12.0, [0; 3]);
        for step in 0..100 {
            oscillator.advance(step as f64 * TAU / 100.0, 12.0);
            let distance = oscillator.position().distance(oscillator.origin());
            assert!((distance - 12.0).abs() < EPS);
        }
    }

    #[test]
    fn unequal_factors_stay_in_cell() {
        let mut oscillator = Oscillator::new(2, 5, Point::new(30.0, 30.0), 12.0, [0; 3]);
        for step in 0..100 {
            oscillator.advance(step as f64 * TAU / 100.0, 12.0);
            let position = oscillator.position();
            assert!((position.x - 30.0).abs() <= 12.0 + EPS);
            assert!((position.y - 30.0).abs() <= 12.0 + EPS);
        }
    }
}
