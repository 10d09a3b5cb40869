//! Search-space types.

use rand::Rng;

/// A closed interval `[lower, upper]` applied to every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Projects `x` onto the interval.
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.lower).min(self.upper)
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-2.0, 2.0)
    }
}

/// A candidate solution: an ordered, fixed-length coordinate vector.
///
/// Points are never mutated after construction. Perturbation produces a
/// new point, so the current point and a candidate never share storage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SearchPoint {
    coords: Vec<f64>,
}

impl SearchPoint {
    /// Wraps the given coordinates, clamping each into `bounds`.
    pub fn new(coords: Vec<f64>, bounds: &Bounds) -> Self {
        Self {
            coords: coords.into_iter().map(|x| bounds.clamp(x)).collect(),
        }
    }

    /// Draws a point with every coordinate independently uniform in `bounds`.
    pub fn random<R: Rng>(dimensions: usize, bounds: &Bounds, rng: &mut R) -> Self {
        let coords = (0..dimensions)
            .map(|_| bounds.lower + bounds.width() * rng.random::<f64>())
            .collect();
        Self { coords }
    }

    /// The origin, where the Rastrigin function attains its minimum.
    pub fn origin(dimensions: usize) -> Self {
        Self {
            coords: vec![0.0; dimensions],
        }
    }

    /// Returns a copy with coordinate `index` shifted by `delta` and clamped.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimensions()`.
    pub fn perturbed(&self, index: usize, delta: f64, bounds: &Bounds) -> Self {
        let mut coords = self.coords.clone();
        coords[index] = bounds.clamp(coords[index] + delta);
        Self { coords }
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.coords.iter().all(|&x| bounds.contains(x))
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }
}

impl AsRef<[f64]> for SearchPoint {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_bounds_clamp() {
        let b = Bounds::default();
        assert_eq!(b.clamp(2.5), 2.0);
        assert_eq!(b.clamp(-7.0), -2.0);
        assert_eq!(b.clamp(0.3), 0.3);
    }

    #[test]
    fn test_bounds_contains_is_closed() {
        let b = Bounds::default();
        assert!(b.contains(-2.0));
        assert!(b.contains(2.0));
        assert!(!b.contains(2.000_001));
    }

    #[test]
    fn test_random_point_within_bounds() {
        let mut rng = create_rng(42);
        let b = Bounds::default();
        for _ in 0..100 {
            let p = SearchPoint::random(15, &b, &mut rng);
            assert_eq!(p.dimensions(), 15);
            assert!(p.is_within(&b));
        }
    }

    #[test]
    fn test_perturbed_leaves_input_untouched() {
        let b = Bounds::default();
        let p = SearchPoint::origin(3);
        let q = p.perturbed(1, 0.04, &b);
        assert_eq!(p.coords(), &[0.0, 0.0, 0.0]);
        assert_eq!(q.coords(), &[0.0, 0.04, 0.0]);
    }

    #[test]
    fn test_new_clamps() {
        let p = SearchPoint::new(vec![3.0, -3.0, 1.0], &Bounds::default());
        assert_eq!(p.coords(), &[2.0, -2.0, 1.0]);
    }
}
