//! Transforms between a unit and its category's base unit

/// How a unit's values map onto the category's base unit.
///
/// Each variant carries its own inverse, so `from_base(to_base(x))`
/// returns `x` up to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// The category's base unit
    Identity,
    /// base = value * factor
    Scale { factor: f64 },
    /// base = value / divisor
    Divide { divisor: f64 },
    /// base = value * to_base, value = base * from_base
    Ratio { to_base: f64, from_base: f64 },
    /// base = (value - offset) * numerator / denominator
    Affine { offset: f64, numerator: f64, denominator: f64 },
    /// base = constant / value
    Reciprocal { constant: f64 },
}

impl Transform {
    pub const fn scale(factor: f64) -> Self {
        Transform::Scale { factor }
    }

    pub const fn divide(divisor: f64) -> Self {
        Transform::Divide { divisor }
    }

    pub const fn ratio(to_base: f64, from_base: f64) -> Self {
        Transform::Ratio { to_base, from_base }
    }

    pub const fn affine(offset: f64, numerator: f64, denominator: f64) -> Self {
        Transform::Affine { offset, numerator, denominator }
    }

    pub const fn reciprocal(constant: f64) -> Self {
        Transform::Reciprocal { constant }
    }

    /// Convert a value in this unit to the base unit
    pub(crate) fn to_base(&self, value: f64) -> f64 {
        match *self {
            Transform::Identity => value,
            Transform::Scale { factor } => value * factor,
            Transform::Divide { divisor } => value / divisor,
            Transform::Ratio { to_base, .. } => value * to_base,
            Transform::Affine { offset, numerator, denominator } => {
                (value - offset) * numerator / denominator
            }
            Transform::Reciprocal { constant } => constant / value,
        }
    }

    /// Convert a base-unit value to this unit
    pub(crate) fn from_base(&self, value: f64) -> f64 {
        match *self {
            Transform::Identity => value,
            Transform::Scale { factor } => value / factor,
            Transform::Divide { divisor } => value * divisor,
            Transform::Ratio { from_base, .. } => value * from_base,
            Transform::Affine { offset, numerator, denominator } => {
                value * denominator / numerator + offset
            }
            Transform::Reciprocal { constant } => constant / value,
        }
    }

    /// True when zero maps to zero and scaling commutes with the transform
    pub fn is_linear(&self) -> bool {
        matches!(
            self,
            Transform::Identity
                | Transform::Scale { .. }
                | Transform::Divide { .. }
                | Transform::Ratio { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale() {
        let km = Transform::scale(1000.0);
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_divide() {
        let cm = Transform::divide(100.0);
        assert_eq!(cm.to_base(250.0), 2.5);
        assert_eq!(cm.from_base(2.5), 250.0);
    }

    #[test]
    fn test_ratio_multiplies_both_ways() {
        use std::f64::consts::PI;
        let rad = Transform::ratio(180.0 / PI, PI / 180.0);
        assert_eq!(rad.to_base(PI), PI * (180.0 / PI));
        assert_eq!(rad.from_base(3.0), 3.0 * (PI / 180.0));
        assert!(rad.is_linear());
    }

    #[test]
    fn test_affine_fahrenheit() {
        let f = Transform::affine(32.0, 5.0, 9.0);
        assert_eq!(f.to_base(212.0), 100.0);
        assert_eq!(f.from_base(0.0), 32.0);
        assert_eq!(f.from_base(-40.0), -40.0);
    }

    #[test]
    fn test_affine_kelvin() {
        let k = Transform::affine(273.15, 1.0, 1.0);
        assert_eq!(k.from_base(0.0), 273.15);
        assert_relative_eq!(k.to_base(373.15), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_reciprocal() {
        let l100 = Transform::reciprocal(100.0);
        assert_eq!(l100.to_base(5.0), 20.0);
        assert_eq!(l100.from_base(20.0), 5.0);
        assert!(l100.to_base(0.0).is_infinite());
    }

    #[test]
    fn test_nan_propagates() {
        for t in [
            Transform::Identity,
            Transform::scale(3.0),
            Transform::divide(3.0),
            Transform::ratio(2.0, 0.5),
            Transform::affine(32.0, 5.0, 9.0),
            Transform::reciprocal(100.0),
        ] {
            assert!(t.to_base(f64::NAN).is_nan());
            assert!(t.from_base(f64::NAN).is_nan());
        }
    }

    #[test]
    fn test_is_linear() {
        assert!(Transform::Identity.is_linear());
        assert!(Transform::divide(60.0).is_linear());
        assert!(!Transform::affine(32.0, 5.0, 9.0).is_linear());
        assert!(!Transform::reciprocal(100.0).is_linear());
    }
}
