use nalgebra::Complex;

use super::EPSILON;

/// Real roots of a quadratic equation `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// No real root, or the equation is not quadratic (`a == 0`).
    None,
    /// A single (double) root.
    One(f32),
    /// Two distinct roots; the first uses `+sqrt(D)`.
    Two(f32, f32),
}

/// Solves `a*x^2 + b*x + c = 0` over the reals.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> QuadraticRoots {
    if a == 0.0 {
        return QuadraticRoots::None;
    }
    let d = b * b - 4.0 * a * c;
    if d > 0.0 {
        let sqrt_d = d.sqrt();
        QuadraticRoots::Two((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
    } else if d == 0.0 {
        QuadraticRoots::One(-b / (2.0 * a))
    } else {
        QuadraticRoots::None
    }
}

/// Solves `a*x^4 + b*x^3 + c*x^2 + d*x + e = 0` in closed form.
///
/// `a` must be non-zero; otherwise every entry is NaN. The general quartic
/// formula is evaluated in complex `f64` arithmetic and each root is returned
/// as its real part when its imaginary part is negligible. Non-real roots are
/// usually reported as NaN, but this is not guaranteed: a complex pair very
/// close to the real axis can come back as two nearly equal real values.
/// Roots are not sorted and repeated roots appear once per multiplicity.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::cast_possible_truncation
)]
pub fn solve_quartic(a: f32, b: f32, c: f32, d: f32, e: f32) -> [f32; 4] {
    if a == 0.0 {
        return [f32::NAN; 4];
    }
    let (a, b, c, d, e) = (
        f64::from(a),
        f64::from(b),
        f64::from(c),
        f64::from(d),
        f64::from(e),
    );

    let delta0 = c * c - 3.0 * b * d + 12.0 * a * e;
    let delta1 = 2.0 * c * c * c - 9.0 * b * c * d + 27.0 * b * b * e + 27.0 * a * d * d
        - 72.0 * a * c * e;
    let p = (8.0 * a * c - 3.0 * b * b) / (8.0 * a * a);
    let q = (b * b * b - 4.0 * a * b * c + 8.0 * a * a * d) / (8.0 * a * a * a);

    let disc = Complex::new(delta1 * delta1 - 4.0 * delta0 * delta0 * delta0, 0.0).sqrt();
    let mut big_q = ((disc + delta1) / 2.0).cbrt();
    if big_q.norm() == 0.0 {
        big_q = ((-disc + delta1) / 2.0).cbrt();
    }

    // S must not vanish while q/S is formed, so take the cube root of unity
    // giving the largest S.
    let unity = Complex::new(-0.5, 3.0_f64.sqrt() / 2.0);
    let mut s = Complex::new(0.0, 0.0);
    let mut root = big_q;
    for _ in 0..3 {
        let sum = if root.norm() == 0.0 {
            Complex::new(0.0, 0.0)
        } else {
            root + delta0 / root
        };
        let candidate = (sum / (3.0 * a) - 2.0 / 3.0 * p).sqrt() * 0.5;
        if candidate.norm() > s.norm() {
            s = candidate;
        }
        root *= unity;
    }

    let q_over_s = if s.norm() == 0.0 {
        Complex::new(0.0, 0.0)
    } else {
        s.inv() * q
    };
    let base = -(s * s) * 4.0 - 2.0 * p;
    let plus = (base + q_over_s).sqrt() * 0.5;
    let minus = (base - q_over_s).sqrt() * 0.5;
    let shift = -b / (4.0 * a);

    [
        -s + plus + shift,
        -s - plus + shift,
        s + minus + shift,
        s - minus + shift,
    ]
    .map(|r| {
        if r.im.abs() <= f64::from(EPSILON) * (1.0 + r.re.abs()) {
            r.re as f32
        } else {
            f32::NAN
        }
    })
}

/// Returns the smaller non-negative value of `a` and `b`.
///
/// `NaN` counts as absent. Returns `-1.0` when neither value is non-negative.
#[must_use]
pub fn smaller_nonnegative(a: f32, b: f32) -> f32 {
    if a >= 0.0 && (a < b || b < 0.0 || b.is_nan()) {
        return a;
    }
    if b >= 0.0 && (b <= a || a < 0.0 || a.is_nan()) {
        return b;
    }
    -1.0
}

/// Checks whether `value` lies in `[lower - EPSILON, upper - EPSILON]`.
///
/// Both bounds are shifted down by [`EPSILON`], so a value sitting exactly on
/// `upper` is rejected.
#[must_use]
pub fn between(value: f32, lower: f32, upper: f32) -> bool {
    value >= lower - EPSILON && value <= upper - EPSILON
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // ── solve_quadratic ──

    #[test]
    fn two_roots() {
        // (x - 1)(x - 3) = x^2 - 4x + 3
        match solve_quadratic(1.0, -4.0, 3.0) {
            QuadraticRoots::Two(x1, x2) => {
                assert_relative_eq!(x1, 3.0);
                assert_relative_eq!(x2, 1.0);
            }
            other => panic!("expected two roots, got {other:?}"),
        }
    }

    #[test]
    fn double_root() {
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0), QuadraticRoots::One(1.0));
    }

    #[test]
    fn negative_discriminant_has_no_roots() {
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), QuadraticRoots::None);
    }

    #[test]
    fn linear_equation_has_no_roots() {
        assert_eq!(solve_quadratic(0.0, 2.0, 1.0), QuadraticRoots::None);
    }

    // ── solve_quartic ──

    fn real_roots(roots: [f32; 4]) -> Vec<f32> {
        let mut real: Vec<f32> = roots.into_iter().filter(|r| !r.is_nan()).collect();
        real.sort_by(f32::total_cmp);
        real
    }

    fn assert_roots(roots: [f32; 4], expected: &[f32]) {
        let real = real_roots(roots);
        assert_eq!(real.len(), expected.len(), "{roots:?}");
        for (got, want) in real.iter().zip(expected) {
            assert_relative_eq!(*got, *want, epsilon = 1e-4);
        }
    }

    #[test]
    fn quartic_four_distinct_roots() {
        // (x - 1)(x - 2)(x - 3)(x - 4)
        assert_roots(solve_quartic(1.0, -10.0, 35.0, -50.0, 24.0), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn quartic_biquadratic() {
        // (x^2 - 1)(x^2 - 4)
        assert_roots(solve_quartic(1.0, 0.0, -5.0, 0.0, 4.0), &[-2.0, -1.0, 1.0, 2.0]);
    }

    #[test]
    fn quartic_complex_pair_is_nan() {
        // x^4 - 1 = (x - 1)(x + 1)(x^2 + 1)
        assert_roots(solve_quartic(1.0, 0.0, 0.0, 0.0, -1.0), &[-1.0, 1.0]);
        assert_roots(solve_quartic(2.0, 0.0, 0.0, 0.0, -32.0), &[-2.0, 2.0]);
    }

    #[test]
    fn quartic_without_real_roots() {
        assert_roots(solve_quartic(1.0, 0.0, 0.0, 0.0, 1.0), &[]);
    }

    #[test]
    fn quartic_repeated_roots() {
        // (x - 1)^2 (x - 2)^2
        assert_roots(solve_quartic(1.0, -6.0, 13.0, -12.0, 4.0), &[1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn quartic_leading_zero_is_nan() {
        assert!(solve_quartic(0.0, 1.0, 1.0, 1.0, 1.0).iter().all(|r| r.is_nan()));
    }

    // ── smaller_nonnegative ──

    #[test]
    fn picks_smaller_of_two_positive() {
        assert_relative_eq!(smaller_nonnegative(2.0, 1.0), 1.0);
        assert_relative_eq!(smaller_nonnegative(1.0, 2.0), 1.0);
    }

    #[test]
    fn skips_negative_and_nan() {
        assert_relative_eq!(smaller_nonnegative(-1.0, 4.0), 4.0);
        assert_relative_eq!(smaller_nonnegative(4.0, -2.0), 4.0);
        assert_relative_eq!(smaller_nonnegative(f32::NAN, 0.5), 0.5);
        assert_relative_eq!(smaller_nonnegative(0.5, f32::NAN), 0.5);
    }

    #[test]
    fn neither_nonnegative() {
        assert_relative_eq!(smaller_nonnegative(-3.0, -4.0), -1.0);
        assert_relative_eq!(smaller_nonnegative(f32::NAN, f32::NAN), -1.0);
    }

    // ── between ──

    #[test]
    fn between_uses_shifted_window() {
        assert!(between(0.5, 0.0, 1.0));
        assert!(between(-0.5 * EPSILON, 0.0, 1.0));
        assert!(!between(1.0, 0.0, 1.0));
        assert!(!between(-2.0 * EPSILON, 0.0, 1.0));
    }
}
