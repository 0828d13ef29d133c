//! Easing curves for pan transitions.

/// Easing applied by the transport when interpolating toward a target offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-in, `cubic-bezier(0.42, 0.0, 1.0, 1.0)`.
    EaseIn,
    /// Cubic ease-out, `cubic-bezier(0.0, 0.0, 0.58, 1.0)`.
    EaseOut,
    /// Cubic ease-in-out, `cubic-bezier(0.42, 0.0, 0.58, 1.0)`.
    EaseInOut,
    /// The settle curve used for momentum and snap transitions: most of the
    /// travel happens early, then a long soft landing.
    /// `cubic-bezier(0.1, 0.57, 0.1, 1.0)`.
    Glide,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl Easing {
    /// Maps a linear progress fraction in `[0, 1]` through the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => solve_cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => solve_cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => solve_cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::Glide => solve_cubic_bezier(0.1, 0.57, 0.1, 1.0, fraction),
        }
    }
}

/// Horner coefficients for one bezier axis with endpoints fixed at 0 and 1.
fn bezier_coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn bezier_eval(a: f32, b: f32, c: f32, t: f32) -> f32 {
    ((a * t + b) * t + c) * t
}

fn bezier_slope(a: f32, b: f32, c: f32, t: f32) -> f32 {
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Evaluates `y` for the `x = fraction` point of a CSS-style cubic bezier.
///
/// Solves the parametric `t` for the requested x with Newton-Raphson and
/// falls back to binary subdivision when the derivative flattens out.
fn solve_cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let (ax, bx, cx) = bezier_coefficients(x1, x2);
    let (ay, by, cy) = bezier_coefficients(y1, y2);

    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let error = bezier_eval(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            converged = true;
            break;
        }
        let slope = bezier_slope(ax, bx, cx, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..16 {
            let error = bezier_eval(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    bezier_eval(ay, by, cy, t)
}
