//! Easing functions applied to the keyframe gradient.

/// Which end(s) of the curve the ease applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasingMode {
    #[default]
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasingFunction {
    /// Cubic polynomial ease.
    Cubic(EasingMode),
    /// CSS-style cubic Bézier with fixed end points (0,0) and (1,1).
    Bezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl EasingFunction {
    pub fn cubic(mode: EasingMode) -> Self {
        Self::Cubic(mode)
    }

    pub fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::Bezier { x1, y1, x2, y2 }
    }

    /// Maps a linear gradient in `[0, 1]` to the eased gradient.
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Cubic(EasingMode::EaseIn) => ease_in_cubic(t),
            Self::Cubic(EasingMode::EaseOut) => 1.0 - ease_in_cubic(1.0 - t),
            Self::Cubic(EasingMode::EaseInOut) => {
                if t < 0.5 {
                    ease_in_cubic(t * 2.0) / 2.0
                } else {
                    1.0 - ease_in_cubic((1.0 - t) * 2.0) / 2.0
                }
            }
            Self::Bezier { x1, y1, x2, y2 } => {
                cubic_bezier(x1 as f64, y1 as f64, x2 as f64, y2 as f64, t)
            }
        }
    }
}

fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

// Solves x(s) = t for the curve parameter s, then returns y(s)
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f64, b: f64, c: f64, s: f64) -> f64 {
        ((a * s + b) * s + c) * s
    }

    fn sample_derivative(a: f64, b: f64, c: f64, s: f64) -> f64 {
        (3.0 * a * s + 2.0 * b) * s + c
    }

    // Newton-Raphson first, falls back to bisection if it stalls
    let mut s = t;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, s) - t;
        if x.abs() < 1e-7 {
            solved = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, s);
        if dx.abs() < 1e-7 {
            break;
        }
        s = (s - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let mut lower = 0.0;
        let mut upper = 1.0;
        s = t;
        for _ in 0..32 {
            let delta = sample_curve(ax, bx, cx, s) - t;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                upper = s;
            } else {
                lower = s;
            }
            s = (lower + upper) / 2.0;
        }
    }

    sample_curve(ay, by, cy, s)
}
