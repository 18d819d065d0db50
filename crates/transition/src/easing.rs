use awsm_scene::animation::{EasingFunction, EasingMode};

/// The easing token of a transition clause.
#[derive(Debug, Clone, PartialEq)]
pub enum EasingDescriptor {
    Linear,
    Mode(EasingMode),
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Anything else, kept verbatim. Resolves to no easing.
    Other(String),
}

impl EasingDescriptor {
    /// Never fails, unknown or malformed tokens become [`EasingDescriptor::Other`].
    pub fn parse(token: &str) -> Self {
        let lower = token.trim().to_ascii_lowercase();

        match lower.as_str() {
            "linear" => return Self::Linear,
            "ease-in" => return Self::Mode(EasingMode::EaseIn),
            "ease-out" => return Self::Mode(EasingMode::EaseOut),
            "ease-in-out" => return Self::Mode(EasingMode::EaseInOut),
            _ => {}
        }

        parse_cubic_bezier(&lower).unwrap_or_else(|| Self::Other(token.to_string()))
    }
}

// x values must stay within [0, 1] for the curve to be a function of time
fn parse_cubic_bezier(token: &str) -> Option<EasingDescriptor> {
    let args = token
        .strip_prefix("cubic-bezier")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let values = args
        .split(',')
        .map(|arg| arg.trim().parse::<f32>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<f32>>>()?;

    let [x1, y1, x2, y2] = values.as_slice() else {
        return None;
    };

    if !(0.0..=1.0).contains(x1) || !(0.0..=1.0).contains(x2) {
        return None;
    }

    Some(EasingDescriptor::CubicBezier {
        x1: *x1,
        y1: *y1,
        x2: *x2,
        y2: *y2,
    })
}

/// `None` means linear interpolation.
pub fn resolve_easing(descriptor: &EasingDescriptor) -> Option<EasingFunction> {
    match descriptor {
        EasingDescriptor::Linear => None,
        EasingDescriptor::Mode(mode) => Some(EasingFunction::cubic(*mode)),
        EasingDescriptor::CubicBezier { x1, y1, x2, y2 } => {
            Some(EasingFunction::bezier(*x1, *y1, *x2, *y2))
        }
        EasingDescriptor::Other(token) => {
            tracing::debug!("unknown easing {token:?}, using linear");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_modes() {
        assert_eq!(EasingDescriptor::parse("linear"), EasingDescriptor::Linear);
        assert_eq!(
            EasingDescriptor::parse("ease-in-out"),
            EasingDescriptor::Mode(EasingMode::EaseInOut)
        );
        assert_eq!(
            EasingDescriptor::parse("Ease-Out"),
            EasingDescriptor::Mode(EasingMode::EaseOut)
        );
    }

    #[test]
    fn cubic_bezier_arguments() {
        assert_eq!(
            EasingDescriptor::parse("cubic-bezier(0.42, 0, 0.58, 1)"),
            EasingDescriptor::CubicBezier {
                x1: 0.42,
                y1: 0.0,
                x2: 0.58,
                y2: 1.0
            }
        );

        // overshooting y is fine, x is not
        assert!(matches!(
            EasingDescriptor::parse("cubic-bezier(0.3,-0.5,0.7,1.5)"),
            EasingDescriptor::CubicBezier { .. }
        ));
        assert!(matches!(
            EasingDescriptor::parse("cubic-bezier(1.2,0,0.7,1)"),
            EasingDescriptor::Other(_)
        ));
        assert!(matches!(
            EasingDescriptor::parse("cubic-bezier(0.42,0,0.58)"),
            EasingDescriptor::Other(_)
        ));
        assert!(matches!(
            EasingDescriptor::parse("cubic-bezier(a,b,c,d)"),
            EasingDescriptor::Other(_)
        ));
    }

    #[test]
    fn resolves_to_engine_easing() {
        assert_eq!(resolve_easing(&EasingDescriptor::Linear), None);
        assert_eq!(
            resolve_easing(&EasingDescriptor::Mode(EasingMode::EaseIn)),
            Some(EasingFunction::cubic(EasingMode::EaseIn))
        );
        assert_eq!(
            resolve_easing(&EasingDescriptor::parse("cubic-bezier(0.42,0,0.58,1)")),
            Some(EasingFunction::bezier(0.42, 0.0, 0.58, 1.0))
        );
        assert_eq!(
            resolve_easing(&EasingDescriptor::parse("steps(4)")),
            None
        );
    }
}
