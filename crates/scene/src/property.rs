//! Named, animatable properties on scene objects.

use std::fmt;

use crate::animation::AnimationValue;

/// Scene objects expose their animatable state through this trait.
///
/// Properties are addressed by name, values carry their own kind. Setting a
/// value of the wrong kind is rejected.
pub trait Animatable {
    fn get_property(&self, name: &str) -> Option<AnimationValue>;

    /// Returns `false` if the property does not exist or the kind does not match.
    fn set_property(&mut self, name: &str, value: AnimationValue) -> bool;

    fn property_list(&self) -> &'static [&'static str];
}

/// A property name, optionally followed by one component (`position.y`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    outer: String,
    inner: Option<String>,
}

impl PropertyPath {
    /// Returns `None` for empty segments or more than two levels.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.split('.');
        let outer = segments.next().filter(|s| !s.is_empty())?;
        let inner = match segments.next() {
            Some("") => return None,
            Some(inner) => Some(inner.to_string()),
            None => None,
        };
        if segments.next().is_some() {
            return None;
        }

        Some(Self {
            outer: outer.to_string(),
            inner,
        })
    }

    pub fn outer(&self) -> &str {
        &self.outer
    }

    pub fn inner(&self) -> Option<&str> {
        self.inner.as_deref()
    }

    pub fn read(&self, target: &dyn Animatable) -> Option<AnimationValue> {
        let value = target.get_property(&self.outer)?;
        match &self.inner {
            None => Some(value),
            Some(inner) => value.component(inner).map(AnimationValue::Float),
        }
    }

    /// Writes the value, touching only the addressed component for two-level paths.
    pub fn write(&self, target: &mut dyn Animatable, value: AnimationValue) -> bool {
        match &self.inner {
            None => target.set_property(&self.outer, value),
            Some(inner) => {
                let Some(component) = value.as_float() else {
                    return false;
                };
                target
                    .get_property(&self.outer)
                    .and_then(|parent| parent.with_component(inner, component))
                    .is_some_and(|parent| target.set_property(&self.outer, parent))
            }
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "{}.{}", self.outer, inner),
            None => write!(f, "{}", self.outer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_paths() {
        let path = PropertyPath::parse("position").unwrap();
        assert_eq!(path.outer(), "position");
        assert_eq!(path.inner(), None);

        let path = PropertyPath::parse("position.y").unwrap();
        assert_eq!(path.outer(), "position");
        assert_eq!(path.inner(), Some("y"));
        assert_eq!(path.to_string(), "position.y");

        assert!(PropertyPath::parse("").is_none());
        assert!(PropertyPath::parse("position.").is_none());
        assert!(PropertyPath::parse(".y").is_none());
        assert!(PropertyPath::parse("a.b.c").is_none());
    }
}
