use awsm_scene::{
    animation::AnimationValue,
    color::{Color3, Color4},
};
use glam::{Quat, Vec2, Vec3};
use indexmap::IndexMap;

/// A target value as supplied by the caller, before it is coerced into the
/// kind of the property it animates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Array(Vec<f64>),
    Native(AnimationValue),
}

/// Property paths with target values, plus the `transition` string that
/// says how to get there.
///
/// Properties keep insertion order. With the `serde` feature a JSON object
/// deserializes directly, the `transition` key is lifted out and every other
/// key becomes a property.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDeclaration {
    pub transition: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub properties: IndexMap<String, StyleValue>,
}

impl StyleDeclaration {
    pub fn new(transition: impl Into<String>) -> Self {
        Self {
            transition: transition.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value))
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for StyleValue {
    fn from(value: Vec<f64>) -> Self {
        Self::Array(value)
    }
}

impl<const N: usize> From<[f64; N]> for StyleValue {
    fn from(value: [f64; N]) -> Self {
        Self::Array(value.to_vec())
    }
}

impl From<AnimationValue> for StyleValue {
    fn from(value: AnimationValue) -> Self {
        Self::Native(value)
    }
}

impl From<Vec2> for StyleValue {
    fn from(value: Vec2) -> Self {
        Self::Native(value.into())
    }
}

impl From<Vec3> for StyleValue {
    fn from(value: Vec3) -> Self {
        Self::Native(value.into())
    }
}

impl From<Quat> for StyleValue {
    fn from(value: Quat) -> Self {
        Self::Native(value.into())
    }
}

impl From<Color3> for StyleValue {
    fn from(value: Color3) -> Self {
        Self::Native(value.into())
    }
}

impl From<Color4> for StyleValue {
    fn from(value: Color4) -> Self {
        Self::Native(value.into())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json_object() {
        let style: StyleDeclaration = serde_json::from_str(
            r#"{
                "position": [1, 2, 3],
                "transition": "all 1s linear",
                "fov": "0.5",
                "visibility": 0
            }"#,
        )
        .unwrap();

        assert_eq!(style.transition, "all 1s linear");
        let keys: Vec<&str> = style.properties().map(|(key, _)| key).collect();
        assert_eq!(keys, ["position", "fov", "visibility"]);
        assert_eq!(
            style.properties["position"],
            StyleValue::Array(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(style.properties["fov"], StyleValue::Text("0.5".to_string()));
        assert_eq!(style.properties["visibility"], StyleValue::Number(0.0));
    }

    #[test]
    fn transition_is_required() {
        assert!(serde_json::from_str::<StyleDeclaration>(r#"{ "position": [1, 2, 3] }"#).is_err());
    }
}
