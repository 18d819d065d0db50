use std::collections::HashSet;

use glam::{Mat4, Quat, Vec3};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use thiserror::Error;

use crate::{animation::AnimationValue, property::Animatable, scene::SceneKey};

new_key_type! {
    pub struct NodeKey;
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub scene: SceneKey,
    pub transform: Transform,
    pub visibility: f32,
}

impl Node {
    pub fn new(name: impl Into<String>, scene: SceneKey) -> Self {
        Self {
            name: name.into(),
            scene,
            transform: Transform::IDENTITY,
            visibility: 1.0,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl Animatable for Node {
    fn get_property(&self, name: &str) -> Option<AnimationValue> {
        match name {
            "position" => Some(self.transform.translation.into()),
            "rotation" => Some(self.transform.rotation.into()),
            "scaling" => Some(self.transform.scale.into()),
            "matrix" => Some(self.transform.to_matrix().into()),
            "visibility" => Some(self.visibility.into()),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: AnimationValue) -> bool {
        match (name, value) {
            ("position", AnimationValue::Vector3(v)) => self.transform.translation = v,
            ("rotation", AnimationValue::Quaternion(q)) => self.transform.rotation = q,
            ("scaling", AnimationValue::Vector3(v)) => self.transform.scale = v,
            ("matrix", AnimationValue::Matrix(m)) => self.transform = Transform::from_matrix(m),
            ("visibility", AnimationValue::Float(f)) => self.visibility = f,
            _ => return false,
        }
        true
    }

    fn property_list(&self) -> &'static [&'static str] {
        &["position", "rotation", "scaling", "matrix", "visibility"]
    }
}

/// The node hierarchy.
///
/// Local transforms live on the nodes, world matrices are derived from them by
/// [`Nodes::update_world`].
#[derive(Debug, Default)]
pub struct Nodes {
    nodes: SlotMap<NodeKey, Node>,
    world_matrices: SecondaryMap<NodeKey, Mat4>,
    children: SecondaryMap<NodeKey, Vec<NodeKey>>,
    parents: SecondaryMap<NodeKey, NodeKey>,
    // dirtied from the outside, e.g. by animations or direct mutation
    dirties: HashSet<NodeKey>,
}

impl Nodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails without inserting anything if `parent` does not exist.
    pub fn insert(&mut self, node: Node, parent: Option<NodeKey>) -> Result<NodeKey> {
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(AwsmNodeError::NotFound(parent));
            }
        }

        let world_matrix = node.transform.to_matrix();

        let key = self.nodes.insert(node);

        self.world_matrices.insert(key, world_matrix);
        self.children.insert(key, Vec::new());
        self.dirties.insert(key);

        self.set_parent(key, parent)?;

        Ok(key)
    }

    /// Removes the node, its children are moved to the top level.
    pub fn remove(&mut self, key: NodeKey) -> Option<Node> {
        // happens separately so that we can remove the node from the parent's children list
        self.unset_parent(key);

        if let Some(children) = self.children.remove(key) {
            for child in children {
                self.parents.remove(child);
                self.dirties.insert(child);
            }
        }

        self.world_matrices.remove(key);
        self.dirties.remove(&key);
        self.nodes.remove(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn get(&self, key: NodeKey) -> Result<&Node> {
        self.nodes.get(key).ok_or(AwsmNodeError::NotFound(key))
    }

    // The only way to mutate a node, since it must manage the dirty flags
    pub fn get_mut(&mut self, key: NodeKey) -> Result<&mut Node> {
        match self.nodes.get_mut(key) {
            Some(node) => {
                self.dirties.insert(key);
                Ok(node)
            }
            None => Err(AwsmNodeError::NotFound(key)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.nodes.iter()
    }

    // if parent is None then the node becomes top-level
    pub fn set_parent(&mut self, child: NodeKey, parent: Option<NodeKey>) -> Result<()> {
        if !self.nodes.contains_key(child) {
            return Err(AwsmNodeError::NotFound(child));
        }

        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(AwsmNodeError::NotFound(parent));
            }
            if parent == child || self.is_ancestor(child, parent) {
                return Err(AwsmNodeError::Cycle { child, parent });
            }
        }

        if self.parents.get(child).copied() == parent {
            return Ok(());
        }

        self.unset_parent(child);

        if let Some(parent) = parent {
            if let Some(children) = self.children.get_mut(parent) {
                children.push(child);
            }
            self.parents.insert(child, parent);
        }

        self.dirties.insert(child);

        Ok(())
    }

    pub fn get_parent(&self, child: NodeKey) -> Option<NodeKey> {
        self.parents.get(child).copied()
    }

    pub fn get_world(&self, key: NodeKey) -> Result<&Mat4> {
        self.world_matrices
            .get(key)
            .ok_or(AwsmNodeError::WorldNotFound(key))
    }

    // This is the only way to update the world matrices
    pub fn update_world(&mut self) {
        let roots: Vec<NodeKey> = self
            .nodes
            .keys()
            .filter(|key| !self.parents.contains_key(*key))
            .collect();

        for root in roots {
            self.update_inner_recursively(root, false);
        }

        self.dirties.clear();
    }

    // See: https://gameprogrammingpatterns.com/dirty-flag.html
    // walk the tree and skip over nodes that are not dirty
    // whenever we encounter a dirty node, all of its children are dirty too
    // a dirty node's world matrix is its parent's world matrix times its local matrix
    fn update_inner_recursively(&mut self, key: NodeKey, dirty_tracker: bool) {
        let dirty = self.dirties.contains(&key) | dirty_tracker;

        if dirty {
            let local_matrix = self.nodes[key].transform.to_matrix();

            let world_matrix = match self.parents.get(key) {
                Some(parent) => self.world_matrices[*parent].mul_mat4(&local_matrix),
                None => local_matrix,
            };

            self.world_matrices[key] = world_matrix;
        }

        // can't keep a mutable reference to self while it has a borrow of the iterator
        let children = self.children[key].clone();
        for child in children {
            self.update_inner_recursively(child, dirty);
        }
    }

    fn is_ancestor(&self, ancestor: NodeKey, mut key: NodeKey) -> bool {
        while let Some(parent) = self.parents.get(key) {
            if *parent == ancestor {
                return true;
            }
            key = *parent;
        }
        false
    }

    // leaves the node dangling at the top level
    fn unset_parent(&mut self, child: NodeKey) {
        if let Some(parent) = self.parents.remove(child) {
            if let Some(children) = self.children.get_mut(parent) {
                children.retain(|&c| c != child);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

pub type Result<T> = std::result::Result<T, AwsmNodeError>;

#[derive(Error, Debug)]
pub enum AwsmNodeError {
    #[error("[node] node does not exist {0:?}")]
    NotFound(NodeKey),

    #[error("[node] world matrix does not exist {0:?}")]
    WorldNotFound(NodeKey),

    #[error("[node] cannot parent {child:?} under its own descendant {parent:?}")]
    Cycle { child: NodeKey, parent: NodeKey },
}
