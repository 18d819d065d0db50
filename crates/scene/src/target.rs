//! The kinds of scene objects that can be animated, and how to find the
//! scene and engine that own each of them.

use thiserror::Error;

use crate::{
    camera::CameraKey, nodes::NodeKey, property::Animatable, scene::SceneKey,
    textures::TextureKey, AwsmEngine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    Node(NodeKey),
    Camera(CameraKey),
    Scene(SceneKey),
    Texture(TextureKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TargetKind {
    Node,
    Camera,
    Scene,
    Texture,
}

/// Scene and engine settings a target animates under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetOwner {
    pub scene: SceneKey,
    pub frame_rate: f64,
}

type SceneAccessor = fn(&AwsmEngine, AnimationTarget) -> Option<SceneKey>;
type EngineAccessor = fn(&AwsmEngine, SceneKey) -> Option<f64>;

/// Accessor pair used to resolve the owner of a target kind.
#[derive(Clone, Copy)]
pub struct OwnerAccessors {
    pub scene: SceneAccessor,
    pub engine: EngineAccessor,
}

impl TargetKind {
    pub fn accessors(self) -> OwnerAccessors {
        match self {
            Self::Node => OwnerAccessors {
                scene: node_scene,
                engine: scene_engine,
            },
            Self::Camera => OwnerAccessors {
                scene: camera_scene,
                engine: scene_engine,
            },
            Self::Scene => OwnerAccessors {
                scene: scene_scene,
                engine: scene_engine,
            },
            Self::Texture => OwnerAccessors {
                scene: texture_scene,
                engine: scene_engine,
            },
        }
    }
}

impl AnimationTarget {
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Node(_) => TargetKind::Node,
            Self::Camera(_) => TargetKind::Camera,
            Self::Scene(_) => TargetKind::Scene,
            Self::Texture(_) => TargetKind::Texture,
        }
    }
}

impl From<NodeKey> for AnimationTarget {
    fn from(key: NodeKey) -> Self {
        Self::Node(key)
    }
}

impl From<CameraKey> for AnimationTarget {
    fn from(key: CameraKey) -> Self {
        Self::Camera(key)
    }
}

impl From<SceneKey> for AnimationTarget {
    fn from(key: SceneKey) -> Self {
        Self::Scene(key)
    }
}

impl From<TextureKey> for AnimationTarget {
    fn from(key: TextureKey) -> Self {
        Self::Texture(key)
    }
}

fn node_scene(engine: &AwsmEngine, target: AnimationTarget) -> Option<SceneKey> {
    match target {
        AnimationTarget::Node(key) => engine.nodes.get(key).ok().map(|node| node.scene),
        _ => None,
    }
}

fn camera_scene(engine: &AwsmEngine, target: AnimationTarget) -> Option<SceneKey> {
    match target {
        AnimationTarget::Camera(key) => engine.cameras.get(key).map(|camera| camera.scene),
        _ => None,
    }
}

fn scene_scene(_engine: &AwsmEngine, target: AnimationTarget) -> Option<SceneKey> {
    match target {
        AnimationTarget::Scene(key) => Some(key),
        _ => None,
    }
}

fn texture_scene(engine: &AwsmEngine, target: AnimationTarget) -> Option<SceneKey> {
    match target {
        AnimationTarget::Texture(key) => engine.textures.get(key).and_then(|texture| texture.scene),
        _ => None,
    }
}

fn scene_engine(engine: &AwsmEngine, scene: SceneKey) -> Option<f64> {
    engine
        .scenes
        .contains_key(scene)
        .then_some(engine.config.frame_rate)
}

impl AwsmEngine {
    /// Finds the owning scene and engine settings for a target.
    pub fn resolve_owner(&self, target: AnimationTarget) -> Result<TargetOwner> {
        let accessors = target.kind().accessors();

        let scene = (accessors.scene)(self, target).ok_or(AwsmTargetError::Unsupported(target))?;
        let frame_rate =
            (accessors.engine)(self, scene).ok_or(AwsmTargetError::Unsupported(target))?;

        Ok(TargetOwner { scene, frame_rate })
    }

    pub fn animatable(&self, target: AnimationTarget) -> Result<&dyn Animatable> {
        let animatable: Option<&dyn Animatable> = match target {
            AnimationTarget::Node(key) => self.nodes.get(key).ok().map(|n| n as &dyn Animatable),
            AnimationTarget::Camera(key) => self.cameras.get(key).map(|c| c as &dyn Animatable),
            AnimationTarget::Scene(key) => self.scenes.get(key).map(|s| s as &dyn Animatable),
            AnimationTarget::Texture(key) => self.textures.get(key).map(|t| t as &dyn Animatable),
        };

        animatable.ok_or(AwsmTargetError::NotFound(target))
    }

    /// Mutable access to a target; nodes get marked dirty for the next world update.
    pub fn animatable_mut(&mut self, target: AnimationTarget) -> Result<&mut dyn Animatable> {
        let animatable: Option<&mut dyn Animatable> = match target {
            AnimationTarget::Node(key) => {
                self.nodes.get_mut(key).ok().map(|n| n as &mut dyn Animatable)
            }
            AnimationTarget::Camera(key) => {
                self.cameras.get_mut(key).map(|c| c as &mut dyn Animatable)
            }
            AnimationTarget::Scene(key) => {
                self.scenes.get_mut(key).map(|s| s as &mut dyn Animatable)
            }
            AnimationTarget::Texture(key) => {
                self.textures.get_mut(key).map(|t| t as &mut dyn Animatable)
            }
        };

        animatable.ok_or(AwsmTargetError::NotFound(target))
    }
}

pub type Result<T> = std::result::Result<T, AwsmTargetError>;

#[derive(Error, Debug)]
pub enum AwsmTargetError {
    #[error("[target] unsupported target {0:?}: not found or not attached to a scene")]
    Unsupported(AnimationTarget),

    #[error("[target] target does not exist {0:?}")]
    NotFound(AnimationTarget),
}
