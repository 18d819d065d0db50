use animation::Animations;
use camera::{Camera, CameraKey};
use nodes::{Node, NodeKey, Nodes};
use scene::{Scene, SceneKey};
use slotmap::SlotMap;
use target::AnimationTarget;
use textures::{Texture, TextureKey};

pub mod animation;
pub mod camera;
pub mod color;
pub mod error;
pub mod nodes;
pub mod property;
pub mod scene;
pub mod target;
pub mod textures;
pub mod update;

/// Frame rate used to convert clip frames to seconds unless configured otherwise.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Owns every scene object and the animations running on them.
#[derive(Debug)]
pub struct AwsmEngine {
    pub config: AwsmEngineConfig,

    pub scenes: SlotMap<SceneKey, Scene>,

    pub nodes: Nodes,

    pub cameras: SlotMap<CameraKey, Camera>,

    pub textures: SlotMap<TextureKey, Texture>,

    pub animations: Animations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwsmEngineConfig {
    pub frame_rate: f64,
    pub logging: AwsmEngineLogging,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwsmEngineLogging {
    pub animation_timings: bool,
}

impl Default for AwsmEngineConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            logging: AwsmEngineLogging::default(),
        }
    }
}

impl Default for AwsmEngine {
    fn default() -> Self {
        AwsmEngineBuilder::new().build()
    }
}

impl AwsmEngine {
    pub fn add_scene(&mut self, scene: Scene) -> SceneKey {
        self.scenes.insert(scene)
    }

    pub fn add_node(
        &mut self,
        node: Node,
        parent: Option<NodeKey>,
    ) -> crate::error::Result<NodeKey> {
        Ok(self.nodes.insert(node, parent)?)
    }

    pub fn set_node_parent(
        &mut self,
        child: NodeKey,
        parent: Option<NodeKey>,
    ) -> crate::error::Result<()> {
        self.nodes.set_parent(child, parent)?;
        Ok(())
    }

    pub fn add_camera(&mut self, camera: Camera) -> CameraKey {
        self.cameras.insert(camera)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureKey {
        self.textures.insert(texture)
    }

    /// Removes the node and any animation running on it. Children move up to
    /// the top level.
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        self.animations.remove_target(AnimationTarget::Node(key));
        self.nodes.remove(key)
    }

    pub fn remove_camera(&mut self, key: CameraKey) -> Option<Camera> {
        self.animations.remove_target(AnimationTarget::Camera(key));
        self.cameras.remove(key)
    }

    pub fn remove_texture(&mut self, key: TextureKey) -> Option<Texture> {
        self.animations.remove_target(AnimationTarget::Texture(key));
        self.textures.remove(key)
    }

    /// Removes the scene along with its nodes and cameras. Textures survive
    /// but are detached.
    pub fn remove_scene(&mut self, key: SceneKey) -> Option<Scene> {
        let scene = self.scenes.remove(key)?;
        self.animations.remove_target(AnimationTarget::Scene(key));

        let nodes: Vec<NodeKey> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.scene == key)
            .map(|(node_key, _)| node_key)
            .collect();
        for node_key in nodes {
            self.remove_node(node_key);
        }

        let cameras: Vec<CameraKey> = self
            .cameras
            .iter()
            .filter(|(_, camera)| camera.scene == key)
            .map(|(camera_key, _)| camera_key)
            .collect();
        for camera_key in cameras {
            self.remove_camera(camera_key);
        }

        let mut detached = Vec::new();
        for (texture_key, texture) in self.textures.iter_mut() {
            if texture.scene == Some(key) {
                texture.scene = None;
                detached.push(texture_key);
            }
        }
        for texture_key in detached {
            self.animations
                .remove_target(AnimationTarget::Texture(texture_key));
        }

        Some(scene)
    }

    pub fn remove_all(&mut self) {
        self.scenes.clear();
        self.nodes = Nodes::default();
        self.cameras.clear();
        self.textures.clear();
        self.animations = Animations::default();
    }
}

pub struct AwsmEngineBuilder {
    config: AwsmEngineConfig,
}

impl Default for AwsmEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsmEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: AwsmEngineConfig::default(),
        }
    }

    /// Non-positive rates are ignored.
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        if frame_rate > 0.0 {
            self.config.frame_rate = frame_rate;
        } else {
            tracing::warn!(
                "ignoring frame rate {frame_rate}, keeping {}",
                self.config.frame_rate
            );
        }
        self
    }

    pub fn with_logging(mut self, logging: AwsmEngineLogging) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn build(self) -> AwsmEngine {
        AwsmEngine {
            config: self.config,
            scenes: SlotMap::with_key(),
            nodes: Nodes::new(),
            cameras: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            animations: Animations::new(),
        }
    }
}
