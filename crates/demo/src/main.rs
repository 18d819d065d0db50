mod config;
mod logger;

use std::{cell::Cell, rc::Rc};

use anyhow::Context;
use awsm_scene::{
    animation::AnimationEvent,
    camera::Camera,
    nodes::{Node, NodeKey},
    scene::Scene,
    textures::Texture,
    AwsmEngine, AwsmEngineBuilder, AwsmEngineLogging,
};
use awsm_transition::{run_transition, run_transition_each, StyleDeclaration};
use config::CONFIG;
use glam::{Quat, Vec3};

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let mut engine = AwsmEngineBuilder::new()
        .with_frame_rate(CONFIG.frame_rate)
        .with_logging(AwsmEngineLogging {
            animation_timings: CONFIG.log_animation_timings,
        })
        .build();

    let scene = engine.add_scene(Scene::new("demo"));
    let cube = engine.add_node(Node::new("cube", scene), None)?;
    let camera = engine.add_camera(Camera::new(
        "main",
        scene,
        Vec3::new(0.0, 2.0, 10.0),
        Vec3::ZERO,
    ));
    let texture = engine.add_texture(Texture::new("checker", Some(scene)));

    let finished = Rc::new(Cell::new(false));

    let group = run_transition(&mut engine, cube, &load_style()?)?;
    group.on_end(&mut engine, {
        let finished = finished.clone();
        move |engine| {
            tracing::info!("cube arrived, sending it home");
            if let Err(err) = send_home(engine, cube, finished.clone()) {
                tracing::error!("{err}");
                finished.set(true);
            }
        }
    })?;

    let camera_style = StyleDeclaration::new("position 2s ease-in-out, fov 1s linear 500ms")
        .with("position", [4.0, 4.0, 8.0])
        .with("fov", "1.1");
    for handle in run_transition_each(&mut engine, camera, &camera_style)? {
        handle.on_end(&mut engine, |engine| {
            if let Some(camera) = engine.cameras.values().next() {
                tracing::info!(
                    "camera settled at {} with fov {:.2}",
                    camera.position,
                    camera.fov
                );
            }
        })?;
    }

    let texture_style = StyleDeclaration::new("all 3s cubic-bezier(0.25, 0.1, 0.25, 1)")
        .with("offset", [0.5, 0.5])
        .with("rotation", std::f64::consts::FRAC_PI_2);
    run_transition(&mut engine, texture, &texture_style)?;

    for tick in 0..CONFIG.max_ticks {
        for event in engine.update_all(CONFIG.tick) {
            match event {
                AnimationEvent::Ended(key) => tracing::debug!("animation {key:?} ended"),
                AnimationEvent::GroupEnded(key) => tracing::debug!("group {key:?} ended"),
            }
        }

        if tick % CONFIG.report_every == 0 {
            report(&engine, cube, tick);
        }

        if finished.get() {
            report(&engine, cube, tick);
            tracing::info!("done after {} ticks", tick + 1);
            return Ok(());
        }
    }

    tracing::warn!("stopped after {} ticks", CONFIG.max_ticks);
    Ok(())
}

fn load_style() -> anyhow::Result<StyleDeclaration> {
    match &CONFIG.style_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading style from {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing style from {}", path.display()))
        }
        None => Ok(StyleDeclaration::new(
            "position 1s ease-out, rotation 2s ease-in-out, scaling.y 750ms linear 250ms, all 500ms linear",
        )
        .with("position", [2.0, 1.0, 0.0])
        .with("rotation", Quat::from_rotation_y(std::f32::consts::PI))
        .with("scaling.y", 2.0_f64)
        .with("visibility", "0.5")),
    }
}

fn send_home(
    engine: &mut AwsmEngine,
    cube: NodeKey,
    finished: Rc<Cell<bool>>,
) -> awsm_transition::error::Result<()> {
    let style = StyleDeclaration::new("all 1s ease-in")
        .with("position", [0.0, 0.0, 0.0])
        .with("scaling.y", 1.0_f64)
        .with("visibility", 1.0_f64);

    let group = run_transition(engine, cube, &style)?;
    group.on_end(engine, move |_| finished.set(true))?;

    Ok(())
}

fn report(engine: &AwsmEngine, cube: NodeKey, tick: usize) {
    let Ok(node) = engine.nodes.get(cube) else {
        return;
    };
    let world = engine
        .nodes
        .get_world(cube)
        .map(|world| world.w_axis.truncate())
        .unwrap_or_default();

    tracing::info!(
        "tick {tick}: cube at {world} scale {} visibility {:.2} ({} animations)",
        node.transform.scale,
        node.visibility,
        engine.animations.len()
    );
}
