use std::{cell::Cell, rc::Rc};

use awsm_scene::{
    animation::{AnimationState, AnimationValue},
    camera::Camera,
    color::Color3,
    nodes::{Node, NodeKey},
    property::PropertyPath,
    scene::{Scene, SceneKey},
    target::AnimationTarget,
    textures::Texture,
    AwsmEngine, AwsmEngineBuilder,
};
use glam::{Mat4, Vec2, Vec3};

use crate::{
    error::AwsmTransitionError,
    resolve::read_initial_value,
    runner::{frame_count, run_transition, run_transition_each},
    style::{StyleDeclaration, StyleValue},
};

fn setup() -> (AwsmEngine, SceneKey, NodeKey) {
    let mut engine = AwsmEngineBuilder::new().with_frame_rate(60.0).build();
    let scene = engine.add_scene(Scene::new("scene"));
    let node = engine.add_node(Node::new("node", scene), None).unwrap();
    (engine, scene, node)
}

fn position(engine: &AwsmEngine, node: NodeKey) -> Vec3 {
    engine.nodes.get(node).unwrap().transform.translation
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn frame_counts_round_to_whole_frames() {
    assert_eq!(frame_count(500.0, 60.0), 30.0);
    assert_eq!(frame_count(1000.0, 60.0), 60.0);
    assert_eq!(frame_count(10.0, 60.0), 1.0);
    assert_eq!(frame_count(0.0, 60.0), 0.0);
}

#[test]
fn plain_arrays_animate_vectors() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 1s linear").with("position", [1.0, 2.0, 3.0]);
    run_transition(&mut engine, node, &style).unwrap();

    engine.update_all(0.5);
    assert_eq!(position(&engine, node), Vec3::new(0.5, 1.0, 1.5));

    engine.update_all(0.5);
    assert_eq!(position(&engine, node), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(
        engine.nodes.get_world(node).unwrap().w_axis.truncate(),
        Vec3::new(1.0, 2.0, 3.0)
    );
}

#[test]
fn unmatched_properties_are_skipped() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("position 1s linear")
        .with("position", [4.0, 4.0, 4.0])
        .with("scaling", [2.0, 2.0, 2.0]);

    let handles = run_transition_each(&mut engine, node, &style).unwrap();
    assert_eq!(handles.len(), 1);
    assert_eq!(engine.animations.len(), 1);

    engine.update_all(1.0);
    let transform = &engine.nodes.get(node).unwrap().transform;
    assert_eq!(transform.translation, Vec3::splat(4.0));
    assert_eq!(transform.scale, Vec3::ONE);
}

#[test]
fn dot_paths_animate_one_component() {
    let (mut engine, _, node) = setup();
    engine.nodes.get_mut(node).unwrap().transform.translation = Vec3::new(1.0, 2.0, 3.0);

    let style = StyleDeclaration::new("position 1s linear").with("position.y", 10.0_f64);
    run_transition(&mut engine, node, &style).unwrap();

    engine.update_all(0.0);
    assert_eq!(position(&engine, node), Vec3::new(1.0, 2.0, 3.0));

    engine.update_all(0.5);
    assert_eq!(position(&engine, node), Vec3::new(1.0, 6.0, 3.0));

    engine.update_all(0.5);
    assert_eq!(position(&engine, node), Vec3::new(1.0, 10.0, 3.0));
}

#[test]
fn running_twice_replaces_the_first_animation() {
    let (mut engine, _, node) = setup();

    let first = StyleDeclaration::new("all 1s linear").with("position", [10.0, 0.0, 0.0]);
    let second = StyleDeclaration::new("all 1s linear").with("position", [0.0, 10.0, 0.0]);

    let first = run_transition_each(&mut engine, node, &first).unwrap();
    run_transition_each(&mut engine, node, &second).unwrap();

    assert_eq!(
        engine
            .animations
            .keys_for_target(AnimationTarget::Node(node))
            .len(),
        1
    );
    assert_eq!(first[0].state(&engine), None);

    engine.update_all(1.0);
    assert_eq!(position(&engine, node), Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn replacing_does_not_touch_other_properties() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 1s linear")
        .with("position", [1.0, 1.0, 1.0])
        .with("scaling", [3.0, 3.0, 3.0]);
    run_transition(&mut engine, node, &style).unwrap();

    let style = StyleDeclaration::new("all 1s linear").with("position", [2.0, 2.0, 2.0]);
    run_transition(&mut engine, node, &style).unwrap();

    assert_eq!(engine.animations.len(), 2);

    engine.update_all(1.0);
    let transform = &engine.nodes.get(node).unwrap().transform;
    assert_eq!(transform.translation, Vec3::splat(2.0));
    assert_eq!(transform.scale, Vec3::splat(3.0));
}

#[test]
fn transition_key_is_not_animated() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 1s linear")
        .with("transition", "all 2s linear")
        .with("visibility", 0.0_f64);

    let handles = run_transition_each(&mut engine, node, &style).unwrap();
    assert_eq!(handles.len(), 1);
}

#[test]
fn mismatched_kinds_are_skipped() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 1s linear")
        .with("position", 3.0_f64)
        .with("visibility", "0.25")
        .with("unknown", 1.0_f64)
        .with("position.q", 1.0_f64)
        .with("position.y.z", 1.0_f64);

    let handles = run_transition_each(&mut engine, node, &style).unwrap();
    assert_eq!(handles.len(), 1);

    engine.update_all(1.0);
    assert_eq!(engine.nodes.get(node).unwrap().visibility, 0.25);
    assert_eq!(position(&engine, node), Vec3::ZERO);
}

#[test]
fn easing_shapes_the_curve() {
    let (mut engine, scene, _) = setup();
    engine.scenes[scene].fog_density = 0.0;

    let style = StyleDeclaration::new("fog_density 1s ease-in").with("fog_density", 8.0_f64);
    run_transition(&mut engine, scene, &style).unwrap();

    engine.update_all(0.5);
    assert!(approx(engine.scenes[scene].fog_density, 1.0));

    let style = StyleDeclaration::new("fog_density 1s cubic-bezier(0, 0, 1, 1)")
        .with("fog_density", 0.0_f64);
    run_transition(&mut engine, scene, &style).unwrap();

    engine.update_all(0.5);
    assert!(approx(engine.scenes[scene].fog_density, 0.5));
}

#[test]
fn delay_postpones_the_start() {
    let (mut engine, _, node) = setup();

    let style =
        StyleDeclaration::new("position 1s linear 500ms").with("position", [10.0, 0.0, 0.0]);
    let group = run_transition(&mut engine, node, &style).unwrap();

    engine.update_all(0.25);
    assert_eq!(position(&engine, node), Vec3::ZERO);
    assert!(group.is_playing(&engine));

    engine.update_all(0.75);
    assert_eq!(position(&engine, node), Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn zero_duration_jumps_to_the_end() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 0ms linear").with("position", [1.0, 1.0, 1.0]);
    let group = run_transition(&mut engine, node, &style).unwrap();

    let handle = group.members(&engine)[0];

    engine.update_all(0.0);
    assert_eq!(position(&engine, node), Vec3::ONE);
    assert_eq!(handle.state(&engine), Some(AnimationState::Ended));
}

#[test]
fn group_completes_once_and_can_chain() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("position 500ms linear, scaling 1s ease-out")
        .with("position", [1.0, 0.0, 0.0])
        .with("scaling", [2.0, 2.0, 2.0]);
    let group = run_transition(&mut engine, node, &style).unwrap();
    assert_eq!(group.members(&engine).len(), 2);

    let completions = Rc::new(Cell::new(0));
    group
        .on_end(&mut engine, {
            let completions = completions.clone();
            move |engine| {
                completions.set(completions.get() + 1);
                let back = StyleDeclaration::new("all 1s linear").with("position", [0.0, 0.0, 0.0]);
                run_transition(engine, node, &back).unwrap();
            }
        })
        .unwrap();

    engine.update_all(0.5);
    assert_eq!(completions.get(), 0);

    engine.update_all(0.5);
    assert_eq!(completions.get(), 1);
    assert_eq!(position(&engine, node), Vec3::new(1.0, 0.0, 0.0));

    engine.update_all(0.5);
    assert_eq!(position(&engine, node), Vec3::new(0.5, 0.0, 0.0));

    engine.update_all(0.5);
    assert_eq!(completions.get(), 1);
    assert_eq!(position(&engine, node), Vec3::ZERO);
}

#[test]
fn group_completion_survives_a_member_rerunning_its_property() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 500ms linear").with("position", [1.0, 0.0, 0.0]);
    let group = run_transition(&mut engine, node, &style).unwrap();
    let member = group.members(&engine)[0];

    let completions = Rc::new(Cell::new(0));
    group
        .on_end(&mut engine, {
            let completions = completions.clone();
            move |_| completions.set(completions.get() + 1)
        })
        .unwrap();

    // replaces the member, which empties the group
    member
        .on_end(&mut engine, move |engine| {
            let back = StyleDeclaration::new("all 500ms linear").with("position", [0.0, 0.0, 0.0]);
            run_transition(engine, node, &back).unwrap();
        })
        .unwrap();

    engine.update_all(0.5);
    assert_eq!(completions.get(), 1);
    assert_eq!(member.state(&engine), None);

    engine.update_all(0.5);
    assert_eq!(completions.get(), 1);
    assert_eq!(position(&engine, node), Vec3::ZERO);
    assert_eq!(engine.animations.group_count(), 0);
}

#[test]
fn completed_groups_are_released() {
    let (mut engine, _, node) = setup();

    for _ in 0..100 {
        run_transition(&mut engine, node, &StyleDeclaration::new("all 1s linear")).unwrap();
    }
    assert_eq!(engine.animations.group_count(), 100);

    engine.update_all(0.0);
    assert_eq!(engine.animations.group_count(), 0);

    let style = StyleDeclaration::new("all 250ms linear").with("visibility", 0.0_f64);
    for _ in 0..10 {
        run_transition(&mut engine, node, &style).unwrap();
        engine.update_all(0.25);
    }
    assert_eq!(engine.animations.group_count(), 0);
    assert_eq!(engine.animations.len(), 1);
}

#[test]
fn stopping_a_group_skips_completion() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 1s linear").with("position", [1.0, 1.0, 1.0]);
    let group = run_transition(&mut engine, node, &style).unwrap();

    let completions = Rc::new(Cell::new(0));
    group
        .on_end(&mut engine, {
            let completions = completions.clone();
            move |_| completions.set(completions.get() + 1)
        })
        .unwrap();

    engine.update_all(0.5);
    group.stop(&mut engine).unwrap();
    engine.update_all(1.0);

    assert_eq!(completions.get(), 0);
    assert_eq!(position(&engine, node), Vec3::splat(0.5));
    assert!(!group.is_playing(&engine));
}

#[test]
fn empty_style_completes_on_next_update() {
    let (mut engine, _, node) = setup();

    let completions = Rc::new(Cell::new(0));
    let group = run_transition(&mut engine, node, &StyleDeclaration::new("all 1s linear")).unwrap();
    group
        .on_end(&mut engine, {
            let completions = completions.clone();
            move |_| completions.set(completions.get() + 1)
        })
        .unwrap();

    engine.update_all(0.0);
    assert_eq!(completions.get(), 1);
}

#[test]
fn every_listed_property_has_an_initial_value() {
    let (mut engine, scene, node) = setup();
    let camera = engine.add_camera(Camera::new(
        "camera",
        scene,
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
    ));
    let texture = engine.add_texture(Texture::new("texture", Some(scene)));

    let targets: [AnimationTarget; 4] = [node.into(), camera.into(), scene.into(), texture.into()];
    for target in targets {
        assert_eq!(engine.resolve_owner(target).unwrap().scene, scene);

        let animatable = engine.animatable(target).unwrap();
        for name in animatable.property_list() {
            let path = PropertyPath::parse(name).unwrap();
            assert!(
                read_initial_value(animatable, &path).is_some(),
                "{target:?} {name}"
            );
        }
    }
}

#[test]
fn camera_matrices_follow_animated_properties() {
    let (mut engine, scene, _) = setup();
    let camera = engine.add_camera(Camera::new(
        "camera",
        scene,
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::ZERO,
    ));

    let style = StyleDeclaration::new("position 1s ease-in-out, target 1s linear, fov 1s linear")
        .with("position", Vec3::new(0.0, 5.0, 5.0))
        .with("target", [0.0, 1.0, 0.0])
        .with("fov", "1.2");
    run_transition(&mut engine, camera, &style).unwrap();

    engine.update_all(1.0);

    let camera = &engine.cameras[camera];
    assert_eq!(camera.position, Vec3::new(0.0, 5.0, 5.0));
    assert!(approx(camera.fov, 1.2));
    assert_eq!(
        camera.view_matrix(),
        Mat4::look_at_rh(Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
    );
}

#[test]
fn texture_uv_matrix_reflects_animated_offset() {
    let (mut engine, scene, _) = setup();
    let texture = engine.add_texture(Texture::new("albedo", Some(scene)));

    let style = StyleDeclaration::new("offset 250ms linear").with("offset", [0.5, 0.25]);
    run_transition(&mut engine, texture, &style).unwrap();

    engine.update_all(0.25);

    let transform = &engine.textures[texture].transform;
    assert_eq!(transform.offset, Vec2::new(0.5, 0.25));

    let uv = transform.uv_matrix() * Vec3::new(0.0, 0.0, 1.0);
    assert!(approx(uv.x, 0.5));
    assert!(approx(uv.y, 0.25));
}

#[test]
fn scene_colors_accept_arrays_and_components() {
    let (mut engine, scene, _) = setup();
    engine.scenes[scene].ambient_color = Color3::BLACK;

    let style = StyleDeclaration::new("all 1s linear")
        .with("ambient_color", [1.0, 0.5, 0.25])
        .with("clear_color.a", 0.0_f64);
    run_transition(&mut engine, scene, &style).unwrap();

    engine.update_all(1.0);

    let scene = &engine.scenes[scene];
    assert_eq!(scene.ambient_color, Color3::new(1.0, 0.5, 0.25));
    assert_eq!(scene.clear_color.a, 0.0);
    assert_eq!(scene.clear_color.r, 0.2);
}

#[test]
fn native_values_are_accepted() {
    let (mut engine, _, node) = setup();

    let style = StyleDeclaration::new("all 1s linear")
        .with("scaling", StyleValue::Native(AnimationValue::Vector3(Vec3::splat(4.0))));
    run_transition(&mut engine, node, &style).unwrap();

    engine.update_all(1.0);
    assert_eq!(engine.nodes.get(node).unwrap().transform.scale, Vec3::splat(4.0));
}

#[test]
fn unsupported_targets_fail_without_starting_anything() {
    let (mut engine, _, node) = setup();
    let loose = engine.add_texture(Texture::new("loose", None));

    let style = StyleDeclaration::new("all 1s linear").with("level", 0.0_f64);
    assert!(matches!(
        run_transition(&mut engine, loose, &style),
        Err(AwsmTransitionError::UnsupportedTarget(_))
    ));

    engine.remove_node(node);
    let style = StyleDeclaration::new("all 1s linear").with("position", [1.0, 1.0, 1.0]);
    assert!(matches!(
        run_transition_each(&mut engine, node, &style),
        Err(AwsmTransitionError::UnsupportedTarget(_))
    ));

    assert!(engine.animations.is_empty());
}
