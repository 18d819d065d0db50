use awsm_scene::animation::EasingMode;

use crate::{
    easing::EasingDescriptor,
    parser::{parse_duration_ms, parse_transition, TransitionEntry, ALL},
};

fn entry(duration_ms: f64, easing: EasingDescriptor) -> TransitionEntry {
    TransitionEntry {
        duration_ms,
        easing,
        delay_ms: 0.0,
    }
}

#[test]
fn single_all_clause() {
    let spec = parse_transition("all 500ms linear");

    assert_eq!(spec.len(), 1);
    assert_eq!(
        spec.get(ALL),
        Some(&entry(500.0, EasingDescriptor::Linear))
    );
}

#[test]
fn multiple_clauses_with_seconds() {
    let spec = parse_transition("position 1s ease-in-out, target 5s ease-in");

    assert_eq!(spec.len(), 2);
    assert_eq!(
        spec.get("position"),
        Some(&entry(1000.0, EasingDescriptor::Mode(EasingMode::EaseInOut)))
    );
    assert_eq!(
        spec.get("target"),
        Some(&entry(5000.0, EasingDescriptor::Mode(EasingMode::EaseIn)))
    );
    assert_eq!(spec.get(ALL), None);
}

#[test]
fn cubic_bezier_keeps_its_commas() {
    let spec = parse_transition("all 1s cubic-bezier(0.42, 0, 0.58, 1)");

    assert_eq!(
        spec.get(ALL),
        Some(&entry(
            1000.0,
            EasingDescriptor::CubicBezier {
                x1: 0.42,
                y1: 0.0,
                x2: 0.58,
                y2: 1.0
            }
        ))
    );
}

#[test]
fn cubic_bezier_followed_by_more_clauses() {
    let spec = parse_transition("fov 250ms cubic-bezier(0.1,0.2,0.3,0.4), position 2s ease-out");

    assert_eq!(spec.len(), 2);
    assert!(matches!(
        spec.get("fov").map(|entry| &entry.easing),
        Some(EasingDescriptor::CubicBezier { .. })
    ));
    assert_eq!(spec.get("position").map(|entry| entry.duration_ms), Some(2000.0));
}

#[test]
fn whitespace_separated_clauses() {
    let spec = parse_transition("position 1s linear   scaling 200ms ease-out");

    assert_eq!(spec.get("position").map(|e| e.duration_ms), Some(1000.0));
    assert_eq!(spec.get("scaling").map(|e| e.duration_ms), Some(200.0));
}

#[test]
fn last_occurrence_wins() {
    let spec = parse_transition("position 1s linear, position 3s ease-out");

    assert_eq!(spec.len(), 1);
    assert_eq!(
        spec.get("position"),
        Some(&entry(3000.0, EasingDescriptor::Mode(EasingMode::EaseOut)))
    );
}

#[test]
fn trailing_duration_is_a_delay() {
    let spec = parse_transition("position 1s linear 250ms, all 2s ease-in");

    let position = spec.get("position").unwrap();
    assert_eq!(position.duration_ms, 1000.0);
    assert_eq!(position.delay_ms, 250.0);
    assert_eq!(spec.get(ALL).unwrap().delay_ms, 0.0);
}

#[test]
fn malformed_clauses_are_ignored() {
    let spec = parse_transition(
        "position fast linear, 1s all linear, target 2s, fov 2x linear, all 300ms linear",
    );

    assert_eq!(spec.len(), 1);
    assert_eq!(spec.get(ALL).map(|e| e.duration_ms), Some(300.0));

    assert!(parse_transition("").is_empty());
    assert!(parse_transition(" , ,").is_empty());
}

#[test]
fn unknown_easing_is_kept_verbatim() {
    let spec = parse_transition("all 1s steps(4)");

    assert_eq!(
        spec.get(ALL).map(|entry| &entry.easing),
        Some(&EasingDescriptor::Other("steps(4)".to_string()))
    );
}

#[test]
fn lookup_falls_back_to_outer_then_all() {
    let spec = parse_transition("position 1s linear, all 2s linear");

    assert_eq!(spec.lookup("position").map(|e| e.duration_ms), Some(1000.0));
    assert_eq!(spec.lookup("position.y").map(|e| e.duration_ms), Some(1000.0));
    assert_eq!(spec.lookup("scaling.x").map(|e| e.duration_ms), Some(2000.0));

    let spec = parse_transition("position.y 500ms linear");
    assert_eq!(spec.lookup("position.y").map(|e| e.duration_ms), Some(500.0));
    assert_eq!(spec.lookup("position.x"), None);
    assert_eq!(spec.lookup("position"), None);
}

#[test]
fn durations() {
    assert_eq!(parse_duration_ms("500ms"), Some(500.0));
    assert_eq!(parse_duration_ms("1.5s"), Some(1500.0));
    assert_eq!(parse_duration_ms("0s"), Some(0.0));
    assert_eq!(parse_duration_ms("-1s"), None);
    assert_eq!(parse_duration_ms("ms"), None);
    assert_eq!(parse_duration_ms("10"), None);
    assert_eq!(parse_duration_ms("linear"), None);
}
