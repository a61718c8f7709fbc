//! Intersection and ray casting checked against drawn stages

mod common;

use common::Stage;
use tumble_math::Vec2;
use tumble_physics::{intersect_ray_sphere, intersects, Body, PhysicsError};

fn sphere_4() -> Body {
    Body::new_sphere(Vec2::ZERO, 4.0)
}

fn draw_box_and_sphere(aabb: &Body, sphere: &Body) -> Vec<String> {
    let mut stage = Stage::new(10);
    stage.draw_body("X", aabb);
    stage.draw_body(".", sphere);
    stage.output()
}

fn draw_ray_hit(ray: Vec2) -> Vec<String> {
    let origin = Vec2::new(5.0, 5.0);
    let sphere = sphere_4();
    let hit = intersect_ray_sphere(origin, ray.normalize().unwrap(), sphere.position, 16.0).unwrap();

    let mut stage = Stage::new(12);
    stage.draw_body(".", &sphere);
    stage.draw_point("↖", origin);
    stage.draw_point("0", hit.point);
    stage.output()
}

#[test]
fn test_draws_a_sphere() {
    let mut stage = Stage::new(10);
    stage.draw_body("S", &sphere_4());
    assert_eq!(
        stage.output(),
        vec![
            "                              ",
            "                S             ",
            "          S  S  S  S  S       ",
            "       S  S  S  S  S  S  S    ",
            "       S  S  S  S  S  S  S    ",
            "    S  S  S  S  S  S  S  S  S ",
            "       S  S  S  S  S  S  S    ",
            "       S  S  S  S  S  S  S    ",
            "          S  S  S  S  S       ",
            "                S             ",
        ]
    );
}

#[test]
fn test_box_and_sphere_apart() {
    let aabb = Body::new_box(Vec2::new(-3.0, 0.0), 3.0, 4.0);
    let sphere = Body::new_sphere(Vec2::new(2.0, 0.0), 2.0);
    assert_eq!(
        draw_box_and_sphere(&aabb, &sphere),
        vec![
            "                              ",
            "                              ",
            "                              ",
            "    X  X  X           .       ",
            "    X  X  X        .  .  .    ",
            "    X  X  X     .  .  .  .  . ",
            "    X  X  X        .  .  .    ",
            "    X  X  X           .       ",
            "                              ",
            "                              ",
        ]
    );
    assert!(!intersects(&aabb, &sphere));
}

#[test]
fn test_box_and_sphere_overlap() {
    let aabb = Body::new_box(Vec2::new(-3.0, 0.0), 3.0, 4.0);
    let sphere = Body::new_sphere(Vec2::ZERO, 2.0);
    assert_eq!(
        draw_box_and_sphere(&aabb, &sphere),
        vec![
            "                              ",
            "                              ",
            "                              ",
            "    X  X  X     .             ",
            "    X  X  X  .  .  .          ",
            "    X  X  .  .  .  .  .       ",
            "    X  X  X  .  .  .          ",
            "    X  X  X     .             ",
            "                              ",
            "                              ",
        ]
    );
    assert!(intersects(&aabb, &sphere));
}

#[test]
fn test_box_and_sphere_corner_gap() {
    // The bounding boxes overlap but the circle clears the corner
    let aabb = Body::new_box(Vec2::new(-3.0, -2.0), 3.0, 4.0);
    let sphere = Body::new_sphere(Vec2::new(0.0, 2.0), 2.0);
    assert_eq!(
        draw_box_and_sphere(&aabb, &sphere),
        vec![
            "                              ",
            "    X  X  X                   ",
            "    X  X  X                   ",
            "    X  X  X                   ",
            "    X  X  X                   ",
            "    X  X  X     .             ",
            "             .  .  .          ",
            "          .  .  .  .  .       ",
            "             .  .  .          ",
            "                .             ",
        ]
    );
    assert!(!intersects(&aabb, &sphere));
}

#[test]
fn test_ray_hit_from_bottom_right() {
    assert_eq!(
        draw_ray_hit(Vec2::new(-1.0, -1.0)),
        vec![
            "                                    ",
            "                                    ",
            "                   .                ",
            "             .  .  .  .  .          ",
            "          .  .  .  .  .  .  .       ",
            "          .  .  .  .  .  .  .       ",
            "       .  .  .  .  .  .  .  .  .    ",
            "          .  .  .  .  .  .  .       ",
            "          .  .  .  .  .  .  .       ",
            "             .  .  .  .  .  0       ",
            "                   .                ",
            "                                  ↖ ",
        ]
    );
}

#[test]
fn test_ray_hit_shifted_left() {
    assert_eq!(
        draw_ray_hit(Vec2::new(-1.0, -0.25)),
        vec![
            "                                    ",
            "                                    ",
            "                   .                ",
            "             .  .  .  .  .          ",
            "          .  .  .  .  .  .  .       ",
            "          .  .  .  .  .  .  .       ",
            "       .  .  .  .  .  .  .  .  .    ",
            "          .  .  .  .  .  .  .       ",
            "          .  .  .  .  .  .  .       ",
            "             .  .  .  .  .          ",
            "                   .  0             ",
            "                                  ↖ ",
        ]
    );
}

#[test]
fn test_ray_hit_shifted_right() {
    assert_eq!(
        draw_ray_hit(Vec2::new(-0.25, -1.0)),
        vec![
            "                                    ",
            "                                    ",
            "                   .                ",
            "             .  .  .  .  .          ",
            "          .  .  .  .  .  .  .       ",
            "          .  .  .  .  .  .  .       ",
            "       .  .  .  .  .  .  .  .  .    ",
            "          .  .  .  .  .  .  .  0    ",
            "          .  .  .  .  .  .  .       ",
            "             .  .  .  .  .          ",
            "                   .                ",
            "                                  ↖ ",
        ]
    );
}

#[test]
fn test_ray_straight_up_misses() {
    let ray = Vec2::new(0.0, -1.0);
    let result = intersect_ray_sphere(Vec2::new(5.0, 5.0), ray, Vec2::ZERO, 16.0);
    assert_eq!(result, Err(PhysicsError::RayMissesSphere));
}
