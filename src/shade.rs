//! Local shading: an atmosphere term plus one Lambertian term per light.
//! Nothing here clamps; values above 1 are handled by quantization.

use crate::{
    hit::Intersection,
    light::Light,
    scene::Scene,
    vector::{add, dot, mul, muls, Vec3},
};

/// Color returned for rays that hit nothing.
pub const BACKGROUND: Vec3 = Vec3::new(1.0, 1.0, 1.0);

pub fn shade_single_light(intersection: &Intersection, light: &Light) -> Vec3 {
    let geometry = (-dot(light.direction(), &intersection.normal)).max(0.0);
    muls(geometry, &mul(&intersection.color, light.color()))
}

/// Grows with the square root of depth along +z. Points at negative depth get
/// no atmosphere.
pub fn shade_atmosphere(intersection: &Intersection, atmosphere_color: &Vec3) -> Vec3 {
    muls(intersection.position.z.max(0.0).sqrt(), atmosphere_color)
}

pub fn shade(intersection: &Intersection, scene: &Scene) -> Vec3 {
    if !intersection.is_hit() {
        return BACKGROUND;
    }
    scene.lights.iter().fold(
        shade_atmosphere(intersection, &scene.atmosphere_color),
        |color, light| add(&color, &shade_single_light(intersection, light)),
    )
}
