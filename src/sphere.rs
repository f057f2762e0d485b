use crate::{
    hit::{Hit, Intersection},
    vector::{dot, normalize, squared_norm, sub, Vec3},
    Ray,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub squared_radius: f64,
    pub color: Vec3,
}

impl Sphere {
    pub fn new(center: Vec3, squared_radius: f64, color: Vec3) -> Self {
        Self {
            center,
            squared_radius,
            color,
        }
    }

    pub fn with_radius(center: Vec3, radius: f64, color: Vec3) -> Self {
        Self::new(center, radius * radius, color)
    }
}

/// Near-side hit of `ray` with `sphere`. `ray.direction` must be unit length.
///
/// Spheres whose center lies behind the origin are treated as misses, even
/// when the origin is inside them.
pub fn find_single_intersection(ray: &Ray, sphere: &Sphere) -> Intersection {
    let offset = sub(&sphere.center, &ray.origin);
    let c = dot(&ray.direction, &offset);
    if c < 0.0 {
        return Intersection::NONE;
    }

    let discriminant = c * c - squared_norm(&offset) + sphere.squared_radius;
    if discriminant < 0.0 {
        return Intersection::NONE;
    }

    let distance = c - discriminant.sqrt();
    let position = ray.at(distance);
    Intersection {
        position,
        normal: normalize(&sub(&position, &sphere.center)),
        distance,
        color: sphere.color,
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray) -> Intersection {
        find_single_intersection(ray, self)
    }
}
