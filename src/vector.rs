use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;

pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

/// Componentwise product, used to filter a light color through an albedo.
pub fn mul(a: &Vec3, b: &Vec3) -> Vec3 {
    a.component_mul(b)
}

pub fn muls(k: f64, v: &Vec3) -> Vec3 {
    k * v
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

pub fn squared_norm(v: &Vec3) -> f64 {
    dot(v, v)
}

pub fn norm(v: &Vec3) -> f64 {
    squared_norm(v).sqrt()
}

/// Scales `v` by the reciprocal of its norm.
///
/// `v` must not be the zero vector; the result would be non-finite.
pub fn normalize(v: &Vec3) -> Vec3 {
    muls(1.0 / norm(v), v)
}
