use crate::{vector::Vec3, Ray};

/// Anything a primary ray can be tested against.
pub trait Hit {
    fn hit(&self, ray: &Ray) -> Intersection;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub position: Vec3,
    pub normal: Vec3,
    pub distance: f64,
    pub color: Vec3,
}

impl Intersection {
    /// The "no hit" sentinel. Only `distance` is meaningful.
    pub const NONE: Self = Self {
        position: Vec3::new(0.0, 0.0, 0.0),
        normal: Vec3::new(0.0, 0.0, 0.0),
        distance: f64::INFINITY,
        color: Vec3::new(0.0, 0.0, 0.0),
    };

    pub fn is_hit(&self) -> bool {
        self.distance != f64::INFINITY
    }

    /// Keeps `self` unless `other` is strictly closer.
    pub fn closest(self, other: Self) -> Self {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::NONE
    }
}

/// Nearest hit over an ordered collection. Equal distances keep the earlier
/// object.
pub fn find_intersection<'a, T, I>(ray: &Ray, objects: I) -> Intersection
where
    T: Hit + 'a,
    I: IntoIterator<Item = &'a T>,
{
    objects
        .into_iter()
        .fold(Intersection::NONE, |nearest, object| {
            nearest.closest(object.hit(ray))
        })
}

impl<T: Hit> Hit for [T] {
    fn hit(&self, ray: &Ray) -> Intersection {
        find_intersection(ray, self)
    }
}
