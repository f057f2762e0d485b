use crate::{
    vector::{normalize, vec3, Vec3},
    Ray,
};

/// Pinhole camera at the origin looking down +z. Image y grows with world y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    center: Vec3,
    image_width: usize,
    image_height: usize,
    focal_length: f64,
}

impl Camera {
    /// Focal length is half the image height, giving a 90 degree vertical
    /// field of view. Half sizes are rounded down, so odd sizes put the
    /// optical axis through pixel `(W/2, H/2)`.
    pub fn new(image_width: usize, image_height: usize) -> Self {
        Self {
            center: Vec3::zeros(),
            image_width,
            image_height,
            focal_length: (image_height / 2) as f64,
        }
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Primary ray through pixel `(x, y)`.
    pub fn cast(&self, x: usize, y: usize) -> Ray {
        let direction = vec3(
            x as f64 - (self.image_width / 2) as f64,
            y as f64 - (self.image_height / 2) as f64,
            self.focal_length,
        );
        Ray::new(self.center, normalize(&direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::norm;

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::new(800, 600);
        assert_eq!(camera.focal_length(), 300.0);
        let ray = camera.cast(400, 300);
        assert_eq!(ray.origin, Vec3::zeros());
        assert!((ray.direction - vec3(0.0, 0.0, 1.0)).amax() < 1e-12);
    }

    #[test]
    fn odd_sizes_round_half_extents_down() {
        let camera = Camera::new(801, 601);
        assert_eq!(camera.focal_length(), 300.0);
        assert_eq!(camera.cast(400, 300).direction, vec3(0.0, 0.0, 1.0));

        let expected = normalize(&vec3(-400.0, -300.0, 300.0));
        assert_eq!(camera.cast(0, 0).direction, expected);
        let expected = normalize(&vec3(400.0, 300.0, 300.0));
        assert_eq!(camera.cast(800, 600).direction, expected);
    }

    #[test]
    fn corner_rays_are_unit_and_diverge() {
        let camera = Camera::new(800, 600);
        let top_left = camera.cast(0, 0).direction;
        let bottom_right = camera.cast(799, 599).direction;
        assert!((norm(&top_left) - 1.0).abs() < 1e-12);
        assert!((norm(&bottom_right) - 1.0).abs() < 1e-12);
        assert!(top_left.x < 0.0 && top_left.y < 0.0 && top_left.z > 0.0);
        assert!(bottom_right.x > 0.0 && bottom_right.y > 0.0);
        let expected = normalize(&vec3(-400.0, -300.0, 300.0));
        assert!((top_left - expected).amax() < 1e-12);
    }
}
