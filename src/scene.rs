use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    light::Light,
    sphere::Sphere,
    vector::{muls, norm, vec3, Vec3},
};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid scene: {0}")]
    Invalid(String),
}

/// Everything a render reads. Built once and shared by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    /// Already includes any constant scale; shading only applies depth falloff.
    pub atmosphere_color: Vec3,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, atmosphere_color: Vec3) -> Self {
        Self {
            spheres,
            lights,
            atmosphere_color,
        }
    }

    /// Three small spheres between two huge ones acting as floor and ceiling,
    /// lit from the front and from behind.
    pub fn demo() -> Self {
        const R: f64 = 100000.0;
        const MAX_C: f64 = 1.0;
        const MIN_C: f64 = 0.1;

        let spheres = vec![
            Sphere::new(vec3(-2.0, 0.0, 6.0), 1.0, vec3(MAX_C, MAX_C, MIN_C)),
            Sphere::new(vec3(0.0, 0.0, 5.0), 1.0, vec3(MAX_C, MIN_C, MIN_C)),
            Sphere::new(
                vec3(2.0, 0.0, 4.0),
                1.0,
                vec3(2.0 * MIN_C, 4.0 * MIN_C, MAX_C),
            ),
            Sphere::new(vec3(0.0, 1.0 + R, 0.0), R * R, vec3(MIN_C, MAX_C, MIN_C)),
            Sphere::new(vec3(0.0, -1.0 - R, 0.0), R * R, vec3(MAX_C, MAX_C, MAX_C)),
        ];
        let lights = vec![
            Light::new(vec3(1.0, 1.0, 2.0), muls(0.4, &vec3(1.0, 0.8, 0.5))),
            Light::new(vec3(-1.0, -1.0, -2.0), muls(0.4, &vec3(0.5, 0.5, 1.0))),
        ];
        let atmosphere_color = muls(0.3, &vec3(0.5, 0.5, 1.0));

        Self::new(spheres, lights, atmosphere_color)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SceneError> {
        let desc: SceneDesc = toml::from_str(source)?;
        desc.build()
    }

    pub fn to_desc(&self) -> SceneDesc {
        SceneDesc {
            atmosphere_color: self.atmosphere_color.into(),
            spheres: self
                .spheres
                .iter()
                .map(|s| SphereDesc {
                    center: s.center.into(),
                    radius: None,
                    squared_radius: Some(s.squared_radius),
                    color: s.color.into(),
                })
                .collect(),
            lights: self
                .lights
                .iter()
                .map(|l| LightDesc {
                    direction: (*l.direction()).into(),
                    color: (*l.color()).into(),
                })
                .collect(),
        }
    }
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let scene = Scene::from_toml_str(&source)?;
    debug!(
        path = %path.display(),
        spheres = scene.spheres.len(),
        lights = scene.lights.len(),
        "loaded scene"
    );
    Ok(scene)
}

/// On-disk form of a [`Scene`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SceneDesc {
    pub atmosphere_color: [f64; 3],
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
}

/// Exactly one of `radius` or `squared_radius` must be given.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SphereDesc {
    pub center: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squared_radius: Option<f64>,
    pub color: [f64; 3],
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LightDesc {
    pub direction: [f64; 3],
    pub color: [f64; 3],
}

impl SceneDesc {
    pub fn build(self) -> Result<Scene, SceneError> {
        let spheres = self
            .spheres
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.build()
                    .map_err(|e| SceneError::Invalid(format!("sphere {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let lights = self
            .lights
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                l.build()
                    .map_err(|e| SceneError::Invalid(format!("light {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let atmosphere_color =
            finite("atmosphere_color", self.atmosphere_color).map_err(SceneError::Invalid)?;
        Ok(Scene::new(spheres, lights, atmosphere_color))
    }
}

fn finite(field: &str, v: [f64; 3]) -> Result<Vec3, String> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(v.into())
    } else {
        Err(format!("{field} must be finite, got {v:?}"))
    }
}

impl SphereDesc {
    fn build(self) -> Result<Sphere, String> {
        let squared_radius = match (self.radius, self.squared_radius) {
            (Some(r), None) if r >= 0.0 => r * r,
            (None, Some(r2)) if r2 >= 0.0 => r2,
            (Some(_), Some(_)) => return Err("both radius and squared_radius given".into()),
            (None, None) => return Err("missing radius".into()),
            _ => return Err("radius must be non-negative".into()),
        };
        if !squared_radius.is_finite() {
            return Err("radius must be finite".into());
        }
        let center = finite("center", self.center)?;
        let color = finite("color", self.color)?;
        Ok(Sphere::new(center, squared_radius, color))
    }
}

impl LightDesc {
    fn build(self) -> Result<Light, String> {
        let direction = finite("direction", self.direction)?;
        let color = finite("color", self.color)?;
        let light = Light::new(direction, color);
        // zero or overflowing directions don't normalize to a unit vector
        let length = norm(light.direction());
        if !(length.is_finite() && (length - 1.0).abs() < 1e-9) {
            return Err(format!("direction {:?} can't be normalized", self.direction));
        }
        Ok(light)
    }
}
