pub mod camera;
pub mod frame;
pub mod hit;
pub mod light;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shade;
pub mod sphere;
pub mod vector;

pub use camera::Camera;
pub use frame::{color_u8_from_f64, FrameBuffer};
pub use hit::{find_intersection, Hit, Intersection};
pub use light::Light;
pub use ray::Ray;
pub use render::{render, render_parallel, RenderError};
pub use scene::{Scene, SceneError};
pub use shade::{shade, shade_atmosphere, shade_single_light};
pub use sphere::{find_single_intersection, Sphere};
pub use vector::Vec3;
