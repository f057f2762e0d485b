use raytracer::{
    ppm, render, render_parallel, scene, Camera, FrameBuffer, Hit, Scene,
};

fn demo_frame() -> FrameBuffer {
    render(&Scene::demo(), 800, 600).unwrap()
}

#[test]
fn center_pixel_hits_red_sphere() {
    let scene = Scene::demo();
    let camera = Camera::new(800, 600);
    let hit = scene.spheres.hit(&camera.cast(400, 300));
    assert!((hit.distance - 4.0).abs() < 1e-9);
    assert_eq!(hit.color, scene.spheres[1].color);

    let frame = demo_frame();
    assert_eq!(frame.get_pixel::<[u8; 3]>(400, 300), [159, 83, 157]);
}

#[test]
fn horizon_edge_sees_background() {
    let frame = demo_frame();
    assert_eq!(frame.get_pixel::<[u8; 3]>(0, 300), [255, 255, 255]);
    assert_ne!(frame.get_pixel::<[u8; 3]>(0, 0), [255, 255, 255]);
    assert_ne!(frame.get_pixel::<[u8; 3]>(0, 599), [255, 255, 255]);
}

#[test]
fn parallel_matches_sequential() {
    let scene = Scene::demo();
    for (w, h) in [(80, 60), (33, 17), (1, 2)] {
        assert_eq!(
            render_parallel(&scene, w, h).unwrap(),
            render(&scene, w, h).unwrap()
        );
    }
}

#[test]
fn ppm_output_layout() {
    let frame = demo_frame();
    let mut out = Vec::new();
    frame.write_ppm(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(&tokens[..4], &["P3", "800", "600", "255"]);
    assert_eq!(tokens.len(), 4 + 800 * 600 * 3);
    assert!(tokens[4..].iter().all(|t| t.parse::<u8>().is_ok()));

    let center = 4 + (300 * 800 + 400) * 3;
    assert_eq!(&tokens[center..center + 3], &["159", "83", "157"]);
}

#[test]
fn saves_to_disk() {
    let frame = render(&Scene::demo(), 8, 6).unwrap();
    let path = std::env::temp_dir().join(format!("raytracer-{}.ppm", std::process::id()));
    ppm::save(&frame, &path).unwrap();
    let mut expected = Vec::new();
    frame.write_ppm(&mut expected).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), expected);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn bundled_scene_file_matches_demo() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/demo.toml");
    let loaded = scene::load(path).unwrap();
    let demo = Scene::demo();
    assert_eq!(loaded.spheres, demo.spheres);
    assert!((loaded.atmosphere_color - demo.atmosphere_color).amax() < 1e-12);
    assert_eq!(loaded.lights.len(), demo.lights.len());
    for (a, b) in loaded.lights.iter().zip(&demo.lights) {
        assert_eq!(a.direction(), b.direction());
        assert!((a.color() - b.color()).amax() < 1e-12);
    }
}
