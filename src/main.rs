use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raytracer::{ppm, render, render_parallel, scene, Scene};

const IMAGE_WIDTH: usize = 800;
const IMAGE_HEIGHT: usize = 600;

#[derive(Parser, Debug)]
#[command(name = "raytracer")]
#[command(about = "Renders spheres lit by directional lights to a PPM image", long_about = None)]
struct Args {
    #[arg(long, default_value_t = IMAGE_WIDTH)]
    width: usize,

    #[arg(long, default_value_t = IMAGE_HEIGHT)]
    height: usize,

    /// Destination PPM file
    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,

    /// TOML scene file; the built-in demo scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Render rows on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (defaults to one per core)
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("raytracer={}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scene = match &args.scene {
        Some(path) => scene::load(path)
            .with_context(|| format!("couldn't load scene {}", path.display()))?,
        None => Scene::demo(),
    };
    info!(
        spheres = scene.spheres.len(),
        lights = scene.lights.len(),
        "saving image"
    );

    let frame_buffer = if args.parallel {
        if let Some(threads) = args.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("couldn't configure thread pool")?;
        }
        render_parallel(&scene, args.width, args.height)?
    } else {
        render(&scene, args.width, args.height)?
    };

    ppm::save(&frame_buffer, &args.output)
        .with_context(|| format!("couldn't write {}", args.output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_demo_to_image_ppm() {
        let args = Args::try_parse_from(["raytracer"]).unwrap();
        assert_eq!((args.width, args.height), (IMAGE_WIDTH, IMAGE_HEIGHT));
        assert_eq!(args.output, PathBuf::from("image.ppm"));
        assert!(args.scene.is_none());
        assert!(!args.parallel);
    }

    #[test]
    fn threads_need_parallel() {
        let argv = ["raytracer", "--threads", "4"];
        let err = Args::try_parse_from(argv).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let argv = ["raytracer", "--parallel", "--threads", "4"];
        let args = Args::try_parse_from(argv).unwrap();
        assert!(args.parallel);
        assert_eq!(args.threads, Some(4));
    }
}
