//! Playable demo: a rainy night in a random maze.
//!
//! ```bash
//! cargo run --release -- --seed 7 --resolution 320
//! ```
//!
//! Arrow keys / WASD to turn and walk, Escape quits.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use raincast_rs::{
    assets,
    engine::{Scene, SceneAssets},
    renderer::{Software, Surface},
    sim::{Buttons, Entity, FrameClock, ItemKind, Player, Sim},
    world::{Camera, Grid, Texture, World},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 960)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 540)]
    height: usize,

    /// Number of ray columns across the window
    #[arg(long, default_value_t = 320)]
    resolution: usize,

    /// Side length of the square wall grid
    #[arg(long, default_value_t = 32)]
    grid_size: usize,

    /// Probability that a generated cell is a wall
    #[arg(long, default_value_t = 0.3)]
    wall_prob: f64,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// farbfeld image replacing the built-in wall texture
    #[arg(long, value_name = "FILE")]
    wall: Option<PathBuf>,

    /// farbfeld image replacing the built-in sky panorama
    #[arg(long, value_name = "FILE")]
    sky: Option<PathBuf>,

    /// farbfeld image replacing the built-in weapon sprite
    #[arg(long, value_name = "FILE")]
    weapon: Option<PathBuf>,
}

fn texture_or(path: &Option<PathBuf>, fallback: fn() -> Texture) -> Result<Texture> {
    match path {
        Some(p) => assets::load_farbfeld(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(fallback()),
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // ─────────── world & sim ────────────
    let mut grid = Grid::new(opts.grid_size);
    grid.randomize(opts.wall_prob, &mut rng);
    let centre = opts.grid_size / 2;
    grid.clear_area(centre, centre, 1);
    let mut world = World::new(grid);

    let spawn = glam::vec2(centre as f32 + 0.5, centre as f32 + 0.5);
    let mut sim = Sim::new(Player::new(spawn, rng.gen_range(0.0..std::f32::consts::TAU)));
    for _ in 0..3 {
        if let Some(pos) = world.grid.random_empty_cell(&mut rng) {
            sim.entities.push(Entity::enemy(pos, 1.2));
        }
    }
    for kind in [ItemKind::Supply, ItemKind::Supply, ItemKind::Flare] {
        if let Some(pos) = world.grid.random_empty_cell(&mut rng) {
            sim.entities.push(Entity::item(pos, kind));
        }
    }

    // ─────────── renderer & window ────────────
    let scene_assets = SceneAssets {
        wall: texture_or(&opts.wall, Texture::brick)?,
        sky: texture_or(&opts.sky, Texture::night_sky)?,
        weapon: texture_or(&opts.weapon, Texture::rifle)?,
    };
    let camera = Camera::new(opts.width, opts.height, opts.resolution, 0.8);
    let mut scene = Scene::new(camera, scene_assets);
    let mut surface = Software::default();

    let mut win = Window::new(
        "raincast",
        opts.width,
        opts.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(60);

    println!(
        "grid {0}x{0}, {1} columns, {2} entities",
        opts.grid_size,
        opts.resolution,
        sim.entities.len()
    );

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated frame time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    let mut clock = FrameClock::new();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let mut buttons = Buttons::empty();
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            buttons |= Buttons::LEFT;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            buttons |= Buttons::RIGHT;
        }
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            buttons |= Buttons::FORWARD;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            buttons |= Buttons::BACKWARD;
        }

        match clock.tick(Instant::now()) {
            Some(seconds) => {
                let t0 = Instant::now();

                sim.update(seconds, buttons, &mut world, &mut rng);

                surface.begin_frame(opts.width, opts.height);
                scene.render(&mut surface, &sim.player, &world, &mut rng);
                let mut submitted = Ok(());
                surface.end_frame(|fb, w, h| submitted = win.update_with_buffer(fb, w, h));
                submitted?;

                acc_time += t0.elapsed();
                acc_frames += 1;
            }
            // stale tick: keep window events flowing, draw nothing
            None => win.update(),
        }

        if last_print.elapsed() >= Duration::from_secs(1) && acc_frames > 0 {
            println!(
                "frame {:5.2} ms ({} fps)",
                acc_time.as_secs_f64() * 1000.0 / acc_frames as f64,
                acc_frames
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
