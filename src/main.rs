use aabb_2d::{BoundingBox, LineDrawer};
use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use glam::{dvec2, DVec2};
use opengl_graphics::{GlGraphics, OpenGL};
use piston_window::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const IDLE_COLOUR: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
const OVERLAP_COLOUR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
const HOVER_COLOUR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];
const SCENE_COLOUR: [f32; 4] = [0.1, 0.7, 0.2, 1.0];

#[derive(Parser, Debug)]
#[command(author, version, about = "Axis-aligned bounding box overlap demo")]
struct Args {
    /// Number of rectangles to spawn
    #[arg(long, default_value_t = 12)]
    bodies: usize,
    /// Window width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,
    /// Window height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,
    /// Side length of each rectangle
    #[arg(long, default_value_t = 60.0)]
    size: f64,
    /// Seed for the scene generator; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

struct Body {
    width: f64,
    height: f64,
    colour: [f32; 4],

    position: DVec2,
    velocity: DVec2,
    angle: f64,
    angular_velocity: f64,

    bounds: BoundingBox,
    overlapping: bool,
}

impl Body {
    fn corners(&self) -> [DVec2; 4] {
        let half = dvec2(self.width / 2.0, self.height / 2.0);
        let rotation = DVec2::from_angle(self.angle);
        [
            dvec2(-half.x, -half.y),
            dvec2(half.x, -half.y),
            dvec2(half.x, half.y),
            dvec2(-half.x, half.y),
        ]
        .map(|corner| self.position + rotation.rotate(corner))
    }

    fn refresh_bounds(&mut self) {
        self.bounds.clear();
        self.bounds.extend(self.corners());
    }
}

/// Routes bounding box outlines into a piston graphics backend.
struct PistonLines<'a, G: Graphics> {
    colour: [f32; 4],
    transform: math::Matrix2d,
    graphics: &'a mut G,
}

impl<G: Graphics> LineDrawer for PistonLines<'_, G> {
    fn draw_line(&mut self, from: DVec2, to: DVec2) {
        line_from_to(
            self.colour,
            1.0,
            from.to_array(),
            to.to_array(),
            self.transform,
            self.graphics,
        );
    }
}

struct Simulation {
    bodies: Vec<Body>,
    world: BoundingBox,
    cursor: Option<DVec2>,
    overlap_count: usize,

    gl: GlGraphics,
}

impl Simulation {
    fn update(&mut self, args: &UpdateArgs) {
        let dt = args.dt;
        for body in &mut self.bodies {
            body.position += body.velocity * dt;
            body.angle += body.angular_velocity * dt;

            if !self.world.contains(body.position) {
                if body.position.x < self.world.min.x || body.position.x > self.world.max.x {
                    body.velocity.x = -body.velocity.x;
                }
                if body.position.y < self.world.min.y || body.position.y > self.world.max.y {
                    body.velocity.y = -body.velocity.y;
                }
                body.position = body.position.clamp(self.world.min, self.world.max);
            }
            body.refresh_bounds();
            body.overlapping = false;
        }

        let mut overlap_count = 0;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].bounds.intersects(&self.bodies[j].bounds) {
                    self.bodies[i].overlapping = true;
                    self.bodies[j].overlapping = true;
                    overlap_count += 1;
                }
            }
        }
        if overlap_count != self.overlap_count {
            debug!(pairs = overlap_count, "overlapping pairs changed");
            self.overlap_count = overlap_count;
        }
    }

    fn render(&mut self, args: &RenderArgs) {
        let cursor = self.cursor;
        let scene: BoundingBox = self.bodies.iter().flat_map(Body::corners).collect();

        self.gl.draw(args.viewport(), |context, graphics| {
            clear([1.0; 4], graphics);

            for body in &self.bodies {
                let shape = rectangle::square(-0.5, -0.5, 1.0);
                let transform = context
                    .transform
                    .trans(body.position.x, body.position.y)
                    .rot_rad(body.angle)
                    .scale(body.width, body.height);
                rectangle(body.colour, shape, transform, graphics);
            }

            for body in &self.bodies {
                let colour = if cursor.is_some_and(|p| body.bounds.contains(p)) {
                    HOVER_COLOUR
                } else if body.overlapping {
                    OVERLAP_COLOUR
                } else {
                    IDLE_COLOUR
                };
                let mut lines = PistonLines {
                    colour,
                    transform: context.transform,
                    graphics: &mut *graphics,
                };
                body.bounds.debug_draw(&mut lines);
            }

            let mut lines = PistonLines {
                colour: SCENE_COLOUR,
                transform: context.transform,
                graphics,
            };
            scene.debug_draw(&mut lines);
        });
    }
}

fn spawn_bodies(args: &Args, rng: &mut StdRng) -> Vec<Body> {
    let width = f64::from(args.width);
    let height = f64::from(args.height);
    (0..args.bodies)
        .map(|_| {
            let mut body = Body {
                width: args.size,
                height: args.size * rng.gen_range(0.5..1.5),
                colour: [
                    rng.gen_range(0.5..1.0),
                    rng.gen_range(0.5..1.0),
                    rng.gen_range(0.5..1.0),
                    1.0,
                ],
                position: dvec2(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                velocity: dvec2(rng.gen_range(-80.0..80.0), rng.gen_range(-80.0..80.0)),
                angle: rng.gen_range(0.0..std::f64::consts::TAU),
                angular_velocity: rng.gen_range(-1.0..1.0),
                bounds: BoundingBox::empty(),
                overlapping: false,
            };
            body.refresh_bounds();
            body
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    ensure!(
        args.width > 0 && args.height > 0,
        "window size must be non-zero, got {}x{}",
        args.width,
        args.height
    );
    ensure!(
        args.size.is_finite() && args.size > 0.0,
        "body size must be positive, got {}",
        args.size
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(bodies = args.bodies, seed, "spawning scene");
    let mut rng = StdRng::seed_from_u64(seed);

    let opengl = OpenGL::V3_2;
    let mut window: PistonWindow =
        WindowSettings::new("Bounding Box Overlap", [args.width, args.height])
            .exit_on_esc(true)
            .graphics_api(opengl)
            .build()
            .map_err(|e| anyhow!("failed to create window: {e}"))?;

    let mut simulation = Simulation {
        bodies: spawn_bodies(&args, &mut rng),
        world: BoundingBox::new(
            DVec2::ZERO,
            dvec2(f64::from(args.width), f64::from(args.height)),
        ),
        cursor: None,
        overlap_count: 0,
        gl: GlGraphics::new(opengl),
    };

    while let Some(event) = window.next() {
        if let Some(position) = event.mouse_cursor_args() {
            simulation.cursor = Some(DVec2::from_array(position));
        }
        if let Some(args) = event.update_args() {
            simulation.update(&args);
        }
        if let Some(args) = event.render_args() {
            simulation.render(&args);
        }
    }
    info!("window closed");
    Ok(())
}
