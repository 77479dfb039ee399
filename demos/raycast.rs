//! Raymath demo: casts primary rays at a few transformed triangles and prints
//! the hits as ASCII.
//!
//! Usage:
//! ```text
//! cargo run --example raycast
//! RUST_LOG=raymath=trace cargo run --example raycast
//! ```

use raymath::math::{Point3, Vector3};
use raymath::{
    create_aabb_from_triangles, Aabb, Line, Rectangle2D, Result, Transform, Triangle,
};
use tracing::info;

const WIDTH: usize = 64;
const HEIGHT: usize = 32;

/// A mesh in local space placed in the world by a transform.
struct Instance {
    triangles: Vec<Triangle>,
    bounds: Aabb,
    placement: Transform,
}

impl Instance {
    /// Closest non-negative hit distance along `ray`, if any.
    fn hit(&self, ray: &Line) -> Option<f32> {
        let local = self.placement.inverse_transform_line(ray);
        if !self.bounds.intersect(&local) {
            return None;
        }
        self.triangles
            .iter()
            .map(|tri| tri.intersect(&local))
            // Misses report INVALID_DISTANCE, which is negative.
            .filter(|&t| t >= 0.0)
            .min_by(f32::total_cmp)
    }
}

fn quad() -> Vec<Triangle> {
    let a = Point3::new(-1.0, -1.0, 0.0);
    let b = Point3::new(1.0, -1.0, 0.0);
    let c = Point3::new(1.0, 1.0, 0.0);
    let d = Point3::new(-1.0, 1.0, 0.0);
    vec![Triangle::new(a, b, c), Triangle::new(a, c, d)]
}

fn instance(triangles: Vec<Triangle>, placement: Transform) -> Option<Instance> {
    let bounds = create_aabb_from_triangles(&triangles)?;
    Some(Instance {
        triangles,
        bounds,
        placement,
    })
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("raycast=info".parse().unwrap_or_default())
        .add_directive("raymath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let spin = Line::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
    let tilt = Line::new(Point3::origin(), Vector3::new(1.0, 1.0, 0.0));

    let scene: Vec<Instance> = [
        instance(
            quad(),
            Transform::from_scaling_rotation_position(
                Vector3::new(1.5, 0.75, 1.0),
                &spin,
                30.0,
                Point3::new(-1.5, 0.0, -6.0),
            ),
        ),
        instance(
            quad(),
            Transform::from_rotation_position(&tilt, 50.0, Point3::new(1.8, 0.5, -5.0)),
        ),
        instance(
            vec![Triangle::new(
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(-1.0, -1.0, 0.0),
                Point3::new(1.0, -1.0, 0.0),
            )],
            Transform::from_position(Point3::new(0.0, -1.2, -4.0)),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    // A bare world-space box, drawn as 'o' wherever no mesh is hit.
    let probe = Aabb::new(Point3::new(-0.5, -0.5, -4.5), Point3::new(0.5, 0.5, -3.5))?;
    info!(center = ?probe.center(), "probe bounds");

    let screen = Rectangle2D::default();
    let eye = Point3::origin();
    let mut hits = 0usize;
    let mut image = String::with_capacity((WIDTH + 1) * HEIGHT);

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            #[allow(clippy::cast_precision_loss)]
            let (x, y) = (
                screen.left() + screen.width() * (col as f32 + 0.5) / WIDTH as f32,
                screen.bottom() - screen.height() * (row as f32 + 0.5) / HEIGHT as f32,
            );
            let ray = Line::new(eye, Vector3::new(x * 1.6, y * 0.8, -1.0));
            let nearest = scene
                .iter()
                .filter_map(|inst| inst.hit(&ray))
                .min_by(f32::total_cmp);
            image.push(match nearest {
                Some(t) if t < 4.5 => '#',
                Some(t) if t < 5.5 => '+',
                Some(_) => '.',
                None => ' ',
            });
            if nearest.is_some() {
                hits += 1;
            }
            if probe.intersect(&ray) && nearest.is_none() {
                image.pop();
                image.push('o');
            }
        }
        image.push('\n');
    }

    println!("{image}");
    info!(hits, pixels = WIDTH * HEIGHT, "rendered");
    Ok(())
}
