//! A triangle spinning about its own Y axis while its colour cycles.

use instant::{Duration, Instant};

use glimpse::{
    Deg,
    context::Context,
    data_structures::{mesh::Mesh, shape::Shape, transform::Transform},
    render::Render,
    sketch::{Sketch, run},
};

struct Transformations {
    shape: Shape,
    started: Instant,
}

impl Sketch for Transformations {
    fn on_init(&mut self, ctx: &mut Context) {
        self.shape.write_to_buffer(&ctx.queue);
    }

    fn on_update(&mut self, ctx: &Context, _dt: Duration) {
        let t = self.started.elapsed().as_secs_f32();
        self.shape.fill_colour = [t.cos() / 2.0 + 0.5, t.sin() / 2.0 + 0.5, 0.0, 1.0];
        // One degree per redraw, not per second.
        self.shape.transform.spin(Deg(1.0));
        self.shape.write_to_buffer(&ctx.queue);
    }

    fn on_render(&self) -> Render<'_> {
        (&self.shape).into()
    }
}

fn main() -> anyhow::Result<()> {
    run(
        "Transformations",
        Box::new(|ctx| {
            let mesh = Mesh::triangle(&ctx.device);
            let mut shape = Shape::new(&ctx.device, mesh, [0.5, 0.5, 0.0, 1.0]);
            shape.transform = Transform::new().with_uniform_scale(0.25);
            Ok(Box::new(Transformations {
                shape,
                started: Instant::now(),
            }))
        }),
    )
}
