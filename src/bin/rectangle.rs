//! An indexed rectangle whose fill colour cycles with time.

use instant::{Duration, Instant};

use glimpse::{
    context::Context,
    data_structures::{mesh::Mesh, shape::Shape},
    render::Render,
    sketch::{Sketch, run},
};

struct Rectangle {
    shape: Shape,
    started: Instant,
}

impl Sketch for Rectangle {
    fn on_init(&mut self, ctx: &mut Context) {
        self.shape.write_to_buffer(&ctx.queue);
    }

    fn on_update(&mut self, ctx: &Context, _dt: Duration) {
        let t = self.started.elapsed().as_secs_f32();
        self.shape.fill_colour = [t.cos() / 2.0 + 0.5, t.sin() / 2.0 + 0.5, 0.0, 1.0];
        self.shape.write_to_buffer(&ctx.queue);
    }

    fn on_render(&self) -> Render<'_> {
        (&self.shape).into()
    }
}

fn main() -> anyhow::Result<()> {
    run(
        "Draw Rectangle",
        Box::new(|ctx| {
            let mesh = Mesh::rectangle(&ctx.device);
            let shape = Shape::new(&ctx.device, mesh, [0.5, 0.5, 0.0, 1.0]);
            Ok(Box::new(Rectangle {
                shape,
                started: Instant::now(),
            }))
        }),
    )
}
