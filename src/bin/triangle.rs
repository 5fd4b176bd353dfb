//! A single solid triangle in normalized device coordinates.

use instant::Duration;

use glimpse::{
    context::Context,
    data_structures::{mesh::Mesh, shape::Shape},
    render::Render,
    sketch::{Sketch, run},
};

struct Triangle {
    shape: Shape,
}

impl Sketch for Triangle {
    fn on_init(&mut self, ctx: &mut Context) {
        self.shape.write_to_buffer(&ctx.queue);
    }

    fn on_update(&mut self, _ctx: &Context, _dt: Duration) {}

    fn on_render(&self) -> Render<'_> {
        (&self.shape).into()
    }
}

fn main() -> anyhow::Result<()> {
    run(
        "Draw Triangle",
        Box::new(|ctx| {
            let mesh = Mesh::triangle(&ctx.device);
            let shape = Shape::new(&ctx.device, mesh, [1.0, 0.8, 0.0, 1.0]);
            Ok(Box::new(Triangle { shape }))
        }),
    )
}
