//! A toy solar system built from hierarchical transforms.
//!
//! The sun sits at the origin; the earth and mars revolve around it at
//! different rates while spinning about their own axes. Every body is the
//! same triangle, scaled and coloured per body.

use instant::Duration;

use glimpse::{
    context::Context,
    data_structures::{
        mesh::{Mesh, TRIANGLE_INDICES, TRIANGLE_VERTICES},
        orbit::{Body, solar_system},
        shape::Shape,
        transform::Transform,
    },
    render::{Flat, Render},
    sketch::{Sketch, run},
};

struct SolarSystem {
    sun: Body,
    // One drawable per body, in the same depth-first order `visit` uses.
    shapes: Vec<Shape>,
}

impl Sketch for SolarSystem {
    fn on_init(&mut self, ctx: &mut Context) {
        self.write_uniforms(&ctx.queue);
    }

    fn on_update(&mut self, ctx: &Context, dt: Duration) {
        self.sun.advance(dt);
        self.sun.update_world_transforms(&Transform::new());
        self.write_uniforms(&ctx.queue);
    }

    fn on_render(&self) -> Render<'_> {
        Render::Flats(self.shapes.iter().map(Flat::from).collect())
    }
}

impl SolarSystem {
    fn write_uniforms(&self, queue: &wgpu::Queue) {
        let shapes = &self.shapes;
        let mut index = 0;
        self.sun.visit(&mut |body| {
            shapes[index].write_matrix(queue, body.draw_transform().to_matrix());
            index += 1;
        });
    }
}

fn main() -> anyhow::Result<()> {
    run(
        "Basic Solar System",
        Box::new(|ctx| {
            let mut sun = solar_system();
            sun.update_world_transforms(&Transform::new());

            let mut shapes = Vec::with_capacity(sun.count());
            sun.visit(&mut |body| {
                let mesh = Mesh::new(&ctx.device, &body.name, &TRIANGLE_VERTICES, &TRIANGLE_INDICES);
                shapes.push(Shape::new(&ctx.device, mesh, body.fill_colour));
            });

            Ok(Box::new(SolarSystem { sun, shapes }))
        }),
    )
}
