//! Shared harness for the golden image tests.
//!
//! Each test wraps one drawable in a [`TestSketch`] together with a setup
//! hook and a validation hook. The harness renders normally; once a full
//! frame has gone through the loop the validation hook inspects the readback
//! image and ends the run by returning `Passed` or failing an assertion.

use std::time::Duration;

use glimpse::{
    context::Context,
    render::Render,
    sketch::{ImageTestResult, Sketch, SketchConstructor},
};

pub type Setup<D> = fn(&mut Context, &mut D);
pub type RenderFn<D> = fn(&D) -> Render<'_>;
pub type Validator<D> = fn(
    &Context,
    &mut D,
    &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
) -> anyhow::Result<ImageTestResult>;

pub struct TestSketch<D> {
    pub drawable: D,
    pub frame: u32,
    pub setup: Setup<D>,
    pub render: RenderFn<D>,
    pub validate: Validator<D>,
}

impl<D: 'static> Sketch for TestSketch<D> {
    fn on_init(&mut self, ctx: &mut Context) {
        (self.setup)(ctx, &mut self.drawable);
    }

    fn on_update(&mut self, _ctx: &Context, _dt: Duration) {
        self.frame += 1;
    }

    fn on_render(&self) -> Render<'_> {
        (self.render)(&self.drawable)
    }

    fn render_to_texture(
        &mut self,
        ctx: &Context,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> anyhow::Result<ImageTestResult> {
        // Let one full frame go through the loop before judging the output.
        if self.frame == 0 {
            return Ok(ImageTestResult::Waiting);
        }
        (self.validate)(ctx, &mut self.drawable, texture)
    }
}

pub fn run_golden_image_test<D: 'static>(
    name: &str,
    constructor: impl FnOnce(&Context) -> anyhow::Result<TestSketch<D>> + 'static,
) {
    let constructor: SketchConstructor = Box::new(move |ctx| {
        let sketch = constructor(ctx)?;
        Ok(Box::new(sketch) as Box<dyn Sketch>)
    });
    glimpse::sketch::run(name, constructor).expect("Failed to run the golden image test.");
}

/// The readback image may come out of the GPU with swapped red/blue
/// channels depending on the surface format, so tests stick to colours
/// that read the same either way (black, white, greys).
pub fn colour_pixel(colour: wgpu::Color) -> image::Rgba<u8> {
    let f_to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    image::Rgba([
        f_to_u8(colour.r),
        f_to_u8(colour.g),
        f_to_u8(colour.b),
        f_to_u8(colour.a),
    ])
}
