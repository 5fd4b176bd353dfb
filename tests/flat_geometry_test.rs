#[cfg(feature = "integration-tests")]
mod common;

// The rectangle geometry spans the left half of clip space, so a pixel in
// the left half carries the fill colour and one in the right half stays at
// the clear colour.
#[test]
#[cfg(feature = "integration-tests")]
fn rectangle_covers_the_left_half_of_the_frame() {
    use common::test_utils::{TestSketch, colour_pixel, run_golden_image_test};
    use glimpse::data_structures::{mesh::Mesh, shape::Shape};
    use glimpse::render::Render;
    use glimpse::sketch::ImageTestResult;

    fn render_shape(shape: &Shape) -> Render<'_> {
        shape.into()
    }

    run_golden_image_test("flat geometry test", |ctx| {
        let mesh = Mesh::rectangle(&ctx.device);
        let shape = Shape::new(&ctx.device, mesh, [1.0, 1.0, 1.0, 1.0]);
        Ok(TestSketch {
            drawable: shape,
            frame: 0,
            setup: |_, _| {},
            render: render_shape,
            validate: |_, _, texture| {
                // Clip space maps over the full readback image.
                let (width, height) = (texture.width(), texture.height());
                let inside = *texture.get_pixel(width / 4, height / 2);
                assert_eq!(inside, colour_pixel(wgpu::Color::WHITE));
                let outside = *texture.get_pixel(3 * width / 4, height / 2);
                assert_eq!(outside, colour_pixel(wgpu::Color::BLACK));
                Ok(ImageTestResult::Passed)
            },
        })
    });
}
