#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn clearing_fills_the_whole_frame() {
    use common::test_utils::{TestSketch, colour_pixel, run_golden_image_test};
    use glimpse::render::Render;
    use glimpse::sketch::ImageTestResult;

    fn render_nothing(_: &()) -> Render<'_> {
        Render::None
    }

    run_golden_image_test("clear colour test", |_ctx| {
        Ok(TestSketch {
            drawable: (),
            frame: 0,
            setup: |ctx, _| ctx.clear_colour = wgpu::Color::WHITE,
            render: render_nothing,
            validate: |_, _, texture| {
                let expected = colour_pixel(wgpu::Color::WHITE);
                for pixel in texture.pixels() {
                    assert_eq!(*pixel, expected);
                }
                Ok(ImageTestResult::Passed)
            },
        })
    });
}
