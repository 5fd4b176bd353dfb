#[cfg(feature = "integration-tests")]
mod common;

// A solid white texture on the centred unit quad: the middle of the frame
// shows the texture, the border stays at the clear colour.
#[test]
#[cfg(feature = "integration-tests")]
fn textured_quad_covers_the_centre_of_the_frame() {
    use common::test_utils::{TestSketch, colour_pixel, run_golden_image_test};
    use glimpse::data_structures::{mesh::Mesh, shape::Sprite, texture::Texture};
    use glimpse::render::Render;
    use glimpse::sketch::ImageTestResult;

    fn render_sprite(sprite: &Sprite) -> Render<'_> {
        sprite.into()
    }

    run_golden_image_test("textured quad test", |ctx| {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            64,
            64,
            image::Rgba([255, 255, 255, 255]),
        ));
        let texture = Texture::from_image(&ctx.device, &ctx.queue, &img, Some("solid white"))?;
        let sprite = Sprite::new(&ctx.device, Mesh::textured_quad(&ctx.device), texture);
        Ok(TestSketch {
            drawable: sprite,
            frame: 0,
            setup: |_, _| {},
            render: render_sprite,
            validate: |_, _, texture| {
                // Clip space maps over the full readback image.
                let (width, height) = (texture.width(), texture.height());
                let centre = *texture.get_pixel(width / 2, height / 2);
                assert_eq!(centre, colour_pixel(wgpu::Color::WHITE));
                let border = *texture.get_pixel(width / 8, height / 2);
                assert_eq!(border, colour_pixel(wgpu::Color::BLACK));
                Ok(ImageTestResult::Passed)
            },
        })
    });
}
