//! Two texture-mapped quads layered with alpha blending.
//!
//! The repository ships no image assets, so both textures are synthesized:
//! an opaque brick-coloured checkerboard and a radial gradient that fades to
//! transparent towards its corners, letting the checkerboard show through.

use instant::Duration;

use glimpse::{
    context::Context,
    data_structures::{mesh::Mesh, shape::Sprite, texture::Texture},
    render::Render,
    sketch::{Sketch, run},
};

const TEXTURE_SIZE: u32 = 256;

fn wall_image() -> image::DynamicImage {
    let img = image::RgbaImage::from_fn(TEXTURE_SIZE, TEXTURE_SIZE, |x, y| {
        if ((x / 32) + (y / 32)) % 2 == 0 {
            image::Rgba([142, 109, 87, 255])
        } else {
            image::Rgba([180, 143, 116, 255])
        }
    });
    image::DynamicImage::ImageRgba8(img)
}

fn face_image() -> image::DynamicImage {
    let half = TEXTURE_SIZE as f32 / 2.0;
    let img = image::RgbaImage::from_fn(TEXTURE_SIZE, TEXTURE_SIZE, |x, y| {
        let dx = (x as f32 - half) / half;
        let dy = (y as f32 - half) / half;
        let radius = (dx * dx + dy * dy).sqrt();
        let alpha = (1.25 - radius).clamp(0.0, 1.0);
        let green = (255.0 * (1.0 - radius).clamp(0.0, 1.0)) as u8;
        image::Rgba([250, green, 60, (alpha * 255.0) as u8])
    });
    image::DynamicImage::ImageRgba8(img)
}

struct TextureMapping {
    wall: Sprite,
    face: Sprite,
}

impl Sketch for TextureMapping {
    fn on_init(&mut self, ctx: &mut Context) {
        ctx.clear_colour = glimpse::Color::WHITE;
    }

    fn on_update(&mut self, _ctx: &Context, _dt: Duration) {}

    fn on_render(&self) -> Render<'_> {
        // Draw order matters: the translucent face blends over the wall.
        Render::Composed(vec![(&self.wall).into(), (&self.face).into()])
    }
}

fn main() -> anyhow::Result<()> {
    run(
        "Texture Mapping",
        Box::new(|ctx| {
            let wall_texture =
                Texture::from_image(&ctx.device, &ctx.queue, &wall_image(), Some("wall"))?;
            let face_texture =
                Texture::from_image(&ctx.device, &ctx.queue, &face_image(), Some("face"))?;
            let wall = Sprite::new(&ctx.device, Mesh::textured_quad(&ctx.device), wall_texture);
            let face = Sprite::new(&ctx.device, Mesh::textured_quad(&ctx.device), face_texture);
            Ok(Box::new(TextureMapping { wall, face }))
        }),
    )
}
