//! The smallest possible study: open a window and clear it every frame.

use instant::Duration;

use glimpse::{
    context::Context,
    render::Render,
    sketch::{Sketch, run},
};

struct Window;

impl Sketch for Window {
    fn on_init(&mut self, _ctx: &mut Context) {}

    fn on_update(&mut self, _ctx: &Context, _dt: Duration) {}

    fn on_render(&self) -> Render<'_> {
        Render::None
    }
}

fn main() -> anyhow::Result<()> {
    run("Window", Box::new(|_ctx| Ok(Box::new(Window))))
}
