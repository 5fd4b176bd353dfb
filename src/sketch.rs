//! The study trait and the application event loop.
//!
//! A "sketch" is one self-contained rendering study: it configures the
//! context once, reacts to input, updates its animation state and tells the
//! loop what to draw each frame. The loop owns the window and the GPU
//! context, redraws every frame until the window closes and tears
//! everything down on drop.
//!
//! # Lifecycle
//!
//! 1. `on_init()` is called once; configure the context (clear colour,
//!    projection) here
//! 2. `on_window_events()` is called for each winit window event
//! 3. `on_update()` is called every frame with the elapsed time
//! 4. `on_render()` is called each frame and specifies how to render `self`

use std::{iter, sync::Arc};

use instant::{Duration, Instant};

#[cfg(feature = "integration-tests")]
use tokio::runtime::Runtime;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::{
    context::Context,
    data_structures::texture::Texture,
    render::{Flat, Render},
};

/// Outcome of a frame validation when running under `integration-tests`.
#[cfg(feature = "integration-tests")]
pub enum ImageTestResult {
    Passed,
    Waiting,
    Failed,
}

/// Trait for implementing a rendering study.
pub trait Sketch {
    /// Initialize the study and configure the context.
    ///
    /// This is the only place to modify the context and configure things
    /// such as the clear colour or the projection lens.
    fn on_init(&mut self, ctx: &mut Context);

    /// Handle window events (keyboard input, cursor movement, etc.).
    fn on_window_events(&mut self, _ctx: &Context, _event: &WindowEvent) {}

    /// Update state every frame.
    ///
    /// Called every frame with the elapsed time `dt`. Use for animations
    /// and for pushing changed uniforms to the GPU.
    fn on_update(&mut self, ctx: &Context, dt: Duration);

    /// Return renderable objects for this frame.
    fn on_render(&self) -> Render<'_>;

    /// Inspect the rendered frame when running under `integration-tests`.
    ///
    /// The default keeps rendering forever; tests override this to compare
    /// against a golden image and end the run.
    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &mut self,
        _ctx: &Context,
        _texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        Ok(ImageTestResult::Waiting)
    }
}

/// Type alias for a sketch constructor (factory function).
///
/// The constructor runs once the GPU context exists, so it can create
/// buffers, textures and bind groups.
pub type SketchConstructor = Box<dyn FnOnce(&Context) -> anyhow::Result<Box<dyn Sketch>>>;

/// Application state bundle: GPU context and surface status.
struct AppState {
    ctx: Context,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>) -> Self {
        let ctx = match Context::new(window).await {
            Ok(ctx) => ctx,
            Err(e) => panic!(
                "App initialization failed. Cannot create the main context: {}",
                e
            ),
        };
        Self {
            ctx,
            is_surface_configured: false,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    fn get_surface_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.ctx.surface.get_current_texture()
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_texture(&self, extent3d: wgpu::Extent3d) -> wgpu::Texture {
        self.ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Golden Image Test Output Texture"),
            size: extent3d,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.ctx.config.format,
            usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_depth_texture(&self, extent3d: wgpu::Extent3d) -> wgpu::Texture {
        self.ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Golden Image Test Depth Texture"),
            size: extent3d,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    #[cfg(feature = "integration-tests")]
    fn get_width_height(&self) -> (u32, u32) {
        // Buffer readback rows must be 256-byte aligned, so pad the copy size.
        let width = self.ctx.config.width;
        let height = self.ctx.config.height;
        let width = width + (256 - (width % 256));
        let height = height + (256 - (height % 256));
        (width, height)
    }

    #[cfg(feature = "integration-tests")]
    fn get_test_3d_extent(&self) -> wgpu::Extent3d {
        let (width, height) = self.get_width_height();
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        }
    }

    /// Render one frame. Returns `Ok(true)` when an integration test has
    /// validated its output and the loop should exit.
    fn render(
        &mut self,
        sketch: &mut Box<dyn Sketch>,
        #[cfg(feature = "integration-tests")] async_runtime: &Runtime,
    ) -> Result<bool, wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(false);
        }

        let output = self.get_surface_texture()?;
        #[cfg(not(feature = "integration-tests"))]
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        #[cfg(feature = "integration-tests")]
        let (tex, depth) = {
            let extent3d = self.get_test_3d_extent();
            let tex = self.get_test_texture(extent3d);
            let depth = self.get_test_depth_texture(extent3d);
            (tex, depth)
        };

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut render_pass: wgpu::RenderPass<'_> =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        #[cfg(feature = "integration-tests")]
                        view: &tex.create_view(&wgpu::TextureViewDescriptor::default()),
                        #[cfg(not(feature = "integration-tests"))]
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        #[cfg(feature = "integration-tests")]
                        view: &depth.create_view(&wgpu::TextureViewDescriptor::default()),
                        #[cfg(not(feature = "integration-tests"))]
                        view: &self.ctx.depth_texture.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });

            // Actual rendering:
            let mut flats: Vec<Flat> = Vec::new();
            let mut textureds: Vec<Flat> = Vec::new();
            sketch.on_render().set_pipelines(&mut flats, &mut textureds);

            render_pass.set_pipeline(&self.ctx.pipelines.flat);
            for flat in flats {
                if flat.amount == 0 {
                    log::warn!("you attempted to render a shape with zero indices");
                    continue;
                }
                render_pass.set_bind_group(0, flat.group, &[]);
                render_pass.set_vertex_buffer(0, flat.vertex.slice(..));
                render_pass.set_index_buffer(flat.index.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..flat.amount as u32, 0, 0..1);
            }

            render_pass.set_pipeline(&self.ctx.pipelines.textured);
            for textured in textureds {
                if textured.amount == 0 {
                    log::warn!("you attempted to render a sprite with zero indices");
                    continue;
                }
                render_pass.set_bind_group(0, textured.group, &[]);
                render_pass.set_vertex_buffer(0, textured.vertex.slice(..));
                render_pass.set_index_buffer(textured.index.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..textured.amount as u32, 0, 0..1);
            }
        }

        #[cfg(feature = "integration-tests")]
        let output_buffer = {
            let u32_size = std::mem::size_of::<u32>() as u32;
            let (width, height) = self.get_width_height();
            let output_buffer_size = (u32_size * width * height) as wgpu::BufferAddress;
            let output_buffer_desc = wgpu::BufferDescriptor {
                size: output_buffer_size,
                usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
                label: None,
                mapped_at_creation: false,
            };
            let output_buffer = self.ctx.device.create_buffer(&output_buffer_desc);
            encoder.copy_texture_to_buffer(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &tex,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                },
                wgpu::TexelCopyBufferInfo {
                    buffer: &output_buffer,
                    layout: wgpu::TexelCopyBufferLayout {
                        offset: 0,
                        bytes_per_row: Some(u32_size * width),
                        rows_per_image: Some(height),
                    },
                },
                self.get_test_3d_extent(),
            );
            output_buffer
        };

        self.ctx.queue.submit(iter::once(encoder.finish()));

        #[cfg(feature = "integration-tests")]
        let passed = {
            let fut_img = async {
                let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
                let buffer_slice = output_buffer.slice(..);
                buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
                    tx.send(result).unwrap();
                });
                self.ctx
                    .device
                    .poll(wgpu::PollType::Wait {
                        submission_index: None,
                        timeout: Some(Duration::from_secs(3)),
                    })
                    .unwrap();
                rx.receive().await.unwrap().unwrap();
                let data = buffer_slice.get_mapped_range();
                let (width, height) = self.get_width_height();
                image::ImageBuffer::<image::Rgba<u8>, _>::from_raw(width, height, data).unwrap()
            };
            let mut img: image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView> =
                async_runtime.block_on(fut_img);
            match sketch.render_to_texture(&self.ctx, &mut img) {
                Err(e) => panic!("{}", e),
                Ok(ImageTestResult::Passed) => true,
                Ok(ImageTestResult::Failed) => panic!("Assertion failed"),
                Ok(ImageTestResult::Waiting) => false,
            }
        };
        #[cfg(not(feature = "integration-tests"))]
        let passed = false;

        output.present();
        Ok(passed)
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    title: String,
    state: Option<AppState>,
    sketch: Option<Box<dyn Sketch>>,
    // This holds the constructor at the start.
    // We use Option to `take()` it after use.
    constructor: Option<SketchConstructor>,
    last_time: Instant,
}

impl App {
    fn new(title: &str, constructor: SketchConstructor) -> Self {
        let async_runtime = tokio::runtime::Runtime::new().unwrap();
        Self {
            async_runtime,
            title: title.to_string(),
            state: None,
            sketch: None,
            constructor: Some(constructor),
            last_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title(&self.title);
        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let mut app_state = self.async_runtime.block_on(AppState::new(window));

        let constructor = self.constructor.take().unwrap();
        let mut sketch = match constructor(&app_state.ctx) {
            Ok(sketch) => sketch,
            Err(e) => panic!("App initialization failed. Cannot create the sketch: {}", e),
        };
        sketch.on_init(&mut app_state.ctx);

        let size = app_state.ctx.window.inner_size();
        app_state.resize(size.width, size.height);
        app_state.ctx.window.request_redraw();

        self.state = Some(app_state);
        self.sketch = Some(sketch);
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        _event: DeviceEvent,
    ) {
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let (state, sketch) = match (&mut self.state, &mut self.sketch) {
            (Some(state), Some(sketch)) => (state, sketch),
            _ => return,
        };

        sketch.on_window_events(&state.ctx, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { ref event, .. }
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed =>
            {
                event_loop.exit()
            }
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                match state.render(
                    sketch,
                    #[cfg(feature = "integration-tests")]
                    &self.async_runtime,
                ) {
                    Ok(true) => event_loop.exit(),
                    Ok(false) => {
                        sketch.on_update(&state.ctx, dt);
                    }
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Run a study: boot logging, the event loop and the window, then redraw
/// every frame until the window closes.
pub fn run(title: &str, constructor: SketchConstructor) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    #[cfg(all(feature = "integration-tests", target_os = "linux"))]
    let event_loop: EventLoop<()> = {
        use winit::platform::wayland::EventLoopBuilderExtWayland;

        EventLoop::builder()
            .with_any_thread(true)
            .build()
            .expect("Failed to create an event loop")
    };

    #[cfg(all(feature = "integration-tests", target_os = "windows"))]
    let event_loop: EventLoop<()> = {
        use winit::platform::windows::EventLoopBuilderExtWindows;

        EventLoop::builder()
            .with_any_thread(true)
            .build()
            .expect("Failed to create an event loop")
    };

    #[cfg(not(feature = "integration-tests"))]
    let event_loop: EventLoop<()> = EventLoop::new()?;

    let mut app = App::new(title, constructor);

    event_loop.run_app(&mut app)?;

    Ok(())
}
