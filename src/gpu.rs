// src/gpu.rs

//! Window-bound GPU surface that presents egui-painted frames.

use crate::errors::{HarnessError, HarnessResult};
use crate::ui::surface::{PainterSurface, Surface};
use egui::{FontDefinitions, LayerId, Pos2, RawInput, Rect, Vec2};
use egui_wgpu::wgpu;
use std::sync::Arc;
use winit::window::Window;

pub struct Graphics {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: egui_wgpu::Renderer,
    ctx: egui::Context,
}

impl Graphics {
    pub fn new(window: Arc<Window>, fonts: Option<&FontDefinitions>) -> HarnessResult<Self> {
        futures::executor::block_on(Self::init(window, fonts))
    }

    async fn init(window: Arc<Window>, fonts: Option<&FontDefinitions>) -> HarnessResult<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(HarnessError::NoAdapter)?;
        log::info!("Using graphics adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("test-events device"),
                    ..Default::default()
                },
                None,
            )
            .await?;

        let config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or(HarnessError::NoAdapter)?;
        surface.configure(&device, &config);

        let renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1, false);

        let ctx = egui::Context::default();
        if let Some(fonts) = fonts {
            ctx.set_fonts(fonts.clone());
        }

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            ctx,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Paints one frame. `draw` receives a surface covering the window in
    /// physical pixels.
    pub fn render(&mut self, mut draw: impl FnMut(&mut dyn Surface)) -> HarnessResult<()> {
        let size = Vec2::new(self.config.width as f32, self.config.height as f32);
        let raw_input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, size)),
            ..Default::default()
        };

        let output = self.ctx.run(raw_input, |ctx| {
            let mut surface = PainterSurface::new(ctx.layer_painter(LayerId::background()));
            draw(&mut surface);
        });
        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("Surface timed out, skipping frame");
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(HarnessError::Surface(wgpu::SurfaceError::OutOfMemory));
            }
            Err(e) => {
                log::debug!("Reconfiguring surface: {}", e);
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        let user_buffers = self.renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &primitives,
            &screen_descriptor,
        );

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Frame Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();

            self.renderer
                .render(&mut pass, &primitives, &screen_descriptor);
        }

        self.queue
            .submit(user_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        frame.present();

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        Ok(())
    }
}
