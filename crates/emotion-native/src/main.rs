use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use emotion_core::{
    generate_outline, palette_for, Compositor, CompositorParams, Debouncer, FluidUniforms,
    Palette, Viewport, EMOTION_DEBOUNCE_MS, FLUID_WGSL,
};
use instant::Instant;
use rand::prelude::*;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

// How often the debounce thread checks for quiet input
const DEBOUNCE_POLL: Duration = Duration::from_millis(25);
const SPLASH_SPREAD: f64 = 0.4;

/// Text typed so far plus the debounced copy waiting to become the emotion.
struct TypingState {
    text: String,
    debouncer: Debouncer<String>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    started: Instant,
    compositor: Arc<Mutex<Compositor>>,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        compositor: Arc<Mutex<Compositor>>,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fluid_shader"),
            source: wgpu::ShaderSource::Wgsl(FLUID_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fluid_uniforms"),
            size: std::mem::size_of::<FluidUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("fluid_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_fluid"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        if let Some(err) = device.pop_error_scope().await {
            anyhow::bail!("fluid pipeline error: {err}");
        }

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            started: Instant::now(),
            compositor,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let timestamp_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let resolution = [self.config.width as f32, self.config.height as f32];
        let Some(uniforms) = lock(&self.compositor).tick(timestamp_ms, resolution) else {
            return Ok(());
        };

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Releases debounced text into the compositor's palette.
fn start_debounce_thread(
    typing: Arc<Mutex<TypingState>>,
    compositor: Arc<Mutex<Compositor>>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("emotion-debounce".into())
        .spawn(move || loop {
            let released = lock(&typing).debouncer.poll(Instant::now());
            if let Some(text) = released {
                apply_emotion(&compositor, &text);
            }
            thread::sleep(DEBOUNCE_POLL);
        })
}

fn apply_emotion(compositor: &Mutex<Compositor>, text: &str) {
    let outline = generate_outline(text);
    log::info!(
        "[emotion] {:?} ({} segments): {}",
        outline.emotion,
        outline.segment_count(),
        outline
    );
    lock(compositor).set_palette(palette_for(text));
}

/// Apply one key to the typing buffer. Returns false when nothing changed.
fn edit_text(text: &mut String, backspace: bool, typed: Option<&str>) -> bool {
    if backspace {
        return text.pop().is_some();
    }
    match typed {
        Some(s) if !s.is_empty() && s.chars().all(|c| !c.is_control()) => {
            text.push_str(s);
            true
        }
        _ => false,
    }
}

/// Edit the buffer, restart the debounce and drop a splash near the center.
fn type_key(
    typing: &Mutex<TypingState>,
    compositor: &Mutex<Compositor>,
    rng: &mut StdRng,
    backspace: bool,
    typed: Option<&str>,
) {
    let mut t = lock(typing);
    if !edit_text(&mut t.text, backspace, typed) {
        return;
    }
    let text = t.text.clone();
    t.debouncer.push(text, Instant::now());
    drop(t);

    let x = 0.5 + (rng.gen::<f64>() - 0.5) * SPLASH_SPREAD;
    let y = 0.5 + (rng.gen::<f64>() - 0.5) * SPLASH_SPREAD;
    lock(compositor).add_splash(x, y, None);
}

fn on_key(
    event: &KeyEvent,
    typing: &Mutex<TypingState>,
    compositor: &Mutex<Compositor>,
    rng: &mut StdRng,
) {
    if event.state != ElementState::Pressed {
        return;
    }
    let backspace = event.logical_key == Key::Named(NamedKey::Backspace);
    type_key(typing, compositor, rng, backspace, event.text.as_deref());
}

fn sync_viewport(
    window: &winit::window::Window,
    compositor: &Mutex<Compositor>,
    size: winit::dpi::PhysicalSize<u32>,
) {
    let logical = size.to_logical::<f64>(window.scale_factor());
    lock(compositor).set_viewport(Viewport::new(logical.width, logical.height));
}

/// Without a GPU the window stays up; typing still updates palette and outline.
async fn init_gpu<'w>(
    window: &'w winit::window::Window,
    compositor: Arc<Mutex<Compositor>>,
) -> Option<GpuState<'w>> {
    match GpuState::new(window, compositor).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("GPU init error: {:?}", e);
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("emotion-eater (type to feed it)")
        .build(&event_loop)?;

    let logical = window.inner_size().to_logical::<f64>(window.scale_factor());
    let compositor = Arc::new(Mutex::new(Compositor::new(
        Palette::default(),
        Viewport::new(logical.width, logical.height),
        CompositorParams::default(),
        42,
    )));
    let typing = Arc::new(Mutex::new(TypingState {
        text: String::new(),
        debouncer: Debouncer::new(Duration::from_millis(EMOTION_DEBOUNCE_MS)),
    }));
    apply_emotion(&compositor, "");
    let _debounce = start_debounce_thread(Arc::clone(&typing), Arc::clone(&compositor))?;

    let mut state = pollster::block_on(init_gpu(&window, Arc::clone(&compositor)));
    let mut rng = StdRng::seed_from_u64(7);
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            sync_viewport(window, &compositor, size);
            if let Some(state) = state.as_mut() {
                state.resize(size);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event, .. },
            ..
        } => {
            if event.logical_key == Key::Named(NamedKey::Escape) {
                elwt.exit();
            } else {
                on_key(&event, &typing, &compositor, &mut rng);
            }
        }
        Event::AboutToWait => {
            let Some(state) = state.as_mut() else {
                return;
            };
            match state.render() {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
