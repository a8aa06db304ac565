#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use lissajous_grid::{Animation, Viewport};
use log::{error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Fullscreen, Window, WindowId};

const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window")]
    Window(#[from] OsError),
    #[error("could not draw to the window surface")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize the window surface")]
    Texture(#[from] pixels::TextureError),
}

/// Opens a fullscreen window and runs `build`'s animation in it until the user
/// quits. The animation is rebuilt from scratch whenever the window is resized.
pub fn animate<A, F>(build: F) -> Result<(), AnimateError>
where
    A: Animation,
    F: Fn(Viewport, Instant) -> A,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(build);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

fn log_error(context: &str, err: &AnimateError) {
    error!("{context}: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

fn viewport_for(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let size = size.to_logical::<f64>(scale_factor);
    Viewport::new(size.width, size.height, scale_factor)
}

struct App<A: Animation> {
    animation: A,
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl<A: Animation> App<A> {
    fn new<F>(event_loop: &ActiveEventLoop, build: &F) -> Result<Self, AnimateError>
    where
        F: Fn(Viewport, Instant) -> A,
    {
        let window = Arc::new(Self::build_window(event_loop)?);
        let animation = build(Self::viewport(&window), Instant::now());
        let pixels = Self::build_pixels(&window, animation.side())?;
        Ok(Self {
            animation,
            window,
            pixels,
        })
    }

    fn build_window(event_loop: &ActiveEventLoop) -> Result<Window, AnimateError> {
        let window_attributes = Window::default_attributes()
            .with_title("Lissajous")
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_fullscreen(Some(Fullscreen::Borderless(None)))
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(window: &Arc<Window>, side: u32) -> Result<Pixels<'static>, AnimateError> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        Ok(PixelsBuilder::new(side, side, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?)
    }

    fn viewport(window: &Window) -> Viewport {
        viewport_for(window.inner_size(), window.scale_factor())
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_resize<F>(&mut self, size: PhysicalSize<u32>, build: &F) -> Result<(), AnimateError>
    where
        F: Fn(Viewport, Instant) -> A,
    {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(size.width, size.height)?;
        self.animation = build(Self::viewport(&self.window), Instant::now());
        let side = self.animation.side();
        self.pixels.resize_buffer(side, side)?;
        info!("Resized to {}x{}, rebuilt on a {side}px surface", size.width, size.height);
        self.window.request_redraw();
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), AnimateError> {
        self.animation.update(Instant::now());

        let frame = self.pixels.frame_mut();
        debug_assert_eq!(frame.len(), 4 * (self.animation.side() as usize).pow(2));
        self.animation.draw(frame);
        self.pixels.render()?;

        self.window.request_redraw();
        Ok(())
    }
}

struct AppEventHandler<A, F>
where
    A: Animation,
    F: Fn(Viewport, Instant) -> A,
{
    build: F,
    app: Option<App<A>>,
    error: Option<AnimateError>,
}

impl<A, F> AppEventHandler<A, F>
where
    A: Animation,
    F: Fn(Viewport, Instant) -> A,
{
    fn new(build: F) -> Self {
        Self {
            build,
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, context: &str, err: AnimateError) {
        log_error(context, &err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl<A, F> ApplicationHandler for AppEventHandler<A, F>
where
    A: Animation,
    F: Fn(Viewport, Instant) -> A,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match App::new(event_loop, &self.build) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, "Startup failed", err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        let result = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                        event_loop.exit();
                    }
                    _ => (),
                }
                Ok(())
            }
            WindowEvent::Resized(size) => app.on_resize(size, &self.build),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = app.window.inner_size();
                app.on_resize(size, &self.build)
            }
            WindowEvent::RedrawRequested => app.on_redraw(),
            _ => Ok(()),
        };
        if let Err(err) = result {
            self.fail(event_loop, "Frame failed", err);
        }
    }
}
