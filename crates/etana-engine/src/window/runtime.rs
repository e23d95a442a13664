use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState, MouseWheelDelta};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial inner size, in logical pixels.
    pub width: f64,
    pub height: f64,
    /// Lock and hide the cursor for mouse-look.
    pub grab_cursor: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "etana".to_string(),
            width: 800.0,
            height: 600.0,
            grab_cursor: true,
        }
    }
}

/// Entry point for the runtime.
///
/// Single window, single thread: the event loop, the GPU context, and the
/// app all live on the calling thread, and all GPU objects are dropped there
/// when `run` returns.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState {
            config,
            gpu_init,
            app,
            entry: None,
            cursor_grabbed: false,
            exit_requested: false,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    /// True once the cursor is actually locked or confined. Selects the look
    /// input source: raw device motion when grabbed, absolute cursor samples
    /// otherwise.
    cursor_grabbed: bool,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn create_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        if self.config.grab_cursor {
            self.cursor_grabbed = grab_cursor(&window);
        }

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| match pollster::block_on(Gpu::new(w, gpu_init)) {
                Ok(gpu) => gpu,
                Err(e) => {
                    // Context/device creation is a fatal resource failure.
                    log::error!("GPU initialization failed: {e:#}");
                    std::process::exit(1);
                }
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the camera is time-integrated every frame.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let cursor_grabbed = self.cursor_grabbed;
        let (app, entry) = (&mut self.app, &mut self.entry);

        let Some(entry) = entry.as_mut() else {
            return;
        };

        if let Some(ev) = translate_input_event(&event, cursor_grabbed) {
            entry.with_mut(|fields| {
                fields.input_state.apply_event(fields.input_frame, ev);
            });
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let mut app_control = AppControl::Continue;

                entry.with_mut(|fields| {
                    let ft: FrameTime = fields.clock.tick();

                    // Scope so `ctx` drops before the frame state is cleared.
                    {
                        let mut ctx = FrameCtx {
                            gpu: fields.gpu,
                            input: fields.input_state,
                            input_frame: fields.input_frame,
                            time: ft,
                        };

                        app_control = app.on_frame(&mut ctx);
                    }

                    // The frame's deltas are consumed exactly once.
                    fields.input_frame.clear();
                });

                if app_control == AppControl::Exit {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion only drives the camera while the cursor is grabbed;
        // ungrabbed, absolute samples through the tracker are authoritative
        // and feeding both would double-count.
        if !self.cursor_grabbed {
            return;
        }

        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if let Some(entry) = self.entry.as_mut() {
                entry.with_mut(|fields| {
                    fields
                        .input_state
                        .apply_event(fields.input_frame, InputEvent::MouseDelta { dx, dy });
                });
            }
        }
    }
}

/// Locks and hides the cursor so mouse movement drives the camera.
///
/// Locked mode is not supported everywhere (notably X11); fall back to
/// confining the cursor to the window. Returns whether any grab succeeded:
/// a grabbed cursor no longer produces usable absolute positions (locked
/// freezes them, confined pins them at the border), so the caller must
/// switch look input to raw device motion.
fn grab_cursor(window: &Window) -> bool {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

    match grabbed {
        Ok(()) => {
            window.set_cursor_visible(false);
            true
        }
        Err(e) => {
            log::warn!("cursor grab unavailable, mouse-look degraded: {e}");
            false
        }
    }
}

fn translate_input_event(event: &WindowEvent, cursor_grabbed: bool) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::CursorLeft),

        // While grabbed, absolute positions freeze (locked) or saturate at
        // the border (confined); look input arrives as raw motion instead.
        WindowEvent::CursorMoved { .. } if cursor_grabbed => None,

        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x,
            y: position.y,
        }),

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(_, y) => MouseWheelDelta::Line { y: *y },
                MouseScrollDelta::PixelDelta(p) => MouseWheelDelta::Pixel { y: p.y as f32 },
            };
            Some(InputEvent::Scroll(delta))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,

            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown"
        // without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
