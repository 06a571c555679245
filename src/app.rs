use crate::actions::{action_for, Action};
use crate::app_state::HarnessState;
use crate::assets;
use crate::config::Config;
use crate::constants::{
    CURSOR_TARGET, JOYSTICK_PANEL_ORIGIN, RESIZE_TARGET, WINDOW_TARGET, WINDOW_TITLE,
};
use crate::errors::{HarnessError, HarnessResult};
use crate::event::Event;
use crate::event_log::EventRecorder;
use crate::gpu::Graphics;
use crate::input::InputTranslator;
use crate::joystick::JoystickHub;
use crate::logging::DiagnosticSink;
use crate::pacing::FramePacer;
use crate::scroll_log::ScrollLog;
use crate::ui::{draw_scene, Scene};
use crate::utils::{desktop_to_window, preferred_monitor};
use egui::{pos2, FontDefinitions};
use std::fmt::Write;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Windowed,
    Fullscreen,
}

pub struct App {
    config: Config,
    fonts: Option<FontDefinitions>,
    state: HarnessState,
    log: ScrollLog<DiagnosticSink>,
    recorder: EventRecorder,
    input: InputTranslator,
    joysticks: JoystickHub,
    pacer: FramePacer,
    graphics: Option<Graphics>,
    error: Option<HarnessError>,
}

impl App {
    pub fn new(config: Config, fonts: Option<FontDefinitions>, sink: DiagnosticSink) -> App {
        let mut log = ScrollLog::new(config.log_lines, config.font_size, sink);
        log.set_position(pos2(config.log_origin[0], config.log_origin[1]));

        let joysticks = JoystickHub::new();
        log::debug!("Joystick backend available: {}", joysticks.is_available());

        App {
            pacer: FramePacer::new(config.frame_rate, Instant::now()),
            config,
            fonts,
            state: HarnessState::new(),
            log,
            recorder: EventRecorder::new(),
            input: InputTranslator::new(),
            joysticks,
            graphics: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<HarnessError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: HarnessError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn window(&self) -> Option<&Arc<Window>> {
        self.graphics.as_ref().map(|graphics| &graphics.window)
    }

    /// Replaces the current window with a new one in `mode`.
    fn open_window(&mut self, event_loop: &ActiveEventLoop, mode: WindowMode) -> HarnessResult<()> {
        let mut attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_window_icon(Some(assets::window_icon()?));

        let requested = match mode {
            WindowMode::Windowed => {
                let size = PhysicalSize::new(self.config.window_width, self.config.window_height);
                attributes = attributes.with_inner_size(size);
                size
            }
            WindowMode::Fullscreen => {
                let monitor = preferred_monitor(
                    self.window().and_then(|window| window.current_monitor()),
                    event_loop.primary_monitor(),
                    event_loop.available_monitors(),
                );
                let size = monitor.as_ref().map(|m| m.size()).unwrap_or_else(|| {
                    PhysicalSize::new(self.config.window_width, self.config.window_height)
                });
                attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(monitor)));
                size
            }
        };

        // the old window closes when its surface is dropped
        self.graphics = None;
        let window = Arc::new(event_loop.create_window(attributes)?);
        self.state.window_created();
        self.input.reset_cursor();

        let actual = window.inner_size();
        log::info!(
            "New window:\n\tsize: ({}; {})\trequested: ({}; {})",
            actual.width,
            actual.height,
            requested.width,
            requested.height
        );

        self.graphics = Some(Graphics::new(window, self.fonts.as_ref())?);
        Ok(())
    }

    fn handle_event(&mut self, event_loop: &ActiveEventLoop, event: Event) {
        if let Some(message) = self.recorder.record(&event) {
            self.log.log(&message);
        }

        match event {
            Event::Closed => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            Event::KeyReleased { key, modifiers } => {
                if let Some(action) = action_for(key, modifiers) {
                    self.perform(event_loop, action);
                }
            }
            _ => {}
        }
    }

    fn perform(&mut self, event_loop: &ActiveEventLoop, action: Action) {
        log::debug!("Action: {:?}", action);
        match action {
            Action::Quit => event_loop.exit(),
            Action::GoFullscreen => self.switch_window(event_loop, WindowMode::Fullscreen),
            Action::GoWindowed => self.switch_window(event_loop, WindowMode::Windowed),
            _ => {
                if let Some(window) = self.window().cloned() {
                    self.perform_on_window(&window, action);
                }
            }
        }
    }

    fn switch_window(&mut self, event_loop: &ActiveEventLoop, mode: WindowMode) {
        if let Err(err) = self.open_window(event_loop, mode) {
            self.fail(event_loop, err);
        }
    }

    fn perform_on_window(&mut self, window: &Window, action: Action) {
        match action {
            Action::Quit | Action::GoFullscreen | Action::GoWindowed => {}
            Action::ToggleGrab => {
                let grab = !self.state.grabbed;
                match set_cursor_grab(window, grab) {
                    Ok(()) => {
                        self.state.toggle_grab();
                        self.log.log(if grab { "Grabbed" } else { "Released" });
                    }
                    Err(e) => self.report_failure("cursor grab", e),
                }
            }
            Action::CursorToWindowPoint => {
                let target = PhysicalPosition::new(CURSOR_TARGET.0, CURSOR_TARGET.1);
                if let Err(e) = window.set_cursor_position(target) {
                    self.report_failure("cursor warp", e);
                }
            }
            Action::CursorToDesktopPoint => match window.inner_position() {
                Ok(origin) => {
                    let (x, y) = desktop_to_window(CURSOR_TARGET, (origin.x, origin.y));
                    if let Err(e) = window.set_cursor_position(PhysicalPosition::new(x, y)) {
                        self.report_failure("cursor warp", e);
                    }
                }
                Err(e) => self.report_failure("window position query", e),
            },
            Action::ReportWindowPosition => match window.outer_position() {
                Ok(position) => {
                    self.log.log(&pair!("window position", position.x, position.y));
                }
                Err(e) => self.report_failure("window position query", e),
            },
            Action::MoveWindow => {
                let target = PhysicalPosition::new(WINDOW_TARGET.0, WINDOW_TARGET.1);
                window.set_outer_position(target);
            }
            Action::ReportDesktopSize => match window.current_monitor() {
                Some(monitor) => {
                    let size = monitor.size();
                    self.log.log(&pair!("desktop size", size.width, size.height));
                }
                None => self.log.log("desktop size: unknown"),
            },
            Action::ReportWindowSize => {
                let size = window.inner_size();
                self.log.log(&pair!("window size", size.width, size.height));
            }
            Action::ResizeWindow => {
                let target = PhysicalSize::new(RESIZE_TARGET.0, RESIZE_TARGET.1);
                if let Some(size) = window.request_inner_size(target) {
                    if let Some(graphics) = self.graphics.as_mut() {
                        graphics.resize(size.width, size.height);
                    }
                }
            }
            Action::ToggleJoystickInfo => {
                let shown = self.state.toggle_joysticks();
                self.log.log(if shown {
                    "Joystick info shown"
                } else {
                    "Joystick info hidden"
                });
            }
        }
    }

    fn report_failure(&mut self, what: &str, err: impl std::fmt::Display) {
        log::warn!("{} failed: {}", what, err);
        self.log.log(&format!("{} failed: {}", what, err));
    }

    fn redraw(&mut self) -> HarnessResult<()> {
        let snapshots = if self.state.show_joysticks {
            self.joysticks.snapshots()
        } else {
            Vec::new()
        };

        let Some(graphics) = self.graphics.as_mut() else {
            return Ok(());
        };
        let (x, y) = self.input.cursor();
        let scene = Scene {
            log: &self.log,
            window_count: self.state.window_count,
            cursor: pos2(x as f32, y as f32),
            cursor_radius: self.config.cursor_radius,
            grid_spacing: self.config.grid_spacing,
            joysticks: self.state.show_joysticks.then(|| {
                (
                    pos2(JOYSTICK_PANEL_ORIGIN[0], JOYSTICK_PANEL_ORIGIN[1]),
                    snapshots.as_slice(),
                )
            }),
        };
        graphics.render(|surface| draw_scene(surface, &scene))
    }
}

fn set_cursor_grab(window: &Window, grab: bool) -> Result<(), winit::error::ExternalError> {
    if !grab {
        return window.set_cursor_grab(CursorGrabMode::None);
    }
    // platforms support one mode or the other
    window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
}

/// Logs the primary monitor's fullscreen modes and desktop mode.
fn print_video_modes(event_loop: &ActiveEventLoop) {
    let Some(monitor) = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
    else {
        log::warn!("No monitor found");
        return;
    };

    let mut report = String::from("Fullscreen modes:\n");
    for mode in monitor.video_modes() {
        let size = mode.size();
        let _ = writeln!(report, "\t{}x{}", size.width, size.height);
    }
    let desktop = monitor.size();
    let _ = write!(report, "Desktop mode:\n\t{}x{}", desktop.width, desktop.height);
    log::info!("{}", report);
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        print_video_modes(event_loop);
        if let Err(err) = self.open_window(event_loop, WindowMode::Windowed) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // events from a window that has since been replaced
        if self.window().map(|window| window.id()) != Some(window_id) {
            return;
        }

        match &event {
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
                return;
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.resize(size.width, size.height);
                }
            }
            _ => {}
        }

        for harness_event in self.input.translate(&event) {
            self.handle_event(event_loop, harness_event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        for event in self.joysticks.poll() {
            self.handle_event(event_loop, event);
        }

        let now = Instant::now();
        if self.pacer.is_due(now) {
            if let Some(window) = self.window() {
                window.request_redraw();
            }
            self.pacer.frame_requested(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}
