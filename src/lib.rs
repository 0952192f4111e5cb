#![forbid(unsafe_code)]

//! Tiny pixel-exact 2D drawing window for prototypes and small games.
//!
//! # Features
//!
//! - A single [`Window`] trait for drawing points, lines, rectangles, ellipses, images and text.
//! - Pixel-exact ellipses, the same pixels are drawn on every platform.
//! - Keyboard, mouse and mouse wheel input, sampled once per update.
//! - WAV and OGG sound playback.
//! - Integer scaling of the canvas when the window is bigger.
//! - A [`HeadlessWindow`] for testing drawing code without opening a window.
//!
//! # Usage
//!
//! Call [`run`] with a configuration and an update function, the update function is called 60 times per second with the window to draw on.
//! The canvas is cleared before every update.
//!
//! ```no_run
//! use pixdraw::{Color, Config, Key, Window};
//!
//! # fn try_main() -> miette::Result<()> {
//! pixdraw::run(Config::default().with_title("My Game"), |window: &mut dyn Window| {
//!     // Exit the game if 'Escape' is pressed
//!     if window.was_key_pressed(Key::Escape) {
//!         window.close();
//!     }
//!
//!     // Draw a circle following the mouse
//!     let (x, y) = window.mouse_position();
//!     window.fill_ellipse(x - 10, y - 10, 21, 21, Color::LIGHT_BLUE);
//!
//!     window.draw_text("Press 'Escape' to exit", 10, 10, Color::WHITE);
//! })
//! # }
//! ```
//!
//! # Feature Flags
//!
//! ## `audio` (default)
//!
//! Play sound files with [`Window::play_sound_file`].
//! If disabled sound files are only read.
//!
//! # Install Requirements
//!
//! On Linux you need to install `asound2-dev` for audio:
//!
//! ```sh
//! sudo apt install libasound2-dev
//! ```

pub mod assets;
mod audio;
mod backend;
pub mod canvas;
mod color;
pub mod config;
pub mod ellipse;
pub mod font;
mod graphics;
mod input;
mod key;
mod window;

pub use assets::{AssetSource, EmbeddedRawAsset, Image};
pub use backend::{headless::HeadlessWindow, native::NativeWindow};
pub use canvas::Canvas;
pub use color::Color;
pub use config::Config;
pub use key::{Key, MouseButton, MouseClick};
pub use rgb::RGBA8;
pub use window::Window;

use std::time::Duration;

use miette::{IntoDiagnostic, Result, WrapErr};
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

/// Maximum amount of `update` calls for a single rendered frame.
///
/// When the updates take longer than the time between them the game slows down instead of freezing.
const MAX_UPDATE_CALLS_PER_FRAME: u32 = 10;

/// Open a window and call the update function at a fixed rate until the window is closed.
///
/// Every update the canvas is cleared to [`Config::background_color`], the update function draws on it and afterwards it's shown in the window.
/// The input passed to the update function is everything that happened since the previous update.
///
/// On the web this function returns immediately and the window keeps running.
///
/// # Arguments
///
/// * `config` - Configuration for the window, can be used to set the canvas size, the window title and other things.
/// * `update` - Called [`Config::updates_per_second`] times per second with the window to draw on.
///
/// # Errors
///
/// - When a window could not be opened.
/// - If no GPU could be found or accessed.
///
/// # Example
///
/// ```no_run
/// use pixdraw::{Color, Config, Window};
///
/// pixdraw::run(Config::default(), |window: &mut dyn Window| {
///     window.draw_rect(10, 10, 100, 50, Color::RED);
/// })
/// .expect("Error running window");
/// ```
pub fn run(config: Config, update: impl FnMut(&mut dyn Window) + 'static) -> Result<()> {
    init_logging();

    // Don't divide by zero
    let update_delta_time = Duration::from_secs(1) / config.updates_per_second.max(1);

    let event_loop = EventLoop::<Result<NativeWindow>>::with_user_event()
        .build()
        .into_diagnostic()
        .wrap_err("Error creating event loop")?;

    // Get the event loop proxy so we can instantiate on the web
    #[cfg(target_arch = "wasm32")]
    let event_loop_proxy = Some(event_loop.create_proxy());

    let mut state = State {
        window: None,
        config: Some(config),
        update,
        update_delta_time,
        next_update: Instant::now(),
        error: None,
        #[cfg(target_arch = "wasm32")]
        event_loop_proxy,
    };

    // Run the window until it's closed
    event_loop
        .run_app(&mut state)
        .into_diagnostic()
        .wrap_err("Error running event loop")?;

    // Report an error that happened while setting up the window
    state.error.map_or(Ok(()), Err)
}

/// Enable logging once, when the user didn't set up a logger already.
fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Fails when another logger is set, which is fine
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
    #[cfg(target_arch = "wasm32")]
    {
        // Show panics in the browser console log
        console_error_panic_hook::set_once();

        // Fails when another logger is set, which is fine
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// State of setting up a window that can still be uninitialized.
///
/// All optional fields are tied to the window creation flow of winit.
struct State<F> {
    /// Window with the GPU set up.
    ///
    /// `None` if the window still needs to be initialized.
    window: Option<NativeWindow>,
    /// User supplied configuration.
    ///
    /// Will be taken from the option once when creating the window.
    config: Option<Config>,
    /// User supplied update function.
    update: F,
    /// Time between updates.
    update_delta_time: Duration,
    /// When the next update should be called.
    next_update: Instant,
    /// Error that stopped the event loop.
    error: Option<miette::Report>,
    /// Proxy required to send the window on the web platform.
    #[cfg(target_arch = "wasm32")]
    event_loop_proxy: Option<winit::event_loop::EventLoopProxy<Result<NativeWindow>>>,
}

impl<F: FnMut(&mut dyn Window)> State<F> {
    /// Stop the event loop because of an error.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: miette::Report) {
        log::error!("{error:?}");

        self.error = Some(error);
        event_loop.exit();
    }

    /// Call the update function for every update that should have happened by now.
    fn update(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &mut self.window else {
            return;
        };

        let now = Instant::now();
        let mut update_calls = 0;
        while self.next_update <= now {
            profiling::scope!("Update");

            window.begin_frame();
            (self.update)(window);
            window.finish_frame();

            self.next_update += self.update_delta_time;

            if window.close_requested() {
                event_loop.exit();

                return;
            }

            update_calls += 1;
            if update_calls >= MAX_UPDATE_CALLS_PER_FRAME {
                log::debug!("Updates can't keep up, skipping the ones that are left");

                self.next_update = now + self.update_delta_time;
                break;
            }
        }

        window.render();

        profiling::finish_frame!();
    }
}

impl<F: FnMut(&mut dyn Window)> ApplicationHandler<Result<NativeWindow>> for State<F> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Setup the window only once
        let Some(config) = self.config.take() else {
            return;
        };

        let window = match NativeWindow::create_window(&config, event_loop) {
            Ok(window) => window,
            Err(err) => {
                self.fail(event_loop, err);

                return;
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            // Because pollster returns the value we can set it immediately
            match pollster::block_on(NativeWindow::new(config, window)) {
                Ok(window) => {
                    self.next_update = Instant::now();
                    self.window = Some(window);
                }
                Err(err) => self.fail(event_loop, err),
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            // We only need the proxy once to send the window
            let Some(event_loop_proxy) = self.event_loop_proxy.take() else {
                return;
            };

            wasm_bindgen_futures::spawn_local(async move {
                // Because WASM futures can't block we need to send it with a user event
                let window = NativeWindow::new(config, window).await;

                let _ = event_loop_proxy.send_event(window);
            });
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            // Handle the update loop and render loop
            WindowEvent::RedrawRequested => self.update(event_loop),
            // Close the window if requested
            WindowEvent::CloseRequested => {
                log::debug!("Window closed");

                // Tell winit that we want to exit
                event_loop.exit();
            }
            // Handle the other events with the window
            event => {
                if let Some(window) = &mut self.window {
                    window.handle_event(&event);
                }
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, window: Result<NativeWindow>) {
        // We received the window from initializing, set it
        match window {
            Ok(window) => {
                self.next_update = Instant::now();
                self.window = Some(window);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        if Instant::now() >= self.next_update {
            // Time for an update, request a redraw
            window.request_redraw();
        } else {
            // Sleep until the next update
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_update));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Destroy the window before the event loop is gone
        self.window = None;
        #[cfg(target_arch = "wasm32")]
        {
            self.event_loop_proxy = None;
        }
    }
}
