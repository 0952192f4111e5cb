//! winit + wgpu backend.

use std::sync::Arc;

use miette::{IntoDiagnostic, Result, WrapErr};
use winit::{
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, WindowAttributes},
};

use crate::{
    audio::Audio,
    color::Color,
    config::Config,
    graphics::{gpu::Gpu, letterbox::Letterbox, present::PresentState, to_wgpu_color},
};

use super::{Platform, WindowState};

/// Window on the desktop or a canvas element on the web, the canvas is drawn with the GPU.
///
/// Only created by [`crate::run`], which passes it to the update function.
pub struct NativeWindow {
    /// Shared window state.
    state: WindowState,
    /// Window handle, shared with the GPU surface.
    window: Arc<winit::window::Window>,
    /// GPU state.
    gpu: Gpu<'static>,
    /// Canvas texture and the pipeline to draw it.
    present: PresentState,
    /// Where the canvas is drawn in the window.
    letterbox: Letterbox,
    /// Color the canvas is cleared with before every update.
    background_color: Color,
    /// Color of the window area outside of the canvas.
    letterbox_color: wgpu::Color,
}

impl NativeWindow {
    /// Create the platform window, it's not set up for drawing yet.
    pub(crate) fn create_window(
        config: &Config,
        event_loop: &ActiveEventLoop,
    ) -> Result<winit::window::Window> {
        #[cfg(target_arch = "wasm32")]
        let (window_width, window_height) = config.window_size();

        #[allow(unused_mut)]
        let mut window_attributes = Self::window_attributes(config);

        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::{wasm_bindgen::JsCast, HtmlCanvasElement};
            use winit::platform::web::WindowAttributesExtWebSys;

            // Find a canvas the winit window can be attached to
            let canvas = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id("pixdraw"))
                .and_then(|canvas| canvas.dyn_into::<HtmlCanvasElement>().ok());

            // If the canvas is not found a new one will be created
            window_attributes = window_attributes
                .with_canvas(canvas)
                // Add the canvas to the web page
                .with_append(true)
                // Handle all input events
                .with_prevent_default(true);
        }

        // Spawn a new window using the event loop
        let window = event_loop
            .create_window(window_attributes)
            .into_diagnostic()
            .wrap_err("Error creating window")?;

        // Ensure the pixels are not rendered with wrong filtering and that the size is correct
        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowExtWebSys;

            if let Some(style) = window.canvas().map(|canvas| canvas.style()) {
                style
                    .set_css_text(&format!(
                        "image-rendering: pixelated; outline: none; border: none; width: {window_width}px; height: {window_height}px"
                    ));
            }
        }

        Ok(window)
    }

    /// Properties of the platform window.
    ///
    /// There's no minimum size, a window smaller than the canvas shows it scaled down.
    fn window_attributes(config: &Config) -> WindowAttributes {
        let (window_width, window_height) = config.window_size();

        WindowAttributes::default()
            .with_title(&config.title)
            .with_resizable(config.resizable)
            // Apply scaling for the requested size
            .with_inner_size(PhysicalSize::new(window_width, window_height))
    }

    /// Set up the GPU on the window.
    pub(crate) async fn new(config: Config, window: winit::window::Window) -> Result<Self> {
        // Wrap the window in an atomic reference counter so it can be shared with the surface
        let window = Arc::new(window);

        let (canvas_width, canvas_height) = config.canvas_size();
        let PhysicalSize {
            width: screen_width,
            height: screen_height,
        } = window.inner_size();

        // Create a surface on the window
        let gpu = Gpu::new(config.vsync, screen_width, screen_height, Arc::clone(&window))
            .await
            .wrap_err("Error setting up the GPU")?;

        let present = PresentState::new(canvas_width, canvas_height, &gpu.device);

        let (surface_width, surface_height) = gpu.screen_size();
        let letterbox = Letterbox::new(canvas_width, canvas_height, surface_width, surface_height);

        let state = WindowState::new(
            canvas_width,
            canvas_height,
            config.asset_source,
            Audio::new(),
        );

        log::info!("Opened window '{}' with a {canvas_width}x{canvas_height} canvas", config.title);

        Ok(Self {
            state,
            window,
            gpu,
            present,
            letterbox,
            background_color: config.background_color,
            letterbox_color: to_wgpu_color(config.letterbox_color),
        })
    }

    /// Handle an event of the platform window.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            // Resize the render surface, on the web also when the canvas element changes size
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.gpu.resize(*width, *height);

                let (screen_width, screen_height) = self.gpu.screen_size();
                self.letterbox = self.letterbox.resized(screen_width, screen_height);

                // On MacOS the window needs to be redrawn manually after resizing
                #[cfg(target_os = "macos")]
                self.window.request_redraw();
            }
            // Handle other window events with the input manager
            event => {
                let letterbox = &self.letterbox;

                self.state
                    .input
                    .handle_event(event, |x, y| letterbox.map_coordinate(x, y));
            }
        }
    }

    /// Prepare the canvas for the next update.
    pub(crate) fn begin_frame(&mut self) {
        self.state.begin_frame(self.background_color);
    }

    /// Reset the input of the update that just happened.
    pub(crate) fn finish_frame(&mut self) {
        self.state.finish_frame();
    }

    /// Whether the update loop should stop.
    pub(crate) const fn close_requested(&self) -> bool {
        self.state.close_requested
    }

    /// Ask the platform for a new frame.
    pub(crate) fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Draw the canvas to the window.
    pub(crate) fn render(&mut self) {
        profiling::scope!("Render");

        self.present
            .upload(&self.state.canvas, &self.gpu.device, &self.gpu.queue);

        // Skip the frame when the surface is not available
        let Some(mut frame) = self.gpu.start() else {
            return;
        };

        self.present
            .render(&mut frame, &self.letterbox, self.letterbox_color);

        frame.present();
    }
}

impl Platform for NativeWindow {
    #[inline]
    fn state(&self) -> &WindowState {
        &self.state
    }

    #[inline]
    fn state_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        log::debug!("Setting fullscreen to {fullscreen}");

        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    #[inline]
    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    #[inline]
    fn show_cursor(&mut self, show: bool) {
        self.window.set_cursor_visible(show);
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::{PhysicalSize, Size};

    use super::NativeWindow;
    use crate::config::Config;

    #[test]
    fn window_can_shrink_below_canvas() {
        let config = Config::default()
            .with_title("Scaled")
            .with_size(320, 240)
            .with_scaling(2);
        let attributes = NativeWindow::window_attributes(&config);

        assert_eq!(attributes.title, "Scaled");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Physical(PhysicalSize::new(640, 480)))
        );
        assert_eq!(attributes.min_inner_size, None);
    }
}
