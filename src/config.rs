//! Window configuration.

use crate::{assets::AssetSource, color::Color};

/// Initial window configuration passed to [`crate::run`].
///
/// There's two ways to initialize the config:
///
/// # Example
///
/// ```rust
/// # use pixdraw::Config;
/// Config {
///   title: "My Game".to_owned(),
///   ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```rust
/// # use pixdraw::Config;
/// Config::default().with_title("My Game").with_size(320, 240);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Name in the title bar.
    ///
    /// Defaults to `"pixdraw"`.
    pub title: String,
    /// Amount of horizontal pixels of the canvas.
    ///
    /// Defaults to `800`.
    pub width: u32,
    /// Amount of vertical pixels of the canvas.
    ///
    /// Defaults to `600`.
    pub height: u32,
    /// Integer factor applied to the canvas size for the requested window size.
    ///
    /// Defaults to `1`.
    pub scaling: u32,
    /// Whether the window can be resized by the user.
    ///
    /// The canvas keeps its size, it's scaled to fit the window.
    ///
    /// Defaults to `true`.
    pub resizable: bool,
    /// Color the canvas is cleared with before every update.
    ///
    /// Defaults to [`Color::BLACK`].
    pub background_color: Color,
    /// Color of the window area outside of the canvas.
    ///
    /// Visible when the window doesn't fit an integer multiple of the canvas size.
    ///
    /// Defaults to [`Color::BLACK`].
    pub letterbox_color: Color,
    /// Wait for the display before presenting a frame.
    ///
    /// Defaults to `true`.
    pub vsync: bool,
    /// How many times per second the update function is called.
    ///
    /// Defaults to `60`.
    pub updates_per_second: u32,
    /// Where files passed by path are read from.
    ///
    /// Defaults to the current directory.
    pub asset_source: AssetSource,
}

impl Config {
    /// Set the name in the title bar.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();

        self
    }

    /// Set the amount of pixels of the canvas.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;

        self
    }

    /// Set the factor applied to the canvas size for the requested window size.
    pub fn with_scaling(mut self, scaling: u32) -> Self {
        self.scaling = scaling;

        self
    }

    /// Set whether the window can be resized by the user.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;

        self
    }

    /// Set the color the canvas is cleared with before every update.
    pub fn with_background_color(mut self, background_color: Color) -> Self {
        self.background_color = background_color;

        self
    }

    /// Set the color of the window area outside of the canvas.
    pub fn with_letterbox_color(mut self, letterbox_color: Color) -> Self {
        self.letterbox_color = letterbox_color;

        self
    }

    /// Set whether to wait for the display before presenting a frame.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;

        self
    }

    /// Set how many times per second the update function is called.
    pub fn with_updates_per_second(mut self, updates_per_second: u32) -> Self {
        self.updates_per_second = updates_per_second;

        self
    }

    /// Set where files passed by path are read from.
    pub fn with_asset_source(mut self, asset_source: AssetSource) -> Self {
        self.asset_source = asset_source;

        self
    }

    /// Size of the window in physical pixels.
    pub(crate) fn window_size(&self) -> (u32, u32) {
        let scaling = self.scaling.max(1);
        let (width, height) = self.canvas_size();

        (width * scaling, height * scaling)
    }

    /// Size of the canvas, never zero.
    pub(crate) fn canvas_size(&self) -> (u32, u32) {
        (self.width.max(1), self.height.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "pixdraw".to_owned(),
            width: 800,
            height: 600,
            scaling: 1,
            resizable: true,
            background_color: Color::BLACK,
            letterbox_color: Color::BLACK,
            vsync: true,
            updates_per_second: 60,
            asset_source: AssetSource::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::color::Color;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.title, "pixdraw");
        assert_eq!(config.canvas_size(), (800, 600));
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.background_color, Color::BLACK);
        assert_eq!(config.updates_per_second, 60);
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .with_title("Test")
            .with_size(320, 200)
            .with_scaling(3)
            .with_background_color(Color::BLUE)
            .with_updates_per_second(30);

        assert_eq!(config.title, "Test");
        assert_eq!(config.canvas_size(), (320, 200));
        assert_eq!(config.window_size(), (960, 600));
        assert_eq!(config.background_color, Color::BLUE);
        assert_eq!(config.updates_per_second, 30);
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let config = Config::default().with_size(0, 10).with_scaling(0);

        assert_eq!(config.canvas_size(), (1, 10));
        assert_eq!(config.window_size(), (1, 10));
    }
}
