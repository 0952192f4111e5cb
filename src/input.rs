//! Handle different input events.

use glam::IVec2;
use hashbrown::HashMap;
use smallvec::SmallVec;
use winit::{
    event::{ElementState, MouseScrollDelta, WindowEvent},
    keyboard::PhysicalKey,
};

use crate::key::{Key, MouseButton, MouseClick};

/// Amount of pixels scrolled that count as a single wheel notch.
const PIXELS_PER_WHEEL_NOTCH: f32 = 100.0;

/// Any button state.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ButtonState {
    /// Whether the button is being held down right now.
    is_down: bool,
    /// Whether the button went down at any time during this frame.
    pressed_this_frame: bool,
}

impl ButtonState {
    /// Handle the state if the button is currently pressed.
    pub(crate) fn handle_event(&mut self, pressed: bool) {
        // Key repeats also count as presses
        if pressed {
            self.pressed_this_frame = true;
        }

        self.is_down = pressed;
    }

    /// Forget everything that only applies to the frame that just finished.
    pub(crate) fn finish_frame(&mut self) {
        self.pressed_this_frame = false;
    }

    /// Whether the button is being held down now.
    pub(crate) const fn held(&self) -> bool {
        self.is_down
    }

    /// Whether the button went down during the last frame, even if it was released again.
    pub(crate) const fn pressed(&self) -> bool {
        self.pressed_this_frame
    }
}

/// Manager for handling different input events.
///
/// Everything is in canvas pixels, mapping window coordinates is done by the caller.
#[derive(Debug, Default)]
pub(crate) struct Input {
    /// Mouse position.
    mouse: IVec2,
    /// Mouse button states.
    mouse_buttons: HashMap<MouseButton, ButtonState>,
    /// All keyboard buttons.
    keys: HashMap<Key, ButtonState>,
    /// Clicks during this frame.
    clicks: SmallVec<[MouseClick; 4]>,
    /// Text typed during this frame.
    characters: String,
    /// Horizontal scroll during this frame in wheel notches.
    scroll_delta_x: f32,
    /// Vertical scroll during this frame in wheel notches.
    scroll_delta_y: f32,
}

impl Input {
    /// Setup the input.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Handle a winit window event.
    ///
    /// `to_canvas` maps a physical window position to a canvas pixel.
    pub(crate) fn handle_event(
        &mut self,
        event: &WindowEvent,
        to_canvas: impl FnOnce(f64, f64) -> IVec2,
    ) {
        match event {
            // Handle keyboard buttons
            WindowEvent::KeyboardInput { event, .. } => {
                let is_down = event.state == ElementState::Pressed;

                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = Key::from_key_code(key_code) {
                        self.key_event(key, is_down);
                    }
                }

                // Typed text is only sent with the press
                if is_down {
                    if let Some(text) = &event.text {
                        self.type_text(text);
                    }
                }
            }
            // Handle mouse cursor position
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_moved(to_canvas(position.x, position.y));
            }
            // Handle mouse scroll wheel
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(position) => (
                        position.x as f32 / PIXELS_PER_WHEEL_NOTCH,
                        position.y as f32 / PIXELS_PER_WHEEL_NOTCH,
                    ),
                };

                self.scroll(x, y);
            }
            // Handle mouse buttons
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = MouseButton::from_winit(*button) {
                    self.mouse_button_event(button, *state == ElementState::Pressed);
                }
            }
            // Releasing keys while the window is unfocused would never reach us
            WindowEvent::Focused(false) => self.release_all(),
            _ => (),
        }
    }

    /// Register a key going up or down.
    pub(crate) fn key_event(&mut self, key: Key, is_down: bool) {
        self.keys.entry(key).or_default().handle_event(is_down);
    }

    /// Register typed text, control characters are ignored.
    pub(crate) fn type_text(&mut self, text: &str) {
        self.characters
            .extend(text.chars().filter(|ch| !ch.is_control()));
    }

    /// Register the mouse moving to a canvas pixel.
    pub(crate) fn mouse_moved(&mut self, position: IVec2) {
        self.mouse = position;
    }

    /// Register a mouse button going up or down, a press is a click at the current mouse position.
    pub(crate) fn mouse_button_event(&mut self, button: MouseButton, is_down: bool) {
        if is_down {
            self.clicks.push(MouseClick {
                x: self.mouse.x,
                y: self.mouse.y,
                button,
            });
        }

        self.mouse_buttons
            .entry(button)
            .or_default()
            .handle_event(is_down);
    }

    /// Register scrolling in wheel notches.
    pub(crate) fn scroll(&mut self, x: f32, y: f32) {
        self.scroll_delta_x += x;
        self.scroll_delta_y += y;
    }

    /// Reset all state that only applies to a single frame.
    ///
    /// Must be called once after every update.
    pub(crate) fn finish_frame(&mut self) {
        self.mouse_buttons
            .values_mut()
            .for_each(ButtonState::finish_frame);
        self.keys.values_mut().for_each(ButtonState::finish_frame);

        self.clicks.clear();
        self.characters.clear();
        self.scroll_delta_x = 0.0;
        self.scroll_delta_y = 0.0;
    }

    /// Release every key and button without resetting the presses of this frame.
    pub(crate) fn release_all(&mut self) {
        self.mouse_buttons
            .values_mut()
            .chain(self.keys.values_mut())
            .for_each(|state| state.is_down = false);
    }

    /// Whether a key went down during the last frame.
    #[must_use]
    pub(crate) fn key_pressed(&self, key: Key) -> bool {
        self.keys.get(&key).is_some_and(ButtonState::pressed)
    }

    /// Whether a key is held down.
    #[must_use]
    pub(crate) fn key_held(&self, key: Key) -> bool {
        self.keys.get(&key).is_some_and(ButtonState::held)
    }

    /// Whether a mouse button is held down.
    #[must_use]
    pub(crate) fn mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_buttons
            .get(&button)
            .is_some_and(ButtonState::held)
    }

    /// Mouse position in canvas pixels.
    #[must_use]
    pub(crate) const fn mouse(&self) -> IVec2 {
        self.mouse
    }

    /// Clicks of the last frame.
    #[must_use]
    pub(crate) fn clicks(&self) -> &[MouseClick] {
        &self.clicks
    }

    /// Text typed during the last frame.
    #[must_use]
    pub(crate) fn characters(&self) -> &str {
        &self.characters
    }

    /// Horizontal scroll of the last frame in wheel notches.
    #[must_use]
    pub(crate) const fn scroll_delta_x(&self) -> f32 {
        self.scroll_delta_x
    }

    /// Vertical scroll of the last frame in wheel notches.
    #[must_use]
    pub(crate) const fn scroll_delta_y(&self) -> f32 {
        self.scroll_delta_y
    }
}
