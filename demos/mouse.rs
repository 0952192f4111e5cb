//! Follow the mouse with a circle, the wheel changes its size.
//!
//! Press 'Escape' to exit.

use pixdraw::{Color, Config, Key, MouseButton, Window};

/// Run the demo.
fn main() -> miette::Result<()> {
    let mut radius = 10.0_f32;

    pixdraw::run(
        Config::default().with_title("Mouse").with_size(200, 150).with_scaling(4),
        move |window: &mut dyn Window| {
            if window.was_key_pressed(Key::Escape) {
                window.close();
            }

            // Hide the cursor while the right button is held
            window.show_cursor(!window.is_mouse_down(MouseButton::Right));

            radius = (radius + window.mouse_wheel_y()).clamp(1.0, 50.0);
            let radius = radius as i32;

            let (x, y) = window.mouse_position();
            let color = if window.is_mouse_down(MouseButton::Left) {
                Color::RED
            } else {
                Color::LIGHT_BLUE
            };
            window.fill_ellipse(x - radius, y - radius, radius * 2 + 1, radius * 2 + 1, color);
            window.draw_ellipse(x - radius, y - radius, radius * 2 + 1, radius * 2 + 1, Color::WHITE);

            window.draw_text(&format!("({x}, {y}) r={radius}"), 2, 2, Color::WHITE);
        },
    )
}
