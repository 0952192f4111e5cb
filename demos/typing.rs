//! Type text and show it scaled, 'Backspace' removes the last character.
//!
//! Press 'Escape' to exit.

use pixdraw::{Color, Config, Key, Window};

/// Run the demo.
fn main() -> miette::Result<()> {
    let mut text = String::new();

    pixdraw::run(
        Config::default().with_title("Typing").with_size(320, 120).with_scaling(3),
        move |window: &mut dyn Window| {
            if window.was_key_pressed(Key::Escape) {
                window.close();
            }

            if window.was_key_pressed(Key::Backspace) {
                text.pop();
            }
            if window.was_key_pressed(Key::Enter) || window.was_key_pressed(Key::KpEnter) {
                text.push('\n');
            }
            text.push_str(window.characters());

            // Center the text in the window
            let scale = 2.0;
            let (width, height) = window.get_scaled_text_size(&text, scale);
            let (canvas_width, canvas_height) = window.size();
            let x = (canvas_width - width) / 2;
            let y = (canvas_height - height) / 2;

            window.draw_rect(x - 2, y - 2, width + 4, height + 4, Color::DARK_GRAY);
            window.draw_scaled_text(&text, x, y, scale, Color::WHITE);
        },
    )
}
