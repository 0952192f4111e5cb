//! Draw every primitive, randomized shapes are added when clicking.
//!
//! Press 'F' to toggle fullscreen and 'Escape' to exit.

use pixdraw::{Color, Config, Key, MouseButton, Window};

/// Colors the random shapes pick from.
const COLORS: [Color; 6] = [
    Color::LIGHT_RED,
    Color::LIGHT_GREEN,
    Color::LIGHT_BLUE,
    Color::LIGHT_YELLOW,
    Color::LIGHT_PURPLE,
    Color::LIGHT_CYAN,
];

/// Shape placed by the user.
struct Shape {
    /// Left of the bounding box.
    x: i32,
    /// Top of the bounding box.
    y: i32,
    /// Width of the bounding box.
    width: i32,
    /// Height of the bounding box.
    height: i32,
    /// Whether the ellipse is filled.
    filled: bool,
    /// Color.
    color: Color,
}

/// Run the demo.
fn main() -> miette::Result<()> {
    let mut shapes: Vec<Shape> = Vec::new();

    pixdraw::run(
        Config::default().with_title("Shapes").with_size(320, 240).with_scaling(3),
        move |window: &mut dyn Window| {
            if window.was_key_pressed(Key::Escape) {
                window.close();
            }

            if window.was_key_pressed(Key::F) {
                let fullscreen = window.is_fullscreen();
                window.set_fullscreen(!fullscreen);
            }

            // Place a random ellipse centered on every click
            for click in window.clicks().to_vec() {
                let width = fastrand::i32(3..40);
                let height = fastrand::i32(3..40);

                shapes.push(Shape {
                    x: click.x - width / 2,
                    y: click.y - height / 2,
                    width,
                    height,
                    filled: click.button == MouseButton::Left,
                    color: COLORS[fastrand::usize(..COLORS.len())],
                });
            }

            if window.was_key_pressed(Key::Backspace) {
                shapes.clear();
            }

            // Fixed primitives
            window.draw_rect(10, 10, 60, 40, Color::WHITE);
            window.fill_rect(80, 10, 60, 40, Color::DARK_GREEN);
            window.draw_ellipse(150, 10, 60, 40, Color::YELLOW);
            window.fill_ellipse(220, 10, 60, 40, Color::BROWN);
            window.draw_line(10, 60, 310, 90, Color::GRAY);
            window.draw_point(160, 100, Color::RED);

            for shape in &shapes {
                if shape.filled {
                    window.fill_ellipse(shape.x, shape.y, shape.width, shape.height, shape.color);
                } else {
                    window.draw_ellipse(shape.x, shape.y, shape.width, shape.height, shape.color);
                }
            }

            window.draw_text(
                "Left click: filled\nRight click: outline\nBackspace: clear",
                10,
                200,
                Color::LIGHT_GRAY,
            );
        },
    )
}
