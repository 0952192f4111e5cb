//! Draw and handle input through the window interface without opening a window.

use pixdraw::{
    ellipse, AssetSource, Color, EmbeddedRawAsset, HeadlessWindow, Image, Key, MouseButton,
    MouseClick, Window, RGBA8,
};

/// Encode pixels as a PNG file.
fn png_bytes(width: u32, height: u32, pixels: &[RGBA8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(bytemuck::cast_slice(pixels))
            .unwrap();
    }

    bytes
}

/// Encode a short mono 16 bit PCM WAV file.
fn wav_bytes(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16_u32.to_le_bytes());
    // PCM
    bytes.extend_from_slice(&1_u16.to_le_bytes());
    // Channels
    bytes.extend_from_slice(&1_u16.to_le_bytes());
    // Sample rate
    bytes.extend_from_slice(&44_100_u32.to_le_bytes());
    // Byte rate
    bytes.extend_from_slice(&88_200_u32.to_le_bytes());
    // Block align
    bytes.extend_from_slice(&2_u16.to_le_bytes());
    // Bits per sample
    bytes.extend_from_slice(&16_u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    samples
        .iter()
        .for_each(|sample| bytes.extend_from_slice(&sample.to_le_bytes()));

    bytes
}

/// Embed files with a static lifetime, like `include_bytes!` would.
fn leak_assets(files: Vec<(&'static str, Vec<u8>)>) -> &'static [EmbeddedRawAsset] {
    files
        .into_iter()
        .map(|(path, bytes)| EmbeddedRawAsset {
            path,
            bytes: Box::leak(bytes.into_boxed_slice()),
        })
        .collect::<Vec<_>>()
        .leak()
}

/// All pixels that are not black.
fn lit_pixels(window: &HeadlessWindow) -> Vec<(i32, i32)> {
    let canvas = window.canvas();
    let black = Color::BLACK.to_rgba8();

    (0..canvas.height() as i32)
        .flat_map(|y| (0..canvas.width() as i32).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y) != Some(black))
        .collect()
}

#[test]
fn rect_outline() {
    let mut window = HeadlessWindow::new(8, 8);

    window.run_frames(1, |window| window.draw_rect(1, 1, 3, 3, Color::WHITE));

    let mut expected = vec![
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(lit_pixels(&window), expected);
}

#[test]
fn filled_ellipse_matches_spans() {
    let mut window = HeadlessWindow::new(20, 20);

    window.run_frames(1, |window| window.fill_ellipse(2, 3, 11, 7, Color::WHITE));

    let expected = ellipse::ellipse_area(2, 3, 11, 7)
        .into_iter()
        .flat_map(|(left, right)| (left.x..=right.x).map(move |x| (x, left.y)))
        .collect::<Vec<_>>();
    assert_eq!(lit_pixels(&window), expected);
}

#[test]
fn drawing_outside_is_ignored() {
    let mut window = HeadlessWindow::new(4, 4);

    window.run_frames(1, |window| {
        window.draw_point(-1, 2, Color::WHITE);
        window.draw_line(-10, -10, -2, 30, Color::WHITE);
        window.fill_ellipse(100, 100, 10, 10, Color::WHITE);
    });

    assert!(lit_pixels(&window).is_empty());
}

#[test]
fn inserted_image_is_drawn_and_mirrored() {
    let red = Color::RED.to_rgba8();
    let green = Color::GREEN.to_rgba8();

    let mut window = HeadlessWindow::new(4, 2);
    window.insert_image("pair.png", Image::from_pixels(2, 1, vec![red, green]).unwrap());

    window.run_frames(1, |window| {
        assert_eq!(window.image_size("pair.png").unwrap(), (2, 1));

        window.draw_image_file("pair.png", 0, 0).unwrap();
        // Negative width mirrors inside of the rectangle from x 4 to 2
        window.draw_image_file_to("pair.png", 4, 1, -2, 1, 0).unwrap();
    });

    let canvas = window.canvas();
    assert_eq!(canvas.pixel(0, 0), Some(red));
    assert_eq!(canvas.pixel(1, 0), Some(green));
    assert_eq!(canvas.pixel(2, 1), Some(green));
    assert_eq!(canvas.pixel(3, 1), Some(red));
}

#[test]
fn embedded_png_is_read() {
    let blue = Color::BLUE.to_rgba8();
    let bytes = png_bytes(3, 2, &[blue; 6]);

    let assets = leak_assets(vec![("images/blue.png", bytes)]);

    let mut window = HeadlessWindow::with_asset_source(4, 4, AssetSource::embedded_only(assets));

    window.run_frames(1, |window| {
        assert_eq!(window.image_size("./images/blue.png").unwrap(), (3, 2));
        window
            .draw_image_file_part("images/blue.png", 0, 0, 3, 2, 1, 1, 3, 2, 0)
            .unwrap();

        assert!(window.image_size("images/missing.png").is_err());
    });

    assert_eq!(lit_pixels(&window).len(), 6);
    assert_eq!(window.canvas().pixel(0, 0), Some(Color::BLACK.to_rgba8()));
    assert_eq!(window.canvas().pixel(1, 1), Some(blue));
}

#[test]
fn text_size_and_drawing() {
    let mut window = HeadlessWindow::new(16, 16);

    window.run_frames(1, |window| {
        assert_eq!(window.get_text_size("ab\nc"), (16, 16));
        assert_eq!(window.get_scaled_text_size("ab\nc", 2.0), (32, 32));
        assert_eq!(window.get_text_size(""), (0, 0));

        window.draw_text("|", 0, 0, Color::WHITE);
    });

    let lit = lit_pixels(&window);
    assert_eq!(lit.len(), 12);
    assert!(lit.iter().all(|&(x, y)| x < 8 && y < 8));
}

#[test]
fn mouse_input() {
    let mut window = HeadlessWindow::new(32, 32);
    window.move_mouse(5, 6);
    window.press_mouse(MouseButton::Left);
    window.click(10, 11, MouseButton::Right);
    window.scroll(0.0, 1.0);
    window.scroll(-0.5, 1.0);

    let mut frame = 0;
    window.run_frames(2, |window| {
        if frame == 0 {
            assert_eq!(window.mouse_position(), (10, 11));
            assert!(window.is_mouse_down(MouseButton::Left));
            assert!(!window.is_mouse_down(MouseButton::Right));
            assert_eq!(
                window.clicks(),
                [
                    MouseClick {
                        x: 5,
                        y: 6,
                        button: MouseButton::Left
                    },
                    MouseClick {
                        x: 10,
                        y: 11,
                        button: MouseButton::Right
                    }
                ]
            );
            assert!((window.mouse_wheel_y() - 2.0).abs() < f32::EPSILON);
            assert!((window.mouse_wheel_x() + 0.5).abs() < f32::EPSILON);
        } else {
            assert!(window.clicks().is_empty());
            assert!(window.is_mouse_down(MouseButton::Left));
            assert!(window.mouse_wheel_y().abs() < f32::EPSILON);
        }

        frame += 1;
    });

    assert_eq!(frame, 2);
}

#[test]
fn keyboard_input() {
    let mut window = HeadlessWindow::new(1, 1);
    window.press_key(Key::Escape);
    window.release_key(Key::Escape);
    window.type_text("Hé!");

    window.run_frames(1, |window| {
        assert!(window.was_key_pressed(Key::Escape));
        assert!(!window.is_key_down(Key::Escape));
        assert_eq!(window.characters(), "Hé!");
        assert!(window.was_char_typed('é'));
        assert!(!window.was_char_typed('h'));

        if window.was_key_pressed(Key::Escape) {
            window.close();
        }
    });

    assert!(window.close_requested());
    assert_eq!(window.run_frames(5, |_| ()), 0);
}

#[test]
fn key_names() {
    assert_eq!("kp_0".parse::<Key>().unwrap(), Key::Kp0);
    assert_eq!("ESCAPE".parse::<Key>().unwrap(), Key::Escape);
    assert!("not a key".parse::<Key>().is_err());
}

#[test]
fn saved_png_can_be_decoded() {
    let mut window = HeadlessWindow::new(3, 3);
    window.run_frames(1, |window| window.draw_point(1, 1, Color::YELLOW));

    let path = std::env::temp_dir().join(format!("pixdraw-test-{}.png", std::process::id()));
    window.save_png(&path).unwrap();

    let image = Image::from_png_bytes(&std::fs::read(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(image.pixel(1, 1), Some(Color::YELLOW.to_rgba8()));
    assert_eq!(image.pixel(0, 0), Some(Color::BLACK.to_rgba8()));
}

#[test]
fn embedded_sounds_are_decoded() {
    let samples = (0..256).map(|i| (i * 64) as i16).collect::<Vec<_>>();
    let assets = leak_assets(vec![
        ("sounds/blip.wav", wav_bytes(&samples)),
        ("sounds/noise.wav", b"definitely not a sound file".to_vec()),
    ]);

    let mut window = HeadlessWindow::with_asset_source(1, 1, AssetSource::embedded_only(assets));

    window.run_frames(1, |window| {
        // Decoded once, afterwards taken from the cache
        window.play_sound_file("sounds/blip.wav").unwrap();
        window.play_sound_file("sounds/blip.wav").unwrap();

        assert!(window.play_sound_file("sounds/missing.wav").is_err());

        // Without the audio feature sounds are only read
        #[cfg(feature = "audio")]
        assert!(window.play_sound_file("sounds/noise.wav").is_err());
        #[cfg(not(feature = "audio"))]
        window.play_sound_file("sounds/noise.wav").unwrap();
    });
}
