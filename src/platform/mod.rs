//! Platform layer: SDL2 bootstrap, asset loading and input sampling
//!
//! Thin wrapping around SDL2. Long-lived handles (window, canvas, font,
//! background texture) are created once in the driver and dropped in
//! reverse order by scope; everything here is per-call.

use std::time::Duration;

use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, VideoSubsystem};

use crate::consts::{PLAY_HEIGHT, PLAY_WIDTH, WINDOW_TITLE};
use crate::sim::TickInput;

/// Build the centered window and an accelerated canvas with the logical
/// resolution fixed to the play area.
pub fn create_canvas(video: &VideoSubsystem, vsync: bool) -> Result<Canvas<Window>, String> {
    let window = video
        .window(WINDOW_TITLE, PLAY_WIDTH as u32, PLAY_HEIGHT as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut builder = window.into_canvas().accelerated();
    if vsync {
        builder = builder.present_vsync();
    }
    let mut canvas = builder.build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(PLAY_WIDTH as u32, PLAY_HEIGHT as u32)
        .map_err(|e| e.to_string())?;

    Ok(canvas)
}

/// Load a texture, logging failure instead of propagating it. The
/// renderer treats an absent texture as "skip the draw".
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    log::info!("Loading {path}");
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(err) => {
            log::error!("Load texture {path}: {err}");
            None
        }
    }
}

/// Drain pending events and sample held keys into this frame's input
pub fn sample_input(events: &mut EventPump) -> TickInput {
    let mut input = TickInput::default();

    for event in events.poll_iter() {
        match event {
            Event::Quit { .. } => input.quit = true,
            Event::KeyDown {
                keycode: Some(Keycode::Space),
                ..
            } => input.reset = true,
            Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => input.quit = true,
            _ => {}
        }
    }

    let keys = events.keyboard_state();
    input.move_left = keys.is_scancode_pressed(Scancode::Left);
    input.move_right = keys.is_scancode_pressed(Scancode::Right);

    input
}

/// Block until any key or a quit event dismisses the terminal screen,
/// polling every 100 ms.
pub fn wait_for_dismiss(events: &mut EventPump) {
    loop {
        while let Some(event) = events.poll_event() {
            match event {
                Event::Quit { .. } | Event::KeyDown { .. } => return,
                _ => {}
            }
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}
