//! Brick Breaker entry point
//!
//! Bootstraps SDL2, loads assets, then runs the frame loop:
//! sample input -> step simulation -> render -> pace, until a terminal
//! phase ends the game.

use std::process;
use std::time::{Duration, Instant};

use brick_breaker::consts::*;
use brick_breaker::sim::{tick, GamePhase, GameState};
use brick_breaker::{platform, render, Settings};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("Fatal: {err}");
        process::exit(-1);
    }
}

fn run() -> Result<(), String> {
    let settings = Settings::load();

    let sdl = sdl2::init()?;
    let video = sdl.video()?;
    let _image = sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;
    let ttf = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let mut canvas = platform::create_canvas(&video, settings.vsync)?;
    let texture_creator = canvas.texture_creator();

    // The background is optional; the font is not
    let background = platform::load_texture(&texture_creator, &settings.background_path);
    let font = ttf
        .load_font(&settings.font_path, FONT_SIZE)
        .map_err(|e| e.to_string())?;

    let mut events = sdl.event_pump()?;
    let mut state = GameState::new();
    let frame_budget = Duration::from_millis(1000 / TARGET_FPS as u64);

    log::info!("{WINDOW_TITLE} running");

    loop {
        let frame_start = Instant::now();

        let input = platform::sample_input(&mut events);
        tick(&mut state, &input);

        render::draw_frame(
            &mut canvas,
            &texture_creator,
            &font,
            background.as_ref(),
            &state,
        )?;

        // Quit/escape exits silently; a lost last life or a cleared
        // board shows the overlay and waits for a key
        let show_overlay =
            state.phase == GamePhase::Won || (state.phase.is_terminal() && state.lives <= 0);
        if show_overlay {
            render::draw_overlay(&mut canvas, &texture_creator, &font, &state)?;
        }

        canvas.present();

        if state.phase.is_terminal() {
            if show_overlay {
                platform::wait_for_dismiss(&mut events);
            }
            log::info!("Game ended: {:?}", state.phase);
            break;
        }

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
