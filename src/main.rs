//! Vector Map Editor: click-to-place polygon map editor
//!
//! - Type a map name and press Return to open (or start) it
//! - Left click places vertices, right click removes the last one
//! - `c` closes the polygon, `u` removes the last polygon, `s` saves
//! - Arrow keys scroll, Shift snaps segments to 15 degree headings

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod math;
mod world;
mod ui;
mod editor;
mod config;
mod app;

use macroquad::prelude::*;
use app::{AppAction, AppState};
use config::{EditorConfig, CONFIG_FILE};
use editor::draw_map;
use ui::{FrameInput, Rect, draw_mouse_cursor, draw_status_bar};

/// Status bar height at the bottom of the window
const STATUS_HEIGHT: f32 = 22.0;

fn window_conf() -> Conf {
    // Logging is not up yet; main reports config problems
    let (config, _) = EditorConfig::load(CONFIG_FILE);
    Conf {
        window_title: format!("{} v{}", config.window_title, VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, warning) = EditorConfig::load(CONFIG_FILE);
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    log::info!("=== Vector Map Editor v{} ===", VERSION);
    log::info!("Maps directory: {}", config.maps_dir.display());

    let mut app = AppState::new(config, screen_width());
    if let Some(name) = std::env::args().nth(1) {
        app = app.with_map_name(&name);
    }

    show_mouse(false);

    loop {
        app.begin_frame(get_time(), screen_width());

        let input = FrameInput::poll();
        let mouse = input.mouse.position();

        app.update(&input.held);

        let mut quit = false;
        for &button in &input.buttons {
            if app.button_down(button, mouse) == AppAction::Quit {
                quit = true;
            }
        }
        if quit {
            log::info!("Exiting");
            break;
        }
        app.handle_text(&input);

        draw_frame(&app, mouse);

        next_frame().await;
    }
}

/// Draw one frame: map, name field, status bar, cursor
fn draw_frame(app: &AppState, mouse: math::Vec2) {
    clear_background(Color::from_rgba(30, 30, 35, 255));

    draw_map(&app.editor, &app.camera, app.placement_point(mouse));

    app.input.draw(app.config.font_size);

    let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
    let left = match app.get_status() {
        Some(msg) => msg.to_string(),
        None => app.summary(),
    };
    let cam = format!("cam {:.0}, {:.0}", app.camera.x, app.camera.y);
    let right = match app.segment_info(mouse) {
        Some(info) => format!("{}   {}", info, cam),
        None => cam,
    };
    draw_status_bar(screen.slice_bottom(STATUS_HEIGHT), &left, &right);

    draw_mouse_cursor(mouse.x, mouse.y, app.mode.cursor_color());
}
