//! Application state and input dispatch
//!
//! Two modes share one window: naming the map in the text field, and
//! editing its polygons. Return switches between them.

use macroquad::prelude::{Color, GREEN, WHITE};
use crate::config::EditorConfig;
use crate::editor::{Camera, MapEditor};
use crate::math::{heading, snap_to_angle, Vec2};
use crate::ui::{Button, FrameInput, HeldKeys, Rect, TextField, style as field_style};
use crate::world::{open_map, save_named, VectorMap};

/// Prompt shown in the empty name field
pub const NAME_PROMPT: &str = "Map Name?";

/// Position of the name field's text area
const FIELD_X: f32 = 10.0;
const FIELD_Y: f32 = 10.0;

/// Angle step for Shift-constrained segments, in degrees
const SNAP_STEP: f32 = 15.0;

/// Which input the window is routing keys to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Entering the map name
    Naming,
    /// Placing polygon vertices
    Editing,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Naming => "NAME",
            Mode::Editing => "EDIT",
        }
    }

    pub fn cursor_color(&self) -> Color {
        match self {
            Mode::Naming => WHITE,
            Mode::Editing => GREEN,
        }
    }

    fn toggled(self) -> Mode {
        match self {
            Mode::Naming => Mode::Editing,
            Mode::Editing => Mode::Naming,
        }
    }
}

/// What the main loop should do after a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
}

/// Main application state
pub struct AppState {
    pub mode: Mode,
    pub camera: Camera,
    /// Name of the map last opened from the text field
    pub map_file: String,
    pub editor: MapEditor,
    /// Map name field
    pub input: TextField,
    pub config: EditorConfig,
    /// Shift held: new segments snap to `SNAP_STEP` headings
    pub snap_angles: bool,
    /// Status message (shown in status bar)
    pub status_message: Option<(String, f64)>, // (message, expiry_time)
    /// Time of the current frame in seconds
    clock: f64,
}

impl AppState {
    pub fn new(config: EditorConfig, screen_width: f32) -> Self {
        let rect = Rect::new(FIELD_X, FIELD_Y, field_width(screen_width), config.font_size);
        Self {
            mode: Mode::Naming,
            camera: Camera::new(),
            map_file: String::new(),
            editor: MapEditor::new(VectorMap::default()),
            input: TextField::new(NAME_PROMPT, rect),
            config,
            snap_angles: false,
            status_message: None,
            clock: 0.0,
        }
    }

    /// Pre-fill the name field and open that map
    pub fn with_map_name(mut self, name: &str) -> Self {
        self.input.set_text(name);
        self.map_file = name.trim().to_string();
        self.open_map();
        self
    }

    /// Start a frame at time `now`, resizing the name field to the window
    pub fn begin_frame(&mut self, now: f64, screen_width: f32) {
        self.clock = now;
        self.input.rect.w = field_width(screen_width);
    }

    /// Per-frame update: pan the camera with the arrow keys
    pub fn update(&mut self, held: &HeldKeys) {
        self.snap_angles = held.shift;

        // Arrows move the caret while the name is being typed
        if self.input.focused {
            return;
        }
        let speed = self.config.scroll_speed;
        if held.left {
            self.camera.pan(-speed, 0.0);
        }
        if held.right {
            self.camera.pan(speed, 0.0);
        }
        if held.up {
            self.camera.pan(0.0, -speed);
        }
        if held.down {
            self.camera.pan(0.0, speed);
        }
    }

    /// Route typed text and edit keys to the focused name field
    pub fn handle_text(&mut self, input: &FrameInput) {
        if self.mode != Mode::Naming || !self.input.focused {
            return;
        }
        for &c in &input.chars {
            self.input.insert_char(c);
        }
        for &key in &input.edit_keys {
            self.input.apply(key, input.held.shift);
        }
    }

    /// React to a single button press at screen position `mouse`
    pub fn button_down(&mut self, button: Button, mouse: Vec2) -> AppAction {
        let mut action = AppAction::None;

        match self.mode {
            Mode::Editing => match button {
                Button::Escape => action = AppAction::Quit,
                Button::MouseLeft => {
                    let world = self.placement_point(mouse);
                    self.editor.click(world);
                }
                Button::MouseRight => self.editor.undo_line(),
                Button::Char('c') => self.editor.close_poly(),
                Button::Char('u') => self.editor.undo_poly(),
                Button::Char('s') => self.save_map(),
                _ => {}
            },
            Mode::Naming => match button {
                Button::Escape => {
                    // Escape first releases the field, then quits
                    if self.input.focused {
                        self.input.focused = false;
                    } else {
                        action = AppAction::Quit;
                    }
                }
                Button::MouseLeft => {
                    if self.input.under_point(mouse.x, mouse.y) {
                        self.input.focused = true;
                        if self.input.is_default() {
                            self.input.set_text("");
                        }
                    } else {
                        if self.input.focused && self.input.text().is_empty() {
                            self.input.restore_default();
                        }
                        self.input.focused = false;
                    }
                }
                Button::Return => {
                    if self.input.focused {
                        self.map_file = self.input.text().trim().to_string();
                    }
                    self.open_map();
                    self.input.focused = false;
                }
                _ => {}
            },
        }

        if button == Button::Return {
            self.mode = self.mode.toggled();
            log::debug!("Mode: {}", self.mode.label());
        }

        action
    }

    /// World position a click at screen `mouse` would place
    pub fn placement_point(&self, mouse: Vec2) -> Vec2 {
        let world = self.camera.screen_to_world(mouse);
        match self.editor.last_vertex() {
            Some(last) if self.snap_angles => snap_to_angle(last, world, SNAP_STEP),
            _ => world,
        }
    }

    /// Length and heading of the segment the next click would add
    pub fn segment_info(&self, mouse: Vec2) -> Option<String> {
        let last = self.editor.last_vertex()?;
        let next = self.placement_point(mouse);
        Some(format!(
            "len {:.1}  hdg {:.0}°",
            (next - last).len(),
            heading(last, next)
        ))
    }

    /// Open `map_file` from the maps directory into the editor
    pub fn open_map(&mut self) {
        match open_map(&self.config.maps_dir, &self.map_file) {
            Ok(opened) => {
                let mut msg = if opened.created {
                    format!("New map {}", opened.path.display())
                } else {
                    let verb = if opened.map.name == self.editor.map.name { "Reopened" } else { "Opened" };
                    format!(
                        "{} {} ({} polygons)",
                        verb,
                        opened.path.display(),
                        opened.map.polys.len()
                    )
                };
                if self.editor.dirty {
                    msg.push_str(" (unsaved edits discarded)");
                    log::warn!("Discarding unsaved edits to {:?}", self.editor.map.name);
                }
                log::info!("{}", msg);
                self.editor.replace_map(opened.map);
                self.set_status(&msg);
            }
            Err(e) => {
                log::warn!("Open failed for {:?}: {}", self.map_file, e);
                self.set_status(&format!("Open failed: {}", e));
            }
        }
    }

    /// Save the editor's map into the maps directory
    pub fn save_map(&mut self) {
        match save_named(&self.editor.map, &self.config.maps_dir) {
            Ok(path) => {
                self.editor.dirty = false;
                log::info!("Saved {}", path.display());
                self.set_status(&format!("Saved to {}", path.display()));
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                self.set_status(&format!("Save failed: {}", e));
            }
        }
    }

    /// Set a status message shown for the configured duration
    pub fn set_status(&mut self, message: &str) {
        let expiry = self.clock + self.config.status_duration;
        self.status_message = Some((message.to_string(), expiry));
    }

    /// Get current status message if not expired
    pub fn get_status(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if self.clock < *expiry => Some(msg),
            _ => None,
        }
    }

    /// Default status bar text: mode, map and polygon count
    pub fn summary(&self) -> String {
        let name = if self.editor.map.name.is_empty() {
            "untitled"
        } else {
            self.editor.map.name.as_str()
        };
        format!(
            "[{}] {}  polys: {}  verts: {}",
            self.mode.label(),
            name,
            self.editor.map.polys.len(),
            self.editor.map.vertex_count()
        )
    }
}

fn field_width(screen_width: f32) -> f32 {
    (screen_width - field_style::PADDING * 4.0).max(0.0)
}
