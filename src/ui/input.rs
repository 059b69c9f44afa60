//! Input state for one frame
//!
//! Everything the app reacts to is collected up front, so the editing
//! logic never talks to macroquad directly.

use macroquad::prelude::*;

/// Discrete presses dispatched to `AppState::button_down`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Escape,
    Return,
    MouseLeft,
    MouseRight,
    /// Letter key, lowercase
    Char(char),
}

/// Keys that edit the focused text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    SelectAll,
}

/// Keys held down this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shift: bool,
}

/// Mouse position and button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool,  // Just pressed this frame
    pub right_pressed: bool, // Just pressed this frame
}

impl MouseState {
    pub fn position(&self) -> crate::math::Vec2 {
        crate::math::Vec2::new(self.x, self.y)
    }
}

/// Letter keys bound to editor commands
const COMMAND_KEYS: [(KeyCode, char); 3] = [
    (KeyCode::C, 'c'),
    (KeyCode::U, 'u'),
    (KeyCode::S, 's'),
];

/// Snapshot of all input for the current frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub mouse: MouseState,
    pub held: HeldKeys,
    pub buttons: Vec<Button>,
    /// Printable characters typed this frame
    pub chars: Vec<char>,
    pub edit_keys: Vec<EditKey>,
}

impl FrameInput {
    /// Read the current frame's input from macroquad
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        let mouse = MouseState {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            right_pressed: is_mouse_button_pressed(MouseButton::Right),
        };

        let held = HeldKeys {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        };

        let mut buttons = Vec::new();
        if is_key_pressed(KeyCode::Escape) {
            buttons.push(Button::Escape);
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            buttons.push(Button::Return);
        }
        if mouse.left_pressed {
            buttons.push(Button::MouseLeft);
        }
        if mouse.right_pressed {
            buttons.push(Button::MouseRight);
        }
        for (key, c) in COMMAND_KEYS {
            if is_key_pressed(key) {
                buttons.push(Button::Char(c));
            }
        }

        let mut chars = Vec::new();
        while let Some(c) = get_char_pressed() {
            if !c.is_control() {
                chars.push(c);
            }
        }

        let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl)
            || is_key_down(KeyCode::LeftSuper) || is_key_down(KeyCode::RightSuper);

        let mut edit_keys = Vec::new();
        let edit_bindings = [
            (KeyCode::Backspace, EditKey::Backspace),
            (KeyCode::Delete, EditKey::Delete),
            (KeyCode::Left, EditKey::Left),
            (KeyCode::Right, EditKey::Right),
            (KeyCode::Home, EditKey::Home),
            (KeyCode::End, EditKey::End),
        ];
        for (key, edit) in edit_bindings {
            if is_key_pressed(key) {
                edit_keys.push(edit);
            }
        }
        if ctrl {
            // Shortcuts, not text
            chars.clear();
            if is_key_pressed(KeyCode::A) {
                edit_keys.push(EditKey::SelectAll);
            }
        }

        Self {
            mouse,
            held,
            buttons,
            chars,
            edit_keys,
        }
    }
}
