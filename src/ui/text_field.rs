//! Single-line text field with caret and selection

use macroquad::prelude::*;
use super::{EditKey, Rect};

/// Field appearance
pub mod style {
    use macroquad::prelude::Color;

    pub const INACTIVE_BG: Color = Color::new(0.0, 0.0, 0.0, 0.2);
    pub const ACTIVE_BG: Color = Color::new(0.0, 0.0, 0.0, 0.6);
    pub const SELECTION: Color = Color::new(0.0, 0.0, 0.0, 0.6);
    pub const CARET: Color = Color::new(1.0, 1.0, 1.0, 0.6);
    pub const TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Gap between the text and the edge of the background
    pub const PADDING: f32 = 5.0;
}

/// Editable single-line text
///
/// Caret and selection anchor are char indices into `text`.
#[derive(Debug, Clone)]
pub struct TextField {
    text: String,
    caret: usize,
    selection_start: usize,
    default_text: String,
    /// Text area (background extends `PADDING` beyond it)
    pub rect: Rect,
    pub focused: bool,
}

impl TextField {
    /// New field showing its default text
    pub fn new(default_text: &str, rect: Rect) -> Self {
        let mut field = Self {
            text: String::new(),
            caret: 0,
            selection_start: 0,
            default_text: default_text.to_string(),
            rect,
            focused: false,
        };
        field.set_text(default_text);
        field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replace the text, caret at the end, no selection
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.char_len();
        self.selection_start = self.caret;
    }

    pub fn is_default(&self) -> bool {
        self.text == self.default_text
    }

    pub fn restore_default(&mut self) {
        let default = self.default_text.clone();
        self.set_text(&default);
    }

    /// Hit test against the padded background (edges excluded)
    pub fn under_point(&self, x: f32, y: f32) -> bool {
        self.rect.expand(style::PADDING).contains(x, y)
    }

    /// Selected char range, ordered
    pub fn selection(&self) -> (usize, usize) {
        (self.caret.min(self.selection_start), self.caret.max(self.selection_start))
    }

    pub fn has_selection(&self) -> bool {
        self.caret != self.selection_start
    }

    /// Type a character, replacing any selection
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.delete_selection();
        let at = self.byte_index(self.caret);
        self.text.insert(at, c);
        self.caret += 1;
        self.selection_start = self.caret;
    }

    /// Apply an editing key; `shift` extends the selection for caret moves
    pub fn apply(&mut self, key: EditKey, shift: bool) {
        match key {
            EditKey::Backspace => {
                if !self.delete_selection() && self.caret > 0 {
                    let start = self.byte_index(self.caret - 1);
                    let end = self.byte_index(self.caret);
                    self.text.replace_range(start..end, "");
                    self.caret -= 1;
                    self.selection_start = self.caret;
                }
            }
            EditKey::Delete => {
                if !self.delete_selection() && self.caret < self.char_len() {
                    let start = self.byte_index(self.caret);
                    let end = self.byte_index(self.caret + 1);
                    self.text.replace_range(start..end, "");
                }
            }
            EditKey::Left => self.move_caret(self.caret.saturating_sub(1), shift),
            EditKey::Right => self.move_caret((self.caret + 1).min(self.char_len()), shift),
            EditKey::Home => self.move_caret(0, shift),
            EditKey::End => self.move_caret(self.char_len(), shift),
            EditKey::SelectAll => {
                self.selection_start = 0;
                self.caret = self.char_len();
            }
        }
    }

    fn move_caret(&mut self, to: usize, shift: bool) {
        self.caret = to;
        if !shift {
            self.selection_start = to;
        }
    }

    /// Remove the selected text; false when nothing was selected
    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (from, to) = self.selection();
        let start = self.byte_index(from);
        let end = self.byte_index(to);
        self.text.replace_range(start..end, "");
        self.caret = from;
        self.selection_start = from;
        true
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Draw background, selection, caret and text
    pub fn draw(&self, font_size: f32) {
        let bg = self.rect.expand(style::PADDING);
        let bg_color = if self.focused { style::ACTIVE_BG } else { style::INACTIVE_BG };
        draw_rectangle(bg.x, bg.y, bg.w, bg.h, bg_color);

        let text_width = |upto: usize| -> f32 {
            let prefix = &self.text[..self.byte_index(upto)];
            measure_text(prefix, None, font_size as u16, 1.0).width
        };
        let pos_x = self.rect.x + text_width(self.caret);
        let sel_x = self.rect.x + text_width(self.selection_start);

        // Empty when there is no selection
        let (left, right) = (pos_x.min(sel_x), pos_x.max(sel_x));
        draw_rectangle(left, self.rect.y, right - left, self.rect.h, style::SELECTION);

        if self.focused {
            draw_line(pos_x, self.rect.y, pos_x, self.rect.bottom(), 1.0, style::CARET);
        }

        let dims = measure_text(&self.text, None, font_size as u16, 1.0);
        let baseline = self.rect.y + (self.rect.h + dims.offset_y) * 0.5;
        draw_text(&self.text, self.rect.x, baseline.round(), font_size, style::TEXT);
    }
}
