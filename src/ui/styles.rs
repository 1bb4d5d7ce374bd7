//! Terminal colour palette

use crossterm::style::{style, Color, Stylize};

/// Colours for each screen element. With `enabled == false` every paint
/// call returns the text untouched.
#[derive(Debug, Clone)]
pub struct Styles {
    pub enabled: bool,
    pub title: Color,
    pub location: Color,
    pub items: Color,
    pub inventory: Color,
    pub message: Color,
    pub pending: Color,
    pub help: Color,
    pub prompt: Color,
}

impl Styles {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            title: Color::AnsiValue(63),
            location: Color::AnsiValue(86),
            items: Color::AnsiValue(75),
            inventory: Color::AnsiValue(214),
            message: Color::AnsiValue(252),
            pending: Color::AnsiValue(220),
            help: Color::AnsiValue(242),
            prompt: Color::AnsiValue(255),
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, self.title, true, false)
    }

    pub fn location(&self, text: &str) -> String {
        self.paint(text, self.location, true, false)
    }

    pub fn items(&self, text: &str) -> String {
        self.paint(text, self.items, false, false)
    }

    pub fn inventory(&self, text: &str) -> String {
        self.paint(text, self.inventory, false, false)
    }

    pub fn message(&self, text: &str) -> String {
        self.paint(text, self.message, false, true)
    }

    pub fn pending(&self, text: &str) -> String {
        self.paint(text, self.pending, false, true)
    }

    pub fn help(&self, text: &str) -> String {
        self.paint(text, self.help, false, false)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, self.prompt, true, false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool, italic: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let mut styled = style(text).with(color);
        if bold {
            styled = styled.bold();
        }
        if italic {
            styled = styled.italic();
        }
        styled.to_string()
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(true)
    }
}
