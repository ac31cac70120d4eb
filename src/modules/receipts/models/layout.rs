use std::path::PathBuf;

/// A4 portrait in PDF points
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const PAGE_MARGIN: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    /// "Tax Invoice" title
    pub const INDIGO: Rgb = Rgb(0x63, 0x66, 0xF1);
    /// Table header and total bands
    pub const VIOLET: Rgb = Rgb(0x8B, 0x5C, 0xF6);

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One line of text placed on the page.
///
/// Coordinates are points from the top-left corner. `y` is the top of the
/// line box; `width` is the box used for centre/right alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
    pub align: TextAlign,
}

impl TextBox {
    /// Left edge of the rendered glyphs after alignment
    pub fn origin_x(&self) -> f32 {
        let rendered = text_width(&self.text, self.size, self.weight);
        match self.align {
            TextAlign::Left => self.x,
            TextAlign::Center => self.x + (self.width - rendered).max(0.0) / 2.0,
            TextAlign::Right => self.x + (self.width - rendered).max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    /// Outlined box, filled when `fill` is set
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoPlacement {
    pub path: PathBuf,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything drawn on the single receipt page, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptLayout {
    pub shapes: Vec<Shape>,
    pub texts: Vec<TextBox>,
    pub logo: Option<LogoPlacement>,
}

impl ReceiptLayout {
    pub fn find_text(&self, text: &str) -> Option<&TextBox> {
        self.texts.iter().find(|t| t.text == text)
    }

    pub fn find_text_starting_with(&self, prefix: &str) -> Option<&TextBox> {
        self.texts.iter().find(|t| t.text.starts_with(prefix))
    }

    /// Text boxes sharing a baseline with `label`, left to right
    pub fn row_of(&self, label: &str) -> Vec<&TextBox> {
        let Some(anchor) = self.find_text(label) else {
            return Vec::new();
        };
        let mut row: Vec<&TextBox> = self
            .texts
            .iter()
            .filter(|t| (t.y - anchor.y).abs() < 0.5)
            .collect();
        row.sort_by(|a, b| a.x.total_cmp(&b.x));
        row
    }
}

/// Approximate advance width of `text` in DejaVu Sans, in points
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let em: f32 = text.chars().map(|c| glyph_width(c, weight)).sum();
    em * size
}

fn glyph_width(c: char, weight: FontWeight) -> f32 {
    let regular = match c {
        '0'..='9' | '#' | '$' | '₹' => 0.636,
        ' ' | ',' | '.' => 0.318,
        ':' | ';' | '/' => 0.337,
        '!' => 0.4,
        '-' => 0.361,
        '(' | ')' => 0.39,
        'i' | 'j' | 'l' => 0.278,
        'f' => 0.352,
        't' => 0.392,
        'r' => 0.411,
        'm' => 0.974,
        'w' => 0.818,
        'I' | 'J' => 0.295,
        'M' => 0.863,
        'W' => 0.989,
        '@' => 1.0,
        '_' => 0.5,
        'A'..='Z' => 0.7,
        'a'..='z' => 0.613,
        _ => 0.636,
    };
    match weight {
        FontWeight::Regular => regular,
        FontWeight::Bold => regular * 1.1,
    }
}

/// Greedy word wrap to `max_width` points
pub fn wrap_text(text: &str, size: f32, weight: FontWeight, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if current.is_empty() || text_width(&candidate, size, weight) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
