/// Cell content
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

/// Visual style of a single cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub font_size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    /// `0xRRGGBB`
    pub font_color: Option<u32>,
    /// Solid background, `0xRRGGBB`
    pub fill: Option<u32>,
    pub centered: bool,
    pub thin_border: bool,
}

impl CellStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    pub fn bordered() -> Self {
        Self {
            thin_border: true,
            ..Default::default()
        }
    }
}

/// A placed cell. Rows and columns are 1-based, as in the spreadsheet UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

/// Contents of one worksheet, independent of the xlsx backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    /// Width of each column starting at column 1, in character units
    pub column_widths: Vec<f64>,
    /// `(row, height in points)`
    pub row_heights: Vec<(u32, f64)>,
    pub cells: Vec<Cell>,
}

impl SheetLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn put(&mut self, row: u32, col: u16, value: CellValue, style: CellStyle) {
        self.cells.push(Cell {
            row,
            col,
            value,
            style,
        });
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn text_at(&self, row: u32, col: u16) -> Option<&str> {
        self.cell(row, col).and_then(|c| c.value.as_text())
    }

    /// First row whose column-1 cell reads `text`
    pub fn find_row(&self, text: &str) -> Option<u32> {
        self.cells
            .iter()
            .filter(|c| c.col == 1 && c.value.as_text() == Some(text))
            .map(|c| c.row)
            .min()
    }

    /// Highest row holding any cell
    pub fn last_row(&self) -> u32 {
        self.cells.iter().map(|c| c.row).max().unwrap_or(0)
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, height)| *height)
    }
}
