use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

use crate::core::Result;
use crate::modules::exports::models::{CellStyle, CellValue, SheetLayout};

fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if style.bold {
        format = format.set_bold();
    }
    if style.italic {
        format = format.set_italic();
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(Color::RGB(color));
    }
    if let Some(fill) = style.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(fill));
    }
    if style.centered {
        format = format
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
    }
    if style.thin_border {
        format = format.set_border(FormatBorder::Thin);
    }

    format
}

/// Serialises a sheet layout into xlsx bytes
pub fn write_workbook(sheet: &SheetLayout) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name.as_str())?;

    for (idx, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(idx as u16, *width)?;
    }
    for (row, height) in &sheet.row_heights {
        worksheet.set_row_height(row.saturating_sub(1), *height)?;
    }

    for cell in &sheet.cells {
        let row = cell.row.saturating_sub(1);
        let col = cell.col.saturating_sub(1);
        let format = to_format(&cell.style);

        match &cell.value {
            CellValue::Text(text) => {
                worksheet.write_string_with_format(row, col, text.as_str(), &format)?;
            }
            CellValue::Number(number) => {
                worksheet.write_number_with_format(row, col, *number, &format)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
