use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::path::PaintMode;
use printpdf::{
    Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rect, Rgb as PdfRgb,
};
use std::fs::File;
use std::io::BufReader;
use tracing::warn;

use crate::core::{AppError, Result};
use crate::modules::receipts::models::{
    FontWeight, LogoPlacement, ReceiptLayout, Rgb, Shape, TextBox, PAGE_HEIGHT,
};

/// DejaVu Sans, embedded for its rupee glyph (U+20B9)
const REGULAR_FONT: &[u8] = include_bytes!("../../../../assets/fonts/DejaVuSans.ttf");
const BOLD_FONT: &[u8] = include_bytes!("../../../../assets/fonts/DejaVuSans-Bold.ttf");
const LOGO_DPI: f32 = 300.0;
const OUTLINE_THICKNESS: f32 = 0.75;
/// Baseline offset from the top of a line box, as a fraction of font size
const ASCENT: f32 = 0.8;

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Flip a top-left y coordinate into PDF user space
fn flip(y: f32) -> Mm {
    mm(PAGE_HEIGHT - y)
}

fn pdf_color(color: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(
        f32::from(color.0) / 255.0,
        f32::from(color.1) / 255.0,
        f32::from(color.2) / 255.0,
        None,
    ))
}

/// Writes a receipt layout as a single A4 page
pub fn write_pdf(layout: &ReceiptLayout, title: &str) -> Result<Vec<u8>> {
    let (document, page, layer) = PdfDocument::new(title, Mm(210.0), Mm(297.0), "Receipt");
    let canvas = document.get_page(page).get_layer(layer);

    let regular = embed_font(&document, REGULAR_FONT, "regular")?;
    let bold = embed_font(&document, BOLD_FONT, "bold")?;

    if let Some(logo) = &layout.logo {
        draw_logo(&canvas, logo);
    }

    canvas.set_outline_thickness(OUTLINE_THICKNESS);
    canvas.set_outline_color(pdf_color(Rgb::BLACK));
    for shape in &layout.shapes {
        draw_shape(&canvas, shape);
    }

    for text in &layout.texts {
        let font = match text.weight {
            FontWeight::Regular => &regular,
            FontWeight::Bold => &bold,
        };
        draw_text(&canvas, text, font);
    }

    document
        .save_to_bytes()
        .map_err(|e| AppError::Render(format!("PDF generation failed: {}", e)))
}

fn embed_font(
    document: &PdfDocumentReference,
    bytes: &'static [u8],
    face: &str,
) -> Result<IndirectFontRef> {
    document
        .add_external_font(bytes)
        .map_err(|e| AppError::Render(format!("Failed to embed {} receipt font: {}", face, e)))
}

fn draw_text(canvas: &PdfLayerReference, text: &TextBox, font: &IndirectFontRef) {
    canvas.set_fill_color(pdf_color(text.color));
    canvas.use_text(
        text.text.as_str(),
        text.size,
        mm(text.origin_x()),
        flip(text.y + text.size * ASCENT),
        font,
    );
}

fn draw_shape(canvas: &PdfLayerReference, shape: &Shape) {
    match shape {
        Shape::Rule { x1, y1, x2, y2 } => {
            canvas.add_line(Line {
                points: vec![
                    (Point::new(mm(*x1), flip(*y1)), false),
                    (Point::new(mm(*x2), flip(*y2)), false),
                ],
                is_closed: false,
            });
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            let mode = match fill {
                Some(color) => {
                    canvas.set_fill_color(pdf_color(*color));
                    PaintMode::FillStroke
                }
                None => PaintMode::Stroke,
            };
            canvas.add_rect(
                Rect::new(mm(*x), flip(*y + *height), mm(*x + *width), flip(*y)).with_mode(mode),
            );
        }
    }
}

/// Draws the logo scaled into its box; an unreadable file is logged and skipped
fn draw_logo(canvas: &PdfLayerReference, logo: &LogoPlacement) {
    let image = match load_png(logo) {
        Ok(image) => image,
        Err(reason) => {
            warn!(path = %logo.path.display(), reason = %reason, "Skipping receipt logo");
            return;
        }
    };

    let natural_width = image.image.width.0 as f32 * 72.0 / LOGO_DPI;
    let natural_height = image.image.height.0 as f32 * 72.0 / LOGO_DPI;
    if natural_width <= 0.0 || natural_height <= 0.0 {
        warn!(path = %logo.path.display(), "Skipping empty receipt logo");
        return;
    }

    image.add_to_layer(
        canvas.clone(),
        ImageTransform {
            translate_x: Some(mm(logo.x)),
            translate_y: Some(flip(logo.y + logo.height)),
            scale_x: Some(logo.width / natural_width),
            scale_y: Some(logo.height / natural_height),
            dpi: Some(LOGO_DPI),
            ..Default::default()
        },
    );
}

fn load_png(logo: &LogoPlacement) -> std::result::Result<Image, String> {
    let file = File::open(&logo.path).map_err(|e| e.to_string())?;
    let decoder = PngDecoder::new(BufReader::new(file)).map_err(|e| e.to_string())?;
    Image::try_from(decoder).map_err(|e| e.to_string())
}
