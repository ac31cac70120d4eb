pub mod layout;

pub use layout::{
    text_width, wrap_text, FontWeight, LogoPlacement, ReceiptLayout, Rgb, Shape, TextAlign,
    TextBox, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH,
};
