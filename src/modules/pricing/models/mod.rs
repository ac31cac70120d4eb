mod gst;

pub use gst::GstBreakdown;
