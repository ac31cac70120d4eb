pub mod sales_controller;

pub use sales_controller::configure;
