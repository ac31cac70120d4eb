// Shared fakes and factories for the sales pipeline tests.
//
// Usage from a test target:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
//
// The in-memory catalog and recording mail transport stand in for
// Contentstack and the SMTP relay, so no test needs network access.

#![allow(dead_code)]

pub mod recording_mail;
pub mod test_app;
pub mod test_data;

pub use fake_catalog::*;
pub use recording_mail::*;
pub use test_app::*;
pub use test_data::*;
