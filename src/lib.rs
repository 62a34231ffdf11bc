//! Procedural renderer for the Water Reminder app's store assets:
//! the iOS app icon set and the App Store screenshot/preview bundle.

pub mod contents_json;
pub mod draw;
pub mod gradient;
pub mod icon;
pub mod screenshot;
pub mod text;
