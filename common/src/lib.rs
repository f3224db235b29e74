pub mod carousel;
pub mod config;
pub mod error;
pub mod image;
pub mod listener;
pub mod navigator;
pub mod options;
pub mod theme;

pub use error::NavigatorError;
pub use image::{ImageItem, Orientation};
pub use navigator::{GalleryCommand, GalleryNavigator, KeyOutcome, ZoomState};
pub use options::{Dismiss, GalleryOptions, KeyBindings, ZoomTrigger};
