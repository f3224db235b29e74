use serde::{Deserialize, Serialize};

use crate::navigator::GalleryCommand;

pub const DEFAULT_CLOSE_LABEL: &str = "Close zoomed image";

// key names, as reported by KeyboardEvent.key, that drive an open overlay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub previous: String,
    pub next: String,
    pub dismiss: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            previous: String::from("ArrowLeft"),
            next: String::from("ArrowRight"),
            dismiss: String::from("Escape"),
        }
    }
}

impl KeyBindings {
    pub fn command_for(&self, key: &str) -> Option<GalleryCommand> {
        if key == self.previous {
            Some(GalleryCommand::Previous)
        } else if key == self.next {
            Some(GalleryCommand::Next)
        } else if key == self.dismiss {
            Some(GalleryCommand::Close)
        } else {
            None
        }
    }
}

// what a click on a thumbnail does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomTrigger {
    #[default]
    Click,
    Disabled,
}

// how an open overlay can be dismissed with the pointer
//
// the overlay itself (background and the zoomed image alike) always closes on click; the
// button variant adds a visible close control on top of that
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dismiss {
    #[default]
    Overlay,
    OverlayAndButton,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryOptions {
    pub keys: KeyBindings,
    pub zoom: ZoomTrigger,
    pub dismiss: Dismiss,
    pub close_label: String,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        GalleryOptions {
            keys: KeyBindings::default(),
            zoom: ZoomTrigger::default(),
            dismiss: Dismiss::default(),
            close_label: String::from(DEFAULT_CLOSE_LABEL),
        }
    }
}

impl GalleryOptions {
    // whether thumbnails act as zoom triggers at all
    pub fn zooms_on_click(&self) -> bool {
        self.zoom == ZoomTrigger::Click
    }

    pub fn shows_close_button(&self) -> bool {
        self.dismiss == Dismiss::OverlayAndButton
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_map_to_commands() {
        let keys = KeyBindings::default();

        assert_eq!(keys.command_for("ArrowLeft"), Some(GalleryCommand::Previous));
        assert_eq!(keys.command_for("ArrowRight"), Some(GalleryCommand::Next));
        assert_eq!(keys.command_for("Escape"), Some(GalleryCommand::Close));
        assert_eq!(keys.command_for("Enter"), None);
        assert_eq!(keys.command_for("arrowleft"), None);
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let doc = r#"
            dismiss = "overlay_and_button"

            [keys]
            dismiss = "q"
        "#;

        let options: GalleryOptions = toml::from_str(doc).unwrap();
        assert!(options.shows_close_button());
        assert_eq!(options.zoom, ZoomTrigger::Click);
        assert!(options.zooms_on_click());
        assert_eq!(options.keys.previous, "ArrowLeft");
        assert_eq!(options.keys.dismiss, "q");
        assert_eq!(options.close_label, DEFAULT_CLOSE_LABEL);
    }

    #[test]
    fn disabled_zoom_is_not_clickable() {
        let options: GalleryOptions = toml::from_str(r#"zoom = "disabled""#).unwrap();

        assert_eq!(options.zoom, ZoomTrigger::Disabled);
        assert!(!options.zooms_on_click());
    }

    #[test]
    fn empty_table_is_default() {
        let options: GalleryOptions = toml::from_str("").unwrap();
        assert_eq!(options, GalleryOptions::default());
    }
}
