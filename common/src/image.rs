use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

// aspect ratios outside of this band are treated as landscape or portrait
const LANDSCAPE_RATIO: f64 = 1.2;
const PORTRAIT_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn from_dimensions(width: NonZeroU32, height: NonZeroU32) -> Self {
        let ratio = f64::from(width.get()) / f64::from(height.get());

        if ratio > LANDSCAPE_RATIO {
            Orientation::Landscape
        } else if ratio < PORTRAIT_RATIO {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

// a single image in a gallery
//
// items are immutable once a gallery is mounted; their position in the gallery's list is their
// identity.  the dimensions are the intrinsic size of the full asset and only matter for keeping
// the aspect ratio stable while the image loads, so zero is rejected at parse time
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    #[serde(default)]
    pub orientation: Option<Orientation>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageItem {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, width: NonZeroU32, height: NonZeroU32) -> Self {
        ImageItem {
            src: src.into(),
            alt: alt.into(),
            width,
            height,
            orientation: None,
            caption: None,
        }
    }

    // an explicit orientation wins over the detected one
    pub fn orientation(&self) -> Orientation {
        self.orientation
            .unwrap_or_else(|| Orientation::from_dimensions(self.width, self.height))
    }

    // percentage of the width that the placeholder has to reserve vertically
    pub fn padding_bottom(&self) -> f64 {
        f64::from(self.height.get()) / f64::from(self.width.get()) * 100.0
    }

    // label for the thumbnail link, falling back when the alt text is empty
    pub fn zoom_label(&self) -> String {
        let alt = if self.alt.is_empty() { "image" } else { self.alt.as_str() };

        format!("View {alt} in full size")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> (NonZeroU32, NonZeroU32) {
        (NonZeroU32::new(width).unwrap(), NonZeroU32::new(height).unwrap())
    }

    fn item(width: u32, height: u32) -> ImageItem {
        let (w, h) = dims(width, height);
        ImageItem::new("/images/a.jpg", "", w, h)
    }

    #[test]
    fn detects_orientation_from_aspect_ratio() {
        assert_eq!(item(1500, 1000).orientation(), Orientation::Landscape);
        assert_eq!(item(1200, 1800).orientation(), Orientation::Portrait);
        assert_eq!(item(1200, 1200).orientation(), Orientation::Square);
    }

    #[test]
    fn ratios_on_the_band_edges_are_square() {
        // exactly 1.2 and 0.8 are not strictly outside the band
        assert_eq!(item(1200, 1000).orientation(), Orientation::Square);
        assert_eq!(item(800, 1000).orientation(), Orientation::Square);
    }

    #[test]
    fn explicit_orientation_overrides_detection() {
        let mut image = item(1500, 1000);
        image.orientation = Some(Orientation::Portrait);

        assert_eq!(image.orientation(), Orientation::Portrait);
    }

    #[test]
    fn padding_bottom_preserves_aspect_ratio() {
        assert_eq!(item(1200, 1800).padding_bottom(), 150.0);
        assert!((item(1500, 1000).padding_bottom() - 66.666).abs() < 0.001);
    }

    #[test]
    fn zoom_label_falls_back_for_empty_alt() {
        let mut image = item(10, 10);
        assert_eq!(image.zoom_label(), "View image in full size");

        image.alt = String::from("The Unfolding Home");
        assert_eq!(image.zoom_label(), "View The Unfolding Home in full size");
    }

    #[test]
    fn zero_dimensions_are_rejected_when_parsing() {
        let doc = r#"
            src = "/images/a.jpg"
            width = 0
            height = 10
        "#;

        assert!(toml::from_str::<ImageItem>(doc).is_err());
    }

    #[test]
    fn parses_optional_fields() {
        let doc = r#"
            src = "/images/moods/flat-white-8.jpg"
            alt = "Flat White Minimalism"
            width = 1200
            height = 1800
            orientation = "portrait"
        "#;

        let image: ImageItem = toml::from_str(doc).unwrap();
        assert_eq!(image.orientation, Some(Orientation::Portrait));
        assert_eq!(image.caption, None);
        assert_eq!(image.width.get(), 1200);
    }
}
