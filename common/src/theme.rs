use serde::{Deserialize, Serialize};

// the one reader preference the site keeps between visits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Inverted,
}

impl ColorScheme {
    // class toggled on the document root
    pub const INVERTED_CLASS: &'static str = "inverted";

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Default => ColorScheme::Inverted,
            ColorScheme::Inverted => ColorScheme::Default,
        }
    }

    pub fn is_inverted(self) -> bool {
        self == ColorScheme::Inverted
    }
}
