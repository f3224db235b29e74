use constcat::concat;

mod content;
mod gallery;
mod layout;
mod variables;

pub use content::CONTENT_STYLES;
pub use gallery::{GALLERY, LIGHTBOX};
pub use layout::LAYOUT_STYLES;
pub use variables::CSS_VARIABLES;

// site-wide style bundling
pub const SITE_STYLES: &str = concat!(
    CSS_VARIABLES,
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: Inter, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  font-weight: 400;
  color: var(--text);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition), color var(--transition);
}

a {
  color: inherit;
}

.border-top {
  border-top: 1px solid var(--border);
}

.border-bottom {
  border-bottom: 1px solid var(--border);
}

.border-around {
  border: 1px solid var(--border);
}

.button {
  display: inline-block;
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--text);
  text-decoration: none;
}

.button:hover {
  background-color: var(--text);
  color: var(--background);
}
"#,
    LAYOUT_STYLES,
    CONTENT_STYLES,
);
