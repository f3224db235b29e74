use common::theme::ColorScheme;
use tracing::{debug, error};

use crate::shared::storage::{set_local_storage, try_local_storage};

const COLOR_SCHEME_KEY: &str = "colorScheme";

pub fn stored_color_scheme() -> ColorScheme {
    try_local_storage(COLOR_SCHEME_KEY)
}

pub fn store_color_scheme(scheme: ColorScheme) {
    set_local_storage(COLOR_SCHEME_KEY, scheme);
}

// toggle the inverted class on the document root so the css variables flip everywhere
pub fn apply_color_scheme(scheme: ColorScheme) -> anyhow::Result<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| anyhow::Error::msg("no document element to apply the color scheme to"))?;

    root.class_list()
        .toggle_with_force(ColorScheme::INVERTED_CLASS, scheme.is_inverted())
        .map_err(|err| anyhow::Error::msg(format!("failed to toggle color scheme class: {err:?}")))?;

    debug!({ scheme = ?scheme }, "applied color scheme");
    Ok(())
}

// restore whatever the reader picked on a previous visit
pub fn apply_stored_color_scheme() {
    if let Err(err) = apply_color_scheme(stored_color_scheme()) {
        error!("{err}");
    }
}
