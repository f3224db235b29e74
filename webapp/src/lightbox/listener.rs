use common::GalleryNavigator;
use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{KeyboardEvent, Window};

const KEYDOWN: &str = "keydown";

// WindowKeyListener
//
// a keydown handler registered on the window for as long as this value lives.  dropping it
// removes the handler again, so it is only ever held inside a ListenerSlot that tracks whether the
// overlay is open
pub struct WindowKeyListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl WindowKeyListener {
    pub fn attach(mut gallery: Signal<GalleryNavigator>) -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;

        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = event.key();

            // unbound keys (typing, tabbing) should not wake up the gallery at all
            if gallery.peek().options().keys.command_for(&key).is_none() {
                return;
            }

            if gallery.write().handle_key(&key).is_handled() {
                event.prevent_default();
            }
        });

        window
            .add_event_listener_with_callback(KEYDOWN, callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("failed to add keydown listener: {err:?}")))?;

        Ok(WindowKeyListener { window, callback })
    }
}

impl Drop for WindowKeyListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(KEYDOWN, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to remove keydown listener: {err:?}");
        }
    }
}
