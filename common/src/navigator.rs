use tracing::{debug, warn};

use crate::{error::NavigatorError, image::ImageItem, options::GalleryOptions};

// zoom state
//
// Closed means no overlay is rendered.  Open(i) always refers to a valid index into the
// navigator's items, which is why the navigator is the only thing allowed to construct it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomState {
    #[default]
    Closed,
    Open(usize),
}

impl ZoomState {
    pub fn index(self) -> Option<usize> {
        match self {
            ZoomState::Closed => None,
            ZoomState::Open(index) => Some(index),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCommand {
    Open(usize),
    Next,
    Previous,
    Close,
}

// result of feeding a key into the navigator
//
// Handled means the key was bound and the overlay was open, so the caller must suppress the
// browser's default action (scrolling, mostly)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled(ZoomState),
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }
}

// GalleryNavigator
//
// owns the ordered images of one mounted gallery and the index of the image shown full-screen,
// if any.  every transition is synchronous and total: calls that would break the index
// invariant are ignored and reported back as a NavigatorError rather than clamped
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryNavigator {
    items: Vec<ImageItem>,
    state: ZoomState,
    options: GalleryOptions,
}

impl GalleryNavigator {
    pub fn new(items: Vec<ImageItem>, options: GalleryOptions) -> Self {
        GalleryNavigator {
            items,
            state: ZoomState::Closed,
            options,
        }
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn active_item(&self) -> Option<&ImageItem> {
        self.active_index().and_then(|index| self.items.get(index))
    }

    pub fn is_open(&self) -> bool {
        self.state != ZoomState::Closed
    }

    pub fn open(&mut self, index: usize) -> Result<ZoomState, NavigatorError> {
        let len = self.non_empty_len()?;

        if index >= len {
            return Err(NavigatorError::OutOfRange { index, len });
        }

        Ok(self.transition(ZoomState::Open(index)))
    }

    pub fn next(&mut self) -> Result<ZoomState, NavigatorError> {
        let len = self.non_empty_len()?;
        let index = self.active_index().ok_or(NavigatorError::NotOpen)?;

        Ok(self.transition(ZoomState::Open((index + 1) % len)))
    }

    pub fn previous(&mut self) -> Result<ZoomState, NavigatorError> {
        let len = self.non_empty_len()?;
        let index = self.active_index().ok_or(NavigatorError::NotOpen)?;

        Ok(self.transition(ZoomState::Open((index + len - 1) % len)))
    }

    pub fn close(&mut self) -> ZoomState {
        self.transition(ZoomState::Closed)
    }

    pub fn apply(&mut self, command: GalleryCommand) -> Result<ZoomState, NavigatorError> {
        match command {
            GalleryCommand::Open(index) => self.open(index),
            GalleryCommand::Next => self.next(),
            GalleryCommand::Previous => self.previous(),
            GalleryCommand::Close => Ok(self.close()),
        }
    }

    // keyboard input
    //
    // keys only mean anything while the overlay is open; a closed gallery ignores everything so
    // that it never competes with other keyboard handling on the page
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        let Some(command) = self.options.keys.command_for(key) else {
            return KeyOutcome::Ignored;
        };

        match self.apply(command) {
            Ok(state) => KeyOutcome::Handled(state),
            Err(err) => {
                warn!(key, "ignoring gallery key: {err}");
                KeyOutcome::Ignored
            }
        }
    }

    // pointer click on a thumbnail, carrying the thumbnail's own index
    pub fn click_thumbnail(&mut self, index: usize) -> Result<ZoomState, NavigatorError> {
        if !self.options.zooms_on_click() || self.active_index() == Some(index) {
            return Ok(self.state);
        }

        self.open(index)
    }

    // pointer click anywhere on the overlay, including the zoomed image itself
    pub fn click_overlay(&mut self) -> ZoomState {
        self.close()
    }

    fn non_empty_len(&self) -> Result<usize, NavigatorError> {
        match self.items.len() {
            0 => Err(NavigatorError::Empty),
            len => Ok(len),
        }
    }

    fn transition(&mut self, next: ZoomState) -> ZoomState {
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "gallery transition");
            self.state = next;
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::options::{KeyBindings, ZoomTrigger};

    fn items(n: usize) -> Vec<ImageItem> {
        let side = NonZeroU32::new(100).unwrap();

        (0..n)
            .map(|i| ImageItem::new(format!("/images/{i}.jpg"), format!("image {i}"), side, side))
            .collect()
    }

    fn navigator(n: usize) -> GalleryNavigator {
        GalleryNavigator::new(items(n), GalleryOptions::default())
    }

    #[test]
    fn starts_closed() {
        let nav = navigator(3);

        assert_eq!(nav.state(), ZoomState::Closed);
        assert_eq!(nav.active_item(), None);
        assert!(!nav.is_open());
    }

    #[test]
    fn open_sets_every_valid_index() {
        let mut nav = navigator(4);

        for i in 0..4 {
            assert_eq!(nav.open(i), Ok(ZoomState::Open(i)));
            assert_eq!(nav.state(), ZoomState::Open(i));
            assert_eq!(nav.active_item().map(|item| item.src.as_str()), Some(format!("/images/{i}.jpg").as_str()));
        }
    }

    #[test]
    fn open_is_idempotent() {
        let mut nav = navigator(3);

        nav.open(1).unwrap();
        assert_eq!(nav.open(1), Ok(ZoomState::Open(1)));
        assert!(nav.is_open());
    }

    #[test]
    fn three_item_walkthrough() {
        let mut nav = navigator(3);

        assert_eq!(nav.open(0), Ok(ZoomState::Open(0)));
        assert_eq!(nav.next(), Ok(ZoomState::Open(1)));
        assert_eq!(nav.next(), Ok(ZoomState::Open(2)));
        assert_eq!(nav.next(), Ok(ZoomState::Open(0)));
        assert_eq!(nav.previous(), Ok(ZoomState::Open(2)));
        assert_eq!(nav.close(), ZoomState::Closed);
    }

    #[test]
    fn single_item_wraps_to_itself() {
        let mut nav = navigator(1);

        assert_eq!(nav.open(0), Ok(ZoomState::Open(0)));
        assert_eq!(nav.next(), Ok(ZoomState::Open(0)));
        assert_eq!(nav.previous(), Ok(ZoomState::Open(0)));
    }

    #[test]
    fn stepping_n_times_cycles_back() {
        for n in 1..=7 {
            for start in 0..n {
                let mut nav = navigator(n);
                nav.open(start).unwrap();

                for _ in 0..n {
                    nav.next().unwrap();
                }
                assert_eq!(nav.state(), ZoomState::Open(start), "next, n={n} start={start}");

                for _ in 0..n {
                    nav.previous().unwrap();
                }
                assert_eq!(nav.state(), ZoomState::Open(start), "previous, n={n} start={start}");
            }
        }
    }

    #[test]
    fn next_and_previous_cancel_out() {
        for n in 1..=5 {
            for start in 0..n {
                let mut nav = navigator(n);
                nav.open(start).unwrap();

                nav.next().unwrap();
                nav.previous().unwrap();
                assert_eq!(nav.state(), ZoomState::Open(start));

                nav.previous().unwrap();
                nav.next().unwrap();
                assert_eq!(nav.state(), ZoomState::Open(start));
            }
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = navigator(2);

        assert_eq!(nav.close(), ZoomState::Closed);

        nav.open(1).unwrap();
        assert_eq!(nav.close(), ZoomState::Closed);
        assert_eq!(nav.close(), ZoomState::Closed);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut nav = navigator(3);

        assert_eq!(nav.open(5), Err(NavigatorError::OutOfRange { index: 5, len: 3 }));
        assert_eq!(nav.state(), ZoomState::Closed);

        nav.open(2).unwrap();
        assert_eq!(nav.open(3), Err(NavigatorError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(nav.state(), ZoomState::Open(2));
    }

    #[test]
    fn stepping_while_closed_is_ignored() {
        let mut nav = navigator(3);

        assert_eq!(nav.next(), Err(NavigatorError::NotOpen));
        assert_eq!(nav.previous(), Err(NavigatorError::NotOpen));
        assert_eq!(nav.state(), ZoomState::Closed);
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut nav = navigator(0);

        assert_eq!(nav.open(0), Err(NavigatorError::Empty));
        assert_eq!(nav.next(), Err(NavigatorError::Empty));
        assert_eq!(nav.previous(), Err(NavigatorError::Empty));
        assert_eq!(nav.handle_key("Escape"), KeyOutcome::Ignored);
        assert_eq!(nav.click_thumbnail(0), Err(NavigatorError::Empty));
        assert_eq!(nav.state(), ZoomState::Closed);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut nav = navigator(3);

        assert_eq!(nav.apply(GalleryCommand::Open(2)), Ok(ZoomState::Open(2)));
        assert_eq!(nav.apply(GalleryCommand::Next), Ok(ZoomState::Open(0)));
        assert_eq!(nav.apply(GalleryCommand::Previous), Ok(ZoomState::Open(2)));
        assert_eq!(nav.apply(GalleryCommand::Close), Ok(ZoomState::Closed));
    }

    #[test]
    fn keys_drive_an_open_overlay() {
        let mut nav = navigator(3);
        nav.open(0).unwrap();

        assert_eq!(nav.handle_key("ArrowRight"), KeyOutcome::Handled(ZoomState::Open(1)));
        assert_eq!(nav.handle_key("ArrowLeft"), KeyOutcome::Handled(ZoomState::Open(0)));
        assert_eq!(nav.handle_key("ArrowLeft"), KeyOutcome::Handled(ZoomState::Open(2)));
        assert_eq!(nav.handle_key("Escape"), KeyOutcome::Handled(ZoomState::Closed));
    }

    #[test]
    fn unbound_keys_are_not_handled() {
        let mut nav = navigator(3);
        nav.open(1).unwrap();

        let outcome = nav.handle_key("Enter");
        assert!(!outcome.is_handled());
        assert_eq!(nav.state(), ZoomState::Open(1));
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut nav = navigator(3);

        for key in ["Escape", "ArrowLeft", "ArrowRight"] {
            assert_eq!(nav.handle_key(key), KeyOutcome::Ignored);
            assert_eq!(nav.state(), ZoomState::Closed);
        }
    }

    #[test]
    fn custom_key_bindings_replace_defaults() {
        let options = GalleryOptions {
            keys: KeyBindings {
                previous: String::from("h"),
                next: String::from("l"),
                dismiss: String::from("q"),
            },
            ..GalleryOptions::default()
        };
        let mut nav = GalleryNavigator::new(items(2), options);
        nav.open(0).unwrap();

        assert_eq!(nav.handle_key("ArrowRight"), KeyOutcome::Ignored);
        assert_eq!(nav.handle_key("l"), KeyOutcome::Handled(ZoomState::Open(1)));
        assert_eq!(nav.handle_key("q"), KeyOutcome::Handled(ZoomState::Closed));
    }

    #[test]
    fn thumbnail_click_opens_other_images() {
        let mut nav = navigator(3);

        assert_eq!(nav.click_thumbnail(2), Ok(ZoomState::Open(2)));
        assert_eq!(nav.click_thumbnail(2), Ok(ZoomState::Open(2)));
        assert_eq!(nav.click_thumbnail(0), Ok(ZoomState::Open(0)));
        assert_eq!(nav.click_thumbnail(9), Err(NavigatorError::OutOfRange { index: 9, len: 3 }));
    }

    #[test]
    fn disabled_zoom_ignores_thumbnail_clicks() {
        let options = GalleryOptions {
            zoom: ZoomTrigger::Disabled,
            ..GalleryOptions::default()
        };
        let mut nav = GalleryNavigator::new(items(3), options);

        assert_eq!(nav.click_thumbnail(1), Ok(ZoomState::Closed));
        assert!(!nav.is_open());
    }

    #[test]
    fn overlay_click_closes() {
        let mut nav = navigator(3);
        nav.open(1).unwrap();

        assert_eq!(nav.click_overlay(), ZoomState::Closed);
        assert_eq!(nav.click_overlay(), ZoomState::Closed);
    }
}
