// Carousel
//
// a rotating window over a fixed list, used for the sponsor strip.  the offset wraps in both
// directions, and the window never shows the same entry twice even when it is wider than the list.
// a non-empty list always shows at least one entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    visible: usize,
    offset: usize,
}

impl Carousel {
    pub fn new(len: usize, visible: usize) -> Self {
        Carousel {
            len,
            visible: visible.max(1).min(len),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    // nothing to rotate when everything already fits
    pub fn rotates(&self) -> bool {
        self.len > self.visible
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.offset = (self.offset + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.offset = (self.offset + self.len - 1) % self.len;
        }
    }

    // indices into the underlying list, in display order
    pub fn window(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.visible).map(move |i| (self.offset + i) % self.len)
    }
}
