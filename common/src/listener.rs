use tracing::debug;

// ListenerSlot
//
// holds the guard for a process-wide listener (the window keydown handler, in the browser) that
// must only exist while an overlay is open.  the guard is an RAII value whose Drop releases the
// listener, so every path that empties the slot, including dropping the slot itself, detaches it.
//
// at most one guard is held at a time, which is what keeps repeated renders of an open gallery
// from stacking duplicate handlers
#[derive(Debug)]
pub struct ListenerSlot<G> {
    guard: Option<G>,
}

impl<G> Default for ListenerSlot<G> {
    fn default() -> Self {
        ListenerSlot { guard: None }
    }
}

impl<G> ListenerSlot<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }

    // bring the slot in line with the overlay state
    //
    // acquire() is only invoked when the overlay is open and nothing is held yet.  if acquiring
    // fails the slot stays empty and the error is returned; the next sync will try again
    pub fn sync<F>(&mut self, open: bool, acquire: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> anyhow::Result<G>,
    {
        match (open, self.guard.is_some()) {
            (true, false) => {
                self.guard = Some(acquire()?);
                debug!("listener acquired");
            }
            (false, true) => self.release(),
            _ => {}
        }

        Ok(())
    }

    pub fn release(&mut self) {
        if self.guard.take().is_some() {
            debug!("listener released");
        }
    }
}
