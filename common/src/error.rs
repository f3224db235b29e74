use std::fmt;

// navigator contract violations
//
// these are developer-facing: the caller asked the navigator for something that the current
// state cannot satisfy.  the navigator leaves its state untouched and hands one of these back,
// and the ui logs it instead of surfacing anything to the reader
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigatorError {
    // the gallery has no items, so nothing can be opened or stepped through
    Empty,
    // open() was called with an index past the end of the item list
    OutOfRange { index: usize, len: usize },
    // next()/previous() were called while no overlay is shown
    NotOpen,
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorError::Empty => write!(f, "gallery has no images"),
            NavigatorError::OutOfRange { index, len } => {
                write!(f, "image index {index} is out of range for a gallery of {len}")
            }
            NavigatorError::NotOpen => write!(f, "no image is currently zoomed"),
        }
    }
}

impl std::error::Error for NavigatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = NavigatorError::OutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "image index 5 is out of range for a gallery of 3"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = NavigatorError::NotOpen.into();
        assert_eq!(err.to_string(), "no image is currently zoomed");
    }
}
