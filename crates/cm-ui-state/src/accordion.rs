//! Disclosure state for the pricing FAQ
//!
//! At most one entry is open at a time. Toggling the open entry closes
//! it; toggling any other entry opens it and closes whatever was open.

use crate::{UiStateError, UiStateResult};

/// Single-open-entry state over a collection of collapsible items.
///
/// An empty collection is valid and simply has nothing to toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Create an accordion over `len` items, all closed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Open entry `index`, or close it if it is already open.
    ///
    /// Out-of-range indices leave the state untouched.
    pub fn toggle(&mut self, index: usize) -> UiStateResult<()> {
        if index >= self.len {
            return Err(UiStateError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_fully_closed() {
        let accordion = Accordion::new(6);
        assert_eq!(accordion.open(), None);
        assert!((0..6).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn test_toggle_pair_restores_prior_state() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(1).unwrap();
        accordion.toggle(1).unwrap();
        assert_eq!(accordion.open(), None);

        accordion.toggle(0).unwrap();
        accordion.toggle(2).unwrap();
        accordion.toggle(2).unwrap();
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn test_opening_one_entry_closes_the_other() {
        let mut accordion = Accordion::new(6);
        accordion.toggle(2).unwrap();
        assert!(accordion.is_open(2));
        assert!((0..6).filter(|&i| i != 2).all(|i| !accordion.is_open(i)));

        accordion.toggle(4).unwrap();
        assert!(!accordion.is_open(2));
        assert!(accordion.is_open(4));
    }

    #[test]
    fn test_out_of_range_toggle_leaves_state_unchanged() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(0).unwrap();
        let err = accordion.toggle(2).unwrap_err();
        assert_eq!(err, UiStateError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(accordion.open(), Some(0));
    }

    #[test]
    fn test_empty_accordion_is_a_no_op() {
        let mut accordion = Accordion::new(0);
        assert!(accordion.toggle(0).is_err());
        assert_eq!(accordion.open(), None);
    }
}
