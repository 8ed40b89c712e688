//! Single-selection accordion state.

/// At most one of `len` entries is expanded at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    /// Open entry `index`, or close it if it is the open one.
    /// Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_open_and_close() {
        let mut faq = Accordion::new(7);
        assert_eq!(faq.open_index(), None);

        faq.toggle(2);
        assert_eq!(faq.open_index(), Some(2));

        faq.toggle(2);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_switching_entries_keeps_one_open() {
        let mut faq = Accordion::new(7);
        faq.toggle(1);
        faq.toggle(4);

        assert_eq!(faq.open_index(), Some(4));
        assert!(!faq.is_open(1));
        assert!(faq.is_open(4));
    }

    #[test]
    fn test_at_most_one_open_over_click_sequence() {
        let mut faq = Accordion::new(5);
        for index in [0, 3, 3, 1, 4, 4, 4, 2, 0, 0] {
            faq.toggle(index);
            let open = (0..faq.len()).filter(|i| faq.is_open(*i)).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut faq = Accordion::new(3);
        faq.toggle(1);
        faq.toggle(3);
        assert_eq!(faq.open_index(), Some(1));

        faq.close();
        assert_eq!(faq.open_index(), None);
        assert!(Accordion::new(0).is_empty());
    }
}
