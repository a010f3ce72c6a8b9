//! Concrete views, grouped per shell role. Each submodule exposes producer
//! functions; view structs themselves stay private.

pub mod attendee;
pub mod organizer;
pub mod speaker;

/// Cursor over a fixed-length row list. Selection clamps at both ends and
/// survives a refresh that shrinks the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowPicker {
    selected: Option<usize>,
    len: usize,
}

impl RowPicker {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            selected: (len > 0).then_some(0),
            len,
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn select_next(&mut self) {
        let Some(index) = self.selected else {
            return;
        };

        let last_index = self.len.saturating_sub(1);
        self.selected = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub(crate) fn select_previous(&mut self) {
        let Some(index) = self.selected else {
            return;
        };

        self.selected = Some(index.saturating_sub(1));
    }

    pub(crate) fn resize(&mut self, len: usize) {
        self.len = len;
        self.selected = match self.selected {
            Some(index) if len > 0 => Some(std::cmp::min(index, len - 1)),
            _ => (len > 0).then_some(0),
        };
    }
}
