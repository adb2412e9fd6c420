/// Row selection over whatever the table is currently showing.
#[derive(Default)]
pub(crate) struct RosterTable {
    pub(crate) selected: usize,
}

impl RosterTable {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len as isize - 1;
        let new = (self.selected as isize + offset).clamp(0, last);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the selection back inside the table after rows disappear.
    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_to_rows() {
        let mut table = RosterTable::default();
        table.move_selection(-3, 5);
        assert_eq!(table.selected, 0);
        table.move_selection(10, 5);
        assert_eq!(table.selected, 4);
        table.ensure_in_bounds(2);
        assert_eq!(table.selected, 1);
        table.move_selection(1, 0);
        assert_eq!(table.selected, 0);
    }
}
