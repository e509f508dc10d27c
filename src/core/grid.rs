use crate::domain::model::GridPosition;

impl GridPosition {
    /// Place the `slot_index`-th label of an entry on the page grid.
    ///
    /// Positions repeat with period `capacity`. `first_of_new_page` marks
    /// every slot that lands on the top-left cell of a page other than the
    /// entry's first, which is exactly where a page break must happen.
    pub fn locate(slot_index: usize, capacity: u32, columns: u32) -> GridPosition {
        let pos = (slot_index % capacity as usize) as u32;
        GridPosition {
            row: pos / columns,
            column: pos % columns,
            first_of_new_page: slot_index != 0 && pos == 0,
        }
    }
}
