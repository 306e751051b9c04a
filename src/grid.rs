// src/grid.rs
//
// Positional geometry of the timetable grid. Cells arrive in row-major
// day-then-slot order, so a cell's index alone determines its day and
// start hour. Kept as a standalone mapping so the walk/merge logic never
// touches grid arithmetic directly.

use crate::params::{FIRST_SLOT_HOUR, GRID_DAYS, SLOTS_PER_DAY};

#[derive(Clone, Copy, Debug)]
pub struct GridShape {
    pub days: usize,
    pub slots_per_day: usize,
    pub first_hour: f64,
}

impl GridShape {
    /// The intranet page layout: 6 days × 11 slots from 09:00.
    pub fn intranet() -> Self {
        Self {
            days: GRID_DAYS,
            slots_per_day: SLOTS_PER_DAY,
            first_hour: FIRST_SLOT_HOUR,
        }
    }

    /// Total number of cells one group's grid contains.
    pub fn cell_count(&self) -> usize {
        self.days * self.slots_per_day
    }

    /// Map a cell index to (day, start hour). Days are 1-based:
    /// 1 = Monday .. 6 = Saturday.
    pub fn position(&self, index: usize) -> (u8, f64) {
        let day = (index / self.slots_per_day) + 1;
        let slot = index % self.slots_per_day;
        (day as u8, self.first_hour + slot as f64)
    }
}

impl Default for GridShape {
    fn default() -> Self { Self::intranet() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cell_is_monday_nine() {
        assert_eq!(GridShape::intranet().position(0), (1, 9.0));
    }

    #[test]
    fn last_slot_of_day_one() {
        assert_eq!(GridShape::intranet().position(10), (1, 19.0));
    }

    #[test]
    fn day_rolls_over_at_eleven() {
        assert_eq!(GridShape::intranet().position(11), (2, 9.0));
    }

    #[test]
    fn last_cell_is_saturday_nineteen() {
        let shape = GridShape::intranet();
        assert_eq!(shape.cell_count(), 66);
        assert_eq!(shape.position(65), (6, 19.0));
    }

    #[test]
    fn shape_is_configurable() {
        let shape = GridShape { days: 5, slots_per_day: 8, first_hour: 8.0 };
        assert_eq!(shape.cell_count(), 40);
        assert_eq!(shape.position(9), (2, 9.0));
    }
}
