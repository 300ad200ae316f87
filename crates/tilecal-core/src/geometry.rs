//! Cell lookup table for the test-beam calorimeter.
//!
//! Maps a (module, depth row, period) tile coordinate onto a dense cell
//! index in `[0, NUM_CELLS)`. The table is immutable and built once per
//! worker; lookups are pure.

use std::fmt;

use crate::constants::NUM_CELLS;
use crate::error::TileCalError;
use crate::types::{Module, Row};

/// Number of per-row tile counts stored for each cell.
pub const SUB_ROWS: usize = 6;

/// A logical readout cell.
///
/// `first_row..=last_row` are 1-based depth rows. `tiles_per_sub_row[i]` is the
/// number of periods the cell spans in row `first_row + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub module: Module,
    pub row: Row,
    pub number: i32,
    pub first_row: usize,
    pub last_row: usize,
    pub tiles_per_sub_row: [usize; SUB_ROWS],
}

impl Cell {
    pub const fn new(
        module: Module,
        row: Row,
        number: i32,
        first_row: usize,
        last_row: usize,
        tiles_per_sub_row: [usize; SUB_ROWS],
    ) -> Self {
        Self {
            module,
            row,
            number,
            first_row,
            last_row,
            tiles_per_sub_row,
        }
    }

    /// Whether the 1-based depth row lies inside this cell.
    pub fn contains_row(&self, row: usize) -> bool {
        (self.first_row..=self.last_row).contains(&row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cell {}{}", self.module, self.row, self.number)
    }
}

/// Fast-forward step over all cells of one row band.
struct RowBand {
    /// Last 1-based depth row of the band.
    last_row: usize,
    /// Cells in the band.
    cells: usize,
}

/// Cells in one long-barrel module.
const LONG_MODULE_CELLS: usize = 45;

const LONG_ROW_BANDS: [RowBand; 2] = [
    RowBand { last_row: 3, cells: 20 },  // A
    RowBand { last_row: 9, cells: 18 },  // BC
];

const EXTENDED_ROW_BANDS: [RowBand; 2] = [
    RowBand { last_row: 3, cells: 5 },   // A
    RowBand { last_row: 7, cells: 5 },   // B
];

/// Index of the C10 plug cell.
pub const C10_CELL_INDEX: usize = NUM_CELLS - 2;

/// Index of the D4 plug cell.
pub const D4_CELL_INDEX: usize = NUM_CELLS - 1;

// TileCal -> TICL -> TICL-00 in the ATLAS geometry database.
#[rustfmt::skip]
static CELLS: [Cell; NUM_CELLS] = [
    // Lower long module
    Cell::new(Module::LongLower, Row::A, -10, 1, 3, [16, 16, 16,  0,  0,  0]), //   0
    Cell::new(Module::LongLower, Row::A, -9, 1, 3, [18, 19, 18,  0,  0,  0]), //   1
    Cell::new(Module::LongLower, Row::A, -8, 1, 3, [18, 17, 18,  0,  0,  0]), //   2
    Cell::new(Module::LongLower, Row::A, -7, 1, 3, [16, 16, 16,  0,  0,  0]), //   3
    Cell::new(Module::LongLower, Row::A, -6, 1, 3, [15, 16, 15,  0,  0,  0]), //   4
    Cell::new(Module::LongLower, Row::A, -5, 1, 3, [15, 15, 15,  0,  0,  0]), //   5
    Cell::new(Module::LongLower, Row::A, -4, 1, 3, [14, 14, 14,  0,  0,  0]), //   6
    Cell::new(Module::LongLower, Row::A, -3, 1, 3, [14, 14, 14,  0,  0,  0]), //   7
    Cell::new(Module::LongLower, Row::A, -2, 1, 3, [14, 13, 14,  0,  0,  0]), //   8
    Cell::new(Module::LongLower, Row::A, -1, 1, 3, [13, 14, 13,  0,  0,  0]), //   9
    Cell::new(Module::LongLower, Row::A, 1, 1, 3, [14, 13, 14,  0,  0,  0]), //  10
    Cell::new(Module::LongLower, Row::A, 2, 1, 3, [13, 14, 13,  0,  0,  0]), //  11
    Cell::new(Module::LongLower, Row::A, 3, 1, 3, [14, 14, 14,  0,  0,  0]), //  12
    Cell::new(Module::LongLower, Row::A, 4, 1, 3, [14, 14, 14,  0,  0,  0]), //  13
    Cell::new(Module::LongLower, Row::A, 5, 1, 3, [15, 15, 15,  0,  0,  0]), //  14
    Cell::new(Module::LongLower, Row::A, 6, 1, 3, [16, 15, 16,  0,  0,  0]), //  15
    Cell::new(Module::LongLower, Row::A, 7, 1, 3, [16, 16, 16,  0,  0,  0]), //  16
    Cell::new(Module::LongLower, Row::A, 8, 1, 3, [17, 18, 17,  0,  0,  0]), //  17
    Cell::new(Module::LongLower, Row::A, 9, 1, 3, [19, 18, 19,  0,  0,  0]), //  18
    Cell::new(Module::LongLower, Row::A, 10, 1, 3, [16, 16, 16,  0,  0,  0]), //  19
    Cell::new(Module::LongLower, Row::BC, -9, 4, 9, [18, 17, 18,  0,  0,  0]), //  20
    Cell::new(Module::LongLower, Row::BC, -8, 4, 9, [20, 20, 20, 20, 20, 20]), //  21
    Cell::new(Module::LongLower, Row::BC, -7, 4, 9, [18, 19, 18, 21, 22, 21]), //  22
    Cell::new(Module::LongLower, Row::BC, -6, 4, 9, [18, 18, 18, 21, 20, 21]), //  23
    Cell::new(Module::LongLower, Row::BC, -5, 4, 9, [17, 16, 17, 19, 19, 19]), //  24
    Cell::new(Module::LongLower, Row::BC, -4, 4, 9, [16, 17, 16, 19, 19, 19]), //  25
    Cell::new(Module::LongLower, Row::BC, -3, 4, 9, [16, 15, 16, 18, 18, 18]), //  26
    Cell::new(Module::LongLower, Row::BC, -2, 4, 9, [15, 16, 15, 18, 18, 18]), //  27
    Cell::new(Module::LongLower, Row::BC, -1, 4, 9, [16, 15, 16, 17, 18, 17]), //  28
    Cell::new(Module::LongLower, Row::BC, 1, 4, 9, [15, 16, 15, 18, 17, 18]), //  29
    Cell::new(Module::LongLower, Row::BC, 2, 4, 9, [16, 15, 16, 18, 18, 18]), //  30
    Cell::new(Module::LongLower, Row::BC, 3, 4, 9, [15, 16, 15, 18, 18, 18]), //  31
    Cell::new(Module::LongLower, Row::BC, 4, 4, 9, [17, 16, 17, 19, 19, 19]), //  32
    Cell::new(Module::LongLower, Row::BC, 5, 4, 9, [16, 17, 16, 19, 19, 19]), //  33
    Cell::new(Module::LongLower, Row::BC, 6, 4, 9, [18, 18, 18, 20, 21, 20]), //  34
    Cell::new(Module::LongLower, Row::BC, 7, 4, 9, [19, 18, 19, 22, 21, 22]), //  35
    Cell::new(Module::LongLower, Row::BC, 8, 4, 9, [20, 20, 20, 20, 20, 20]), //  36
    Cell::new(Module::LongLower, Row::BC, 9, 4, 9, [17, 18, 17,  0,  0,  0]), //  37
    Cell::new(Module::LongLower, Row::D, -3, 10, 11, [50, 50,  0,  0,  0,  0]), //  38
    Cell::new(Module::LongLower, Row::D, -2, 10, 11, [43, 43,  0,  0,  0,  0]), //  39
    Cell::new(Module::LongLower, Row::D, -1, 10, 11, [41, 40,  0,  0,  0,  0]), //  40
    Cell::new(Module::LongLower, Row::D, 0, 10, 11, [40, 40,  0,  0,  0,  0]), //  41
    Cell::new(Module::LongLower, Row::D, 1, 10, 11, [40, 41,  0,  0,  0,  0]), //  42
    Cell::new(Module::LongLower, Row::D, 2, 10, 11, [43, 43,  0,  0,  0,  0]), //  43
    Cell::new(Module::LongLower, Row::D, 3, 10, 11, [50, 50,  0,  0,  0,  0]), //  44
    // Upper long module
    Cell::new(Module::LongUpper, Row::A, -10, 1, 3, [16, 16, 16,  0,  0,  0]), //  45
    Cell::new(Module::LongUpper, Row::A, -9, 1, 3, [18, 19, 18,  0,  0,  0]), //  46
    Cell::new(Module::LongUpper, Row::A, -8, 1, 3, [18, 17, 18,  0,  0,  0]), //  47
    Cell::new(Module::LongUpper, Row::A, -7, 1, 3, [16, 16, 16,  0,  0,  0]), //  48
    Cell::new(Module::LongUpper, Row::A, -6, 1, 3, [15, 16, 15,  0,  0,  0]), //  49
    Cell::new(Module::LongUpper, Row::A, -5, 1, 3, [15, 15, 15,  0,  0,  0]), //  50
    Cell::new(Module::LongUpper, Row::A, -4, 1, 3, [14, 14, 14,  0,  0,  0]), //  51
    Cell::new(Module::LongUpper, Row::A, -3, 1, 3, [14, 14, 14,  0,  0,  0]), //  52
    Cell::new(Module::LongUpper, Row::A, -2, 1, 3, [14, 13, 14,  0,  0,  0]), //  53
    Cell::new(Module::LongUpper, Row::A, -1, 1, 3, [13, 14, 13,  0,  0,  0]), //  54
    Cell::new(Module::LongUpper, Row::A, 1, 1, 3, [14, 13, 14,  0,  0,  0]), //  55
    Cell::new(Module::LongUpper, Row::A, 2, 1, 3, [13, 14, 13,  0,  0,  0]), //  56
    Cell::new(Module::LongUpper, Row::A, 3, 1, 3, [14, 14, 14,  0,  0,  0]), //  57
    Cell::new(Module::LongUpper, Row::A, 4, 1, 3, [14, 14, 14,  0,  0,  0]), //  58
    Cell::new(Module::LongUpper, Row::A, 5, 1, 3, [15, 15, 15,  0,  0,  0]), //  59
    Cell::new(Module::LongUpper, Row::A, 6, 1, 3, [16, 15, 16,  0,  0,  0]), //  60
    Cell::new(Module::LongUpper, Row::A, 7, 1, 3, [16, 16, 16,  0,  0,  0]), //  61
    Cell::new(Module::LongUpper, Row::A, 8, 1, 3, [17, 18, 17,  0,  0,  0]), //  62
    Cell::new(Module::LongUpper, Row::A, 9, 1, 3, [19, 18, 19,  0,  0,  0]), //  63
    Cell::new(Module::LongUpper, Row::A, 10, 1, 3, [16, 16, 16,  0,  0,  0]), //  64
    Cell::new(Module::LongUpper, Row::BC, -9, 4, 9, [18, 17, 18,  0,  0,  0]), //  65
    Cell::new(Module::LongUpper, Row::BC, -8, 4, 9, [20, 20, 20, 20, 20, 20]), //  66
    Cell::new(Module::LongUpper, Row::BC, -7, 4, 9, [18, 19, 18, 21, 22, 21]), //  67
    Cell::new(Module::LongUpper, Row::BC, -6, 4, 9, [18, 18, 18, 21, 20, 21]), //  68
    Cell::new(Module::LongUpper, Row::BC, -5, 4, 9, [17, 16, 17, 19, 19, 19]), //  69
    Cell::new(Module::LongUpper, Row::BC, -4, 4, 9, [16, 17, 16, 19, 19, 19]), //  70
    Cell::new(Module::LongUpper, Row::BC, -3, 4, 9, [16, 15, 16, 18, 18, 18]), //  71
    Cell::new(Module::LongUpper, Row::BC, -2, 4, 9, [15, 16, 15, 18, 18, 18]), //  72
    Cell::new(Module::LongUpper, Row::BC, -1, 4, 9, [16, 15, 16, 17, 18, 17]), //  73
    Cell::new(Module::LongUpper, Row::BC, 1, 4, 9, [15, 16, 15, 18, 17, 18]), //  74
    Cell::new(Module::LongUpper, Row::BC, 2, 4, 9, [16, 15, 16, 18, 18, 18]), //  75
    Cell::new(Module::LongUpper, Row::BC, 3, 4, 9, [15, 16, 15, 18, 18, 18]), //  76
    Cell::new(Module::LongUpper, Row::BC, 4, 4, 9, [17, 16, 17, 19, 19, 19]), //  77
    Cell::new(Module::LongUpper, Row::BC, 5, 4, 9, [16, 17, 16, 19, 19, 19]), //  78
    Cell::new(Module::LongUpper, Row::BC, 6, 4, 9, [18, 18, 18, 20, 21, 20]), //  79
    Cell::new(Module::LongUpper, Row::BC, 7, 4, 9, [19, 18, 19, 22, 21, 22]), //  80
    Cell::new(Module::LongUpper, Row::BC, 8, 4, 9, [20, 20, 20, 20, 20, 20]), //  81
    Cell::new(Module::LongUpper, Row::BC, 9, 4, 9, [17, 18, 17,  0,  0,  0]), //  82
    Cell::new(Module::LongUpper, Row::D, -3, 10, 11, [50, 50,  0,  0,  0,  0]), //  83
    Cell::new(Module::LongUpper, Row::D, -2, 10, 11, [43, 43,  0,  0,  0,  0]), //  84
    Cell::new(Module::LongUpper, Row::D, -1, 10, 11, [41, 40,  0,  0,  0,  0]), //  85
    Cell::new(Module::LongUpper, Row::D, 0, 10, 11, [40, 40,  0,  0,  0,  0]), //  86
    Cell::new(Module::LongUpper, Row::D, 1, 10, 11, [40, 41,  0,  0,  0,  0]), //  87
    Cell::new(Module::LongUpper, Row::D, 2, 10, 11, [43, 43,  0,  0,  0,  0]), //  88
    Cell::new(Module::LongUpper, Row::D, 3, 10, 11, [50, 50,  0,  0,  0,  0]), //  89
    // Extended module
    Cell::new(Module::Extended, Row::A, 12, 1, 3, [ 9,  9,  9,  0,  0,  0]), //  90
    Cell::new(Module::Extended, Row::A, 13, 1, 3, [25, 25, 25,  0,  0,  0]), //  91
    Cell::new(Module::Extended, Row::A, 14, 1, 3, [28, 28, 28,  0,  0,  0]), //  92
    Cell::new(Module::Extended, Row::A, 15, 1, 3, [30, 30, 30,  0,  0,  0]), //  93
    Cell::new(Module::Extended, Row::A, 16, 1, 3, [48, 48, 48,  0,  0,  0]), //  94
    Cell::new(Module::Extended, Row::B, 11, 4, 7, [16, 16, 16, 16,  0,  0]), //  95
    Cell::new(Module::Extended, Row::B, 12, 4, 7, [27, 27, 27, 27,  0,  0]), //  96
    Cell::new(Module::Extended, Row::B, 13, 4, 7, [30, 30, 30, 30,  0,  0]), //  97
    Cell::new(Module::Extended, Row::B, 14, 4, 7, [32, 32, 32, 32,  0,  0]), //  98
    Cell::new(Module::Extended, Row::B, 15, 4, 7, [35, 35, 35, 35,  0,  0]), //  99
    Cell::new(Module::Extended, Row::D, 5, 8, 11, [65, 65, 65, 65,  0,  0]), // 100
    Cell::new(Module::Extended, Row::D, 6, 8, 11, [75, 75, 75, 75,  0,  0]), // 101
    // ITC plugs
    Cell::new(Module::ExtendedC10, Row::C, 10, 1, 3, [ 6,  5,  6,  0,  0,  0]), // 102
    Cell::new(Module::ExtendedD4, Row::D, 4, 4, 5, [17, 17,  0,  0,  0,  0]), // 103
];

/// Read-only cell lookup table.
///
/// Cheap to construct and `Copy`, so each worker owns its own handle to the
/// shared static table.
#[derive(Debug, Clone, Copy)]
pub struct CellLut {
    cells: &'static [Cell; NUM_CELLS],
}

impl Default for CellLut {
    fn default() -> Self {
        Self::new()
    }
}

impl CellLut {
    pub fn new() -> Self {
        Self { cells: &CELLS }
    }

    /// Total number of cells.
    pub const fn num_cells(&self) -> usize {
        NUM_CELLS
    }

    /// Cell metadata for a flat index.
    pub fn cell(&self, index: usize) -> Result<&Cell, TileCalError> {
        self.cells
            .get(index)
            .ok_or(TileCalError::CellIndexOutOfRange {
                index,
                count: NUM_CELLS,
            })
    }

    /// All cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Resolve a tile coordinate into a flat cell index.
    ///
    /// `row_index` is 0-based; `period_index` counts periods along the module.
    pub fn find_cell_index(
        &self,
        module: Module,
        row_index: usize,
        period_index: usize,
    ) -> Result<usize, TileCalError> {
        let bands = match module {
            Module::LongLower | Module::LongUpper => &LONG_ROW_BANDS,
            Module::Extended => &EXTENDED_ROW_BANDS,
            Module::ExtendedC10 => return Ok(C10_CELL_INDEX),
            Module::ExtendedD4 => return Ok(D4_CELL_INDEX),
        };
        let mut index = match module {
            Module::LongUpper => LONG_MODULE_CELLS,
            Module::Extended => 2 * LONG_MODULE_CELLS,
            _ => 0,
        };

        // Rows are 1-based in ATLAS convention.
        let row = row_index + 1;
        let lookup_failed = || TileCalError::CellLookupFailed {
            module,
            row,
            period: period_index,
        };

        for band in bands {
            if row > band.last_row {
                index += band.cells;
            }
        }

        // The sub-row slot stays constant along the row.
        let first = self.cells.get(index).ok_or_else(lookup_failed)?;
        if !first.contains_row(row) {
            return Err(lookup_failed());
        }
        let slot = row - first.first_row;

        let mut covered = 0;
        loop {
            let cell = match self.cells.get(index) {
                Some(cell) if cell.module == module && cell.contains_row(row) => cell,
                _ => return Err(lookup_failed()),
            };
            let tiles = cell.tiles_per_sub_row[slot];
            if period_index < covered + tiles {
                return Ok(index);
            }
            covered += tiles;
            index += 1;
        }
    }

    /// Number of periods covered by a module's 0-based depth row.
    pub fn periods_in_row(&self, module: Module, row_index: usize) -> usize {
        let row = row_index + 1;
        self.cells
            .iter()
            .filter(|c| c.module == module && c.contains_row(row))
            .map(|c| c.tiles_per_sub_row[row - c.first_row])
            .sum()
    }
}
