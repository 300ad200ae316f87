use std::fmt;

/// Mechanical segment of the test-beam setup.
///
/// The two ITC plugs each hold a single cell and are addressed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    LongLower,
    LongUpper,
    Extended,
    ExtendedC10,
    ExtendedD4,
}

impl Module {
    /// Whether this segment belongs to a long-barrel module.
    pub fn is_long(self) -> bool {
        matches!(self, Module::LongLower | Module::LongUpper)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Module::LongLower => "lower long",
            Module::LongUpper => "upper long",
            Module::Extended | Module::ExtendedC10 | Module::ExtendedD4 => "extended",
        };
        write!(f, "{name} module")
    }
}

/// Radial depth band. B and C are read out together as BC in the long barrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    A,
    B,
    BC,
    C,
    D,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Row::A => "A",
            Row::B => "B",
            Row::BC => "BC",
            Row::C => "C",
            Row::D => "D",
        };
        f.write_str(name)
    }
}

/// Readout side of a cell. Each cell is read by two PMTs, one at each tile edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Near,
    Far,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Near, Side::Far];

    /// Short label used in file names and diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Side::Near => "near",
            Side::Far => "far",
        }
    }
}

/// Coordinates of a scintillator tile in the cell lookup space.
///
/// `row_index` is 0-based (the lookup converts it to the 1-based ATLAS rows),
/// `period_index` counts periods from the start of the module's period axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub module: Module,
    pub row_index: usize,
    pub period_index: usize,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} row {} period {}",
            self.module, self.row_index, self.period_index
        )
    }
}
