use core::{fmt, str::FromStr};

/// A square's position on the grid, as `(column, row)`
///
/// Both components are always in `0..8`; every way of building one checks this, so indexing a
/// grid with a `Coordinate` can never go out of bounds. Columns are named `a` through `h` and
/// rows `1` through `8`, counted from the near-left corner of the board as it is currently
/// oriented.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("coordinate ({column}, {row}) is off the board")]
    OutOfRange { column: i16, row: i16 },
    #[error("invalid square name {0:?}")]
    InvalidName(String),
}

impl Coordinate {
    /// The number of columns (and rows) on the board
    pub const SIZE: u8 = 8;

    pub const A1: Self = Self::new_unchecked(0, 0);
    pub const B1: Self = Self::new_unchecked(1, 0);
    pub const C1: Self = Self::new_unchecked(2, 0);
    pub const D1: Self = Self::new_unchecked(3, 0);
    pub const E1: Self = Self::new_unchecked(4, 0);
    pub const F1: Self = Self::new_unchecked(5, 0);
    pub const G1: Self = Self::new_unchecked(6, 0);
    pub const H1: Self = Self::new_unchecked(7, 0);
    pub const A2: Self = Self::new_unchecked(0, 1);
    pub const B2: Self = Self::new_unchecked(1, 1);
    pub const C2: Self = Self::new_unchecked(2, 1);
    pub const D2: Self = Self::new_unchecked(3, 1);
    pub const E2: Self = Self::new_unchecked(4, 1);
    pub const F2: Self = Self::new_unchecked(5, 1);
    pub const G2: Self = Self::new_unchecked(6, 1);
    pub const H2: Self = Self::new_unchecked(7, 1);
    pub const A3: Self = Self::new_unchecked(0, 2);
    pub const B3: Self = Self::new_unchecked(1, 2);
    pub const C3: Self = Self::new_unchecked(2, 2);
    pub const D3: Self = Self::new_unchecked(3, 2);
    pub const E3: Self = Self::new_unchecked(4, 2);
    pub const F3: Self = Self::new_unchecked(5, 2);
    pub const G3: Self = Self::new_unchecked(6, 2);
    pub const H3: Self = Self::new_unchecked(7, 2);
    pub const A4: Self = Self::new_unchecked(0, 3);
    pub const B4: Self = Self::new_unchecked(1, 3);
    pub const C4: Self = Self::new_unchecked(2, 3);
    pub const D4: Self = Self::new_unchecked(3, 3);
    pub const E4: Self = Self::new_unchecked(4, 3);
    pub const F4: Self = Self::new_unchecked(5, 3);
    pub const G4: Self = Self::new_unchecked(6, 3);
    pub const H4: Self = Self::new_unchecked(7, 3);
    pub const A5: Self = Self::new_unchecked(0, 4);
    pub const B5: Self = Self::new_unchecked(1, 4);
    pub const C5: Self = Self::new_unchecked(2, 4);
    pub const D5: Self = Self::new_unchecked(3, 4);
    pub const E5: Self = Self::new_unchecked(4, 4);
    pub const F5: Self = Self::new_unchecked(5, 4);
    pub const G5: Self = Self::new_unchecked(6, 4);
    pub const H5: Self = Self::new_unchecked(7, 4);
    pub const A6: Self = Self::new_unchecked(0, 5);
    pub const B6: Self = Self::new_unchecked(1, 5);
    pub const C6: Self = Self::new_unchecked(2, 5);
    pub const D6: Self = Self::new_unchecked(3, 5);
    pub const E6: Self = Self::new_unchecked(4, 5);
    pub const F6: Self = Self::new_unchecked(5, 5);
    pub const G6: Self = Self::new_unchecked(6, 5);
    pub const H6: Self = Self::new_unchecked(7, 5);
    pub const A7: Self = Self::new_unchecked(0, 6);
    pub const B7: Self = Self::new_unchecked(1, 6);
    pub const C7: Self = Self::new_unchecked(2, 6);
    pub const D7: Self = Self::new_unchecked(3, 6);
    pub const E7: Self = Self::new_unchecked(4, 6);
    pub const F7: Self = Self::new_unchecked(5, 6);
    pub const G7: Self = Self::new_unchecked(6, 6);
    pub const H7: Self = Self::new_unchecked(7, 6);
    pub const A8: Self = Self::new_unchecked(0, 7);
    pub const B8: Self = Self::new_unchecked(1, 7);
    pub const C8: Self = Self::new_unchecked(2, 7);
    pub const D8: Self = Self::new_unchecked(3, 7);
    pub const E8: Self = Self::new_unchecked(4, 7);
    pub const F8: Self = Self::new_unchecked(5, 7);
    pub const G8: Self = Self::new_unchecked(6, 7);
    pub const H8: Self = Self::new_unchecked(7, 7);

    /// Only for values already known to be on the board
    pub(crate) const fn new_unchecked(column: u8, row: u8) -> Self {
        debug_assert!(column < Self::SIZE && row < Self::SIZE);
        Self { column, row }
    }

    /// Produce a coordinate, or `None` if it would be off the board
    ///
    /// ```
    /// # use board::Coordinate;
    /// assert_eq!(Coordinate::new(4, 1), Some(Coordinate::E2));
    /// assert_eq!(Coordinate::new(8, 0), None);
    /// ```
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column < Self::SIZE && row < Self::SIZE {
            Some(Self { column, row })
        } else {
            None
        }
    }

    pub const fn column(self) -> u8 {
        self.column
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    /// Offset the given number of columns and rows, returning `None` if that leaves the board
    ///
    /// ```
    /// # use board::Coordinate;
    /// assert_eq!(Coordinate::A1.offset(3, 1), Some(Coordinate::D2));
    /// assert_eq!(Coordinate::D2.offset(-3, -1), Some(Coordinate::A1));
    /// assert_eq!(Coordinate::H4.offset(1, 0), None);
    /// ```
    pub fn offset(self, columns: i8, rows: i8) -> Option<Self> {
        let column = self.column as i16 + columns as i16;
        let row = self.row as i16 + rows as i16;
        Self::try_from((column, row)).ok()
    }

    /// The signed number of columns from `self` to `other`
    pub const fn columns_to(self, other: Self) -> i8 {
        other.column as i8 - self.column as i8
    }

    /// The signed number of rows from `self` to `other`
    pub const fn rows_to(self, other: Self) -> i8 {
        other.row as i8 - self.row as i8
    }

    /// The same square seen from the other side of the board
    ///
    /// ```
    /// # use board::Coordinate;
    /// assert_eq!(Coordinate::A1.flipped(), Coordinate::H8);
    /// assert_eq!(Coordinate::E2.flipped(), Coordinate::D7);
    /// ```
    pub const fn flipped(self) -> Self {
        Self {
            column: Self::SIZE - 1 - self.column,
            row: Self::SIZE - 1 - self.row,
        }
    }

    /// An iterator over all squares on the board, column by column
    ///
    /// ```
    /// assert_eq!(board::Coordinate::all().count(), 64);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::SIZE * Self::SIZE).map(|idx| Self::new_unchecked(idx / Self::SIZE, idx % Self::SIZE))
    }

    /// Indices into a `[column][row]` grid
    pub const fn index(self) -> (usize, usize) {
        (self.column as usize, self.row as usize)
    }
}
impl TryFrom<(i16, i16)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((column, row): (i16, i16)) -> Result<Self, Self::Error> {
        match (u8::try_from(column), u8::try_from(row)) {
            (Ok(c), Ok(r)) if c < Self::SIZE && r < Self::SIZE => Ok(Self::new_unchecked(c, r)),
            _ => Err(CoordinateError::OutOfRange { column, row }),
        }
    }
}
impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinate")
            .field("column", &self.column)
            .field("row", &self.row)
            .field("readable", &format_args!("{self}"))
            .finish()
    }
}
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column) as char, self.row + 1)
    }
}
impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(CoordinateError::InvalidName(s.to_owned()));
        };
        match (file.to_ascii_lowercase(), rank) {
            (file @ b'a'..=b'h', rank @ b'1'..=b'8') => {
                Ok(Self::new_unchecked(file - b'a', rank - b'1'))
            }
            _ => Err(CoordinateError::InvalidName(s.to_owned())),
        }
    }
}
