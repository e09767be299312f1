/// Layout of the flat sample vector.
///
/// `ColumnMajor` stores cell (column, row) at `column * height + row`, which is
/// the layout the legacy sampler used. `RowMajor` stores it at
/// `row * width + column`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SampleOrder {
    #[default]
    ColumnMajor,
    RowMajor,
}

impl SampleOrder {
    pub const ALL: &'static [Self] = &[Self::ColumnMajor, Self::RowMajor];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ColumnMajor => "column-major",
            Self::RowMajor => "row-major",
        }
    }

    #[must_use]
    pub fn index(self, column: u32, row: u32, width: u32, height: u32) -> usize {
        match self {
            Self::ColumnMajor => column as usize * height as usize + row as usize,
            Self::RowMajor => row as usize * width as usize + column as usize,
        }
    }

    /// Cells in storage order.
    pub fn cells(self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let (outer, inner) = match self {
            Self::ColumnMajor => (width, height),
            Self::RowMajor => (height, width),
        };

        (0..outer).flat_map(move |o| {
            (0..inner).map(move |i| match self {
                Self::ColumnMajor => (o, i),
                Self::RowMajor => (i, o),
            })
        })
    }
}
