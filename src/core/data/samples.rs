use crate::core::data::escape_time::EscapeTime;
use crate::core::data::sample_order::SampleOrder;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SamplesError {
    #[error("{width}x{height} samples need {expected} values, got {actual}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Flat grid of per-cell values plus the layout needed to address them.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<T> {
    width: u32,
    height: u32,
    order: SampleOrder,
    values: Vec<T>,
}

impl<T> Samples<T> {
    pub fn from_values(
        width: u32,
        height: u32,
        order: SampleOrder,
        values: Vec<T>,
    ) -> Result<Self, SamplesError> {
        let expected = width as usize * height as usize;

        if values.len() != expected {
            return Err(SamplesError::LengthMismatch {
                width,
                height,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            order,
            values,
        })
    }

    // Values produced by walking `order.cells(width, height)`.
    pub(crate) fn from_cells(width: u32, height: u32, order: SampleOrder, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);

        Self {
            width,
            height,
            order,
            values,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn order(&self) -> SampleOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    #[must_use]
    pub fn get(&self, column: u32, row: u32) -> Option<&T> {
        if column >= self.width || row >= self.height {
            return None;
        }

        self.values
            .get(self.order.index(column, row, self.width, self.height))
    }

    /// Values row by row, top to bottom, whatever the storage order.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &T> {
        SampleOrder::RowMajor
            .cells(self.width, self.height)
            .map(|(column, row)| &self.values[self.order.index(column, row, self.width, self.height)])
    }
}

impl Samples<EscapeTime> {
    /// Integers as the legacy sampler reported them, in storage order.
    #[must_use]
    pub fn legacy_counts(&self) -> Vec<u32> {
        self.values.iter().map(EscapeTime::legacy_count).collect()
    }

    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.values.iter().filter(|e| e.is_bounded()).count()
    }
}
