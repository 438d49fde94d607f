//! Grid columns, distributions, and the assembled grid configuration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ScaleRange, ValidationError};

/// Ordered cell counts, one per column, left (`min`) to right (`max`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(Vec<u32>);

impl Distribution {
    pub fn new(cells: Vec<u32>) -> Self {
        Self(cells)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// Returns true if every mirrored pair holds the same count.
    pub fn is_symmetric(&self) -> bool {
        let n = self.0.len();
        (0..n / 2).all(|i| self.0[i] == self.0[n - 1 - i])
    }

    /// Index of the first column holding the largest count.
    pub fn peak_index(&self) -> Option<usize> {
        let max = self.0.iter().copied().max()?;
        self.0.iter().position(|&c| c == max)
    }
}

impl From<Vec<u32>> for Distribution {
    fn from(cells: Vec<u32>) -> Self {
        Self(cells)
    }
}

/// One scale position and its cell capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub value: i32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    pub cells: u32,
}

impl GridColumn {
    /// Creates a column with the default signed label.
    pub fn new(value: i32, cells: u32) -> Self {
        Self {
            value,
            label: Self::label_for(value),
            custom_label: None,
            cells,
        }
    }

    /// Signed label for a scale value: "-4", "0", "+4".
    pub fn label_for(value: i32) -> String {
        if value > 0 {
            format!("+{}", value)
        } else {
            value.to_string()
        }
    }

    /// Label shown to participants; a custom label wins over the default.
    pub fn display_label(&self) -> &str {
        self.custom_label.as_deref().unwrap_or(&self.label)
    }

    /// Polar descriptor for the extreme and neutral positions of `range`.
    pub fn descriptor(&self, range: &ScaleRange) -> Option<&'static str> {
        if self.value == range.min() {
            Some("Most disagree")
        } else if self.value == range.max() {
            Some("Most agree")
        } else if self.value == 0 {
            Some("Neutral")
        } else {
            None
        }
    }
}

/// The instrument shape handed to the grid-editing UI and persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfiguration {
    range: ScaleRange,
    columns: Vec<GridColumn>,
    distribution: Distribution,
    symmetric: bool,
    instructions: String,
}

impl GridConfiguration {
    /// Binds a distribution to the columns of `range`.
    ///
    /// # Errors
    /// - `DistributionMismatch` if the distribution length differs from the column count
    /// - `ValidationFailed` if the instructions are blank
    pub fn from_distribution(
        range: ScaleRange,
        distribution: Distribution,
        instructions: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if distribution.len() != range.columns() {
            return Err(DomainError::new(
                ErrorCode::DistributionMismatch,
                format!(
                    "Distribution has {} values but range {} has {} columns",
                    distribution.len(),
                    range,
                    range.columns()
                ),
            )
            .with_detail("expected", range.columns().to_string())
            .with_detail("actual", distribution.len().to_string()));
        }

        let instructions = instructions.into();
        if instructions.trim().is_empty() {
            return Err(ValidationError::empty_field("instructions").into());
        }

        let columns = range
            .values()
            .zip(distribution.as_slice())
            .map(|(value, &cells)| GridColumn::new(value, cells))
            .collect();

        Ok(Self {
            range,
            columns,
            symmetric: distribution.is_symmetric(),
            distribution,
            instructions,
        })
    }

    pub fn range(&self) -> ScaleRange {
        self.range
    }

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn total_items(&self) -> u64 {
        self.distribution.total()
    }

    /// Sets the capacity of the column at scale `value` (a hand edit).
    ///
    /// Derived fields are recomputed; structural quality is left to the validator.
    pub fn set_cells(&mut self, value: i32, cells: u32) -> Result<(), DomainError> {
        let index = self.index_of(value)?;
        self.columns[index].cells = cells;
        self.refresh();
        Ok(())
    }

    /// Attaches a participant-facing label to the column at scale `value`.
    pub fn set_custom_label(
        &mut self,
        value: i32,
        label: impl Into<String>,
    ) -> Result<(), DomainError> {
        let index = self.index_of(value)?;
        let label = label.into();
        self.columns[index].custom_label = if label.trim().is_empty() {
            None
        } else {
            Some(label)
        };
        Ok(())
    }

    fn index_of(&self, value: i32) -> Result<usize, DomainError> {
        if !self.range.contains(value) {
            return Err(ValidationError::out_of_range(
                "column",
                self.range.min(),
                self.range.max(),
                value,
            )
            .into());
        }
        Ok((value - self.range.min()) as usize)
    }

    fn refresh(&mut self) {
        self.distribution = self.columns.iter().map(|c| c.cells).collect::<Vec<_>>().into();
        self.symmetric = self.distribution.is_symmetric();
    }
}
