use crate::base::GroupField;

/// Which field labels the rows and which fields, outermost first, nest the
/// columns. A column list never repeats a field and never contains the row
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    row: GroupField,
    cols: Vec<GroupField>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("row field '{0}' cannot also be a column field")]
    RowInColumns(GroupField),
    #[error("column field '{0}' is listed more than once")]
    DuplicateColumn(GroupField),
}

impl Default for Selection {
    /// Rows by transaction type, columns by year.
    fn default() -> Self {
        Self {
            row: GroupField::TransactionType,
            cols: vec![GroupField::Year],
        }
    }
}

impl Selection {
    pub fn new(row: GroupField, cols: Vec<GroupField>) -> Result<Self, SelectionError> {
        for (i, &col) in cols.iter().enumerate() {
            if col == row {
                return Err(SelectionError::RowInColumns(col));
            }
            if cols[..i].contains(&col) {
                return Err(SelectionError::DuplicateColumn(col));
            }
        }
        Ok(Self { row, cols })
    }

    pub fn row(&self) -> GroupField {
        self.row
    }

    pub fn cols(&self) -> &[GroupField] {
        &self.cols
    }

    /// Moves the row slot to `row`, dropping it from the columns if present.
    pub fn with_row(mut self, row: GroupField) -> Self {
        self.row = row;
        self.cols.retain(|&col| col != row);
        self
    }

    /// Appends `col` to the columns, or removes it if already present. The
    /// row field cannot be toggled.
    pub fn toggle_column(mut self, col: GroupField) -> Self {
        if col == self.row {
            log::debug!("ignoring toggle of row field '{}' as a column", col);
            return self;
        }
        match self.cols.iter().position(|&c| c == col) {
            Some(i) => {
                self.cols.remove(i);
            }
            None => self.cols.push(col),
        }
        self
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by [", self.row)?;
        for (i, col) in self.cols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", col)?;
        }
        f.write_str("]")
    }
}
