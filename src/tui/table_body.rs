use crate::render::{TableBody, TableRow};

/// Table body backing the terminal table widget
#[derive(Debug, Clone, Default)]
pub struct TuiTableBody {
    rows: Vec<TableRow>,
}

impl TuiTableBody {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableBody for TuiTableBody {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn push_row(&mut self, row: &TableRow) {
        self.rows.push(row.clone());
    }
}
