// ============================================================
// UNIFIED ROW
// ============================================================
// The 22-column output shape shared by both datasets

pub const UNIFIED_COLUMN_COUNT: usize = 22;

/// Column positions of the unified row
pub mod col {
    pub const AREA_CODE: usize = 0;
    pub const OLD_POSTAL_CODE: usize = 1;
    pub const POSTAL_CODE: usize = 2;
    pub const PREFECTURE_KANA: usize = 3;
    pub const CITY_KANA: usize = 4;
    pub const TOWN_KANA: usize = 5;
    pub const PREFECTURE: usize = 6;
    pub const CITY: usize = 7;
    pub const TOWN: usize = 8;
    pub const STREET: usize = 9;
    pub const BUSINESS_NAME: usize = 10;
    pub const BUSINESS_NAME_KANA: usize = 11;
    /// First of the six general-dataset option flags (12..=17)
    pub const GENERAL_FLAGS: usize = 12;
    pub const HANDLING_OFFICE: usize = 18;
    pub const CODE_TYPE: usize = 19;
    pub const MULTIPLE_CODES: usize = 20;
    pub const REVISION: usize = 21;

    /// Columns only a general-address record writes
    pub const GENERAL_ONLY: [usize; 9] = [3, 4, 5, 12, 13, 14, 15, 16, 17];

    /// Columns only a business-address record writes
    pub const BUSINESS_ONLY: [usize; 7] = [9, 10, 11, 18, 19, 20, 21];
}

/// One output row. Columns a schema does not own stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedRow {
    columns: [String; UNIFIED_COLUMN_COUNT],
}

impl UnifiedRow {
    /// Create a row with every column empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, index: usize, value: &str) -> &mut Self {
        self.columns[index] = value.to_string();
        self
    }

    /// Column value, or `""` past the last column
    pub fn get(&self, index: usize) -> &str {
        self.columns.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
