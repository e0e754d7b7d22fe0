// ============================================================
// BUSINESS ADDRESS RECORD (JIGYOSYO)
// ============================================================
// One row of the large-volume business dataset

use super::{col, PostalRecord, UnifiedRow};

/// A row of the business single-address dataset (13 columns)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessAddressRecord {
    /// Local government code of the business location
    pub area_code: String,

    pub business_name_kana: String,
    pub business_name: String,

    pub prefecture: String,
    pub city: String,
    pub town: String,

    /// Koaza, chome, lot number and building detail
    pub street: String,

    /// Individual postal code, the grouping key
    pub postal_code: String,

    pub old_postal_code: String,

    /// Post office handling delivery
    pub handling_office: String,

    /// 0 business, 1 PO box
    pub code_type: String,

    /// 0 single code, 1..3 index within a multi-code business
    pub multiple_codes: String,

    /// 0 unchanged, 1 added, 5 abolished
    pub revision: String,
}

impl PostalRecord for BusinessAddressRecord {
    const SCHEMA: &'static str = "JIGYOSYO";
    const COLUMN_COUNT: usize = 13;

    fn postal_code(&self) -> &str {
        &self.postal_code
    }

    fn to_unified_row(&self) -> UnifiedRow {
        UnifiedRow::from(self)
    }
}

impl From<&BusinessAddressRecord> for UnifiedRow {
    fn from(record: &BusinessAddressRecord) -> Self {
        let mut row = UnifiedRow::new();
        row.set(col::AREA_CODE, &record.area_code)
            .set(col::OLD_POSTAL_CODE, &record.old_postal_code)
            .set(col::POSTAL_CODE, &record.postal_code)
            .set(col::PREFECTURE, &record.prefecture)
            .set(col::CITY, &record.city)
            .set(col::TOWN, &record.town)
            .set(col::STREET, &record.street)
            .set(col::BUSINESS_NAME, &record.business_name)
            .set(col::BUSINESS_NAME_KANA, &record.business_name_kana)
            .set(col::HANDLING_OFFICE, &record.handling_office)
            .set(col::CODE_TYPE, &record.code_type)
            .set(col::MULTIPLE_CODES, &record.multiple_codes)
            .set(col::REVISION, &record.revision);
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BusinessAddressRecord {
        BusinessAddressRecord {
            area_code: "01101".to_string(),
            business_name_kana: "サツポロシヤクシヨ".to_string(),
            business_name: "札幌市役所".to_string(),
            prefecture: "北海道".to_string(),
            city: "札幌市中央区".to_string(),
            town: "北一条西".to_string(),
            street: "２丁目".to_string(),
            postal_code: "0608611".to_string(),
            old_postal_code: "060".to_string(),
            handling_office: "札幌中央".to_string(),
            code_type: "0".to_string(),
            multiple_codes: "0".to_string(),
            revision: "0".to_string(),
        }
    }

    #[test]
    fn test_projection_columns() {
        let row = UnifiedRow::from(&sample());

        assert_eq!(row.get(col::AREA_CODE), "01101");
        assert_eq!(row.get(col::OLD_POSTAL_CODE), "060");
        assert_eq!(row.get(col::POSTAL_CODE), "0608611");
        assert_eq!(row.get(col::TOWN), "北一条西");
        assert_eq!(row.get(col::STREET), "２丁目");
        assert_eq!(row.get(col::BUSINESS_NAME), "札幌市役所");
        assert_eq!(row.get(col::BUSINESS_NAME_KANA), "サツポロシヤクシヨ");
        assert_eq!(row.get(col::HANDLING_OFFICE), "札幌中央");
    }

    #[test]
    fn test_projection_leaves_general_columns_blank() {
        let row = UnifiedRow::from(&sample());
        for idx in col::GENERAL_ONLY {
            assert_eq!(row.get(idx), "", "column {} should be blank", idx);
        }
    }

    #[test]
    fn test_groups_are_never_merged() {
        let mut second = sample();
        second.street = "２丁目)".to_string();
        let group = vec![sample(), second];

        let merged = BusinessAddressRecord::merge_group(group.clone());
        assert_eq!(merged, group);
    }
}
