// ============================================================
// GENERAL ADDRESS RECORD (KEN_ALL)
// ============================================================
// One row of the address-range dataset and its split-label merge

use super::{col, PostalRecord, UnifiedRow};

const OPEN_PARENS: [char; 2] = ['(', '（'];
const CLOSE_PARENS: [char; 2] = [')', '）'];

/// A row of the general address-range dataset (15 columns)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralAddressRecord {
    /// Local government code (JIS X 0401/0402)
    pub area_code: String,

    /// Old 5-digit postal code
    pub old_postal_code: String,

    /// 7-digit postal code, the grouping key
    pub postal_code: String,

    pub prefecture_kana: String,
    pub city_kana: String,
    pub town_kana: String,

    pub prefecture: String,
    pub city: String,

    /// Town-level name; the free-text label that may be split across rows
    pub town: String,

    /// "1" when the town is served by more than one postal code
    pub spans_multiple_codes: String,

    /// "1" when lot numbers are assigned per koaza
    pub numbered_per_koaza: String,

    /// "1" when the town has chome
    pub has_chome: String,

    /// "1" when one postal code covers more than one town
    pub shares_code: String,

    /// 0 unchanged, 1 changed, 2 abolished
    pub update_status: String,

    /// 0 unchanged .. 6 abolished
    pub change_reason: String,
}

impl GeneralAddressRecord {
    /// True when this label closes a parenthesis it never opened, i.e. it is
    /// the tail of a label the source split over several rows.
    pub fn ends_split_label(&self) -> bool {
        self.town.ends_with(CLOSE_PARENS) && !self.town.contains(OPEN_PARENS)
    }
}

impl PostalRecord for GeneralAddressRecord {
    const SCHEMA: &'static str = "KEN_ALL";
    const COLUMN_COUNT: usize = 15;

    fn postal_code(&self) -> &str {
        &self.postal_code
    }

    fn to_unified_row(&self) -> UnifiedRow {
        UnifiedRow::from(self)
    }

    /// Collapses a group into its first record when the last label closes a
    /// parenthesis opened in an earlier row. Labels are joined in order.
    fn merge_group(group: Vec<Self>) -> Vec<Self> {
        if group.len() < 2 {
            return group;
        }
        let is_split = group.last().map(|last| last.ends_split_label()).unwrap_or(false);
        if !is_split {
            return group;
        }

        let label: String = group.iter().map(|record| record.town.as_str()).collect();
        let mut iter = group.into_iter();
        match iter.next() {
            Some(mut first) => {
                first.town = label;
                vec![first]
            }
            None => Vec::new(),
        }
    }
}

impl From<&GeneralAddressRecord> for UnifiedRow {
    fn from(record: &GeneralAddressRecord) -> Self {
        let flags = [
            &record.spans_multiple_codes,
            &record.numbered_per_koaza,
            &record.has_chome,
            &record.shares_code,
            &record.update_status,
            &record.change_reason,
        ];

        let mut row = UnifiedRow::new();
        row.set(col::AREA_CODE, &record.area_code)
            .set(col::OLD_POSTAL_CODE, &record.old_postal_code)
            .set(col::POSTAL_CODE, &record.postal_code)
            .set(col::PREFECTURE_KANA, &record.prefecture_kana)
            .set(col::CITY_KANA, &record.city_kana)
            .set(col::TOWN_KANA, &record.town_kana)
            .set(col::PREFECTURE, &record.prefecture)
            .set(col::CITY, &record.city)
            .set(col::TOWN, &record.town);
        for (offset, flag) in flags.iter().enumerate() {
            row.set(col::GENERAL_FLAGS + offset, flag);
        }
        row
    }
}
