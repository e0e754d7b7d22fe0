// ============================================================
// FIELD MAPPER
// ============================================================
// Map decoded raw rows onto the typed postal records

use crate::application::use_cases::label_rules::suppress_sentinels;
use crate::domain::error::{AppError, Result};
use crate::domain::postal::{BusinessAddressRecord, GeneralAddressRecord, PostalRecord};
use crate::infrastructure::csv::RawRow;
use crate::shared::kana::{to_full_width_kana, KanaNormalizer};

/// Builds typed records from raw rows, normalizing text fields once
pub struct FieldMapper {
    normalize_kana: KanaNormalizer,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(to_full_width_kana)
    }
}

impl FieldMapper {
    pub fn new(normalize_kana: KanaNormalizer) -> Self {
        Self { normalize_kana }
    }

    pub fn general(&self, row: RawRow) -> Result<GeneralAddressRecord> {
        let mut fields = take_fields::<GeneralAddressRecord>(row)?.into_iter();
        let mut next = move || fields.next().unwrap_or_default();
        let kana = self.normalize_kana;

        Ok(GeneralAddressRecord {
            area_code: next(),
            old_postal_code: next(),
            postal_code: next(),
            prefecture_kana: kana(&next()),
            city_kana: kana(&next()),
            town_kana: kana(&next()),
            prefecture: kana(&next()),
            city: kana(&next()),
            town: suppress_sentinels(kana(&next())),
            spans_multiple_codes: next(),
            numbered_per_koaza: next(),
            has_chome: next(),
            shares_code: next(),
            update_status: next(),
            change_reason: next(),
        })
    }

    pub fn business(&self, row: RawRow) -> Result<BusinessAddressRecord> {
        let mut fields = take_fields::<BusinessAddressRecord>(row)?.into_iter();
        let mut next = move || fields.next().unwrap_or_default();
        let kana = self.normalize_kana;

        Ok(BusinessAddressRecord {
            area_code: next(),
            business_name_kana: kana(&next()),
            business_name: kana(&next()),
            prefecture: kana(&next()),
            city: kana(&next()),
            town: kana(&next()),
            street: kana(&next()),
            postal_code: next(),
            old_postal_code: next(),
            handling_office: next(),
            code_type: next(),
            multiple_codes: next(),
            revision: next(),
        })
    }
}

/// Check the column count for `R` and hand over the fields
fn take_fields<R: PostalRecord>(row: RawRow) -> Result<Vec<String>> {
    if row.fields.len() != R::COLUMN_COUNT {
        return Err(AppError::MalformedRow {
            schema: R::SCHEMA,
            line: row.line,
            expected: R::COLUMN_COUNT,
            found: row.fields.len(),
        });
    }
    Ok(row.fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::kana::keep_as_is;

    fn raw(fields: &[&str]) -> RawRow {
        RawRow {
            line: 1,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn ken_all(town: &str) -> RawRow {
        raw(&[
            "01101", "060  ", "0600000", "ﾎｯｶｲﾄﾞｳ", "ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ", "ｲｶﾆｹｲｻｲｶﾞﾅｲﾊﾞｱｲ",
            "北海道", "札幌市中央区", town, "0", "0", "0", "0", "0", "0",
        ])
    }

    #[test]
    fn test_general_fields_in_order() {
        let record = FieldMapper::default().general(ken_all("大通西")).unwrap();

        assert_eq!(record.area_code, "01101");
        assert_eq!(record.old_postal_code, "060  ");
        assert_eq!(record.postal_code, "0600000");
        assert_eq!(record.prefecture_kana, "ホッカイドウ");
        assert_eq!(record.city_kana, "サッポロシチュウオウク");
        assert_eq!(record.town_kana, "イカニケイサイガナイバアイ");
        assert_eq!(record.city, "札幌市中央区");
        assert_eq!(record.town, "大通西");
        assert_eq!(record.change_reason, "0");
    }

    #[test]
    fn test_general_label_sentinel_suppressed() {
        let record = FieldMapper::default()
            .general(ken_all("以下に掲載がない場合"))
            .unwrap();
        assert_eq!(record.town, "");
        // The kana reading of the sentinel is left alone
        assert_eq!(record.town_kana, "イカニケイサイガナイバアイ");
    }

    #[test]
    fn test_label_normalized_before_suppression() {
        let record = FieldMapper::default().general(ken_all("ｱｲｳ町一円")).unwrap();
        assert_eq!(record.town, "");
    }

    #[test]
    fn test_injected_normalizer() {
        let record = FieldMapper::new(keep_as_is).general(ken_all("大通西")).unwrap();
        assert_eq!(record.prefecture_kana, "ﾎｯｶｲﾄﾞｳ");
    }

    #[test]
    fn test_general_wrong_column_count() {
        let err = FieldMapper::default()
            .general(raw(&["01101", "060", "0600000"]))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedRow {
                schema: "KEN_ALL",
                expected: 15,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_business_fields_in_order() {
        let row = raw(&[
            "01101", "ｻﾂﾎﾟﾛｼﾔｸｼﾖ", "札幌市役所", "北海道", "札幌市中央区", "北一条西",
            "２丁目", "0608611", "060  ", "札幌中央", "0", "0", "0",
        ]);
        let record = FieldMapper::default().business(row).unwrap();

        assert_eq!(record.business_name_kana, "サツポロシヤクシヨ");
        assert_eq!(record.business_name, "札幌市役所");
        assert_eq!(record.street, "２丁目");
        assert_eq!(record.postal_code, "0608611");
        assert_eq!(record.old_postal_code, "060  ");
        assert_eq!(record.handling_office, "札幌中央");
        assert_eq!(record.revision, "0");
    }

    #[test]
    fn test_business_labels_not_suppressed() {
        let row = raw(&[
            "01101", "", "", "北海道", "奥尻郡", "奥尻町一円", "", "0431401", "043", "", "0",
            "0", "0",
        ]);
        let record = FieldMapper::default().business(row).unwrap();
        assert_eq!(record.town, "奥尻町一円");
    }

    #[test]
    fn test_business_wrong_column_count() {
        let err = FieldMapper::default().business(ken_all("x")).unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedRow {
                schema: "JIGYOSYO",
                expected: 13,
                found: 15,
                ..
            }
        ));
    }
}
