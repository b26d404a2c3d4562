use crate::core::store;
use crate::domain::model::{Record, Snapshot, SortField, SortOrder};
use crate::utils::error::Result;

/// Sort key for `record`: the numeric value of `field`, or 0 when the field
/// is missing or not a number. Such records are ranked, not excluded.
///
/// Integers beyond 2^53 lose precision in `f64` and may compare equal.
pub fn sort_key(record: &Record, field: SortField) -> f64 {
    // + 0.0 把 -0.0 正規化為 0.0，避免 total_cmp 把兩者分開排序
    record.numeric(field.as_str()).unwrap_or(0.0) + 0.0
}

/// 依指定欄位與方向排序全部紀錄 (穩定排序，相同值保持快照順序)
pub fn sort_by(snapshot: &Snapshot, field: SortField, order: SortOrder) -> Vec<Record> {
    sort_records(snapshot.records().to_vec(), field, order)
}

pub fn sort_records(mut records: Vec<Record>, field: SortField, order: SortOrder) -> Vec<Record> {
    // slice::sort_by 為穩定排序；降冪時比較子反向而非整串 reverse，才能保持相同值的原順序
    match order {
        SortOrder::Ascending => {
            records.sort_by(|a, b| sort_key(a, field).total_cmp(&sort_key(b, field)))
        }
        SortOrder::Descending => {
            records.sort_by(|a, b| sort_key(b, field).total_cmp(&sort_key(a, field)))
        }
    }
    records
}

/// Validates raw request parameters. The field is checked before the order;
/// a missing field is reported as an invalid (empty) one.
pub fn parse_sort_params(field: Option<&str>, order: &str) -> Result<(SortField, SortOrder)> {
    let field: SortField = field.unwrap_or_default().parse()?;
    let order: SortOrder = order.parse()?;
    Ok((field, order))
}

pub fn by_id<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a Record> {
    store::get(snapshot, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::parse_snapshot;
    use crate::utils::error::ApiError;

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn two_patients() -> Snapshot {
        parse_snapshot(
            br#"{
                "P001": {"height": 170, "weight": 65, "bmi": 22.5},
                "P002": {"height": 160, "weight": 70, "bmi": 27.3}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_bmi_scenario() {
        let snapshot = two_patients();

        let asc = sort_by(&snapshot, SortField::Bmi, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["P001", "P002"]);

        let desc = sort_by(&snapshot, SortField::Bmi, SortOrder::Descending);
        assert_eq!(ids(&desc), vec!["P002", "P001"]);

        assert!(matches!(
            by_id(&snapshot, "P003"),
            Err(ApiError::NotFound { .. })
        ));
    }

    #[test]
    fn test_height_orders_opposite_to_bmi() {
        let snapshot = two_patients();
        let asc = sort_by(&snapshot, SortField::Height, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["P002", "P001"]);
    }

    #[test]
    fn test_missing_field_ranks_as_zero() {
        let snapshot = parse_snapshot(
            br#"{
                "A": {"weight": 50},
                "B": {"weight": -3},
                "C": {"height": 180}
            }"#,
        )
        .unwrap();

        let asc = sort_by(&snapshot, SortField::Weight, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["B", "C", "A"]);
        assert_eq!(asc.len(), snapshot.len());
    }

    #[test]
    fn test_non_numeric_value_ranks_as_zero() {
        let snapshot = parse_snapshot(
            br#"{
                "A": {"bmi": 5},
                "B": {"bmi": "unknown"}
            }"#,
        )
        .unwrap();
        let asc = sort_by(&snapshot, SortField::Bmi, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["B", "A"]);
    }

    #[test]
    fn test_all_missing_descending_is_stable() {
        let snapshot = parse_snapshot(
            br#"{
                "P003": {"height": 150},
                "P001": {"height": 170},
                "P002": {"weight": 80}
            }"#,
        )
        .unwrap();

        let desc = sort_by(&snapshot, SortField::Bmi, SortOrder::Descending);
        assert_eq!(ids(&desc), vec!["P003", "P001", "P002"]);
    }

    #[test]
    fn test_ties_keep_snapshot_order_in_both_directions() {
        let snapshot = parse_snapshot(
            br#"{
                "X": {"bmi": 20},
                "Y": {"bmi": 25},
                "Z": {"bmi": 20}
            }"#,
        )
        .unwrap();

        let asc = sort_by(&snapshot, SortField::Bmi, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["X", "Z", "Y"]);

        let desc = sort_by(&snapshot, SortField::Bmi, SortOrder::Descending);
        assert_eq!(ids(&desc), vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_parse_sort_params_validates_field_and_order() {
        let err = parse_sort_params(Some("age"), "asc").unwrap_err();
        assert!(matches!(err, ApiError::InvalidField { .. }));
        assert!(err.to_string().contains("height, weight, bmi"));

        let err = parse_sort_params(Some("bmi"), "up").unwrap_err();
        assert!(matches!(err, ApiError::InvalidDirection { .. }));

        // 欄位與方向同時錯誤時，先回報欄位
        let err = parse_sort_params(Some("age"), "up").unwrap_err();
        assert!(matches!(err, ApiError::InvalidField { .. }));

        let err = parse_sort_params(None, "asc").unwrap_err();
        assert!(matches!(err, ApiError::InvalidField { ref value, .. } if value.is_empty()));

        let (field, order) = parse_sort_params(Some("bmi"), "desc").unwrap();
        let sorted = sort_by(&two_patients(), field, order);
        assert_eq!(ids(&sorted), vec!["P002", "P001"]);
    }

    #[test]
    fn test_negative_zero_ties_with_missing_field() {
        let snapshot = parse_snapshot(br#"{"A": {"height": 1}, "B": {"bmi": -0.0}}"#).unwrap();

        let asc = sort_by(&snapshot, SortField::Bmi, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["A", "B"]);

        let desc = sort_by(&snapshot, SortField::Bmi, SortOrder::Descending);
        assert_eq!(ids(&desc), vec!["A", "B"]);
    }

    #[test]
    fn test_by_id_returns_stored_record() {
        let snapshot = two_patients();
        let record = by_id(&snapshot, "P002").unwrap();
        assert_eq!(record, snapshot.get("P002").unwrap());
        assert_eq!(record.numeric("weight"), Some(70.0));
    }
}
