use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::io::Read;
use utoipa::ToSchema;

use super::{field, line_of, reader, Columns, SkippedRow};
use crate::categorize::{resolve_details, Category};
use crate::error::ImportError;
use crate::expiry::parse_expiry;
use crate::models::{InventoryDraft, DEFAULT_UNIT};

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsvImport {
    pub drafts: Vec<InventoryDraft>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse an inventory spreadsheet export.
///
/// Only `name` is required. Optional columns are `quantity`, `unit`,
/// `expiry` (also `expiryDate`, `expiry_date`, `Expiry Date`, `expires`) and `category`.
/// A row whose expiry cannot be read is kept with no expiry date.
pub fn parse_inventory_csv<R: Read>(
    input: R,
    today: NaiveDate,
    shelf_life_days: u64,
) -> Result<CsvImport, ImportError> {
    let mut rdr = reader(input);
    let columns = Columns::new(rdr.headers()?);

    let name_col = columns.require(&["name", "item", "item name"])?;
    let quantity_col = columns.find(&["quantity", "qty"]);
    let unit_col = columns.find(&["unit", "units"]);
    let expiry_col = columns.find(&[
        "expiry",
        "expirydate",
        "expiry_date",
        "expiry date",
        "expires",
    ]);
    let category_col = columns.find(&["category"]);

    let default_expiry = today.checked_add_days(Days::new(shelf_life_days));
    let mut result = CsvImport::default();

    for (idx, record) in rdr.records().enumerate() {
        // header is line 1
        let fallback_line = idx as u64 + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                result.skipped.push(SkippedRow {
                    line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                    reason: format!("unreadable row: {}", e),
                });
                continue;
            }
        };
        let line = line_of(&record, fallback_line);

        let Some(name) = field(&record, Some(name_col)) else {
            result.skipped.push(SkippedRow {
                line,
                reason: "missing name".to_string(),
            });
            continue;
        };

        let quantity = match field(&record, quantity_col) {
            None => 1.0,
            Some(raw) => match raw.parse::<f64>() {
                Ok(q) if q.is_finite() && q > 0.0 => q,
                _ => {
                    result.skipped.push(SkippedRow {
                        line,
                        reason: format!("invalid quantity '{}'", raw),
                    });
                    continue;
                }
            },
        };

        let expiry_date = match field(&record, expiry_col) {
            None => default_expiry,
            Some(raw) => {
                let parsed = parse_expiry(raw, today);
                if parsed.is_none() {
                    tracing::debug!(line, expiry = raw, "Unreadable expiry, importing without one");
                }
                parsed
            }
        };

        let category = field(&record, category_col).and_then(|raw| raw.parse::<Category>().ok());
        let details = resolve_details(name, category);

        result.drafts.push(InventoryDraft {
            name: name.to_string(),
            category: details.category,
            icon: details.icon.to_string(),
            quantity,
            unit: field(&record, unit_col).unwrap_or(DEFAULT_UNIT).to_string(),
            expiry_date,
        });
    }

    tracing::info!(
        imported = result.drafts.len(),
        skipped = result.skipped.len(),
        "Parsed inventory CSV"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_basic_import() {
        let csv = "Name,Quantity,Unit,Expiry,Category\n\
                   Whole Milk,1,gallon,2024-06-14,\n\
                   Popcorn,3,bags,,snacks\n";
        let import = parse_inventory_csv(csv.as_bytes(), today(), 7).unwrap();
        assert!(import.skipped.is_empty());
        assert_eq!(import.drafts.len(), 2);

        let milk = &import.drafts[0];
        assert_eq!(milk.category, Category::Dairy);
        assert_eq!(milk.unit, "gallon");
        assert_eq!(milk.expiry_date, NaiveDate::from_ymd_opt(2024, 6, 14));

        let popcorn = &import.drafts[1];
        assert_eq!(popcorn.category, Category::Snacks);
        assert_eq!(popcorn.quantity, 3.0);
        assert_eq!(popcorn.expiry_date, NaiveDate::from_ymd_opt(2024, 6, 17));
    }

    #[test]
    fn test_only_name_column() {
        let import = parse_inventory_csv("name\nRice\n".as_bytes(), today(), 7).unwrap();
        let rice = &import.drafts[0];
        assert_eq!(rice.quantity, 1.0);
        assert_eq!(rice.unit, "count");
        assert_eq!(rice.icon, "🍚");
    }

    #[test]
    fn test_missing_name_column() {
        let err = parse_inventory_csv("quantity,unit\n1,kg\n".as_bytes(), today(), 7).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(ref c) if c == "name"));
    }

    #[test]
    fn test_bad_rows_are_skipped_with_line_numbers() {
        let csv = "name,quantity,expires\n\
                   ,2,\n\
                   Eggs,lots,\n\
                   Butter,-1,\n\
                   Cheese,1,whenever\n";
        let import = parse_inventory_csv(csv.as_bytes(), today(), 7).unwrap();
        assert_eq!(
            import.skipped,
            vec![
                SkippedRow {
                    line: 2,
                    reason: "missing name".to_string()
                },
                SkippedRow {
                    line: 3,
                    reason: "invalid quantity 'lots'".to_string()
                },
                SkippedRow {
                    line: 4,
                    reason: "invalid quantity '-1'".to_string()
                },
            ]
        );
        // unreadable expiry keeps the row with no date
        assert_eq!(import.drafts.len(), 1);
        assert_eq!(import.drafts[0].name, "Cheese");
        assert_eq!(import.drafts[0].expiry_date, None);
    }
}
