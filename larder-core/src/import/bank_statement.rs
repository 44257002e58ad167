//! Turn grocery purchases on a card or bank statement into inventory.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use utoipa::ToSchema;

use super::{field, line_of, reader, Columns, SkippedRow};
use crate::error::ImportError;
use crate::models::{InventoryDraft, DEFAULT_UNIT};

pub struct Grocer {
    /// Lower-case fragment searched for in the transaction description.
    pub pattern: &'static str,
    pub name: &'static str,
    /// What a typical basket from this store is assumed to contain.
    pub typical_items: &'static [&'static str],
}

pub const KNOWN_GROCERS: &[Grocer] = &[
    Grocer {
        pattern: "trader joe",
        name: "Trader Joe's",
        typical_items: &["Organic Eggs", "Almond Butter", "Mixed Greens"],
    },
    Grocer {
        pattern: "whole foods",
        name: "Whole Foods",
        typical_items: &["Free Range Chicken", "Quinoa", "Organic Milk"],
    },
    Grocer {
        pattern: "safeway",
        name: "Safeway",
        typical_items: &["Bread", "Butter", "Orange Juice"],
    },
    Grocer {
        pattern: "costco",
        name: "Costco",
        typical_items: &["Ground Beef", "Rice", "Frozen Vegetables", "Cheese"],
    },
    Grocer {
        pattern: "uber eats",
        name: "Uber Eats",
        typical_items: &["Leftovers"],
    },
];

const FOOD_CATEGORY_WORDS: &[&str] = &["grocer", "food", "supermarket", "restaurant"];

/// Placeholder item for food purchases at an unrecognized merchant.
const GENERIC_ITEM: &str = "Groceries";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    pub category: Option<String>,
}

impl Transaction {
    fn grocer(&self) -> Option<&'static Grocer> {
        let description = self.description.to_lowercase();
        KNOWN_GROCERS
            .iter()
            .find(|g| description.contains(g.pattern))
    }

    /// Whether this looks like a food purchase, by statement category or by
    /// merchant name.
    pub fn is_food(&self) -> bool {
        let by_category = self.category.as_deref().is_some_and(|c| {
            let c = c.to_lowercase();
            FOOD_CATEGORY_WORDS.iter().any(|w| c.contains(w))
        });
        by_category || self.grocer().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodPurchase {
    pub transaction: Transaction,
    /// Known grocer name, if recognized.
    pub merchant: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankImport {
    pub food: Vec<FoodPurchase>,
    /// Transactions that are not food purchases.
    pub ignored: Vec<Transaction>,
    /// Rows that could not be read at all.
    pub skipped: Vec<SkippedRow>,
    pub drafts: Vec<InventoryDraft>,
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    let negative = cleaned.starts_with('(') && cleaned.ends_with(')');
    let value: f64 = cleaned.trim_matches(|c| c == '(' || c == ')').parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse an Amex or Chase style CSV statement.
///
/// Needs a description column (`description`, `merchant` or `payee`).
/// `amount` (or `debit`) and `category` are optional.
pub fn parse_bank_statement<R: Read>(
    input: R,
    today: NaiveDate,
    shelf_life_days: u64,
) -> Result<BankImport, ImportError> {
    let mut rdr = reader(input);
    let columns = Columns::new(rdr.headers()?);

    let description_col = columns.require(&["description", "merchant", "payee"])?;
    let amount_col = columns.find(&["amount", "debit"]);
    let category_col = columns.find(&["category"]);

    let mut result = BankImport::default();

    for (idx, record) in rdr.records().enumerate() {
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

        let Some(description) = field(&record, Some(description_col)) else {
            result.skipped.push(SkippedRow {
                line,
                reason: "missing description".to_string(),
            });
            continue;
        };

        let amount = match field(&record, amount_col) {
            None => 0.0,
            Some(raw) => match parse_amount(raw) {
                Some(amount) => amount,
                None => {
                    result.skipped.push(SkippedRow {
                        line,
                        reason: format!("invalid amount '{}'", raw),
                    });
                    continue;
                }
            },
        };

        let transaction = Transaction {
            description: description.to_string(),
            amount,
            category: field(&record, category_col).map(str::to_string),
        };

        if !transaction.is_food() {
            result.ignored.push(transaction);
            continue;
        }

        let grocer = transaction.grocer();
        let items: Vec<String> = match grocer {
            Some(g) => g.typical_items.iter().map(|s| s.to_string()).collect(),
            None => vec![GENERIC_ITEM.to_string()],
        };

        result.drafts.extend(
            items
                .iter()
                .map(|name| InventoryDraft::guessed(name, DEFAULT_UNIT, today, shelf_life_days)),
        );
        result.food.push(FoodPurchase {
            transaction,
            merchant: grocer.map(|g| g.name.to_string()),
            items,
        });
    }

    tracing::info!(
        food = result.food.len(),
        ignored = result.ignored.len(),
        items = result.drafts.len(),
        "Parsed bank statement"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::Category;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("-12.00"), Some(-12.0));
        assert_eq!(parse_amount("(8.25)"), Some(-8.25));
        assert_eq!(parse_amount("n/a"), None);
    }

    #[test]
    fn test_known_grocers_and_categories() {
        let csv = "Date,Description,Amount,Category\n\
                   06/01/2024,TRADER JOE'S #552,45.12,Merchandise\n\
                   06/02/2024,SHELL OIL,30.00,Gas\n\
                   06/03/2024,Corner Market,12.40,Groceries\n\
                   06/04/2024,UBER EATS order,22.10,Food Delivery\n";
        let import = parse_bank_statement(csv.as_bytes(), today(), 7).unwrap();

        assert_eq!(import.food.len(), 3);
        assert_eq!(import.ignored.len(), 1);
        assert_eq!(import.ignored[0].description, "SHELL OIL");

        let tj = &import.food[0];
        assert_eq!(tj.merchant.as_deref(), Some("Trader Joe's"));
        assert_eq!(tj.items, vec!["Organic Eggs", "Almond Butter", "Mixed Greens"]);
        assert_eq!(tj.transaction.amount, 45.12);

        assert_eq!(import.food[1].merchant, None);
        assert_eq!(import.food[1].items, vec!["Groceries"]);
        assert_eq!(import.food[2].items, vec!["Leftovers"]);

        // 3 + 1 + 1 drafts, all one unit with the default shelf life
        assert_eq!(import.drafts.len(), 5);
        assert!(import
            .drafts
            .iter()
            .all(|d| d.quantity == 1.0 && d.expiry_date == NaiveDate::from_ymd_opt(2024, 6, 17)));
        assert_eq!(import.drafts[0].category, Category::Dairy);
    }

    #[test]
    fn test_merchant_column_and_no_category() {
        let csv = "merchant,debit\nCostco Wholesale,210.99\nNetflix,15.49\n";
        let import = parse_bank_statement(csv.as_bytes(), today(), 7).unwrap();
        assert_eq!(import.food.len(), 1);
        assert_eq!(import.food[0].items.len(), 4);
        assert_eq!(import.ignored.len(), 1);
    }

    #[test]
    fn test_requires_description() {
        let err = parse_bank_statement("amount\n1.00\n".as_bytes(), today(), 7).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(_)));
    }
}
