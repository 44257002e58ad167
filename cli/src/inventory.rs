use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use larder_core::import::{parse_bank_statement, parse_inventory_csv, SkippedRow};
use larder_core::{
    expiring_soon, Category, ExpirySummary, InventoryDraft, InventoryItem, Kitchen,
    NewInventoryItem,
};
use std::fs::File;
use std::path::Path;

#[derive(Args, Debug)]
pub struct AddArgs {
    pub name: String,
    #[arg(long)]
    pub quantity: Option<f64>,
    #[arg(long)]
    pub unit: Option<String>,
    /// YYYY-MM-DD or "N days"; defaults to the configured shelf life
    #[arg(long)]
    pub expires: Option<String>,
    /// Overrides the guessed category
    #[arg(long)]
    pub category: Option<Category>,
}

impl From<AddArgs> for NewInventoryItem {
    fn from(args: AddArgs) -> Self {
        NewInventoryItem {
            category: args.category,
            quantity: args.quantity,
            unit: args.unit,
            expiry: args.expires,
            ..NewInventoryItem::named(args.name)
        }
    }
}

/// One line of `list` output.
fn item_line(item: &InventoryItem, today: NaiveDate) -> String {
    let expiry = item.expiry(today);
    format!(
        "{:>4}  {} {} ({} {})  {}",
        item.id, item.icon, item.name, item.quantity, item.unit, expiry.display
    )
}

pub fn add(kitchen: &Kitchen, args: AddArgs) -> Result<()> {
    let draft = NewInventoryItem::from(args).into_draft(kitchen.today(), kitchen.shelf_life_days())?;
    let item = kitchen.add_item(draft)?;
    println!("Added {}", item_line(&item, kitchen.today()));
    Ok(())
}

pub fn list(kitchen: &Kitchen) -> Result<()> {
    let items = kitchen.list_inventory()?;
    let today = kitchen.today();
    if items.is_empty() {
        println!("Inventory is empty");
        return Ok(());
    }

    for category in Category::ALL {
        let in_category: Vec<&InventoryItem> =
            items.iter().filter(|i| i.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        println!("{} {}", category.icon(), category.label());
        for item in in_category {
            println!("{}", item_line(item, today));
        }
    }

    let summary = ExpirySummary::tally(&items, today);
    println!(
        "\n{} items: {} expired, {} expiring soon, {} fresh",
        summary.total, summary.expired, summary.urgent, summary.fresh
    );
    Ok(())
}

pub fn expiring(kitchen: &Kitchen, window: i64, limit: usize) -> Result<()> {
    let items = kitchen.list_inventory()?;
    let soon = expiring_soon(&items, kitchen.today(), window, limit);
    if soon.is_empty() {
        println!("Nothing expires in the next {} days", window);
    }
    for entry in soon {
        println!("{:>9}  {} {}", entry.label, entry.item.icon, entry.item.name);
    }
    Ok(())
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open {}", path.display()))
}

fn report_skipped(skipped: &[SkippedRow]) {
    for row in skipped {
        eprintln!("Skipped line {}: {}", row.line, row.reason);
    }
}

fn save_drafts(kitchen: &Kitchen, drafts: Vec<InventoryDraft>, dry_run: bool) -> Result<()> {
    if dry_run {
        for draft in &drafts {
            println!("Would add {} {} ({} {})", draft.icon, draft.name, draft.quantity, draft.unit);
        }
        return Ok(());
    }
    if drafts.is_empty() {
        println!("Nothing to import");
        return Ok(());
    }
    let added = kitchen.add_items(drafts)?;
    println!("Imported {} items", added.len());
    Ok(())
}

pub fn import_csv(kitchen: &Kitchen, path: &Path, dry_run: bool) -> Result<()> {
    let import = parse_inventory_csv(open(path)?, kitchen.today(), kitchen.shelf_life_days())
        .with_context(|| format!("Failed to import {}", path.display()))?;
    report_skipped(&import.skipped);
    save_drafts(kitchen, import.drafts, dry_run)
}

pub fn import_bank(kitchen: &Kitchen, path: &Path, dry_run: bool) -> Result<()> {
    let import = parse_bank_statement(open(path)?, kitchen.today(), kitchen.shelf_life_days())
        .with_context(|| format!("Failed to import {}", path.display()))?;
    report_skipped(&import.skipped);

    for purchase in &import.food {
        let merchant = purchase
            .merchant
            .as_deref()
            .unwrap_or(&purchase.transaction.description);
        println!(
            "{} (${:.2}): {}",
            merchant,
            purchase.transaction.amount,
            purchase.items.join(", ")
        );
    }
    if !import.ignored.is_empty() {
        println!("Ignored {} non-food transactions", import.ignored.len());
    }

    save_drafts(kitchen, import.drafts, dry_run)
}
