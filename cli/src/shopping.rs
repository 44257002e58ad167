use anyhow::{bail, Result};
use clap::Subcommand;
use larder_core::{Kitchen, ShoppingDraft, ShoppingItem};

#[derive(Subcommand, Debug)]
pub enum ShoppingCommand {
    /// Add an item to the shopping list
    Add {
        name: String,
        /// Free-form amount, e.g. "2 lbs"
        #[arg(long)]
        quantity: Option<String>,
    },
    /// Show the shopping list
    List,
    /// Check or uncheck an item
    Check { id: i64 },
    /// Move every checked item into the inventory
    Move,
}

fn item_line(item: &ShoppingItem) -> String {
    let mark = if item.checked { "x" } else { " " };
    let mut line = format!("[{}] {:>4}  {} ({})", mark, item.id, item.name, item.quantity);
    if let Some(recipe) = &item.from_recipe {
        line.push_str(&format!("  for {}", recipe));
    }
    line
}

pub fn run(kitchen: &Kitchen, command: ShoppingCommand) -> Result<()> {
    match command {
        ShoppingCommand::Add { name, quantity } => {
            let item = kitchen.add_shopping(ShoppingDraft {
                quantity,
                ..ShoppingDraft::named(name)
            })?;
            println!("Added {}", item_line(&item));
        }
        ShoppingCommand::List => {
            let items = kitchen.list_shopping()?;
            if items.is_empty() {
                println!("Shopping list is empty");
            }
            for item in &items {
                println!("{}", item_line(item));
            }
        }
        ShoppingCommand::Check { id } => match kitchen.toggle_shopping(id)? {
            Some(item) => println!("{}", item_line(&item)),
            None => bail!("No shopping item with id {}", id),
        },
        ShoppingCommand::Move => {
            let moved = kitchen.move_checked_to_inventory()?;
            if moved.is_empty() {
                println!("No checked items to move");
            }
            for item in moved {
                println!("Moved {} {} to inventory", item.icon, item.name);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use larder_core::{FixedClock, MemoryStore};
    use std::sync::Arc;

    fn kitchen() -> Kitchen {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Kitchen::new(MemoryStore::new(), Arc::new(FixedClock::on(today)))
    }

    #[test]
    fn test_check_then_move() {
        let k = kitchen();
        run(
            &k,
            ShoppingCommand::Add {
                name: "Lemons".to_string(),
                quantity: Some("4".to_string()),
            },
        )
        .unwrap();
        let id = k.list_shopping().unwrap()[0].id;

        run(&k, ShoppingCommand::Check { id }).unwrap();
        run(&k, ShoppingCommand::Move).unwrap();

        assert!(k.list_shopping().unwrap().is_empty());
        let inventory = k.list_inventory().unwrap();
        assert_eq!(inventory[0].name, "Lemons");
        assert_eq!(inventory[0].unit, "4");
    }

    #[test]
    fn test_check_unknown_id() {
        assert!(run(&kitchen(), ShoppingCommand::Check { id: 99 }).is_err());
    }

    #[test]
    fn test_item_line() {
        let k = kitchen();
        let item = k
            .add_shopping(ShoppingDraft {
                from_recipe: Some("Lemon Bars".to_string()),
                ..ShoppingDraft::named("Lemons")
            })
            .unwrap();
        assert_eq!(
            item_line(&item),
            format!("[ ] {:>4}  Lemons (1)  for Lemon Bars", item.id)
        );
    }
}
