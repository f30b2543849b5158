use anyhow::Result;
use uuid::Uuid;

use crate::models::Category;
use crate::store::ExpenseStore;
use crate::ui::form::{parse_date, validate_amount, validate_title};
use crate::ui::util::{format_amount, format_date};

pub(crate) fn as_cli(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    match args[1].as_str() {
        "list" | "ls" => cli_list(store),
        "total" | "t" => cli_total(store),
        "add" => cli_add(&args[2..], store),
        "delete" | "rm" => cli_delete(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("trackflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("TrackFlow — local-only personal expense tracker");
    println!();
    println!("Usage: trackflow [command]");
    println!();
    println!("Commands:");
    println!("  (none)                              Launch interactive TUI");
    println!("  list                                List all expenses, newest first");
    println!("  total                               Print the running total");
    println!("  add <title> <amount> <category> [date]");
    println!("                                      Add an expense (date: YYYY-MM-DD, default today)");
    println!("  delete <id>                         Delete an expense by id");
    println!("  --help, -h                          Show this help");
    println!("  --version, -V                       Show version");
    println!();
    println!(
        "Categories: {}",
        Category::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn cli_list(store: &ExpenseStore) -> Result<()> {
    if store.expenses().is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    for expense in store.expenses() {
        println!(
            "{}  {:<30} {:<10} {:>12}  {}",
            format_date(expense.date),
            crate::ui::util::truncate(&expense.title, 30),
            expense.category,
            format_amount(expense.amount),
            expense.id,
        );
    }
    println!();
    println!(
        "{} expenses, total {}",
        store.expenses().len(),
        format_amount(store.total())
    );
    Ok(())
}

fn cli_total(store: &ExpenseStore) -> Result<()> {
    println!("{}", format_amount(store.total()));
    Ok(())
}

fn cli_add(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: trackflow add <title> <amount> <category> [date]");
    }

    // Same boundary validation the TUI form enforces.
    let title = validate_title(&args[0]).map_err(|e| anyhow::anyhow!("Invalid title: {e}"))?;
    let amount = validate_amount(&args[1]).map_err(|e| anyhow::anyhow!("Invalid amount: {e}"))?;
    let category = Category::parse(&args[2]).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown category '{}' (expected one of: {})",
            args[2],
            Category::all()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;
    let date = match args.get(3) {
        Some(raw) => parse_date(raw).map_err(|e| anyhow::anyhow!("Invalid date: {e}"))?,
        None => chrono::Utc::now(),
    };

    store.add(crate::models::NewExpense {
        title: title.clone(),
        amount,
        category,
        date,
    });
    println!("Added: {title} ({})", format_amount(amount));
    Ok(())
}

fn cli_delete(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: trackflow delete <id>");
    }

    let id = Uuid::parse_str(&args[0])
        .map_err(|_| anyhow::anyhow!("Invalid id: {} (expected a UUID)", args[0]))?;

    match store.expenses().iter().find(|e| e.id == id) {
        Some(expense) => {
            let title = expense.title.clone();
            store.delete(id);
            println!("Deleted: {title}");
        }
        None => {
            println!("No expense with id {id}");
        }
    }
    Ok(())
}
