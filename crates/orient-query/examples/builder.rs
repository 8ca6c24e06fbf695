//! Statement builder example for orient-query
//!
//! Run with: cargo run --example builder -p orient-query

use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use orient_query::{Args, Command, OrientError, Query, QueryConfig, Value};

fn print_header(title: &str) {
    println!();
    println!("{}", "─".repeat(70).bright_black());
    println!("{}", title.bold().cyan());
    println!("{}", "─".repeat(70).bright_black());
}

fn header_cell(title: &str) -> Cell {
    Cell::new(title).add_attribute(Attribute::Bold).fg(Color::Cyan)
}

fn statements_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![header_cell("Verb"), header_cell("Statement")]);
    table
}

/// Registry override: count entries of an index instead of looking them up.
fn count_lookup(args: &Args) -> Command {
    orient_query::command::index_count(&args.text(0).unwrap_or_default())
}

fn main() -> Result<(), OrientError> {
    // ============================================
    // Example 1: SELECT through the façade
    // ============================================
    print_header("1. SELECT");

    let mut query = Query::with_target(["Profile"]);
    query
        .where_("name = ?", "luke")
        .and_where("age > ?", 18)
        .order_by(["age DESC"], true, false)
        .limit(10);
    println!("  {}", query.raw().green());

    // ============================================
    // Example 2: one façade, many verbs
    // ============================================
    print_header("2. Verbs");

    let mut table = statements_table();
    let mut show = |verb: &str, query: &Query| {
        table.add_row(vec![Cell::new(verb), Cell::new(query.raw())]);
    };

    query.insert()?;
    query
        .into_target("Profile")
        .fields(["name", "age"], true)
        .values([Value::from("luke"), Value::from(19)], true);
    show("insert", &query);

    query.update("Profile")?.set([("name", "obi-wan")], true);
    query.where_("@rid = ?", Value::rid("12:0"));
    show("update", &query);

    query.add([Value::entry("friends", "10:0")], "Profile", true)?;
    show("add", &query);

    query.create("Profile", Some("name"), Some("STRING"), None)?;
    show("create", &query);

    query.index("name", Some("Profile"), Some("unique"))?;
    show("index", &query);

    query.index_put("dictionary", "luke", "12:0")?;
    show("index_put", &query);

    query.lookup("dictionary")?;
    query.where_("key = ?", "luke");
    show("lookup", &query);

    query.find_references("12:0", ["Company"], true)?;
    show("find_references", &query);

    println!("{table}");

    // ============================================
    // Example 3: registry overrides
    // ============================================
    print_header("3. Registry overrides");

    let config = QueryConfig::new().with_command("index.lookup", count_lookup);
    let mut query = Query::with_config(config);

    let mut ids: Vec<&str> = query.registry().ids().collect();
    ids.sort_unstable();
    println!("  {} {}", "registered:".bright_black(), ids.join(", "));

    query.lookup("dictionary")?;
    println!("  {}", query.raw().green());

    match query.dispatch("index.rebuild", &Args::new()) {
        Ok(_) => println!("  unexpected: index.rebuild is registered"),
        Err(err) => println!("  {} {}", "✗".red().bold(), err),
    }
    println!("  still: {}", query.raw());

    Ok(())
}
