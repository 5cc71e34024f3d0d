use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use relfind_cli::pipeline::{
    RESULTS_FILE, SearchInputs, count_products, ingest, run_search as search,
};
use relfind_ingest::{discover_release_table, read_release_table};
use relfind_model::{PRODUCT_ABBREVIATIONS, ResolveOptions};
use relfind_report::write_report;

use crate::cli::{OutputFormatArg, ProductsArgs, SearchArgs};
use crate::summary::{apply_table_style, print_products, print_search_table};

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let span = info_span!("run", dir = %args.dir.display());
    let _guard = span.enter();

    let now = Local::now().naive_local();
    let today = args.today.unwrap_or_else(|| now.date());
    let options = search_options(args);

    let inputs = SearchInputs::resolve(
        &args.dir,
        args.data.clone(),
        args.source.clone(),
        args.reference.clone(),
    )?;
    let ingested = ingest(&inputs)?;
    let report = search(&ingested, &options, today, now)?;

    match args.format {
        OutputFormatArg::Text => print!("{}", report.text),
        OutputFormatArg::Table => print_search_table(&report),
        OutputFormatArg::Json => println!("{}", report.json),
    }

    if !args.no_write {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| args.dir.join(RESULTS_FILE));
        write_report(&output, &report.text)?;
        info!(path = %output.display(), "results written");
        eprintln!("Results exported to: {}", output.display());
    }
    Ok(())
}

fn search_options(args: &SearchArgs) -> ResolveOptions {
    let options = if args.show_all {
        ResolveOptions::show_all()
    } else {
        ResolveOptions::default()
    };
    let options = options
        .with_version_filter(!args.no_version_filter)
        .with_closest_n(usize::try_from(args.closest).unwrap_or(usize::MAX))
        .with_dedup_policy(args.dedup.into())
        .with_filter_order(args.filter_order.into());
    args.overrides
        .iter()
        .cloned()
        .fold(options, ResolveOptions::with_override)
}

pub fn run_products(args: &ProductsArgs) -> Result<()> {
    let path = match &args.data {
        Some(path) => path.clone(),
        None => discover_release_table(&args.dir)
            .with_context(|| format!("find release table in {}", args.dir.display()))?,
    };
    let products = load_product_counts(&path)?;
    print_products(&products);
    Ok(())
}

fn load_product_counts(path: &Path) -> Result<Vec<(String, usize)>> {
    let loaded =
        read_release_table(path).with_context(|| format!("load release table {}", path.display()))?;
    Ok(count_products(&loaded.table))
}

pub fn run_abbreviations() -> Result<()> {
    println!("{}", abbreviations_table());
    Ok(())
}

fn abbreviations_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Abbreviation", "Product"]);
    apply_table_style(&mut table);
    for (abbreviation, product) in PRODUCT_ABBREVIATIONS {
        table.add_row(vec![*abbreviation, *product]);
    }
    table
}
