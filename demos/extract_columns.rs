//! Extract numeric columns from a CSV file
//!
//! Usage: cargo run --example extract_columns -- <file.csv> <rows> <col> [col...]
//!
//! Set `RUST_LOG=debug` to see scan summaries.

use csvcolumns::{extract_columns, extract_single_column};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: extract_columns <file.csv> <rows> <col> [col...]");
        process::exit(2);
    }

    let path = &args[0];
    let rows: usize = match args[1].parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("invalid row count {:?}: {}", args[1], e);
            process::exit(2);
        }
    };
    let columns = match args[2..]
        .iter()
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(cols) => cols,
        Err(e) => {
            eprintln!("invalid column index: {}", e);
            process::exit(2);
        }
    };

    if let [column] = columns[..] {
        match extract_single_column(path, column, rows) {
            Ok(values) => println!("column {}: {:?}", column, values),
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    match extract_columns(path, &columns, rows) {
        Ok(cols) => {
            println!("{} of {} rows filled", cols.rows_filled(), cols.row_budget());
            for (column, values) in cols.iter() {
                println!("column {}: {:?}", column, values);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
