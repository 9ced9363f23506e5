// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cutlist Project

//! Cutlist CLI
//!
//! Builds the stock drawer-cabinet part graph and prints its cut list.

use anyhow::Result;
use clap::Parser;
use colored::*;
use cutlist::{CutList, Measurement, Node, OverallDimensions, Part};

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Cut-list generator with mixed-fraction inch output", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Decorated table output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cut_list = build_cabinet()?;

    match cli.format.as_str() {
        "text" => {
            if cli.pretty {
                print_pretty(&cut_list);
            } else {
                print!("{}", cut_list.to_text());
            }
        }
        "json" => println!("{}", serde_json::to_string_pretty(&cut_list)?),
        other => anyhow::bail!("Unsupported output format: {}", other),
    }

    Ok(())
}

/// Thirteen-inch drawer cabinet cut from 23/32" and 15/32" sheet stock.
/// Later parts borrow earlier parts' dimension nodes, so edits to the
/// stock thicknesses ripple through every derived length.
fn build_cabinet() -> Result<CutList> {
    let tq = Node::literal(23.0 / 32.0);
    let half = Node::literal(15.0 / 32.0);
    let depth = Node::literal(13.0);
    let inside = Node::literal(12.0);
    let width = Node::sum(vec![&inside, &half, &half]);

    let a = Part::new("A", 4, &tq, 2.5, &inside);
    let h = Part::new("H", 3, &half, &inside, &depth);
    let e = Part::new("E", 1, &tq, 3.5, &inside);
    let c = Part::new(
        "C",
        2,
        &tq,
        2.5,
        Node::difference(13.0, Node::sum(vec![&a.thickness, &a.thickness])),
    );
    let f_length = Node::difference(
        13.0,
        Node::sum(vec![
            Measurement::from(&tq),
            Measurement::from(&h.thickness),
            Measurement::from(&h.thickness),
            Measurement::from(&a.width),
        ]),
    );
    let f = Part::new("F", 4, &tq, 2.5, &f_length);
    let b = Part::new("B", 2, &tq, 2.5, Node::difference(&f.length, &a.width));

    let i = Part::new(
        "I",
        1,
        &half,
        13.0,
        Node::sum(vec![&h.length, &e.thickness, &f.width]),
    );
    let d = Part::new(
        "D",
        2,
        &tq,
        2.5,
        Node::difference(&i.length, Node::sum(vec![&a.thickness, &a.thickness])),
    );

    let height = Node::sum(vec![&h.thickness, &h.thickness, &i.length]);
    let j = Part::new("J", 2, &half, &depth, &height);

    let parts = [a, b, c, d, e, f, h, i, j];
    let overall = OverallDimensions::new(&height, &width, &depth)?;

    Ok(CutList::from_parts(&parts)?.with_overall(overall))
}

/// Decorated table in place of the raw report lines.
fn print_pretty(cut_list: &CutList) {
    println!("{}", "━".repeat(48).bright_black());
    println!("{}", "Cut list".bold());
    println!("{}", "━".repeat(48).bright_black());
    for row in &cut_list.parts {
        println!(
            "  {} ({}) {}",
            format!("{}:", row.name).cyan(),
            row.quantity,
            format!("{}\" X {}\" X {}\"", row.thickness, row.width, row.length)
        );
    }
    if let Some(overall) = &cut_list.overall {
        println!("{}", "━".repeat(48).bright_black());
        println!("  {} {}", "Overall:".bold(), overall.to_string().yellow());
    }
    println!("{}", "━".repeat(48).bright_black());
}
