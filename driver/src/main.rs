//! Interactive driver for manual testing.
//!
//! Reads single-letter commands from stdin, applies each to the selected
//! flat set variant and to a reference `std::collections::BTreeSet`, then
//! prints both containers so they can be compared by eye. Divergence is
//! highlighted in red.
//!
//! Commands: `i <k>` insert, `e <k>` insert-with, `x <k>` erase by key,
//! `f <k>` find, `l <k>` lower bound, `u <k>` upper bound, `s` size,
//! `c` clear, `q` quit.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use flat_structures::{LinearSet, SortedSet};
use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::ops::Bound;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Order-maintaining variant with binary search.
    Sorted,
    /// Unordered-insert variant with linear scans.
    Linear,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which container variant to drive.
    #[arg(long, value_enum, default_value = "sorted")]
    variant: Variant,
}

/// Runtime dispatch over the two variants under test.
enum Container {
    Sorted(SortedSet<i64>),
    Linear(LinearSet<i64>),
}

impl Container {
    fn new(variant: Variant) -> Self {
        match variant {
            Variant::Sorted => Container::Sorted(SortedSet::new()),
            Variant::Linear => Container::Linear(LinearSet::new()),
        }
    }

    fn insert(&mut self, key: i64) -> bool {
        match self {
            Container::Sorted(set) => set.insert(key).1,
            Container::Linear(set) => set.insert(key).1,
        }
    }

    fn insert_with(&mut self, key: i64) -> bool {
        match self {
            Container::Sorted(set) => set.insert_with(|| key).1,
            Container::Linear(set) => set.insert_with(|| key).1,
        }
    }

    fn remove(&mut self, key: i64) -> bool {
        match self {
            Container::Sorted(set) => set.remove(&key),
            Container::Linear(set) => set.remove(&key),
        }
    }

    fn clear(&mut self) {
        match self {
            Container::Sorted(set) => set.clear(),
            Container::Linear(set) => set.clear(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Container::Sorted(set) => set.len(),
            Container::Linear(set) => set.len(),
        }
    }

    fn contains(&self, key: i64) -> bool {
        match self {
            Container::Sorted(set) => set.contains(&key),
            Container::Linear(set) => set.contains(&key),
        }
    }

    /// The element at the lower bound, `"end"`, or the unsupported-operation
    /// error for the linear variant.
    fn lower_bound(&self, key: i64) -> String {
        match self {
            Container::Sorted(set) => position_element(set, set.lower_bound(&key)),
            Container::Linear(set) => match set.lower_bound(&key) {
                Ok(_) => unreachable!("boundary queries are unsupported for LinearSet"),
                Err(err) => err.to_string(),
            },
        }
    }

    fn upper_bound(&self, key: i64) -> String {
        match self {
            Container::Sorted(set) => position_element(set, set.upper_bound(&key)),
            Container::Linear(set) => match set.upper_bound(&key) {
                Ok(_) => unreachable!("boundary queries are unsupported for LinearSet"),
                Err(err) => err.to_string(),
            },
        }
    }

    fn items(&self) -> Vec<i64> {
        match self {
            Container::Sorted(set) => set.iter().copied().collect(),
            Container::Linear(set) => set.iter().copied().collect(),
        }
    }
}

fn position_element(set: &SortedSet<i64>, pos: usize) -> String {
    match set.get(pos) {
        Some(element) => element.to_string(),
        None => "end".to_string(),
    }
}

fn bound_element(element: Option<&i64>) -> String {
    match element {
        Some(element) => element.to_string(),
        None => "end".to_string(),
    }
}

fn print_state(flat: &Container, reference: &BTreeSet<i64>) {
    let flat_items = flat.items();
    let reference_items: Vec<i64> = reference.iter().copied().collect();

    // The linear variant legitimately stores in arrival order; compare the
    // two as sets before flagging divergence.
    let mut flat_sorted = flat_items.clone();
    flat_sorted.sort_unstable();
    let diverged = flat_sorted != reference_items;

    let flat_line = format!("flat: {}", join(&flat_items));
    let reference_line = format!(" std: {}", join(&reference_items));
    if diverged {
        println!("{}", flat_line.red().bold());
        println!("{}", reference_line.red().bold());
    } else {
        println!("{flat_line}");
        println!("{reference_line}");
    }
}

fn join(items: &[i64]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let args = Args::parse();
    let mut flat = Container::new(args.variant);
    let mut reference = BTreeSet::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let mut tokens = line.split_whitespace();
        let command = match tokens.next() {
            Some(command) => command,
            None => continue,
        };
        let key: i64 = match tokens.next().map(|token| token.parse()) {
            Some(Ok(key)) => key,
            Some(Err(_)) => {
                println!("{}", "malformed key".red());
                continue;
            }
            None => 0,
        };

        println!("command = {command}");
        match command {
            "i" => {
                flat.insert(key);
                reference.insert(key);
            }
            "e" => {
                flat.insert_with(key);
                reference.insert(key);
            }
            "c" => {
                flat.clear();
                reference.clear();
            }
            "x" => {
                flat.remove(key);
                reference.remove(&key);
            }
            "s" => {
                println!("{} {}", flat.len(), reference.len());
            }
            "f" => {
                println!("{} {}", flat.contains(key), reference.contains(&key));
            }
            "l" => {
                println!("{}", flat.lower_bound(key));
                println!("{}", bound_element(reference.range(key..).next()));
            }
            "u" => {
                println!("{}", flat.upper_bound(key));
                let after = (Bound::Excluded(key), Bound::Unbounded);
                println!("{}", bound_element(reference.range(after).next()));
            }
            "q" => break,
            other => {
                println!("{}", format!("unknown command: {other}").red());
            }
        }
        print_state(&flat, &reference);
    }
}
