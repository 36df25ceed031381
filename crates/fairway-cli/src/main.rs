// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line front end: parse each literal, merge once, print the result.
//!
//! All interval semantics live in `fairway-core`; this binary only collects
//! literals from the command line, renders the merged set in canonical
//! notation, and maps errors to a red stderr line with a nonzero exit code.

use clap::Parser;
use colored::Colorize;
use fairway_core::interval::Interval;
use fairway_core::merge::merge;
use std::error::Error;
use std::process::ExitCode;

/// Merge open/closed numeric intervals into a minimal sorted set
#[derive(Parser, Debug)]
#[command(name = "fairway", version, about)]
struct CommandLineInterface {
    /// Interval literals in bracket notation, e.g. "[2,19]" "(5,10]"
    ///
    /// A single argument containing whitespace is treated as one literal per
    /// whitespace-separated word, so a quoted list works as well.
    #[arg(required = true, num_args = 1..)]
    intervals: Vec<String>,

    /// Separator placed between merged intervals on output
    #[arg(short, long, default_value = " ")]
    separator: String,
}

/// Splits every argument on whitespace; canonical literals never contain
/// whitespace, so this is lossless.
fn literals(args: &[String]) -> impl Iterator<Item = &str> {
    args.iter().flat_map(|arg| arg.split_whitespace())
}

fn run(cli: &CommandLineInterface) -> Result<String, Box<dyn Error>> {
    let mut parsed = Vec::new();
    for literal in literals(&cli.intervals) {
        parsed.push(literal.parse::<Interval<f64>>()?);
    }

    let merged = merge(&parsed)?;
    let rendered: Vec<String> = merged.iter().map(|interval| interval.to_string()).collect();
    Ok(rendered.join(&cli.separator))
}

fn main() -> ExitCode {
    let cli = CommandLineInterface::parse();
    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_literals_pass_through_separate_arguments() {
        let arguments = args(&["[1,2]", "(3,4)"]);
        let collected: Vec<&str> = literals(&arguments).collect();
        assert_eq!(collected, vec!["[1,2]", "(3,4)"]);
    }

    #[test]
    fn test_literals_split_a_quoted_argument() {
        let arguments = args(&["[25,30] [2,19]  [14,23]"]);
        let collected: Vec<&str> = literals(&arguments).collect();
        assert_eq!(collected, vec!["[25,30]", "[2,19]", "[14,23]"]);
    }

    #[test]
    fn test_run_merges_and_joins() {
        let cli = CommandLineInterface {
            intervals: args(&["[25,30]", "[2,19]", "[14,23]", "[4,8]"]),
            separator: " ".to_string(),
        };
        assert_eq!(run(&cli).unwrap(), "[2,23] [25,30]");
    }

    #[test]
    fn test_run_reports_parse_errors() {
        let cli = CommandLineInterface {
            intervals: args(&["{1,2}"]),
            separator: " ".to_string(),
        };
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_run_reports_invalid_intervals() {
        let cli = CommandLineInterface {
            intervals: args(&["[20,10]"]),
            separator: " ".to_string(),
        };
        let error = run(&cli).unwrap_err();
        assert!(error.to_string().contains("[20,10]"));
    }
}
