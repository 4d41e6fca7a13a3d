// output suffix, rank and lcp arrays of strings, and query them

use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use sufkit::words::Word;
use sufkit::{repeats, Algorithm, Config, ESA};

#[derive(Parser, Debug)]
#[clap(
    name = "sufkit",
    about = "output suffix, rank and lcp arrays of strings, and search them"
)]
struct Args {
    /// An input file, read as a single text. Lines of stdin are used if no input is given.
    #[clap(short = 'f', long)]
    file: Option<String>,

    /// An input text.
    #[clap(short = 't', long)]
    text: Option<String>,

    /// Use the Fibonacci word of this order as input.
    #[clap(long)]
    fibonacci: Option<usize>,

    /// Use the Thue-Morse word of this order as input.
    #[clap(long)]
    thue_morse: Option<usize>,

    /// Use the period-doubling word of this order as input.
    #[clap(long)]
    period_doubling: Option<usize>,

    /// Construction algorithm: naive, doubling or divsufsort.
    #[clap(short = 'a', long, default_value = "doubling")]
    algorithm: Algorithm,

    /// Reject texts longer than this.
    #[clap(long, default_value_t = sufkit::MAX_LENGTH)]
    max_len: usize,

    #[clap(long)]
    suffix_array: bool,

    #[clap(long)]
    rank_array: bool,

    #[clap(long)]
    lcp_array: bool,

    /// Report every occurrence of this pattern (may be repeated).
    #[clap(short = 'p', long = "pattern")]
    patterns: Vec<String>,

    /// Report the longest repeated substrings.
    #[clap(long)]
    repeats: bool,

    /// Report the k longest distinct repeated substrings.
    #[clap(long)]
    top: Option<usize>,

    /// Report statistics of the lcp array.
    #[clap(long)]
    stats: bool,
}

fn init_tracing() -> Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn inputs(args: &Args) -> Result<Vec<Vec<u8>>> {
    let mut texts = Vec::new();
    if let Some(file) = &args.file {
        texts.push(
            fs::read(file).with_context(|| format!("Failed to read the input file {}", file))?,
        );
    }
    if let Some(text) = &args.text {
        texts.push(text.as_bytes().to_vec());
    }
    let generated = [
        (Word::Fibonacci, args.fibonacci),
        (Word::ThueMorse, args.thue_morse),
        (Word::PeriodDoubling, args.period_doubling),
    ];
    for (word, order) in generated {
        if let Some(k) = order {
            texts.push(
                word.generate(k, args.max_len.min(sufkit::MAX_LENGTH))
                    .with_context(|| format!("Failed to generate {:?} word of order {}", word, k))?,
            );
        }
    }
    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            texts.push(line.context("Failed to read stdin")?.into_bytes());
        }
    }
    Ok(texts)
}

fn print_array(label: &str, a: &[i32]) {
    print!("{:<13} ", label);
    for i in a {
        print!("{:>4}", i);
    }
    println!();
}

fn report(args: &Args, config: &Config, text: &[u8]) -> Result<()> {
    let esa = ESA::with_config(text, config)
        .with_context(|| format!("Failed to index a text of length {}", text.len()))?;
    tracing::info!(len = text.len(), algorithm = %config.algorithm, "indexed");

    println!("{{");
    println!("\tinput: \"{}\"", String::from_utf8_lossy(text));
    if args.suffix_array {
        print_array("\tsuffix array:", &esa.sa);
    }
    if args.rank_array {
        print_array("\trank   array:", &esa.rank);
    }
    if args.lcp_array {
        print_array("\tlcp    array:", &esa.lcp);
    }
    for pattern in &args.patterns {
        let occs = esa.occurrences(pattern.as_bytes());
        if occs.is_empty() {
            println!("\tpattern \"{}\": not found", pattern);
        } else {
            println!("\tpattern \"{}\": {:?}", pattern, occs);
        }
    }
    if args.repeats {
        let subs = esa.longest_repeated_substrings();
        if subs.is_empty() {
            println!("\tlongest repeat: none");
        }
        for r in subs {
            println!(
                "\tlongest repeat: \"{}\" (length {}) at {:?}",
                String::from_utf8_lossy(r.text),
                r.text.len(),
                r.occurrences
            );
        }
    }
    if let Some(k) = args.top {
        for (i, r) in esa.top_k_repeats(k).iter().enumerate() {
            println!(
                "\ttop {}: \"{}\" (length {}) at {} and {}",
                i + 1,
                String::from_utf8_lossy(r.substring(text)),
                r.len,
                r.pos[0],
                r.pos[1]
            );
        }
    }
    if args.stats {
        match repeats::lcp_statistics(&esa.lcp) {
            Some(s) => println!(
                "\tlcp stats: max {}, min {}, mean {:.2}, total {}",
                s.max, s.min, s.mean, s.total
            ),
            None => println!("\tlcp stats: no common prefixes"),
        }
    }
    println!("}}");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let config = Config {
        algorithm: args.algorithm,
        max_len: args.max_len,
    };
    for text in inputs(&args)? {
        report(&args, &config, &text)?;
    }
    Ok(())
}
