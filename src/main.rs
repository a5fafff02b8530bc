use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use huffcode::{FrequencyTable, HuffmanCode, bits_to_string, parse_bits};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "Data dominates. If you've chosen the right data structures and organized things well, the algorithms will almost always be self-evident. Data structures, not algorithms, are central to programming.   -Rob Pike";

#[derive(Debug, Parser)]
#[command(name = "huffcode")]
#[command(about = "Build a Huffman code for a text, then encode and decode it")]
struct Args {
    /// Text to encode. Read from --file or stdin when omitted.
    text: Option<String>,

    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Decode this bitstring with the text's code instead of its own encoding.
    #[arg(long)]
    bits: Option<String>,

    /// Print the coding tree.
    #[arg(long)]
    tree: bool,

    /// Print only the encoded bits.
    #[arg(long, short)]
    quiet: bool,

    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(io::stderr)
        .init();

    let text = read_text(&args)?;
    if text.is_empty() {
        bail!("input text is empty");
    }

    let freq = FrequencyTable::from_text(&text);
    let code = HuffmanCode::from_text(&text).context("build code")?;
    let encoded = code.encode_text(&text).context("encode text")?;
    tracing::info!(symbols = freq.len(), chars = freq.total(), bits = encoded.len(), "encoded input");

    if args.quiet {
        println!("{}", bits_to_string(&encoded));
        return Ok(());
    }

    println!("Frequencies are :\n");
    for (symbol, count) in freq.iter() {
        println!("{symbol:?} {count}");
    }

    println!("\nHuffman Codes are :\n");
    for (symbol, codeword) in code.table().iter() {
        println!("{symbol:?} {}", bits_to_string(codeword));
    }

    if args.tree {
        println!("\nHuffman Tree is :\n");
        print!("{}", code.tree());
    }

    println!("\nOriginal string was :\n{text}");
    println!("\nEncoded string is :\n{}", bits_to_string(&encoded));

    let decoded = match &args.bits {
        Some(bits) => {
            let bits = parse_bits(bits.trim()).context("parse --bits")?;
            code.decode_text(&bits).context("decode --bits")?
        }
        None => code.decode_text(&encoded).context("decode encoded text")?,
    };
    println!("\nDecoded string is :\n{decoded}");

    let raw_bits = text.len() * 8;
    println!(
        "\n{} bits vs {} bits uncompressed ({:.1}%)",
        encoded.len(),
        raw_bits,
        encoded.len() as f64 * 100.0 / raw_bits as f64
    );

    Ok(())
}

fn read_text(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path).with_context(|| format!("read {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(SAMPLE.to_string());
    }
    let mut text = String::new();
    stdin.lock().read_to_string(&mut text).context("read stdin")?;
    Ok(text)
}
