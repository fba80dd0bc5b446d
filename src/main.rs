mod convert;
mod error;
mod parser;
mod writer;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use convert::ConvertOptions;

#[derive(Parser)]
#[command(name = "md2anki", about = "Convert Markdown notes to an Anki-importable CSV/TSV file")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output file (CSV/TSV)
    output: PathBuf,

    /// Output format, picks the default delimiter
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Field delimiter (single ASCII character), overrides --format
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Tags written verbatim into every row
    #[arg(long, default_value = "")]
    tags: String,

    /// Generate cloze deletion cards regardless of detected format
    #[arg(long)]
    cloze: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Tsv,
}

impl OutputFormat {
    fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s)),
    }
}

impl Cli {
    fn into_options(self) -> ConvertOptions {
        ConvertOptions {
            delimiter: self.delimiter.unwrap_or_else(|| self.format.delimiter()),
            input: self.input,
            output: self.output,
            tags: self.tags,
            force_cloze: self.cloze,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let report = convert::run(&cli.into_options()).map_err(|err| {
        let kind = err.kind();
        anyhow::Error::new(err).context(kind)
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
