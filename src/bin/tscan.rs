//! Tabscan CLI - Schema detection and extraction for messy delimited text

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use tabscan::{
    check_document, detect_delimiter, detect_footer_rows, detect_header_rows, extract_table,
    format_diagnostics, CommentChar, Delimiter, TableError,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tscan")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Tabscan - Schema detection and extraction for messy delimited text", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Delimiter (auto-detected by default)
    #[arg(short, long, value_enum, default_value_t = DelimiterArg::Auto)]
    delimiter: DelimiterArg,

    /// Number of header rows to skip (auto-detected by default)
    #[arg(long)]
    header_rows: Option<usize>,

    /// Number of footer rows to skip (auto-detected by default)
    #[arg(long)]
    footer_rows: Option<usize>,

    /// Comment character
    #[arg(short, long, value_enum, default_value_t = CommentArg::Python)]
    comment: CommentArg,

    /// X column index for numeric extraction
    #[arg(short = 'x', long)]
    x_column: Option<usize>,

    /// Y column index for numeric extraction
    #[arg(short = 'y', long)]
    y_column: Option<usize>,

    /// Detect and print the layout without extracting
    #[arg(long)]
    detect: bool,

    /// Check mode - analyze the document and report issues
    #[arg(long)]
    check: bool,

    /// Use colored output (for check mode)
    #[arg(long, default_value_t = true)]
    color: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum DelimiterArg {
    /// Auto-detect from the document
    Auto,
    Comma,
    Tab,
    Whitespace,
    Semicolon,
    Pipe,
}

#[cfg(feature = "cli")]
impl DelimiterArg {
    fn resolve(self) -> Option<Delimiter> {
        match self {
            DelimiterArg::Auto => None,
            DelimiterArg::Comma => Some(Delimiter::Comma),
            DelimiterArg::Tab => Some(Delimiter::Tab),
            DelimiterArg::Whitespace => Some(Delimiter::Whitespace),
            DelimiterArg::Semicolon => Some(Delimiter::Semicolon),
            DelimiterArg::Pipe => Some(Delimiter::Pipe),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum CommentArg {
    /// `#`
    Python,
    /// `%`
    Matlab,
    /// `//`
    Javascript,
    /// `!`
    Fortran,
}

#[cfg(feature = "cli")]
impl CommentArg {
    fn resolve(self) -> CommentChar {
        match self {
            CommentArg::Python => CommentChar::Python,
            CommentArg::Matlab => CommentChar::Matlab,
            CommentArg::Javascript => CommentChar::JavaScript,
            CommentArg::Fortran => CommentChar::Fortran,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // If check mode, analyze and report issues
    if cli.check {
        let result = check_document(&input);
        let output = format_diagnostics(&result, cli.color);
        println!("{}", output);

        // Exit with error code if there are errors
        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Resolve settings: explicit flags win, detection fills the gaps.
    // Row guesses follow the active delimiter, overridden or detected.
    let lines: Vec<&str> = input.split('\n').collect();
    let delimiter = match cli.delimiter.resolve().or_else(|| detect_delimiter(&lines)) {
        Some(found) => found,
        None => {
            eprintln!("error: {}", TableError::DelimiterNotFound);
            std::process::exit(1);
        }
    };
    let header_rows = cli
        .header_rows
        .unwrap_or_else(|| detect_header_rows(&lines, delimiter));
    let footer_rows = cli
        .footer_rows
        .unwrap_or_else(|| detect_footer_rows(&lines, delimiter));

    // If detect mode, just print the layout and exit
    if cli.detect {
        println!("delimiter: {}", delimiter);
        println!("header rows: {}", header_rows);
        println!("footer rows: {}", footer_rows);
        return Ok(());
    }

    let table = match extract_table(
        &input,
        delimiter,
        header_rows,
        footer_rows,
        Some(cli.comment.resolve()),
    ) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let output = match (cli.x_column, cli.y_column) {
        (Some(x), Some(y)) => match table.numeric_xy(x, y) {
            Ok((xs, ys)) => {
                let mut text = String::new();
                for (a, b) in xs.iter().zip(ys.iter()) {
                    text.push_str(&format!("{}\t{}\n", a, b));
                }
                text
            }
            Err(err) => {
                eprintln!("error: {}", err);
                std::process::exit(1);
            }
        },
        (None, None) => {
            let mut text = String::new();
            for row in table.rows() {
                text.push_str(&row.join("\t"));
                text.push('\n');
            }
            text
        }
        _ => {
            eprintln!("error: -x and -y must be given together");
            std::process::exit(1);
        }
    };

    // Write output
    match cli.output {
        Some(ref path) => fs::write(path, output)?,
        None => {
            io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabscan --features cli");
    eprintln!("  tscan [OPTIONS] [INPUT_FILE]");
}
