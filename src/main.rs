//! tailprint - extract design-focused JSON from static HTML

use std::fs;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use tailprint::{
    Error, ExtractOptions, PageMeta, Session, StaticDefaults, StaticDom,
};

#[derive(Parser)]
#[command(name = "tailprint")]
#[command(version, about = "Extract design-focused JSON from static HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    tailprint page.html                  Print the sectioned page as JSON
    tailprint page.html -o page.json     Write the capture to a file
    tailprint page.html --select hero    Capture only the element with id \"hero\"")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Capture a single element by id instead of the whole page
    #[arg(long, value_name = "ID")]
    select: Option<String>,

    /// Truncate subtrees deeper than this
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<u32>,

    /// Replace image sources with placeholder tokens
    #[arg(long)]
    placeholders: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let html = fs::read_to_string(&cli.input)?;
    let dom = StaticDom::parse(&html);

    let options = ExtractOptions {
        max_depth: cli.max_depth,
        extract_css: true,
        use_placeholders: cli.placeholders,
    };
    let provider = StaticDefaults;
    let mut session = Session::new(&provider, options);

    let meta = PageMeta {
        url: format!("file://{}", cli.input),
        title: dom.title().unwrap_or_default(),
        timestamp: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
    };

    let json = match &cli.select {
        Some(id) => {
            let root = dom
                .element_by_id(id)
                .ok_or_else(|| Error::ElementNotFound(id.clone()))?;
            let capture = session.extract_element(&root, meta)?;
            serialize(&capture, cli.pretty)?
        }
        None => {
            let root = dom
                .body()
                .ok_or_else(|| Error::ElementNotFound("body".to_string()))?;
            let capture = session.extract_page(&root, meta)?;
            serialize(&capture, cli.pretty)?
        }
    };
    session.close();

    match &cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

fn serialize<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, Error> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
