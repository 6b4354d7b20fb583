use pubdate::{DateGuesser, GuessOptions, PubdateError, Result};
use std::fs;
use std::io::{self, Read};

fn main() {
    match run() {
        Ok(()) => {}
        Err(PubdateError::Usage(message)) => {
            eprintln!("pubdate: {message}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("pubdate: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    url: String,
    input: Option<String>,
    pretty: bool,
    debug: bool,
}

fn run() -> Result<()> {
    let config = parse_args()?;

    let html = match &config.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = GuessOptions::builder().debug(config.debug).build();
    let guesser = DateGuesser::with_options(options);
    let guess = guesser.guess_date(&config.url, &html);

    let encoded = if config.pretty {
        serde_json::to_string_pretty(&guess)?
    } else {
        serde_json::to_string(&guess)?
    };
    println!("{encoded}");

    Ok(())
}

fn parse_args() -> Result<CliConfig> {
    let mut url: Option<String> = None;
    let mut input: Option<String> = None;
    let mut pretty = false;
    let mut debug = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("pubdate {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--pretty" => pretty = true,
            "--debug" => debug = true,
            "--input" | "-i" => {
                let value = args
                    .next()
                    .ok_or_else(|| PubdateError::Usage("--input expects a path".to_string()))?;
                if input.is_some() {
                    return Err(PubdateError::Usage(
                        "input provided multiple times".to_string(),
                    ));
                }
                input = Some(value);
            }
            other if other.starts_with('-') => {
                return Err(PubdateError::Usage(format!("unknown flag: {other}")));
            }
            other => {
                if url.is_some() {
                    return Err(PubdateError::Usage(
                        "url provided multiple times".to_string(),
                    ));
                }
                url = Some(other.to_string());
            }
        }
    }

    let url = url.ok_or_else(|| PubdateError::Usage("a page url is required".to_string()))?;

    Ok(CliConfig {
        url,
        input,
        pretty,
        debug,
    })
}

fn print_help() {
    println!("pubdate — guess the publication date of a web page");
    println!();
    println!("Usage: pubdate <URL> [--input FILE] [--pretty] [--debug]");
    println!();
    println!("Reads the page HTML from --input (or stdin) and prints the best");
    println!("guess as JSON: the date, its accuracy tier, and the signal source.");
    println!();
    println!("Options:");
    println!("  -i, --input FILE   read HTML from FILE instead of stdin");
    println!("      --pretty       pretty-print the JSON output");
    println!("      --debug        print fold decisions to stderr");
    println!("  -h, --help         show this help");
    println!("  -V, --version      show the version");
}
