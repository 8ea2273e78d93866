use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use grandstaff::{export_png, export_svg, parse, render_text, score_to_json, Error, LayoutConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File with note text. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Directory that receives beste.svg / beste.png
    #[clap(short = 'o', long, value_parser, default_value = ".")]
    out_dir: PathBuf,

    /// Also export a PNG
    #[clap(short = 'p', long, value_parser)]
    png: bool,

    /// JSON file overriding layout geometry
    #[clap(short = 'c', long, value_parser)]
    config: Option<PathBuf>,

    /// Print the parsed score as JSON instead of rendering
    #[clap(short = 'j', long, value_parser)]
    json: bool,
}

fn main() -> grandstaff::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|source| Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
            buf
        }
    };

    if args.json {
        let parsed = parse(&text);
        println!("{}", score_to_json(&parsed.score)?);
        for token in &parsed.discarded {
            eprintln!("skipped '{}' in measure {} ({})", token.text, token.measure + 1, token.clef);
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };

    let render = match render_text(&text, &config) {
        Ok(render) => render,
        Err(Error::EmptyScore) => {
            eprintln!("nothing to render");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    for token in &render.discarded {
        eprintln!("skipped '{}' in measure {} ({})", token.text, token.measure + 1, token.clef);
    }

    if let Some(path) = export_svg(Some(&render), &args.out_dir)? {
        eprintln!("wrote {}", path.display());
    }
    if args.png {
        if let Some(path) = export_png(Some(&render), &args.out_dir)? {
            eprintln!("wrote {}", path.display());
        }
    }

    Ok(())
}
