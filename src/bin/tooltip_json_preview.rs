use chart_tooltip::api::{get_tooltip_data, rows_to_json_contract_v1_pretty};
use chart_tooltip::telemetry::init_default_tracing;
use chart_tooltip::{MarkItem, TooltipConfig};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "usage: tooltip_json_preview --item <path> [--config <path>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    item: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let item = MarkItem::from_json_str(&read_file(&args.item)?).map_err(|err| err.to_string())?;
    let config = match &args.config {
        Some(path) => TooltipConfig::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?,
        None => TooltipConfig::default(),
    };
    let options = config.into_options().map_err(|err| err.to_string())?;

    let Some(rows) = get_tooltip_data(&item, &options) else {
        println!("no tooltip for `{}` mark", item.mark_type);
        return Ok(());
    };
    let json = rows_to_json_contract_v1_pretty(&rows).map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut item = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--item" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --item".to_owned())?;
                item = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let item = item.ok_or_else(|| format!("missing --item\n{USAGE}"))?;
    Ok(CliArgs {
        item,
        config,
        output,
    })
}
