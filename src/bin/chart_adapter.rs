use chart_adapter::ChartRequest;
use chart_adapter::error::ChartError;
use chart_adapter::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    pretty: bool,
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
    let raw = fs::read_to_string(&args.input).map_err(|err| {
        ChartError::Io {
            path: args.input.display().to_string(),
            message: err.to_string(),
        }
        .to_string()
    })?;

    let request = ChartRequest::from_json_str(&raw).map_err(|err| err.to_string())?;
    info!(
        chart_type = %request.definition.chart_type,
        locale = request.effective_locale(),
        "converting chart request"
    );
    let options = request.convert().map_err(|err| err.to_string())?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&options)
    } else {
        serde_json::to_string(&options)
    }
    .map_err(|err| format!("failed to encode options: {err}"))?;
    println!("{rendered}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = None::<PathBuf>;
    let mut pretty = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pretty" => pretty = true,
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag: {flag}"));
            }
            path => {
                if input.replace(PathBuf::from(path)).is_some() {
                    return Err("expected a single input path".to_owned());
                }
            }
        }
    }

    let input =
        input.ok_or_else(|| "usage: chart-adapter [--pretty] <request.json>".to_owned())?;
    Ok(CliArgs { input, pretty })
}
