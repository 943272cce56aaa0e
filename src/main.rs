use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::info;

use hyperscreen::{
    RiskModel, ScreeningConfig, answers_from_json, collect_interactive, encode, load_model,
    parse_answers, report,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ScreeningConfig { model_path: PathBuf::from(path), ..Default::default() },
        None => ScreeningConfig::default(),
    };
    let answers_path = args.next().map(PathBuf::from);

    let model = load_model(&config)
        .with_context(|| format!("loading model artifact {}", config.model_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Hypertension Risk Prediction")?;
    writeln!(out, "Predict hypertension risk based on health and demographic factors")?;
    writeln!(out)?;

    let survey = match answers_path {
        Some(path) => {
            info!("reading answers from {}", path.display());
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading answers file {}", path.display()))?;
            parse_answers(&answers_from_json(&text)?)?
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            collect_interactive(&mut input, &mut out)?
        }
    };

    writeln!(out)?;
    write!(out, "{}", report::input_summary(&survey))?;
    writeln!(out)?;

    let features = encode(&survey);
    let prediction = model.predict(&features)?;
    write!(out, "{}", report::render(&prediction))?;

    Ok(())
}
