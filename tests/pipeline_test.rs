//! End-to-end pipeline tests: raw answers through encoding, classification,
//! and report rendering.

use std::io::Write;

use hyperscreen::{
    FeatureSchema, RawAnswers, RiskLabel, RiskModel, ScreeningConfig, ScreeningError, encode,
    load_model, parse_answers, report,
};

fn answers(overrides: &[(&str, &str)]) -> RawAnswers {
    let mut map: RawAnswers = [
        ("Age", "45-49"),
        ("Sex", "Male"),
        ("Tribe", "Yoruba"),
        ("PhysicalActivity", "No"),
        ("BMICategory", "Obese"),
        ("GenHealth", "Fair"),
        ("PhysicalHealth", "12"),
        ("MentalHealth", "3"),
        ("SleepTime", "6"),
        ("AlcoholDrinking", "No"),
        ("Smoking", "Yes"),
        ("SkinCancer", "No"),
        ("Diabetic", "No"),
        ("DiffWalking", "No"),
        ("Asthma", "No"),
        ("KidneyDisease", "No"),
        ("Stroke", "No"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (key, value) in overrides {
        map.insert((*key).to_string(), (*value).to_string());
    }
    map
}

fn artifact(weights: &[(&str, f64)], intercept: f64) -> tempfile::NamedTempFile {
    let weights: serde_json::Map<String, serde_json::Value> = weights
        .iter()
        .map(|(name, w)| ((*name).to_string(), serde_json::json!(w)))
        .collect();
    let json = serde_json::json!({
        "intercept": intercept,
        "weights": weights,
        "threshold": 0.5,
    })
    .to_string();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn zero_weights() -> Vec<(&'static str, f64)> {
    FeatureSchema::canonical().names().map(|name| (name, 0.0)).collect()
}

#[test]
fn test_full_pipeline_high_risk() -> hyperscreen::Result<()> {
    // Positive intercept pushes every submission above the threshold
    let file = artifact(&zero_weights(), 3.0);
    let config = ScreeningConfig { model_path: file.path().to_path_buf(), ..Default::default() };
    let model = load_model(&config)?;

    let survey = parse_answers(&answers(&[]))?;
    let features = encode(&survey);
    let prediction = model.predict(&features)?;

    assert_eq!(prediction.label, RiskLabel::HighRisk);
    assert!(prediction.probability > 0.9);

    let text = report::render(&prediction);
    assert!(text.contains("High Risk of Hypertension"));
    assert!(text.contains("consult a healthcare provider"));
    Ok(())
}

#[test]
fn test_full_pipeline_low_risk() -> hyperscreen::Result<()> {
    let file = artifact(&zero_weights(), -3.0);
    let config = ScreeningConfig { model_path: file.path().to_path_buf(), ..Default::default() };
    let model = load_model(&config)?;

    let survey = parse_answers(&answers(&[]))?;
    let prediction = model.predict(&encode(&survey))?;

    assert_eq!(prediction.label, RiskLabel::LowRisk);
    assert!(prediction.probability < 0.1);
    assert!(report::render(&prediction).contains("Low Risk of Hypertension"));
    Ok(())
}

#[test]
fn test_invalid_input_never_reaches_the_classifier() {
    // Validation fails before any model interaction, so no artifact needed
    let result = parse_answers(&answers(&[("Tribe", "Martian")]));
    match result {
        Err(ScreeningError::InvalidInput { field, value }) => {
            assert_eq!(field, "Tribe");
            assert_eq!(value, "Martian");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_weighted_model_orders_risk_sensibly() -> hyperscreen::Result<()> {
    // Risk factors carry positive weights, protective factors negative
    let mut weights = zero_weights();
    for (name, weight) in &mut weights {
        *weight = match *name {
            "Smoking" => 0.8,
            "Stroke" => 1.2,
            "AgeCategory_encoded" => 0.15,
            "PhysicalActivity" => -0.5,
            _ => 0.0,
        };
    }
    let file = artifact(&weights, -1.5);
    let config = ScreeningConfig { model_path: file.path().to_path_buf(), ..Default::default() };
    let model = load_model(&config)?;

    let healthy = parse_answers(&answers(&[
        ("Age", "18-24"),
        ("Smoking", "No"),
        ("PhysicalActivity", "Yes"),
    ]))?;
    let at_risk = parse_answers(&answers(&[
        ("Age", "80+"),
        ("Smoking", "Yes"),
        ("Stroke", "Yes"),
    ]))?;

    let p_healthy = model.predict_probability(&encode(&healthy))?;
    let p_at_risk = model.predict_probability(&encode(&at_risk))?;
    assert!(p_at_risk > p_healthy);
    Ok(())
}

#[test]
fn test_pipeline_is_deterministic_across_runs() -> hyperscreen::Result<()> {
    let file = artifact(&zero_weights(), 0.25);
    let config = ScreeningConfig { model_path: file.path().to_path_buf(), ..Default::default() };
    let model = load_model(&config)?;

    let survey = parse_answers(&answers(&[]))?;
    let first = model.predict(&encode(&survey))?;
    let second = model.predict(&encode(&survey))?;
    assert_eq!(first, second);
    Ok(())
}
