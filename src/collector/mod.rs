//! Input collection for the screening form
//!
//! The collector owns the fixed questionnaire: the question set, prompt
//! labels, choice lists, numeric bounds, and defaults. Raw answers arrive
//! as strings from whatever surface is in front of the user; everything is
//! validated here, and only a fully validated `SurveyResponse` ever reaches
//! the encoder.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, ScreeningError};
use crate::models::{
    AgeBucket, BmiCategory, GeneralHealth, MAX_HEALTH_DAYS, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS,
    Sex, SurveyResponse, Tribe, UnknownChoice, YesNo,
};

/// Question names, as used in raw answer mappings
pub mod fields {
    /// Age bucket
    pub const AGE: &str = "Age";
    /// Sex
    pub const SEX: &str = "Sex";
    /// Tribe
    pub const TRIBE: &str = "Tribe";
    /// Regular physical activity
    pub const PHYSICAL_ACTIVITY: &str = "PhysicalActivity";
    /// BMI category
    pub const BMI_CATEGORY: &str = "BMICategory";
    /// General health
    pub const GEN_HEALTH: &str = "GenHealth";
    /// Days of poor physical health in the last 30
    pub const PHYSICAL_HEALTH: &str = "PhysicalHealth";
    /// Days of poor mental health in the last 30
    pub const MENTAL_HEALTH: &str = "MentalHealth";
    /// Nightly sleep hours
    pub const SLEEP_TIME: &str = "SleepTime";
    /// Alcohol drinking
    pub const ALCOHOL_DRINKING: &str = "AlcoholDrinking";
    /// Smoking
    pub const SMOKING: &str = "Smoking";
    /// History of skin cancer
    pub const SKIN_CANCER: &str = "SkinCancer";
    /// Diabetic
    pub const DIABETIC: &str = "Diabetic";
    /// Difficulty walking
    pub const DIFF_WALKING: &str = "DiffWalking";
    /// Asthma
    pub const ASTHMA: &str = "Asthma";
    /// Kidney disease
    pub const KIDNEY_DISEASE: &str = "KidneyDisease";
    /// History of stroke
    pub const STROKE: &str = "Stroke";
}

/// Raw answers as delivered by a presentation surface
pub type RawAnswers = HashMap<String, String>;

/// What kind of input a question accepts
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// Single select from a fixed choice list
    Choice {
        /// The accepted choices, in display order
        options: &'static [&'static str],
    },
    /// Integer within an inclusive range
    Count {
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
        /// Default offered by the interactive surface
        default: i64,
    },
}

/// One question on the screening form
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Field name used in raw answer mappings
    pub field: &'static str,
    /// Prompt label shown to the user
    pub prompt: &'static str,
    /// Input kind and constraints
    pub kind: QuestionKind,
}

const AGE_OPTIONS: &[&str] = &[
    "18-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50-54", "55-59", "60-64", "65-69",
    "70-74", "75-79", "80+",
];
const SEX_OPTIONS: &[&str] = &["Male", "Female"];
const TRIBE_OPTIONS: &[&str] = &["Ibibio", "Igbo", "Yoruba", "Tiv", "Hausa Fulani", "Other"];
const BMI_OPTIONS: &[&str] = &["Normal", "Overweight", "Obese"];
const GEN_HEALTH_OPTIONS: &[&str] = &["Poor", "Fair", "Good", "Very good", "Excellent"];
const YES_NO_OPTIONS: &[&str] = &["Yes", "No"];
const NO_YES_OPTIONS: &[&str] = &["No", "Yes"];

/// The fixed screening questionnaire, in presentation order
pub const QUESTIONNAIRE: &[Question] = &[
    Question {
        field: fields::AGE,
        prompt: "Age",
        kind: QuestionKind::Choice { options: AGE_OPTIONS },
    },
    Question {
        field: fields::SEX,
        prompt: "Sex",
        kind: QuestionKind::Choice { options: SEX_OPTIONS },
    },
    Question {
        field: fields::TRIBE,
        prompt: "Tribe",
        kind: QuestionKind::Choice { options: TRIBE_OPTIONS },
    },
    Question {
        field: fields::PHYSICAL_ACTIVITY,
        prompt: "Physical Activity",
        kind: QuestionKind::Choice { options: YES_NO_OPTIONS },
    },
    Question {
        field: fields::BMI_CATEGORY,
        prompt: "BMI Category",
        kind: QuestionKind::Choice { options: BMI_OPTIONS },
    },
    Question {
        field: fields::GEN_HEALTH,
        prompt: "General Health",
        kind: QuestionKind::Choice { options: GEN_HEALTH_OPTIONS },
    },
    Question {
        field: fields::PHYSICAL_HEALTH,
        prompt: "Physical Health (Last 30 Days)",
        kind: QuestionKind::Count { min: 0, max: MAX_HEALTH_DAYS as i64, default: 5 },
    },
    Question {
        field: fields::MENTAL_HEALTH,
        prompt: "Mental Health (Last 30 Days)",
        kind: QuestionKind::Count { min: 0, max: MAX_HEALTH_DAYS as i64, default: 5 },
    },
    Question {
        field: fields::SLEEP_TIME,
        prompt: "Sleep Time (hours)",
        kind: QuestionKind::Count {
            min: MIN_SLEEP_HOURS as i64,
            max: MAX_SLEEP_HOURS as i64,
            default: 7,
        },
    },
    Question {
        field: fields::ALCOHOL_DRINKING,
        prompt: "Alcohol Drinking",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::SMOKING,
        prompt: "Smoking Status",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::SKIN_CANCER,
        prompt: "Skin Cancer",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::DIABETIC,
        prompt: "Diabetic",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::DIFF_WALKING,
        prompt: "Difficulty Walking",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::ASTHMA,
        prompt: "Asthma",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::KIDNEY_DISEASE,
        prompt: "Kidney Disease",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
    Question {
        field: fields::STROKE,
        prompt: "History of Stroke",
        kind: QuestionKind::Choice { options: NO_YES_OPTIONS },
    },
];

fn require<'a>(answers: &'a RawAnswers, field: &'static str) -> Result<&'a str> {
    answers
        .get(field)
        .map(String::as_str)
        .ok_or(ScreeningError::MissingAnswer { field })
}

fn parse_choice<T>(field: &'static str, raw: &str) -> Result<T>
where
    T: FromStr<Err = UnknownChoice>,
{
    raw.parse().map_err(|UnknownChoice| ScreeningError::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

fn parse_count(field: &'static str, raw: &str, min: i64, max: i64) -> Result<u8> {
    let value: i64 = raw.trim().parse().map_err(|_| ScreeningError::InvalidInput {
        field,
        value: raw.to_string(),
    })?;
    if !(min..=max).contains(&value) {
        return Err(ScreeningError::OutOfRange { field, value, min, max });
    }
    u8::try_from(value).map_err(|_| ScreeningError::OutOfRange { field, value, min, max })
}

/// Validate a single raw answer against its question's constraints
pub fn check_answer(question: &Question, raw: &str) -> Result<()> {
    match question.kind {
        QuestionKind::Choice { .. } => match question.field {
            fields::AGE => parse_choice::<AgeBucket>(fields::AGE, raw).map(|_| ()),
            fields::SEX => parse_choice::<Sex>(fields::SEX, raw).map(|_| ()),
            fields::TRIBE => parse_choice::<Tribe>(fields::TRIBE, raw).map(|_| ()),
            fields::BMI_CATEGORY => parse_choice::<BmiCategory>(fields::BMI_CATEGORY, raw).map(|_| ()),
            fields::GEN_HEALTH => parse_choice::<GeneralHealth>(fields::GEN_HEALTH, raw).map(|_| ()),
            field => parse_choice::<YesNo>(field, raw).map(|_| ()),
        },
        QuestionKind::Count { min, max, .. } => {
            parse_count(question.field, raw, min, max).map(|_| ())
        }
    }
}

/// Build a validated submission from a raw answer mapping
///
/// Every question is required. Keys that are not questionnaire fields are
/// ignored with a warning, so a surface may carry display-only entries.
pub fn parse_answers(answers: &RawAnswers) -> Result<SurveyResponse> {
    let known: Vec<&str> = QUESTIONNAIRE.iter().map(|q| q.field).collect();
    for key in answers.keys() {
        if !known.contains(&key.as_str()) {
            log::warn!("ignoring unrecognized answer field '{key}'");
        }
    }

    Ok(SurveyResponse {
        age: parse_choice(fields::AGE, require(answers, fields::AGE)?)?,
        sex: parse_choice(fields::SEX, require(answers, fields::SEX)?)?,
        tribe: parse_choice(fields::TRIBE, require(answers, fields::TRIBE)?)?,
        physical_activity: parse_choice(
            fields::PHYSICAL_ACTIVITY,
            require(answers, fields::PHYSICAL_ACTIVITY)?,
        )?,
        bmi_category: parse_choice(fields::BMI_CATEGORY, require(answers, fields::BMI_CATEGORY)?)?,
        general_health: parse_choice(fields::GEN_HEALTH, require(answers, fields::GEN_HEALTH)?)?,
        physical_health_days: parse_count(
            fields::PHYSICAL_HEALTH,
            require(answers, fields::PHYSICAL_HEALTH)?,
            0,
            MAX_HEALTH_DAYS as i64,
        )?,
        mental_health_days: parse_count(
            fields::MENTAL_HEALTH,
            require(answers, fields::MENTAL_HEALTH)?,
            0,
            MAX_HEALTH_DAYS as i64,
        )?,
        sleep_time_hours: parse_count(
            fields::SLEEP_TIME,
            require(answers, fields::SLEEP_TIME)?,
            MIN_SLEEP_HOURS as i64,
            MAX_SLEEP_HOURS as i64,
        )?,
        alcohol_drinking: parse_choice(
            fields::ALCOHOL_DRINKING,
            require(answers, fields::ALCOHOL_DRINKING)?,
        )?,
        smoking: parse_choice(fields::SMOKING, require(answers, fields::SMOKING)?)?,
        skin_cancer: parse_choice(fields::SKIN_CANCER, require(answers, fields::SKIN_CANCER)?)?,
        diabetic: parse_choice(fields::DIABETIC, require(answers, fields::DIABETIC)?)?,
        diff_walking: parse_choice(fields::DIFF_WALKING, require(answers, fields::DIFF_WALKING)?)?,
        asthma: parse_choice(fields::ASTHMA, require(answers, fields::ASTHMA)?)?,
        kidney_disease: parse_choice(
            fields::KIDNEY_DISEASE,
            require(answers, fields::KIDNEY_DISEASE)?,
        )?,
        stroke: parse_choice(fields::STROKE, require(answers, fields::STROKE)?)?,
    })
}

/// Load a raw answer mapping from a JSON document
///
/// Accepts string values as-is and renders numeric values to strings, so
/// `"PhysicalHealth": 12` and `"PhysicalHealth": "12"` are equivalent.
pub fn answers_from_json(text: &str) -> Result<RawAnswers> {
    let values: HashMap<String, serde_json::Value> =
        serde_json::from_str(text).map_err(|e| ScreeningError::InvalidInput {
            field: "answers",
            value: e.to_string(),
        })?;

    let mut answers = RawAnswers::new();
    for (key, value) in values {
        let rendered = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(ScreeningError::InvalidInput {
                    field: "answers",
                    value: format!("{key}: unsupported value {other}"),
                });
            }
        };
        answers.insert(key, rendered);
    }
    Ok(answers)
}

fn format_prompt(question: &Question) -> String {
    match question.kind {
        QuestionKind::Choice { options } => {
            format!("{} [{}]: ", question.prompt, options.join("/"))
        }
        QuestionKind::Count { min, max, default } => {
            format!("{} [{min}-{max}, default {default}]: ", question.prompt)
        }
    }
}

/// Run the questionnaire interactively
///
/// Prompts one question at a time, re-prompting on invalid input. Empty
/// input accepts the default where a question has one. Rejection, never
/// clamping: an out-of-range count is refused and asked again.
pub fn collect_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SurveyResponse> {
    let mut answers = RawAnswers::new();

    for question in QUESTIONNAIRE {
        loop {
            write!(output, "{}", format_prompt(question))?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(ScreeningError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("input ended before '{}' was answered", question.prompt),
                )));
            }

            let mut raw = line.trim().to_string();
            if raw.is_empty() {
                if let QuestionKind::Count { default, .. } = question.kind {
                    raw = default.to_string();
                } else {
                    continue;
                }
            }

            match check_answer(question, &raw) {
                Ok(()) => {
                    answers.insert(question.field.to_string(), raw);
                    break;
                }
                Err(e) => writeln!(output, "  {e}")?,
            }
        }
    }

    parse_answers(&answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn full_answers() -> RawAnswers {
        [
            (fields::AGE, "45-49"),
            (fields::SEX, "Male"),
            (fields::TRIBE, "Yoruba"),
            (fields::PHYSICAL_ACTIVITY, "No"),
            (fields::BMI_CATEGORY, "Obese"),
            (fields::GEN_HEALTH, "Fair"),
            (fields::PHYSICAL_HEALTH, "12"),
            (fields::MENTAL_HEALTH, "3"),
            (fields::SLEEP_TIME, "6"),
            (fields::ALCOHOL_DRINKING, "No"),
            (fields::SMOKING, "Yes"),
            (fields::SKIN_CANCER, "No"),
            (fields::DIABETIC, "No"),
            (fields::DIFF_WALKING, "No"),
            (fields::ASTHMA, "No"),
            (fields::KIDNEY_DISEASE, "No"),
            (fields::STROKE, "No"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_parse_answers_happy_path() {
        let survey = parse_answers(&full_answers()).unwrap();
        assert_eq!(survey.age, AgeBucket::Age45To49);
        assert_eq!(survey.tribe, Tribe::Yoruba);
        assert_eq!(survey.smoking, YesNo::Yes);
        assert_eq!(survey.physical_health_days, 12);
        assert_eq!(survey.sleep_time_hours, 6);
    }

    #[test]
    fn test_parse_answers_missing_field() {
        let mut answers = full_answers();
        answers.remove(fields::STROKE);
        assert!(matches!(
            parse_answers(&answers),
            Err(ScreeningError::MissingAnswer { field: fields::STROKE })
        ));
    }

    #[test]
    fn test_parse_answers_invalid_tribe() {
        let mut answers = full_answers();
        answers.insert(fields::TRIBE.to_string(), "Martian".to_string());
        match parse_answers(&answers) {
            Err(ScreeningError::InvalidInput { field, value }) => {
                assert_eq!(field, fields::TRIBE);
                assert_eq!(value, "Martian");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_answers_out_of_range_days() {
        let mut answers = full_answers();
        answers.insert(fields::PHYSICAL_HEALTH.to_string(), "31".to_string());
        assert!(matches!(
            parse_answers(&answers),
            Err(ScreeningError::OutOfRange { field: fields::PHYSICAL_HEALTH, value: 31, .. })
        ));
    }

    #[test]
    fn test_parse_answers_out_of_range_sleep() {
        let mut answers = full_answers();
        answers.insert(fields::SLEEP_TIME.to_string(), "1".to_string());
        assert!(matches!(
            parse_answers(&answers),
            Err(ScreeningError::OutOfRange { field: fields::SLEEP_TIME, value: 1, min: 2, max: 16 })
        ));
    }

    #[test]
    fn test_parse_answers_non_numeric_count() {
        let mut answers = full_answers();
        answers.insert(fields::MENTAL_HEALTH.to_string(), "many".to_string());
        assert!(matches!(
            parse_answers(&answers),
            Err(ScreeningError::InvalidInput { field: fields::MENTAL_HEALTH, .. })
        ));
    }

    #[test]
    fn test_questionnaire_choice_lists_match_enum_domains() {
        assert_eq!(QUESTIONNAIRE.len(), 17);
        for question in QUESTIONNAIRE {
            if let QuestionKind::Choice { options } = question.kind {
                for option in options {
                    assert!(check_answer(question, option).is_ok(), "{option}");
                }
            }
        }
    }

    #[test]
    fn test_answers_from_json_accepts_numbers() {
        let answers =
            answers_from_json(r#"{"PhysicalHealth": 12, "Age": "45-49"}"#).unwrap();
        assert_eq!(answers.get(fields::PHYSICAL_HEALTH).map(String::as_str), Some("12"));
        assert_eq!(answers.get(fields::AGE).map(String::as_str), Some("45-49"));
    }

    #[test]
    fn test_answers_from_json_rejects_nested_values() {
        assert!(matches!(
            answers_from_json(r#"{"Age": ["45-49"]}"#),
            Err(ScreeningError::InvalidInput { field: "answers", .. })
        ));
    }

    #[test]
    fn test_collect_interactive_reprompts_on_invalid() {
        let script = "45-49\nMale\nMartian\nYoruba\nNo\nObese\nFair\n12\n3\n6\nNo\nYes\nNo\nNo\nNo\nNo\nNo\nNo\n";
        let mut input = Cursor::new(script);
        let mut output = Vec::new();
        let survey = collect_interactive(&mut input, &mut output).unwrap();
        assert_eq!(survey.tribe, Tribe::Yoruba);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("invalid value 'Martian' for Tribe"));
    }

    #[test]
    fn test_collect_interactive_defaults_on_empty_count() {
        let script = "45-49\nMale\nYoruba\nNo\nObese\nFair\n\n\n\nNo\nYes\nNo\nNo\nNo\nNo\nNo\nNo\n";
        let mut input = Cursor::new(script);
        let mut output = Vec::new();
        let survey = collect_interactive(&mut input, &mut output).unwrap();
        assert_eq!(survey.physical_health_days, 5);
        assert_eq!(survey.mental_health_days, 5);
        assert_eq!(survey.sleep_time_hours, 7);
    }

    #[test]
    fn test_collect_interactive_eof_is_an_error() {
        let mut input = Cursor::new("45-49\n");
        let mut output = Vec::new();
        assert!(matches!(
            collect_interactive(&mut input, &mut output),
            Err(ScreeningError::Io(_))
        ));
    }
}
