//! Feature encoding
//!
//! Pure, deterministic mapping from a validated `SurveyResponse` to the
//! fixed-schema feature vector the classifier was trained on. No side
//! effects, no I/O, no hidden state. The field set here and the schema in
//! [`crate::schema`] describe the same contract; `named_values` is the
//! single place that ties field to feature name, and the tests hold it to
//! the schema order.

use crate::models::{BmiCategory, DayBand, SurveyResponse, Tribe};

/// Encoded feature vector for one screening submission
///
/// One named field per classifier feature, so a missing or misnamed entry
/// is a compile error rather than a silent wrong prediction. Values are
/// small integer codes; models widen to `f64` at the scoring boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    /// Smokes (0/1)
    pub smoking: i32,
    /// Drinks alcohol (0/1)
    pub alcohol_drinking: i32,
    /// History of stroke (0/1)
    pub stroke: i32,
    /// Difficulty walking (0/1)
    pub diff_walking: i32,
    /// Male is 1, Female is 0
    pub sex: i32,
    /// Diabetic (0/1)
    pub diabetic: i32,
    /// Gets regular physical activity (0/1)
    pub physical_activity: i32,
    /// Nightly sleep hours, copied unmodified
    pub sleep_time: i32,
    /// Has asthma (0/1)
    pub asthma: i32,
    /// Kidney disease (0/1)
    pub kidney_disease: i32,
    /// History of skin cancer (0/1)
    pub skin_cancer: i32,
    /// BMI category is Normal (0/1)
    pub bmi_category_normal: i32,
    /// BMI category is Overweight (0/1)
    pub bmi_category_overweight: i32,
    /// BMI category is Obese (0/1)
    pub bmi_category_obese: i32,
    /// Tribe is Ibibio (0/1)
    pub tribe_ibibio: i32,
    /// Tribe is Igbo (0/1)
    pub tribe_igbo: i32,
    /// Tribe is Hausa Fulani or Other (0/1)
    pub tribe_other: i32,
    /// Tribe is Tiv (0/1)
    pub tribe_tiv: i32,
    /// Tribe is Yoruba (0/1)
    pub tribe_yoruba: i32,
    /// Age bucket rank, 0 through 12
    pub age_category: i32,
    /// General health rank, 0 through 4
    pub gen_health: i32,
    /// Physical bad-day severity band, 0 through 3
    pub physical_health_category: i32,
    /// Mental bad-day severity band, 0 through 3
    pub mental_health_category: i32,
}

impl FeatureVector {
    /// Feature values keyed by schema name, in schema order
    #[must_use]
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Smoking", f64::from(self.smoking)),
            ("AlcoholDrinking", f64::from(self.alcohol_drinking)),
            ("Stroke", f64::from(self.stroke)),
            ("DiffWalking", f64::from(self.diff_walking)),
            ("Sex", f64::from(self.sex)),
            ("Diabetic", f64::from(self.diabetic)),
            ("PhysicalActivity", f64::from(self.physical_activity)),
            ("SleepTime", f64::from(self.sleep_time)),
            ("Asthma", f64::from(self.asthma)),
            ("KidneyDisease", f64::from(self.kidney_disease)),
            ("SkinCancer", f64::from(self.skin_cancer)),
            ("BMI_category_Normal", f64::from(self.bmi_category_normal)),
            ("BMI_category_Overweight", f64::from(self.bmi_category_overweight)),
            ("BMI_category_Obese", f64::from(self.bmi_category_obese)),
            ("Tribe_Ibibio", f64::from(self.tribe_ibibio)),
            ("Tribe_Igbo", f64::from(self.tribe_igbo)),
            ("Tribe_Other", f64::from(self.tribe_other)),
            ("Tribe_Tiv", f64::from(self.tribe_tiv)),
            ("Tribe_Yoruba", f64::from(self.tribe_yoruba)),
            ("AgeCategory_encoded", f64::from(self.age_category)),
            ("GenHealth_encoded", f64::from(self.gen_health)),
            ("PhysicalHealth_Category_encoded", f64::from(self.physical_health_category)),
            ("MentalHealth_Category_encoded", f64::from(self.mental_health_category)),
        ]
    }

    /// Look up a feature value by schema name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.named_values()
            .into_iter()
            .find_map(|(feature, value)| (feature == name).then_some(value))
    }
}

/// Encode a validated submission into the classifier's feature vector
///
/// Deterministic over its input; identical responses always yield an
/// identical vector.
#[must_use]
pub fn encode(survey: &SurveyResponse) -> FeatureVector {
    FeatureVector {
        smoking: survey.smoking.indicator(),
        alcohol_drinking: survey.alcohol_drinking.indicator(),
        stroke: survey.stroke.indicator(),
        diff_walking: survey.diff_walking.indicator(),
        sex: survey.sex.indicator(),
        diabetic: survey.diabetic.indicator(),
        physical_activity: survey.physical_activity.indicator(),
        sleep_time: i32::from(survey.sleep_time_hours),
        asthma: survey.asthma.indicator(),
        kidney_disease: survey.kidney_disease.indicator(),
        skin_cancer: survey.skin_cancer.indicator(),
        bmi_category_normal: i32::from(survey.bmi_category == BmiCategory::Normal),
        bmi_category_overweight: i32::from(survey.bmi_category == BmiCategory::Overweight),
        bmi_category_obese: i32::from(survey.bmi_category == BmiCategory::Obese),
        tribe_ibibio: i32::from(survey.tribe == Tribe::Ibibio),
        tribe_igbo: i32::from(survey.tribe == Tribe::Igbo),
        // "Hausa Fulani" and "Other" share one indicator, see
        // Tribe::indicator_column
        tribe_other: i32::from(matches!(survey.tribe, Tribe::HausaFulani | Tribe::Other)),
        tribe_tiv: i32::from(survey.tribe == Tribe::Tiv),
        tribe_yoruba: i32::from(survey.tribe == Tribe::Yoruba),
        age_category: survey.age.rank(),
        gen_health: survey.general_health.rank(),
        physical_health_category: DayBand::from_days(survey.physical_health_days).code(),
        mental_health_category: DayBand::from_days(survey.mental_health_days).code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeBucket, BmiCategory, GeneralHealth, Sex, YesNo};
    use crate::schema::FeatureSchema;

    fn baseline_survey() -> SurveyResponse {
        SurveyResponse {
            age: AgeBucket::Age18To24,
            sex: Sex::Female,
            tribe: Tribe::Ibibio,
            physical_activity: YesNo::Yes,
            bmi_category: BmiCategory::Normal,
            general_health: GeneralHealth::Good,
            physical_health_days: 0,
            mental_health_days: 0,
            sleep_time_hours: 7,
            alcohol_drinking: YesNo::No,
            smoking: YesNo::No,
            skin_cancer: YesNo::No,
            diabetic: YesNo::No,
            diff_walking: YesNo::No,
            asthma: YesNo::No,
            kidney_disease: YesNo::No,
            stroke: YesNo::No,
        }
    }

    fn one_hot_sum(vector: &FeatureVector, names: &[&str]) -> f64 {
        names
            .iter()
            .map(|name| vector.get(name).unwrap())
            .sum()
    }

    #[test]
    fn test_named_values_match_schema_order() {
        let schema = FeatureSchema::canonical();
        let vector = encode(&baseline_survey());
        let names: Vec<&str> = vector.named_values().into_iter().map(|(name, _)| name).collect();
        let expected: Vec<&str> = schema.names().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_encoded_values_lie_in_schema_domains() {
        let schema = FeatureSchema::canonical();
        let mut survey = baseline_survey();
        survey.physical_health_days = 30;
        survey.mental_health_days = 17;
        survey.sleep_time_hours = 16;
        survey.age = AgeBucket::Age80Plus;
        let vector = encode(&survey);
        for (name, value) in vector.named_values() {
            let def = schema.get(name).unwrap();
            #[allow(clippy::cast_possible_truncation)]
            let as_int = value as i32;
            assert!(def.domain.contains(as_int), "{name}={value} outside {}", def.domain);
        }
    }

    #[test]
    fn test_bmi_one_hot_is_exclusive_and_exhaustive() {
        let bmi_columns = ["BMI_category_Normal", "BMI_category_Overweight", "BMI_category_Obese"];
        for bmi in BmiCategory::ALL {
            let mut survey = baseline_survey();
            survey.bmi_category = bmi;
            let vector = encode(&survey);
            assert_eq!(one_hot_sum(&vector, &bmi_columns), 1.0, "{bmi}");
        }
    }

    #[test]
    fn test_tribe_one_hot_collapses_hausa_fulani_into_other() {
        let tribe_columns =
            ["Tribe_Ibibio", "Tribe_Igbo", "Tribe_Other", "Tribe_Tiv", "Tribe_Yoruba"];
        for tribe in Tribe::ALL {
            let mut survey = baseline_survey();
            survey.tribe = tribe;
            let vector = encode(&survey);
            assert_eq!(one_hot_sum(&vector, &tribe_columns), 1.0, "{tribe}");
            assert_eq!(vector.get(tribe.indicator_column()), Some(1.0), "{tribe}");
        }

        let mut survey = baseline_survey();
        survey.tribe = Tribe::HausaFulani;
        let hausa = encode(&survey);
        survey.tribe = Tribe::Other;
        let other = encode(&survey);
        assert_eq!(hausa.tribe_other, 1);
        assert_eq!(other.tribe_other, 1);
        assert_eq!(hausa, other);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let survey = baseline_survey();
        assert_eq!(encode(&survey), encode(&survey));
        assert_eq!(encode(&survey).named_values(), encode(&survey).named_values());
    }

    #[test]
    fn test_obese_smoker_profile_encodes_expected_vector() {
        let survey = SurveyResponse {
            age: AgeBucket::Age45To49,
            sex: Sex::Male,
            tribe: Tribe::Yoruba,
            physical_activity: YesNo::No,
            bmi_category: BmiCategory::Obese,
            general_health: GeneralHealth::Fair,
            physical_health_days: 12,
            mental_health_days: 3,
            sleep_time_hours: 6,
            alcohol_drinking: YesNo::No,
            smoking: YesNo::Yes,
            skin_cancer: YesNo::No,
            diabetic: YesNo::No,
            diff_walking: YesNo::No,
            asthma: YesNo::No,
            kidney_disease: YesNo::No,
            stroke: YesNo::No,
        };
        let vector = encode(&survey);

        assert_eq!(vector.age_category, 5);
        assert_eq!(vector.sex, 1);
        assert_eq!(vector.tribe_yoruba, 1);
        assert_eq!(vector.tribe_ibibio, 0);
        assert_eq!(vector.tribe_igbo, 0);
        assert_eq!(vector.tribe_other, 0);
        assert_eq!(vector.tribe_tiv, 0);
        assert_eq!(vector.bmi_category_obese, 1);
        assert_eq!(vector.bmi_category_normal, 0);
        assert_eq!(vector.bmi_category_overweight, 0);
        assert_eq!(vector.gen_health, 1);
        assert_eq!(vector.physical_health_category, 2);
        assert_eq!(vector.mental_health_category, 0);
        assert_eq!(vector.sleep_time, 6);
        assert_eq!(vector.smoking, 1);
        for flag in ["AlcoholDrinking", "Stroke", "DiffWalking", "Diabetic",
            "PhysicalActivity", "Asthma", "KidneyDisease", "SkinCancer"]
        {
            assert_eq!(vector.get(flag), Some(0.0), "{flag}");
        }
    }

    #[test]
    fn test_get_unknown_feature_is_none() {
        let vector = encode(&baseline_survey());
        assert_eq!(vector.get("BloodPressure"), None);
    }
}
