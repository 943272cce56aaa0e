//! Common domain type definitions
//!
//! This module contains the enum types for every categorical question on the
//! screening form. Parsing is strict: a string outside a type's enumerated
//! domain is an `UnknownChoice`, never silently coerced, so an out-of-domain
//! answer can never reach the encoder.

use std::fmt;
use std::str::FromStr;

/// Error returned when a string does not name a known choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownChoice;

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown choice")
    }
}

impl std::error::Error for UnknownChoice {}

/// Five-year age bucket used by the screening form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBucket {
    /// Ages 18 through 24
    Age18To24,
    /// Ages 25 through 29
    Age25To29,
    /// Ages 30 through 34
    Age30To34,
    /// Ages 35 through 39
    Age35To39,
    /// Ages 40 through 44
    Age40To44,
    /// Ages 45 through 49
    Age45To49,
    /// Ages 50 through 54
    Age50To54,
    /// Ages 55 through 59
    Age55To59,
    /// Ages 60 through 64
    Age60To64,
    /// Ages 65 through 69
    Age65To69,
    /// Ages 70 through 74
    Age70To74,
    /// Ages 75 through 79
    Age75To79,
    /// Ages 80 and above
    Age80Plus,
}

impl AgeBucket {
    /// All buckets in chronological order
    pub const ALL: [Self; 13] = [
        Self::Age18To24,
        Self::Age25To29,
        Self::Age30To34,
        Self::Age35To39,
        Self::Age40To44,
        Self::Age45To49,
        Self::Age50To54,
        Self::Age55To59,
        Self::Age60To64,
        Self::Age65To69,
        Self::Age70To74,
        Self::Age75To79,
        Self::Age80Plus,
    ];

    /// Ordinal rank of the bucket, 0 for "18-24" through 12 for "80+"
    #[must_use]
    pub fn rank(self) -> i32 {
        match self {
            Self::Age18To24 => 0,
            Self::Age25To29 => 1,
            Self::Age30To34 => 2,
            Self::Age35To39 => 3,
            Self::Age40To44 => 4,
            Self::Age45To49 => 5,
            Self::Age50To54 => 6,
            Self::Age55To59 => 7,
            Self::Age60To64 => 8,
            Self::Age65To69 => 9,
            Self::Age70To74 => 10,
            Self::Age75To79 => 11,
            Self::Age80Plus => 12,
        }
    }

    /// Label as shown on the form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age18To24 => "18-24",
            Self::Age25To29 => "25-29",
            Self::Age30To34 => "30-34",
            Self::Age35To39 => "35-39",
            Self::Age40To44 => "40-44",
            Self::Age45To49 => "45-49",
            Self::Age50To54 => "50-54",
            Self::Age55To59 => "55-59",
            Self::Age60To64 => "60-64",
            Self::Age65To69 => "65-69",
            Self::Age70To74 => "70-74",
            Self::Age75To79 => "75-79",
            Self::Age80Plus => "80+",
        }
    }
}

impl FromStr for AgeBucket {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownChoice)
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sex of the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Both choices, in form order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Binary indicator for the classifier: Male is 1, Female is 0
    #[must_use]
    pub fn indicator(self) -> i32 {
        match self {
            Self::Male => 1,
            Self::Female => 0,
        }
    }

    /// Label as shown on the form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(UnknownChoice),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A yes/no answer to a behavior or medical-history question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    /// Affirmative answer
    Yes,
    /// Negative answer
    No,
}

impl YesNo {
    /// Both choices, in form order
    pub const ALL: [Self; 2] = [Self::No, Self::Yes];

    /// Binary indicator for the classifier: Yes is 1, No is 0
    #[must_use]
    pub fn indicator(self) -> i32 {
        match self {
            Self::Yes => 1,
            Self::No => 0,
        }
    }

    /// Label as shown on the form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl FromStr for YesNo {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(UnknownChoice),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tribe of the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tribe {
    /// Ibibio
    Ibibio,
    /// Igbo
    Igbo,
    /// Yoruba
    Yoruba,
    /// Tiv
    Tiv,
    /// Hausa Fulani
    HausaFulani,
    /// Any tribe not listed separately
    Other,
}

impl Tribe {
    /// All choices, in form order
    pub const ALL: [Self; 6] = [
        Self::Ibibio,
        Self::Igbo,
        Self::Yoruba,
        Self::Tiv,
        Self::HausaFulani,
        Self::Other,
    ];

    /// The one-hot indicator column this tribe sets
    ///
    /// Collapsing rule inherited from the training data: "Hausa Fulani" and
    /// "Other" share the `Tribe_Other` column, so the six-valued form domain
    /// maps onto five indicator features and the two are indistinguishable
    /// after encoding.
    #[must_use]
    pub fn indicator_column(self) -> &'static str {
        match self {
            Self::Ibibio => "Tribe_Ibibio",
            Self::Igbo => "Tribe_Igbo",
            Self::Yoruba => "Tribe_Yoruba",
            Self::Tiv => "Tribe_Tiv",
            Self::HausaFulani | Self::Other => "Tribe_Other",
        }
    }

    /// Label as shown on the form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ibibio => "Ibibio",
            Self::Igbo => "Igbo",
            Self::Yoruba => "Yoruba",
            Self::Tiv => "Tiv",
            Self::HausaFulani => "Hausa Fulani",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Tribe {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ibibio" => Ok(Self::Ibibio),
            "igbo" => Ok(Self::Igbo),
            "yoruba" => Ok(Self::Yoruba),
            "tiv" => Ok(Self::Tiv),
            "hausa fulani" => Ok(Self::HausaFulani),
            "other" => Ok(Self::Other),
            _ => Err(UnknownChoice),
        }
    }
}

impl fmt::Display for Tribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI category of the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// Normal weight
    Normal,
    /// Overweight
    Overweight,
    /// Obese
    Obese,
}

impl BmiCategory {
    /// All choices, in form order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Overweight, Self::Obese];

    /// Label as shown on the form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl FromStr for BmiCategory {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "obese" => Ok(Self::Obese),
            _ => Err(UnknownChoice),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported general health on the standard five-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralHealth {
    /// Poor health
    Poor,
    /// Fair health
    Fair,
    /// Good health
    Good,
    /// Very good health
    VeryGood,
    /// Excellent health
    Excellent,
}

impl GeneralHealth {
    /// All choices, from worst to best
    pub const ALL: [Self; 5] = [
        Self::Poor,
        Self::Fair,
        Self::Good,
        Self::VeryGood,
        Self::Excellent,
    ];

    /// Ordinal rank, 0 for Poor through 4 for Excellent
    #[must_use]
    pub fn rank(self) -> i32 {
        match self {
            Self::Poor => 0,
            Self::Fair => 1,
            Self::Good => 2,
            Self::VeryGood => 3,
            Self::Excellent => 4,
        }
    }

    /// Label as shown on the form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very good",
            Self::Excellent => "Excellent",
        }
    }
}

impl FromStr for GeneralHealth {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poor" => Ok(Self::Poor),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "very good" => Ok(Self::VeryGood),
            "excellent" => Ok(Self::Excellent),
            _ => Err(UnknownChoice),
        }
    }
}

impl fmt::Display for GeneralHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity band for a "bad days out of the last 30" count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayBand {
    /// Fewer than 5 days
    None,
    /// 5 to 9 days
    Mild,
    /// 10 to 19 days
    Moderate,
    /// 20 or more days
    Severe,
}

impl DayBand {
    /// Band for a day count
    ///
    /// Total over the whole integer domain; boundaries are closed on the
    /// left and open on the right, with the final band unbounded above.
    #[must_use]
    pub fn from_days(days: u8) -> Self {
        match days {
            0..=4 => Self::None,
            5..=9 => Self::Mild,
            10..=19 => Self::Moderate,
            _ => Self::Severe,
        }
    }

    /// Ordinal code for the classifier, 0 for None through 3 for Severe
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }
}

impl fmt::Display for DayBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Mild => write!(f, "Mild"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Severe => write!(f, "Severe"),
        }
    }
}
