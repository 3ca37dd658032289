//! Patient feature vector and form validation.

use std::fmt;

use crate::InvalidInputError;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 5;

/// One of the five submitted form fields, in feature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Sex,
    ChestPain,
    RestingBp,
    Cholesterol,
}

impl Field {
    pub const ALL: [Field; FEATURE_COUNT] = [
        Field::Age,
        Field::Sex,
        Field::ChestPain,
        Field::RestingBp,
        Field::Cholesterol,
    ];

    /// Form field name as posted by the browser.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::ChestPain => "cp",
            Field::RestingBp => "trestbps",
            Field::Cholesterol => "chol",
        }
    }

    fn accepts(&self, value: i64) -> bool {
        match self {
            Field::Age | Field::RestingBp | Field::Cholesterol => value > 0,
            Field::Sex => matches!(value, 0 | 1),
            Field::ChestPain => (0..=3).contains(&value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Form fields exactly as received. `None` means the field was not posted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFeatures<'a> {
    pub age: Option<&'a str>,
    pub sex: Option<&'a str>,
    pub cp: Option<&'a str>,
    pub trestbps: Option<&'a str>,
    pub chol: Option<&'a str>,
}

impl<'a> RawFeatures<'a> {
    fn get(&self, field: Field) -> Option<&'a str> {
        match field {
            Field::Age => self.age,
            Field::Sex => self.sex,
            Field::ChestPain => self.cp,
            Field::RestingBp => self.trestbps,
            Field::Cholesterol => self.chol,
        }
    }
}

/// Validated classifier input: (age, sex, chest_pain_type, resting_bp, cholesterol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector([i64; FEATURE_COUNT]);

impl FeatureVector {
    /// Builds a vector from already-parsed values, checking every range.
    pub fn new(
        age: i64,
        sex: i64,
        chest_pain_type: i64,
        resting_bp: i64,
        cholesterol: i64,
    ) -> Result<Self, InvalidInputError> {
        let values = [age, sex, chest_pain_type, resting_bp, cholesterol];
        for (field, value) in Field::ALL.into_iter().zip(values) {
            if !field.accepts(value) {
                return Err(InvalidInputError::OutOfRange { field, value });
            }
        }
        Ok(Self(values))
    }

    pub fn age(&self) -> i64 {
        self.0[0]
    }

    pub fn sex(&self) -> i64 {
        self.0[1]
    }

    pub fn chest_pain_type(&self) -> i64 {
        self.0[2]
    }

    pub fn resting_bp(&self) -> i64 {
        self.0[3]
    }

    pub fn cholesterol(&self) -> i64 {
        self.0[4]
    }

    pub fn as_array(&self) -> [i64; FEATURE_COUNT] {
        self.0
    }

    /// Features widened to floats, the form most models compute in.
    pub fn as_f64(&self) -> [f64; FEATURE_COUNT] {
        self.0.map(|v| v as f64)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Parses and range-checks the five form fields.
///
/// Fields are checked in [`Field::ALL`] order and the first failure is returned.
pub fn validate(raw: &RawFeatures<'_>) -> Result<FeatureVector, InvalidInputError> {
    let mut values = [0i64; FEATURE_COUNT];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        *slot = parse_field(field, raw.get(field))?;
    }
    let [age, sex, cp, trestbps, chol] = values;
    FeatureVector::new(age, sex, cp, trestbps, chol)
}

fn parse_field(field: Field, raw: Option<&str>) -> Result<i64, InvalidInputError> {
    let raw = raw.ok_or(InvalidInputError::Missing(field))?;
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| InvalidInputError::NotAnInteger {
            field,
            value: raw.to_string(),
        })?;
    if !field.accepts(value) {
        return Err(InvalidInputError::OutOfRange { field, value });
    }
    Ok(value)
}
