use cardio_core::RawFeatures;

/// Body of `POST /predict`. Fields stay strings until validation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub age: Option<String>,
    pub sex: Option<String>,
    pub cp: Option<String>,
    pub trestbps: Option<String>,
    pub chol: Option<String>,
}

impl PatientForm {
    /// Builds the form from decoded key/value pairs. A repeated field keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "age" => &mut form.age,
                "sex" => &mut form.sex,
                "cp" => &mut form.cp,
                "trestbps" => &mut form.trestbps,
                "chol" => &mut form.chol,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    pub fn raw(&self) -> RawFeatures<'_> {
        RawFeatures {
            age: self.age.as_deref(),
            sex: self.sex.as_deref(),
            cp: self.cp.as_deref(),
            trestbps: self.trestbps.as_deref(),
            chol: self.chol.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_value_wins() {
        let form = PatientForm::from_pairs(pairs(&[("age", "63"), ("age", "64"), ("chol", "233")]));
        assert_eq!(form.age.as_deref(), Some("63"));
        assert_eq!(form.chol.as_deref(), Some("233"));
        assert_eq!(form.sex, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let form = PatientForm::from_pairs(pairs(&[("submit", "Predict"), ("cp", "2")]));
        assert_eq!(
            form,
            PatientForm { cp: Some("2".into()), ..Default::default() }
        );
    }
}
