use serde::{Deserialize, Serialize};

/// A synthetic person: full name, national passport and SNILS number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub full_name: String,
    /// `SSSS NNNNNN`: region code + issue year, then a 6-digit sequence number.
    pub passport: String,
    /// `NNNNNNNNN CC`: nine main digits and two check digits.
    pub snils: String,
}

impl Identity {
    pub fn new(
        full_name: impl Into<String>,
        passport: impl Into<String>,
        snils: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            passport: passport.into(),
            snils: snils.into(),
        }
    }
}
