use serde::{Deserialize, Serialize};

/// Column names of the output file, in output order.
pub const VISIT_RECORD_HEADER: [&str; 10] = [
    "ФИО",
    "Паспорт",
    "СНИЛС",
    "Симптомы",
    "Врач",
    "Дата_посещения",
    "Анализы",
    "Дата_анализов",
    "Стоимость",
    "Карта_оплаты",
];

const LIST_SEPARATOR: &str = ", ";

/// One synthesised medical visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub full_name: String,
    pub passport: String,
    pub snils: String,
    pub symptoms: Vec<String>,
    pub specialist: String,
    pub visit_at: String,
    pub analyses: Vec<String>,
    pub analysis_at: String,
    /// Rounded to cents; written out truncated to whole units.
    pub cost: f64,
    pub card_number: String,
}

impl VisitRecord {
    /// Cost as written to the output: fractional part dropped.
    pub fn cost_units(&self) -> i64 {
        self.cost.trunc() as i64
    }

    /// Fields in [`VISIT_RECORD_HEADER`] order.
    pub fn to_row(&self) -> [String; 10] {
        [
            self.full_name.clone(),
            self.passport.clone(),
            self.snils.clone(),
            self.symptoms.join(LIST_SEPARATOR),
            self.specialist.clone(),
            self.visit_at.clone(),
            self.analyses.join(LIST_SEPARATOR),
            self.analysis_at.clone(),
            self.cost_units().to_string(),
            self.card_number.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cost: f64) -> VisitRecord {
        VisitRecord {
            full_name: "Jane Doe".to_string(),
            passport: "7712 345678".to_string(),
            snils: "123456789 00".to_string(),
            symptoms: vec!["chest pain".to_string(), "fatigue".to_string()],
            specialist: "Cardiologist".to_string(),
            visit_at: "2024-03-01T10:15".to_string(),
            analyses: vec!["ECG".to_string(), "Blood panel".to_string()],
            analysis_at: "2024-02-27T09:40".to_string(),
            cost,
            card_number: "4306 4312 1234 5678".to_string(),
        }
    }

    #[test]
    fn row_follows_header_order() {
        let row = record(2300.0).to_row();
        assert_eq!(row.len(), VISIT_RECORD_HEADER.len());
        assert_eq!(row[0], "Jane Doe");
        assert_eq!(row[3], "chest pain, fatigue");
        assert_eq!(row[4], "Cardiologist");
        assert_eq!(row[6], "ECG, Blood panel");
        assert_eq!(row[8], "2300");
        assert_eq!(row[9], "4306 4312 1234 5678");
    }

    #[test]
    fn cost_is_truncated_not_rounded() {
        assert_eq!(record(1234.99).to_row()[8], "1234");
        assert_eq!(record(0.5).cost_units(), 0);
    }
}
