//! Frequency tables used to assemble full names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses `M`/`F` (also `male`/`female`, `м`/`ж`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "m" | "male" | "м" | "муж" => Some(Self::Male),
            "f" | "female" | "ж" | "жен" => Some(Self::Female),
            _ => None,
        }
    }
}

/// One name component with its relative frequency.
///
/// An entry without a gender is usable for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameEntry {
    pub value: String,
    pub weight: f64,
    pub gender: Option<Gender>,
}

impl NameEntry {
    pub fn new(value: impl Into<String>, weight: f64, gender: Option<Gender>) -> Self {
        Self {
            value: value.into(),
            weight,
            gender,
        }
    }

    pub fn matches(&self, gender: Gender) -> bool {
        self.gender.is_none_or(|g| g == gender)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameTables {
    pub surnames: Vec<NameEntry>,
    pub first_names: Vec<NameEntry>,
    pub patronymics: Vec<NameEntry>,
}

impl NameTables {
    /// A small Russian table used when no frequency files are supplied.
    pub fn builtin() -> Self {
        use Gender::{Female, Male};

        let table = |rows: &[(&str, f64, Gender)]| {
            rows.iter()
                .map(|(value, weight, gender)| NameEntry::new(*value, *weight, Some(*gender)))
                .collect::<Vec<_>>()
        };

        Self {
            surnames: table(&[
                ("Иванов", 9.0, Male),
                ("Смирнов", 8.0, Male),
                ("Кузнецов", 7.0, Male),
                ("Попов", 6.0, Male),
                ("Васильев", 5.0, Male),
                ("Петров", 5.0, Male),
                ("Соколов", 4.0, Male),
                ("Михайлов", 4.0, Male),
                ("Иванова", 9.0, Female),
                ("Смирнова", 8.0, Female),
                ("Кузнецова", 7.0, Female),
                ("Попова", 6.0, Female),
                ("Васильева", 5.0, Female),
                ("Петрова", 5.0, Female),
                ("Соколова", 4.0, Female),
                ("Михайлова", 4.0, Female),
            ]),
            first_names: table(&[
                ("Александр", 9.0, Male),
                ("Сергей", 8.0, Male),
                ("Дмитрий", 7.0, Male),
                ("Андрей", 6.0, Male),
                ("Алексей", 6.0, Male),
                ("Михаил", 5.0, Male),
                ("Елена", 9.0, Female),
                ("Ольга", 8.0, Female),
                ("Наталья", 7.0, Female),
                ("Анна", 7.0, Female),
                ("Мария", 6.0, Female),
                ("Татьяна", 5.0, Female),
            ]),
            patronymics: table(&[
                ("Александрович", 9.0, Male),
                ("Сергеевич", 8.0, Male),
                ("Владимирович", 8.0, Male),
                ("Николаевич", 6.0, Male),
                ("Викторович", 5.0, Male),
                ("Александровна", 9.0, Female),
                ("Сергеевна", 8.0, Female),
                ("Владимировна", 8.0, Female),
                ("Николаевна", 6.0, Female),
                ("Викторовна", 5.0, Female),
            ]),
        }
    }
}
