use medsynth_model::{Gender, NameEntry, NameTables};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;

/// Source of locale-appropriate full names.
pub trait NameGenerator {
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

fn pick<'a, R: Rng + ?Sized>(
    entries: &'a [NameEntry],
    gender: Gender,
    rng: &mut R,
) -> Option<&'a str> {
    let candidates: Vec<&NameEntry> = entries.iter().filter(|e| e.matches(gender)).collect();
    let chosen = match WeightedIndex::new(candidates.iter().map(|e| e.weight.max(0.0))) {
        Ok(index) => candidates.get(index.sample(rng)).copied(),
        // All-zero or unusable weights: fall back to a uniform pick.
        Err(_) => candidates.choose(rng).copied(),
    };
    chosen.map(|e| e.value.as_str())
}

impl NameGenerator for NameTables {
    /// `Surname FirstName Patronymic`, all agreeing in gender.
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let gender = if rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        [&self.surnames, &self.first_names, &self.patronymics]
            .into_iter()
            .filter_map(|table| pick(table, gender, rng))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
