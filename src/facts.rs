//! The animal facts demo: a fixed animal-to-fact table.

/// Animal name/fact pairs. Lookup is by exact (case-insensitive) name.
pub static ANIMAL_FACTS: &[(&str, &str)] = &[
    (
        "koala",
        "Koala fingerprints are so close to humans' that they could taint crime scenes.",
    ),
    ("parrot", "Parrots will selflessly help each other out."),
    (
        "mantis shrimp",
        "The mantis shrimp has the world's fastest punch.",
    ),
    ("lion", "Female lions do 90 percent of the hunting."),
    ("narwhal", "Narwhal tusks are really an \"inside out\" tooth."),
];

/// All animal names, in table order.
pub fn animals() -> impl Iterator<Item = &'static str> {
    ANIMAL_FACTS.iter().map(|(animal, _)| *animal)
}

/// Look up the fact for an animal, if it is in the table.
pub fn fact_for(animal: &str) -> Option<&'static str> {
    ANIMAL_FACTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(animal))
        .map(|(_, fact)| *fact)
}
