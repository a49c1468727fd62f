//! The compliments demo: a fixed word list and random sampling.

use rand::seq::SliceRandom;

/// The full compliment vocabulary, in alphabetical order.
pub static COMPLIMENTS: &[&str] = &[
    "awesome",
    "beatific",
    "blithesome",
    "conscientious",
    "coruscant",
    "erudite",
    "exquisite",
    "fabulous",
    "fantastic",
    "gorgeous",
    "indubitable",
    "ineffable",
    "magnificent",
    "outstanding",
    "propitious",
    "remarkable",
    "spectacular",
    "splendiferous",
    "stupendous",
    "super",
    "upbeat",
    "wondrous",
    "zoetic",
];

/// Pick `count` distinct compliments at random, capped at the list length.
pub fn sample(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    COMPLIMENTS
        .choose_multiple(&mut rng, count.min(COMPLIMENTS.len()))
        .copied()
        .collect()
}
