use rand::Rng;

/// Shuffle `items` in place with the Fisher–Yates algorithm.
///
/// The permutation is drawn from `rng` only, so a seeded generator gives a
/// reproducible order.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Owned variant of [`shuffle`].
#[must_use]
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items
}
