use rand::Rng;

use crate::quiz::settings::Mode;

/// Returns a uniformly shuffled copy of `items` (Fisher-Yates).
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Orders the whole pool randomly, or in quick mode samples `quick_count`
/// entries without replacement. A pool smaller than `quick_count` is returned
/// whole.
pub fn select_set<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    mode: Mode,
    quick_count: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut selection = shuffle(items, rng);
    if mode == Mode::Quick {
        selection.truncate(quick_count);
    }
    selection
}
