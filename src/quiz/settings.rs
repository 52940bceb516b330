use std::num::NonZeroUsize;

const DEFAULT_QUICK_COUNT: usize = 30;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Full,
    Quick,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub mode: Mode,
    pub quick_count: NonZeroUsize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mode: Mode::Full,
            quick_count: NonZeroUsize::new(DEFAULT_QUICK_COUNT).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
