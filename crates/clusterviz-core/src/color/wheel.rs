// crates/clusterviz-core/src/color/wheel.rs

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::color::key::ColorKey;
use crate::color::palette::DEFAULT_PALETTE;
use crate::error::{Result, VizError};

pub const DEFAULT_SEED: u64 = 44;

/// Hands out a stable color per key.
///
/// New keys take colors from the end of the pool; once the pool runs dry it is
/// refilled from the (shuffled) palette snapshot, so colors start repeating
/// only after every palette entry has been handed out once.
#[derive(Clone, Debug)]
pub struct ColorWheel<C = String> {
    original: Vec<C>,
    pool: Vec<C>,
    assigned: Vec<(ColorKey, C)>,
    index: HashMap<ColorKey, usize>,
}

#[derive(Clone, Debug)]
pub struct ColorWheelBuilder<C = String> {
    palette: Option<Vec<C>>,
    seed: u64,
    shuffle: bool,
    assignments: Vec<(ColorKey, C)>,
}

impl<C> Default for ColorWheelBuilder<C> {
    fn default() -> Self {
        Self {
            palette: None,
            seed: DEFAULT_SEED,
            shuffle: true,
            assignments: Vec::new(),
        }
    }
}

impl<C: Clone + PartialEq> ColorWheelBuilder<C> {
    pub fn palette(mut self, palette: impl IntoIterator<Item = C>) -> Self {
        self.palette = Some(palette.into_iter().collect());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Pre-seeded assignment, applied at build time in call order.
    pub fn assign(mut self, key: impl Into<ColorKey>, color: C) -> Self {
        self.assignments.push((key.into(), color));
        self
    }

    pub fn assignments<K, I>(mut self, pairs: I) -> Self
    where
        K: Into<ColorKey>,
        I: IntoIterator<Item = (K, C)>,
    {
        self.assignments
            .extend(pairs.into_iter().map(|(k, c)| (k.into(), c)));
        self
    }

    /// Build with an explicit fallback palette for when none was given.
    pub fn build_or(self, fallback: impl FnOnce() -> Vec<C>) -> ColorWheel<C> {
        let mut palette = self.palette.unwrap_or_else(fallback);
        if self.shuffle {
            let mut rng = StdRng::seed_from_u64(self.seed);
            palette.shuffle(&mut rng);
        }

        let mut wheel = ColorWheel {
            pool: palette.clone(),
            original: palette,
            assigned: Vec::new(),
            index: HashMap::new(),
        };
        for (k, c) in self.assignments {
            wheel.assign(k, c);
        }
        wheel
    }
}

impl<C: Clone + PartialEq + From<&'static str>> ColorWheelBuilder<C> {
    /// Build, falling back to [`DEFAULT_PALETTE`] when no palette was given.
    pub fn build(self) -> ColorWheel<C> {
        self.build_or(|| DEFAULT_PALETTE.iter().map(|&c| C::from(c)).collect())
    }
}

impl<C: Clone + PartialEq> ColorWheel<C> {
    pub fn builder() -> ColorWheelBuilder<C> {
        ColorWheelBuilder::default()
    }

    /// Shuffled with [`DEFAULT_SEED`].
    pub fn new(palette: impl IntoIterator<Item = C>) -> Self {
        Self::builder().palette(palette).build_or(Vec::new)
    }

    /// Palette used in the order given.
    pub fn unshuffled(palette: impl IntoIterator<Item = C>) -> Self {
        Self::builder()
            .palette(palette)
            .shuffle(false)
            .build_or(Vec::new)
    }

    /// Color for `key`, assigning the next pool color if the key is new.
    pub fn lookup_or_assign(&mut self, key: impl Into<ColorKey>) -> Result<C> {
        let key = key.into();
        if let Some(c) = self.get(&key) {
            return Ok(c.clone());
        }

        let color = self.pool.pop().ok_or(VizError::ExhaustedPalette)?;
        log::trace!("color wheel: new key {key} ({} left in pool)", self.pool.len());
        self.insert(key, color.clone());

        if self.pool.is_empty() {
            self.refill();
        }
        Ok(color)
    }

    /// Pin `key` to `color`, replacing any earlier assignment. Returns the
    /// replaced color. One occurrence of `color` is withdrawn from the pool;
    /// withdrawing the last one wraps the pool like a lookup would.
    pub fn assign(&mut self, key: impl Into<ColorKey>, color: C) -> Option<C> {
        let key = key.into();
        if let Some(pos) = self.pool.iter().position(|c| *c == color) {
            self.pool.remove(pos);
            if self.pool.is_empty() {
                self.refill();
            }
        }
        let prev = self.insert(key.clone(), color);
        if prev.is_some() {
            log::debug!("color wheel: override for key {key}");
        }
        prev
    }

    /// Give every key the same color. Without an explicit color the first key
    /// picks one the usual way and the rest follow it.
    pub fn assign_many<K, I>(&mut self, keys: I, color: Option<C>) -> Result<()>
    where
        K: Into<ColorKey>,
        I: IntoIterator<Item = K>,
    {
        let mut keys = keys.into_iter();
        let Some(first) = keys.next() else {
            return Ok(());
        };

        let color = match color {
            Some(c) => {
                self.assign(first, c.clone());
                c
            }
            None => self.lookup_or_assign(first)?,
        };
        for k in keys {
            self.assign(k, color.clone());
        }
        Ok(())
    }

    pub fn contains(&self, key: impl Into<ColorKey>) -> bool {
        self.index.contains_key(&key.into())
    }

    pub fn get(&self, key: &ColorKey) -> Option<&C> {
        self.index.get(key).map(|&i| &self.assigned[i].1)
    }

    /// Number of assigned keys.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// The palette snapshot in effective (post-shuffle) order.
    pub fn palette(&self) -> &[C] {
        &self.original
    }

    /// Colors left before the next wraparound.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Assignments in first-assigned order.
    pub fn assignments(&self) -> impl Iterator<Item = (&ColorKey, &C)> {
        self.assigned.iter().map(|(k, c)| (k, c))
    }

    fn insert(&mut self, key: ColorKey, color: C) -> Option<C> {
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.assigned[i].1, color)),
            None => {
                self.index.insert(key.clone(), self.assigned.len());
                self.assigned.push((key, color));
                None
            }
        }
    }

    fn refill(&mut self) {
        if !self.original.is_empty() {
            log::debug!("color wheel: palette wrapped ({} colors)", self.original.len());
        }
        self.pool = self.original.clone();
    }
}

impl Default for ColorWheel<String> {
    fn default() -> Self {
        ColorWheelBuilder::default().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> ColorWheel<&'static str> {
        ColorWheel::unshuffled(["red", "green", "blue"])
    }

    #[test]
    fn pops_from_the_end_and_wraps() {
        let mut w = rgb();
        assert_eq!(w.lookup_or_assign("a").unwrap(), "blue");
        assert_eq!(w.lookup_or_assign("b").unwrap(), "green");
        assert_eq!(w.lookup_or_assign("b").unwrap(), "green");
        assert_eq!(w.remaining(), 1);
        assert_eq!(w.lookup_or_assign("c").unwrap(), "red");
        // refilled the moment the pool emptied
        assert_eq!(w.remaining(), 3);
        assert_eq!(w.lookup_or_assign("d").unwrap(), "blue");
    }

    #[test]
    fn assign_withdraws_one_pool_occurrence() {
        let mut w = ColorWheel::unshuffled(["red", "blue", "green", "blue"]);
        w.assign(1, "blue");
        assert_eq!(w.remaining(), 3);
        assert_eq!(w.lookup_or_assign(2).unwrap(), "blue");
        assert_eq!(w.lookup_or_assign(3).unwrap(), "green");
    }

    #[test]
    fn assign_of_foreign_color_leaves_pool_alone() {
        let mut w = rgb();
        assert_eq!(w.assign("x", "black"), None);
        assert_eq!(w.remaining(), 3);
        assert_eq!(w.assign("x", "white"), Some("black"));
        assert_eq!(w.get(&ColorKey::from("x")), Some(&"white"));
    }

    #[test]
    fn pool_drained_by_assign_wraps_immediately() {
        let mut w = rgb();
        w.assign("a", "red");
        w.assign("b", "green");
        w.assign("c", "blue");
        assert_eq!(w.remaining(), 3);

        // reserved after the wrap: must not go to the next new key
        w.assign("d", "blue");
        assert_eq!(w.remaining(), 2);
        assert_eq!(w.lookup_or_assign("e").unwrap(), "green");
        assert_eq!(w.lookup_or_assign("d").unwrap(), "blue");
    }

    #[test]
    fn empty_palette_is_exhausted() {
        let mut w: ColorWheel<&str> = ColorWheel::unshuffled([]);
        assert!(matches!(w.lookup_or_assign(0), Err(VizError::ExhaustedPalette)));
        assert!(!w.contains(0));
        // explicit paths still work
        w.assign(0, "red");
        assert_eq!(w.lookup_or_assign("0").unwrap(), "red");
    }

    #[test]
    fn builder_applies_assignments_in_order() {
        let w = ColorWheel::builder()
            .palette(["red", "green", "blue"])
            .shuffle(false)
            .assignments([(1, "green"), (2, "red")])
            .assign("1", "blue")
            .build_or(Vec::new);
        assert_eq!(w.get(&ColorKey::Int(1)), Some(&"blue"));
        assert_eq!(w.len(), 2);
        let keys: Vec<_> = w.assignments().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![ColorKey::Int(1), ColorKey::Int(2)]);
        // green, red, then blue: the last withdrawal wrapped the pool
        assert_eq!(w.remaining(), 3);
    }

    #[test]
    fn default_wheel_uses_builtin_palette() {
        let w: ColorWheel = ColorWheel::default();
        assert_eq!(w.palette().len(), DEFAULT_PALETTE.len());
        assert_ne!(
            w.palette().iter().map(String::as_str).collect::<Vec<_>>(),
            DEFAULT_PALETTE.to_vec()
        );
    }
}
