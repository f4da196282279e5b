// crates/clusterviz-core/src/event/hit.rs

use std::collections::BTreeSet;

/// One reconstructed detector hit. Positions are in cm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub energy: f32,
    pub time: f32,
    /// Truth cluster index; negative values mark noise.
    pub cluster: i32,
    pub pdgid: i32,
    pub status: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    pub hits: Vec<Hit>,
}

impl Event {
    pub fn new(hits: Vec<Hit>) -> Self {
        Self { hits }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hit> {
        self.hits.iter()
    }

    /// Distinct cluster ids, ascending.
    pub fn clusters(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.hits.iter().map(|h| h.cluster).collect();
        set.into_iter().collect()
    }

    pub fn cluster_hits(&self, cluster: i32) -> impl Iterator<Item = &Hit> {
        self.hits.iter().filter(move |h| h.cluster == cluster)
    }

    /// Sub-event of the hits matching `keep`, original order preserved.
    pub fn select(&self, mut keep: impl FnMut(&Hit) -> bool) -> Event {
        Event {
            hits: self.hits.iter().filter(|h| keep(h)).copied().collect(),
        }
    }

    pub fn total_energy(&self) -> f64 {
        self.hits.iter().map(|h| h.energy as f64).sum()
    }
}

impl<'a> IntoIterator for &'a Event {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

impl FromIterator<Hit> for Event {
    fn from_iter<I: IntoIterator<Item = Hit>>(iter: I) -> Self {
        Event {
            hits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(cluster: i32, energy: f32) -> Hit {
        Hit {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            energy,
            time: 0.0,
            cluster,
            pdgid: 22,
            status: 0,
        }
    }

    #[test]
    fn clusters_are_sorted_and_unique() {
        let e: Event = [hit(3, 1.0), hit(-1, 1.0), hit(3, 1.0), hit(0, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(e.clusters(), vec![-1, 0, 3]);
        assert_eq!(e.cluster_hits(3).count(), 2);
    }

    #[test]
    fn select_keeps_order() {
        let e = Event::new(vec![hit(1, 0.5), hit(2, 2.0), hit(1, 1.5)]);
        let sub = e.select(|h| h.cluster == 1);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.hits[0].energy, 0.5);
        assert_eq!(sub.hits[1].energy, 1.5);
        assert!((e.total_energy() - 4.0).abs() < 1e-9);
    }
}
