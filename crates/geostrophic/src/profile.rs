/// Geostrophic wind speed keyed by altitude, in grid order
///
/// Altitudes are the exact grid values the speeds were computed at, so
/// `get` looks them up by equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindProfile {
    samples: Vec<(f64, f64)>,
}

impl WindProfile {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, altitude: f64, speed: f64) {
        self.samples.push((altitude, speed));
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(altitude, wind speed)` pairs in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.samples.iter().copied()
    }

    pub fn altitudes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|&(y, _)| y)
    }

    pub fn speeds(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|&(_, u)| u)
    }

    pub fn get(&self, altitude: f64) -> Option<f64> {
        self.samples
            .iter()
            .find(|&&(y, _)| y == altitude)
            .map(|&(_, u)| u)
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.samples.last().copied()
    }

    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.samples
    }
}

impl IntoIterator for WindProfile {
    type Item = (f64, f64);
    type IntoIter = std::vec::IntoIter<(f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a WindProfile {
    type Item = &'a (f64, f64);
    type IntoIter = std::slice::Iter<'a, (f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> WindProfile {
        let mut profile = WindProfile::with_capacity(3);
        profile.insert(0.0, 1.5);
        profile.insert(10.0, -2.0);
        profile.insert(20.0, 0.25);
        profile
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let profile = sample_profile();

        assert_eq!(profile.altitudes().collect::<Vec<_>>(), vec![0.0, 10.0, 20.0]);
        assert_eq!(profile.speeds().collect::<Vec<_>>(), vec![1.5, -2.0, 0.25]);
        assert_eq!(profile.first(), Some((0.0, 1.5)));
        assert_eq!(profile.last(), Some((20.0, 0.25)));
    }

    #[test]
    fn test_lookup_by_altitude() {
        let profile = sample_profile();

        assert_eq!(profile.get(10.0), Some(-2.0));
        assert_eq!(profile.get(15.0), None);
    }

    #[test]
    fn test_into_iter_yields_pairs() {
        let profile = sample_profile();
        let by_ref: Vec<(f64, f64)> = (&profile).into_iter().copied().collect();
        let owned: Vec<(f64, f64)> = profile.into_iter().collect();

        assert_eq!(by_ref, owned);
        assert_eq!(owned.len(), 3);
    }
}
