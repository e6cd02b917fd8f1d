//! Per-pass header offset measurements.

use crate::domain::SectionId;
use std::collections::BTreeMap;

/// Vertical offset of each section header's top edge from the viewport top, in layout
/// units. Negative values are above the viewport.
///
/// Reports for the same id within one pass overwrite each other, last write wins.
/// Iteration is in [`SectionId`] order, which makes tie-breaking deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderOffsetMap {
    offsets: BTreeMap<SectionId, f32>,
}

impl HeaderOffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the offset for one header, replacing any earlier report.
    pub fn report(&mut self, id: SectionId, offset: f32) {
        self.offsets.insert(id, offset);
    }

    /// Merges another pass's reports into this one. `other` wins on conflicts.
    pub fn merge(&mut self, other: HeaderOffsetMap) {
        self.offsets.extend(other.offsets);
    }

    pub fn get(&self, id: SectionId) -> Option<f32> {
        self.offsets.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, f32)> + '_ {
        self.offsets.iter().map(|(id, offset)| (*id, *offset))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}

impl FromIterator<(SectionId, f32)> for HeaderOffsetMap {
    fn from_iter<I: IntoIterator<Item = (SectionId, f32)>>(iter: I) -> Self {
        let mut map = HeaderOffsetMap::new();
        for (id, offset) in iter {
            map.report(id, offset);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_report_wins() {
        let map: HeaderOffsetMap = [
            (SectionId::Lunch, 10.0),
            (SectionId::Dinner, 80.0),
            (SectionId::Lunch, -4.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(SectionId::Lunch), Some(-4.0));
    }

    #[test]
    fn test_merge_prefers_newer_pass() {
        let mut first: HeaderOffsetMap =
            [(SectionId::Lunch, 0.0), (SectionId::Dinner, 300.0)].into_iter().collect();
        let second: HeaderOffsetMap = [(SectionId::Dinner, 250.0)].into_iter().collect();

        first.merge(second);
        assert_eq!(first.get(SectionId::Lunch), Some(0.0));
        assert_eq!(first.get(SectionId::Dinner), Some(250.0));
    }
}
