//! A map from disjoint ranges of code points to categories.
//!
//! The classification table uses this for code points outside its dense array and for the
//!     save records of open groups, so that the cost of an assignment depends on the number
//!     of ranges involved and not on their width.
use crate::catcode::Category;
use crate::table::Interval;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IntervalMap {
    // Keyed by the low end of each range.
    map: BTreeMap<u32, (u32, Category)>,
}

impl IntervalMap {
    pub(crate) fn get(&self, c: u32) -> Option<Category> {
        let (_, (hi, category)) = self.map.range(..=c).next_back()?;
        if *hi >= c {
            Some(*category)
        } else {
            None
        }
    }

    /// Maps every code point in `lo..=hi` to the category, replacing what was there.
    ///
    /// Adjacent ranges with the same category are merged.
    pub(crate) fn insert(&mut self, lo: u32, hi: u32, category: Category) {
        if lo > hi {
            return;
        }
        self.remove(lo, hi);
        let (mut lo, mut hi) = (lo, hi);
        if let Some(before) = lo.checked_sub(1) {
            let previous = self
                .map
                .range(..=before)
                .next_back()
                .map(|(l, (h, c))| (*l, *h, *c));
            if let Some((l, h, c)) = previous {
                if h == before && c == category {
                    self.map.remove(&l);
                    lo = l;
                }
            }
        }
        if let Some(after) = hi.checked_add(1) {
            if let Some(&(h, c)) = self.map.get(&after) {
                if c == category {
                    self.map.remove(&after);
                    hi = h;
                }
            }
        }
        self.map.insert(lo, (hi, category));
    }

    /// Unmaps every code point in `lo..=hi`.
    pub(crate) fn remove(&mut self, lo: u32, hi: u32) {
        if lo > hi {
            return;
        }
        let overlapping: Vec<(u32, u32, Category)> = self
            .map
            .range(..=hi)
            .rev()
            .take_while(|(_, (h, _))| *h >= lo)
            .map(|(l, (h, c))| (*l, *h, *c))
            .collect();
        for (l, h, category) in overlapping {
            self.map.remove(&l);
            if l < lo {
                self.map.insert(l, (lo - 1, category));
            }
            if h > hi {
                self.map.insert(hi + 1, (h, category));
            }
        }
    }

    /// Returns the mapped parts of `lo..=hi`, in order.
    pub(crate) fn segments(&self, lo: u32, hi: u32) -> Vec<Interval> {
        if lo > hi {
            return vec![];
        }
        let mut segments: Vec<Interval> = self
            .map
            .range(..=hi)
            .rev()
            .take_while(|(_, (h, _))| *h >= lo)
            .map(|(l, (h, c))| Interval::new((*l).max(lo), (*h).min(hi), *c))
            .collect();
        segments.reverse();
        segments
    }

    /// Returns the unmapped parts of `lo..=hi`, in order.
    pub(crate) fn gaps(&self, lo: u32, hi: u32) -> Vec<(u32, u32)> {
        let mut gaps = vec![];
        let mut next = Some(lo);
        for segment in self.segments(lo, hi) {
            if let Some(n) = next {
                if n < segment.lo {
                    gaps.push((n, segment.lo - 1));
                }
            }
            next = segment.hi.checked_add(1);
        }
        if let Some(n) = next {
            if n <= hi {
                gaps.push((n, hi));
            }
        }
        gaps
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.map
            .iter()
            .map(|(lo, (hi, category))| Interval::new(*lo, *hi, *category))
    }
}
