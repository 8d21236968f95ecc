//! The classification table: a category code map with TeX grouping semantics.
//!
//! The table maps every Unicode code point to a [Category].
//! Code points below 256 live in a dense array; the rest live in a map of disjoint ranges
//!     and are [Category::Other] unless explicitly assigned.
//! Code points above [MAX_CODE_POINT] are not Unicode scalar values:
//!     they are always [Category::Other] and assignments to them are ignored.
//!
//! Groups are opened with [push](CatCodeTable::push) and closed with
//!     [pop](CatCodeTable::pop).
//! The semantics are TeX's:
//!     local assignments made while a group is open are rolled back when the group ends,
//!     while global assignments survive the end of every enclosing group.
//! ```
//! # use texscan::catcode::Category;
//! # use texscan::table::{CatCodeTable, Scope};
//! let mut table = CatCodeTable::default();
//! table.push();
//! table.assign('@' as u32, '@' as u32, Category::Letter, Scope::Local);
//! table.assign('|' as u32, '|' as u32, Category::VerbatimDelimiter, Scope::Global);
//! assert_eq!(table.pop(), Ok(()));
//! assert_eq!(table.classify('@' as u32), Category::Other);
//! assert_eq!(table.classify('|' as u32), Category::VerbatimDelimiter);
//! ```
//!
//! Internally each open group owns a save map from ranges of code points to the categories
//!     they had when they were first changed inside the group.
//! This is the same save stack construction used for TeX's `eqtb`:
//!     ending a group replays the save map, and a global assignment
//!     erases the code points from every save map so that nothing can revert them.
use crate::catcode::Category;
use crate::intervalmap::IntervalMap;

/// The largest code point the table stores a category for.
pub const MAX_CODE_POINT: u32 = char::MAX as u32;

/// Scope of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    /// Assignments in the local scope are rolled back at the end of the current group.
    #[default]
    Local,
    /// Assignments in the global scope erase any other assignments for the same code point, and
    /// persist beyond the end of the current groups.
    Global,
}

/// An inclusive range of code points, all assigned the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub lo: u32,
    pub hi: u32,
    pub category: Category,
}

impl Interval {
    pub const fn new(lo: u32, hi: u32, category: Category) -> Interval {
        Interval { lo, hi, category }
    }

    /// Interval covering a single character.
    pub const fn single(c: char, category: Category) -> Interval {
        Interval::new(c as u32, c as u32, category)
    }

    /// Interval covering the characters `lo..=hi`.
    pub const fn range(lo: char, hi: char, category: Category) -> Interval {
        Interval::new(lo as u32, hi as u32, category)
    }
}

/// Error returned if there is no group to end when [CatCodeTable::pop] is invoked.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("no scope to end: the classification table has no open groups")]
pub struct ScopeUnderflow;

const DENSE_LEN: usize = 256;
const DENSE_MAX: u32 = DENSE_LEN as u32 - 1;

/// A category code map with TeX grouping semantics.
///
/// See the module docs for more information.
#[derive(Debug, Clone)]
pub struct CatCodeTable {
    low: [Category; DENSE_LEN],
    // Code points above the dense array. Unmapped code points are Other.
    high: IntervalMap,
    // The groups stack does not contain the base group as no cleanup there is needed.
    groups: Vec<IntervalMap>,
}

impl CatCodeTable {
    /// Returns a table in which every code point is [Category::Other].
    pub fn new() -> CatCodeTable {
        CatCodeTable {
            low: [Category::Other; DENSE_LEN],
            high: IntervalMap::default(),
            groups: Vec::new(),
        }
    }

    /// Returns a table initialized with [Category::LATEX_DEFAULTS].
    pub fn new_with_defaults() -> CatCodeTable {
        let mut table = CatCodeTable::new();
        table.low[..Category::LATEX_DEFAULTS.len()].copy_from_slice(&Category::LATEX_DEFAULTS);
        table
    }

    /// Returns the category of a code point.
    #[inline]
    pub fn classify(&self, c: u32) -> Category {
        match self.low.get(c as usize) {
            Some(category) => *category,
            None => self.high.get(c).unwrap_or_default(),
        }
    }

    /// Returns the category of a character.
    #[inline]
    pub fn classify_char(&self, c: char) -> Category {
        self.classify(c as u32)
    }

    fn set(&mut self, lo: u32, hi: u32, category: Category) {
        for c in lo..=hi.min(DENSE_MAX) {
            self.low[c as usize] = category;
        }
        let lo = lo.max(DENSE_MAX + 1);
        if lo <= hi {
            if category == Category::Other {
                self.high.remove(lo, hi);
            } else {
                self.high.insert(lo, hi, category);
            }
        }
    }

    /// Returns the current categories of `lo..=hi` as maximal intervals, in order.
    fn segments(&self, lo: u32, hi: u32) -> Vec<Interval> {
        let mut segments = Vec::new();
        for c in lo..=hi.min(DENSE_MAX) {
            push_coalesced(&mut segments, Interval::new(c, c, self.low[c as usize]));
        }
        let lo = lo.max(DENSE_MAX + 1);
        if lo > hi {
            return segments;
        }
        let mut next = lo;
        for segment in self.high.segments(lo, hi) {
            if next < segment.lo {
                push_coalesced(
                    &mut segments,
                    Interval::new(next, segment.lo - 1, Category::Other),
                );
            }
            push_coalesced(&mut segments, segment);
            next = match segment.hi.checked_add(1) {
                Some(next) => next,
                None => return segments,
            };
        }
        if next <= hi {
            push_coalesced(&mut segments, Interval::new(next, hi, Category::Other));
        }
        segments
    }

    /// Assigns a category to a single code point in the provided scope.
    ///
    /// Code points above [MAX_CODE_POINT] are ignored.
    pub fn insert(&mut self, c: u32, category: Category, scope: Scope) {
        self.assign(c, c, category, scope);
    }

    /// Assigns a category to every code point in `lo..=hi`.
    ///
    /// An interval with `lo > hi` is empty and the call does nothing.
    /// The part of the interval above [MAX_CODE_POINT] is ignored.
    pub fn assign(&mut self, lo: u32, hi: u32, category: Category, scope: Scope) {
        let hi = hi.min(MAX_CODE_POINT);
        if lo > hi {
            return;
        }
        match scope {
            Scope::Local => {
                if let Some(group) = self.groups.last() {
                    let saves: Vec<Interval> = group
                        .gaps(lo, hi)
                        .into_iter()
                        .flat_map(|(gap_lo, gap_hi)| self.segments(gap_lo, gap_hi))
                        .collect();
                    if let Some(group) = self.groups.last_mut() {
                        for saved in saves {
                            group.insert(saved.lo, saved.hi, saved.category);
                        }
                    }
                }
            }
            Scope::Global => {
                for group in &mut self.groups {
                    group.remove(lo, hi);
                }
            }
        }
        self.set(lo, hi, category);
    }

    /// Applies a list of intervals, in order, in the provided scope.
    pub fn assign_all(&mut self, intervals: &[Interval], scope: Scope) {
        for interval in intervals {
            self.assign(interval.lo, interval.hi, interval.category, scope);
        }
    }

    /// Removes a short verbatim delimiter assignment.
    ///
    /// The code point goes back to its default category.
    /// Code points that are not currently [Category::VerbatimDelimiter] are left alone.
    pub fn erase(&mut self, c: u32, scope: Scope) {
        if self.classify(c) == Category::VerbatimDelimiter {
            self.insert(c, Category::default_for(c), scope);
        }
    }

    /// Begins a new group.
    pub fn push(&mut self) {
        self.groups.push(IntervalMap::default());
    }

    /// Attempts to end the current group. Returns an error if there is no group to end.
    pub fn pop(&mut self) -> Result<(), ScopeUnderflow> {
        let group = self.groups.pop().ok_or(ScopeUnderflow)?;
        for saved in group.iter() {
            self.set(saved.lo, saved.hi, saved.category);
        }
        Ok(())
    }

    /// Number of open groups.
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    /// Reinitializes the table to the default classification with no open groups.
    pub fn reset(&mut self) {
        *self = CatCodeTable::new_with_defaults();
    }

    /// Returns the canonical decomposition of the table.
    ///
    /// The first frame contains every code point whose category in the base group is not
    ///     [Category::Other].
    /// Each subsequent frame corresponds to an open group, outermost first,
    ///     and contains the categories assigned locally in that group
    ///     as they are visible at the end of that group.
    /// Every frame is a sorted list of maximal intervals.
    ///
    /// Replaying the frames with [CatCodeTable::from_frames] recreates the table,
    ///     including what each future [pop](CatCodeTable::pop) reverts.
    pub fn frames(&self) -> Vec<Vec<Interval>> {
        // Walk the save stack from the innermost group outwards, tracking for each code point
        // the category it had before the groups visited so far were opened.
        let mut before = IntervalMap::default();
        let mut deltas: Vec<Vec<Interval>> = Vec::with_capacity(self.groups.len() + 1);
        for group in self.groups.iter().rev() {
            let mut delta = Vec::new();
            for saved in group.iter() {
                for interval in self.overlay(&before, saved.lo, saved.hi) {
                    push_coalesced(&mut delta, interval);
                }
            }
            for saved in group.iter() {
                before.insert(saved.lo, saved.hi, saved.category);
            }
            deltas.push(delta);
        }
        let base = self
            .overlay(&before, 0, MAX_CODE_POINT)
            .into_iter()
            .filter(|interval| interval.category != Category::Other)
            .collect();
        deltas.push(base);
        deltas.reverse();
        deltas
    }

    /// Categories of `lo..=hi` with the ones recorded in `before` taking precedence.
    fn overlay(&self, before: &IntervalMap, lo: u32, hi: u32) -> Vec<Interval> {
        let mut intervals = Vec::new();
        let mut next = lo;
        for segment in before.segments(lo, hi) {
            if next < segment.lo {
                for interval in self.segments(next, segment.lo - 1) {
                    push_coalesced(&mut intervals, interval);
                }
            }
            push_coalesced(&mut intervals, segment);
            next = match segment.hi.checked_add(1) {
                Some(next) => next,
                None => return intervals,
            };
        }
        if next <= hi {
            for interval in self.segments(next, hi) {
                push_coalesced(&mut intervals, interval);
            }
        }
        intervals
    }

    /// Builds a table by replaying frames in the format returned by [CatCodeTable::frames].
    ///
    /// Code points not mentioned in any frame are [Category::Other].
    /// An empty list of frames gives the table returned by [CatCodeTable::new].
    pub fn from_frames(frames: &[Vec<Interval>]) -> CatCodeTable {
        let mut table = CatCodeTable::new();
        let mut frames = frames.iter();
        if let Some(base) = frames.next() {
            table.assign_all(base, Scope::Global);
        }
        for frame in frames {
            table.push();
            table.assign_all(frame, Scope::Local);
        }
        table
    }
}

impl Default for CatCodeTable {
    fn default() -> Self {
        CatCodeTable::new_with_defaults()
    }
}

impl PartialEq for CatCodeTable {
    fn eq(&self, other: &Self) -> bool {
        self.frames() == other.frames()
    }
}

impl Eq for CatCodeTable {}

fn push_coalesced(intervals: &mut Vec<Interval>, interval: Interval) {
    match intervals.last_mut() {
        Some(last)
            if last.category == interval.category
                && last.hi.checked_add(1) == Some(interval.lo) =>
        {
            last.hi = interval.hi;
        }
        _ => intervals.push(interval),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    fn c(ch: char) -> u32 {
        ch as u32
    }

    #[test]
    fn defaults_are_installed() {
        let table = CatCodeTable::default();
        assert_eq!(table.classify(c('\\')), Escape);
        assert_eq!(table.classify(c('{')), BeginGroup);
        assert_eq!(table.classify(c('\n')), EndOfLine);
        assert_eq!(table.classify(c('@')), Other);
        assert_eq!(table.classify(0x1F600), Other);
    }

    #[test]
    fn local_assignment_is_reverted() {
        let mut table = CatCodeTable::default();
        let before = table.clone();
        table.push();
        table.assign(c('@'), c('@'), Letter, Scope::Local);
        table.assign(c('a'), c('z'), Other, Scope::Local);
        table.assign(c('@'), c('@'), Active, Scope::Local);
        assert_eq!(table.classify(c('@')), Active);
        assert_eq!(table.pop(), Ok(()));
        assert_eq!(table, before);
        assert_eq!(table.classify(c('@')), Other);
        assert_eq!(table.classify(c('m')), Letter);
    }

    #[test]
    fn local_assignment_without_group_persists() {
        let mut table = CatCodeTable::default();
        table.assign(c('@'), c('@'), Letter, Scope::Local);
        table.push();
        assert_eq!(table.pop(), Ok(()));
        assert_eq!(table.classify(c('@')), Letter);
    }

    #[test]
    fn global_assignment_survives_every_pop() {
        let mut table = CatCodeTable::default();
        table.push();
        table.push();
        table.assign(c('@'), c('@'), Letter, Scope::Local);
        table.push();
        table.assign(c('@'), c('@'), Active, Scope::Global);
        for _ in 0..3 {
            assert_eq!(table.pop(), Ok(()));
            assert_eq!(table.classify(c('@')), Active);
        }
    }

    #[test]
    fn global_assignment_becomes_default_for_new_groups() {
        let mut table = CatCodeTable::default();
        table.push();
        table.assign(c('|'), c('|'), VerbatimDelimiter, Scope::Global);
        table.push();
        assert_eq!(table.classify(c('|')), VerbatimDelimiter);
        assert_eq!(table.pop(), Ok(()));
        assert_eq!(table.pop(), Ok(()));
        assert_eq!(table.classify(c('|')), VerbatimDelimiter);
    }

    #[test]
    fn high_code_points() {
        let mut table = CatCodeTable::default();
        table.push();
        table.assign(0x2014, 0x2016, Letter, Scope::Local);
        assert_eq!(table.classify(0x2015), Letter);
        assert_eq!(table.pop(), Ok(()));
        assert_eq!(table.classify(0x2015), Other);
        assert_eq!(table, CatCodeTable::default());
    }

    #[test]
    fn pop_on_empty_stack() {
        let mut table = CatCodeTable::default();
        assert_eq!(table.pop(), Err(ScopeUnderflow));
        table.push();
        assert_eq!(table.pop(), Ok(()));
        assert_eq!(table.pop(), Err(ScopeUnderflow));
    }

    #[test]
    fn erase_only_removes_verbatim_delimiters() {
        let mut table = CatCodeTable::default();
        table.assign(c('|'), c('|'), VerbatimDelimiter, Scope::Global);
        table.assign(c('$'), c('$'), VerbatimDelimiter, Scope::Global);
        table.erase(c('|'), Scope::Global);
        table.erase(c('$'), Scope::Global);
        table.erase(c('\\'), Scope::Global);
        assert_eq!(table.classify(c('|')), Other);
        assert_eq!(table.classify(c('$')), MathShift);
        assert_eq!(table.classify(c('\\')), Escape);
    }

    #[test]
    fn reset_clears_groups() {
        let mut table = CatCodeTable::default();
        table.push();
        table.assign(c('@'), c('@'), Letter, Scope::Global);
        table.reset();
        assert_eq!(table.depth(), 0);
        assert_eq!(table.classify(c('@')), Other);
    }

    #[test]
    fn frames_of_default_table() {
        let frames = CatCodeTable::default().frames();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].contains(&Interval::range('a', 'z', Letter)));
        assert!(frames[0].contains(&Interval::range('A', 'Z', Letter)));
        assert!(frames[0].contains(&Interval::single('\\', Escape)));
        assert!(frames[0].iter().all(|interval| interval.category != Other));
    }

    #[test]
    fn frames_of_nested_groups() {
        let mut table = CatCodeTable::default();
        table.push();
        table.assign(c('@'), c('@'), Letter, Scope::Local);
        table.push();
        table.assign(c('\\'), c('\\'), Other, Scope::Local);
        table.assign(c('@'), c('@'), Active, Scope::Local);
        let frames = table.frames();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].contains(&Interval::single('\\', Escape)));
        assert_eq!(frames[1], vec![Interval::single('@', Letter)]);
        assert_eq!(
            frames[2],
            vec![Interval::single('@', Active), Interval::single('\\', Other)]
        );
    }

    #[test]
    fn wide_intervals_in_nested_groups() {
        let mut table = CatCodeTable::default();
        for i in 0..20 {
            table.push();
            let category = if i % 2 == 0 { Letter } else { Active };
            table.assign(0, MAX_CODE_POINT, category, Scope::Local);
        }
        assert_eq!(table.classify(0x10FFFF), Active);
        let frames = table.frames();
        assert_eq!(frames.len(), 21);
        for (i, frame) in frames[1..].iter().enumerate() {
            let category = if i % 2 == 0 { Letter } else { Active };
            assert_eq!(frame, &vec![Interval::new(0, MAX_CODE_POINT, category)]);
        }
        assert_eq!(CatCodeTable::from_frames(&frames), table);
        for _ in 0..20 {
            assert_eq!(table.pop(), Ok(()));
        }
        assert_eq!(table, CatCodeTable::default());
        assert_eq!(table.classify(0x10FFFF), Other);
    }

    #[test]
    fn wide_global_interval_in_base_frame() {
        let mut table = CatCodeTable::default();
        table.push();
        table.assign(0x100, MAX_CODE_POINT, Letter, Scope::Global);
        assert_eq!(table.pop(), Ok(()));
        let frames = table.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames[0].last(),
            Some(&Interval::new(0x100, MAX_CODE_POINT, Letter))
        );
        assert_eq!(table.classify(0x2014), Letter);
    }

    #[test]
    fn code_points_beyond_unicode_are_ignored() {
        let mut table = CatCodeTable::default();
        table.push();
        table.insert(MAX_CODE_POINT + 1, Letter, Scope::Local);
        table.assign(MAX_CODE_POINT + 1, u32::MAX, Active, Scope::Global);
        assert_eq!(table.classify(MAX_CODE_POINT + 1), Other);
        assert_eq!(table.frames()[1], Vec::<Interval>::new());
        assert_eq!(table.frames()[0], CatCodeTable::default().frames()[0]);
        table.assign(MAX_CODE_POINT, u32::MAX, Letter, Scope::Global);
        assert_eq!(table.classify(MAX_CODE_POINT), Letter);
        assert_eq!(table.classify(u32::MAX), Other);
        assert_eq!(
            table.frames()[0].last(),
            Some(&Interval::new(MAX_CODE_POINT, MAX_CODE_POINT, Letter))
        );
    }

    macro_rules! replay_tests {
        ( $( ($name: ident, $table: expr $(,)? ), )+ ) => {
            $(
            #[test]
            fn $name() {
                let mut table: CatCodeTable = $table;
                let mut replayed = CatCodeTable::from_frames(&table.frames());
                assert_eq!(replayed, table);
                while table.depth() > 0 {
                    assert_eq!(table.pop(), Ok(()));
                    assert_eq!(replayed.pop(), Ok(()));
                    assert_eq!(replayed, table);
                    for ch in ['\\', '@', '|', ':', ' ', '_', 'q'] {
                        assert_eq!(replayed.classify(c(ch)), table.classify(c(ch)));
                    }
                }
                assert_eq!(replayed.pop(), Err(ScopeUnderflow));
            }
            )+
        };
    }

    replay_tests!(
        (replay_default, CatCodeTable::default()),
        (replay_empty_groups, {
            let mut t = CatCodeTable::default();
            t.push();
            t.push();
            t
        }),
        (replay_local_in_group, {
            let mut t = CatCodeTable::default();
            t.push();
            t.assign(c('@'), c('@'), Letter, Scope::Local);
            t.push();
            t.assign(c(':'), c(':'), Letter, Scope::Local);
            t
        }),
        (replay_overwritten_locals, {
            let mut t = CatCodeTable::default();
            t.push();
            t.assign(c('@'), c('@'), Letter, Scope::Local);
            t.push();
            t.push();
            t.assign(c('@'), c('@'), Active, Scope::Local);
            t.assign(c('@'), c('@'), Space, Scope::Local);
            t
        }),
        (replay_global_inside_group, {
            let mut t = CatCodeTable::default();
            t.push();
            t.assign(c('|'), c('|'), Other, Scope::Local);
            t.push();
            t.assign(c('|'), c('|'), VerbatimDelimiter, Scope::Global);
            t.assign(c('\\'), c('\\'), Other, Scope::Local);
            t
        }),
        (replay_reassign_to_same_value, {
            let mut t = CatCodeTable::default();
            t.push();
            t.assign(c('q'), c('q'), Letter, Scope::Local);
            t.assign(c('_'), c('_'), Letter, Scope::Local);
            t.push();
            t.assign(c('_'), c('_'), Subscript, Scope::Local);
            t
        }),
        (replay_high_code_points, {
            let mut t = CatCodeTable::default();
            t.assign(0x3B1, 0x3C9, Letter, Scope::Local);
            t.push();
            t.assign(0x3B5, 0x3B5, Other, Scope::Local);
            t
        }),
    );
}
