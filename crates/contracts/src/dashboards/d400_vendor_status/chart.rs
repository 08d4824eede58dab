//! Vendor status per division: grouping, percentages and the staggered
//! reveal of the stacked bars.

use super::dto::{StatusRow, SOURCE_WARRANTY};
use crate::shared::settings::ChartTiming;

/// Settled (`Y`) and pending (`N`) counts of one bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettledSplit {
    pub y: u64,
    pub n: u64,
}

impl SettledSplit {
    pub fn total(&self) -> u64 {
        self.y + self.n
    }

    fn add(&mut self, status: &str, count: u64) {
        match status {
            "Y" => self.y += count,
            "N" => self.n += count,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionStatus {
    pub division: String,
    pub warranty: SettledSplit,
    pub outwarranty: SettledSplit,
}

/// Width of the bars of one division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarWidth {
    /// Only one bar is shown.
    Wide,
    Narrow,
}

/// Stacked segment, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    WarrantySettled,
    WarrantyPending,
    OutWarrantySettled,
    OutWarrantyPending,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::WarrantySettled,
        Segment::WarrantyPending,
        Segment::OutWarrantySettled,
        Segment::OutWarrantyPending,
    ];

    pub fn index(self) -> usize {
        match self {
            Segment::WarrantySettled => 0,
            Segment::WarrantyPending => 1,
            Segment::OutWarrantySettled => 2,
            Segment::OutWarrantyPending => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Segment::WarrantySettled => "Warranty - Settled",
            Segment::WarrantyPending => "Warranty - Pending",
            Segment::OutWarrantySettled => "Out of Warranty - Settled",
            Segment::OutWarrantyPending => "Out of Warranty - Pending",
        }
    }

    pub fn is_warranty(self) -> bool {
        matches!(self, Segment::WarrantySettled | Segment::WarrantyPending)
    }
}

/// Share of `value` in `total` as a percentage with one decimal; 0 when
/// `total` is 0.
pub fn percent(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value as f64 / total as f64 * 1000.0).round() / 10.0
}

impl DivisionStatus {
    fn new(division: &str) -> Self {
        Self {
            division: division.to_string(),
            warranty: SettledSplit::default(),
            outwarranty: SettledSplit::default(),
        }
    }

    pub fn shows_warranty(&self) -> bool {
        self.warranty.total() > 0
    }

    pub fn shows_outwarranty(&self) -> bool {
        self.outwarranty.total() > 0
    }

    pub fn bar_width(&self) -> BarWidth {
        if self.shows_warranty() && self.shows_outwarranty() {
            BarWidth::Narrow
        } else {
            BarWidth::Wide
        }
    }

    pub fn count(&self, segment: Segment) -> u64 {
        match segment {
            Segment::WarrantySettled => self.warranty.y,
            Segment::WarrantyPending => self.warranty.n,
            Segment::OutWarrantySettled => self.outwarranty.y,
            Segment::OutWarrantyPending => self.outwarranty.n,
        }
    }

    pub fn percent(&self, segment: Segment) -> f64 {
        let total = if segment.is_warranty() {
            self.warranty.total()
        } else {
            self.outwarranty.total()
        };
        percent(self.count(segment), total)
    }
}

/// Group chart rows per division, keeping the order divisions first appear in.
pub fn group_by_division(rows: &[StatusRow]) -> Vec<DivisionStatus> {
    let mut grouped: Vec<DivisionStatus> = Vec::new();
    for row in rows {
        let idx = match grouped.iter().position(|d| d.division == row.division) {
            Some(idx) => idx,
            None => {
                grouped.push(DivisionStatus::new(&row.division));
                grouped.len() - 1
            }
        };
        let entry = &mut grouped[idx];
        if row.source == SOURCE_WARRANTY {
            entry.warranty.add(&row.vendor_settled, row.count);
        } else {
            entry.outwarranty.add(&row.vendor_settled, row.count);
        }
    }
    grouped
}

/// Whether the reveal animation should restart. Data refreshed with the same
/// per-division counts keeps the chart as it is.
pub fn needs_replay(previous: Option<&[DivisionStatus]>, current: &[DivisionStatus]) -> bool {
    previous != Some(current)
}

/// One timed step of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub division: usize,
    pub segment: Segment,
    /// Delay from the start of the animation.
    pub at_ms: u32,
}

/// Step `k` of division `i` fires at `i * stagger + k * segment_delay`.
/// Steps are ordered by time, then division.
pub fn reveal_schedule(divisions: usize, timing: &ChartTiming) -> Vec<RevealStep> {
    let mut steps: Vec<RevealStep> = (0..divisions)
        .flat_map(|division| {
            Segment::ALL.into_iter().map(move |segment| RevealStep {
                division,
                segment,
                at_ms: division as u32 * timing.division_stagger_ms
                    + segment.index() as u32 * timing.segment_delay_ms,
            })
        })
        .collect();
    steps.sort_by_key(|s| (s.at_ms, s.division, s.segment.index()));
    steps
}

/// Which segments are currently drawn at full height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: Vec<[bool; 4]>,
}

impl RevealState {
    /// Everything hidden.
    pub fn hidden(divisions: usize) -> Self {
        Self {
            revealed: vec![[false; 4]; divisions],
        }
    }

    pub fn apply(&mut self, step: &RevealStep) {
        if let Some(flags) = self.revealed.get_mut(step.division) {
            flags[step.segment.index()] = true;
        }
    }

    pub fn is_revealed(&self, division: usize, segment: Segment) -> bool {
        self.revealed
            .get(division)
            .is_some_and(|flags| flags[segment.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(division: &str, source: &str, settled: &str, count: u64) -> StatusRow {
        StatusRow {
            division: division.to_string(),
            source: source.to_string(),
            vendor_settled: settled.to_string(),
            count,
        }
    }

    #[test]
    fn test_group_by_division() {
        let rows = vec![
            row("FANS", "WARRANTY", "Y", 3),
            row("FANS", "WARRANTY", "N", 1),
        ];
        let grouped = group_by_division(&rows);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].warranty, SettledSplit { y: 3, n: 1 });
        assert_eq!(grouped[0].outwarranty, SettledSplit::default());
        assert_eq!(grouped[0].percent(Segment::WarrantySettled), 75.0);
        assert_eq!(grouped[0].percent(Segment::WarrantyPending), 25.0);
        assert!(!grouped[0].shows_outwarranty());
        assert_eq!(grouped[0].bar_width(), BarWidth::Wide);
    }

    #[test]
    fn test_group_keeps_first_seen_order() {
        let rows = vec![
            row("PUMP", "OUT OF WARRANTY", "N", 2),
            row("FANS", "WARRANTY", "Y", 1),
            row("PUMP", "WARRANTY", "Y", 4),
            row("FANS", "RETAIL", "Y", 5),
        ];
        let grouped = group_by_division(&rows);
        let names: Vec<&str> = grouped.iter().map(|d| d.division.as_str()).collect();
        assert_eq!(names, vec!["PUMP", "FANS"]);
        assert_eq!(grouped[0].outwarranty, SettledSplit { y: 0, n: 2 });
        assert_eq!(grouped[0].warranty, SettledSplit { y: 4, n: 0 });
        assert_eq!(grouped[1].outwarranty, SettledSplit { y: 5, n: 0 });
        assert_eq!(grouped[0].bar_width(), BarWidth::Narrow);
    }

    #[test]
    fn test_unknown_status_is_ignored() {
        let rows = vec![row("FANS", "WARRANTY", "X", 9), row("FANS", "WARRANTY", "N", 2)];
        let grouped = group_by_division(&rows);
        assert_eq!(grouped[0].warranty, SettledSplit { y: 0, n: 2 });
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(2, 3), 66.7);
        assert_eq!(percent(5, 0), 0.0);
        assert_eq!(percent(0, 4), 0.0);
    }

    #[test]
    fn test_reveal_schedule_timing() {
        let timing = ChartTiming {
            division_stagger_ms: 200,
            segment_delay_ms: 300,
        };
        let steps = reveal_schedule(2, &timing);
        assert_eq!(steps.len(), 8);
        let times: Vec<(usize, u32)> = steps.iter().map(|s| (s.division, s.at_ms)).collect();
        assert_eq!(
            times,
            vec![
                (0, 0),
                (1, 200),
                (0, 300),
                (1, 500),
                (0, 600),
                (1, 800),
                (0, 900),
                (1, 1100),
            ]
        );
        assert_eq!(steps[0].segment, Segment::WarrantySettled);
        assert_eq!(steps[7].segment, Segment::OutWarrantyPending);
    }

    #[test]
    fn test_segments_of_a_division_reveal_in_order() {
        let steps = reveal_schedule(3, &ChartTiming::default());
        let order: Vec<Segment> = steps
            .iter()
            .filter(|s| s.division == 2)
            .map(|s| s.segment)
            .collect();
        assert_eq!(order, Segment::ALL.to_vec());
    }

    #[test]
    fn test_reveal_state() {
        let mut state = RevealState::hidden(2);
        assert!(!state.is_revealed(1, Segment::WarrantySettled));
        for step in reveal_schedule(2, &ChartTiming::default()).iter().take(3) {
            state.apply(step);
        }
        assert!(state.is_revealed(0, Segment::WarrantySettled));
        assert!(state.is_revealed(1, Segment::WarrantySettled));
        assert!(state.is_revealed(0, Segment::WarrantyPending));
        assert!(!state.is_revealed(1, Segment::WarrantyPending));
        assert!(!state.is_revealed(5, Segment::WarrantySettled));
    }

    #[test]
    fn test_replay_on_first_run() {
        let current = group_by_division(&[row("FANS", "WARRANTY", "Y", 3)]);
        assert!(needs_replay(None, &current));
    }

    #[test]
    fn test_no_replay_for_equal_rebuild() {
        let rows = vec![
            row("FANS", "WARRANTY", "Y", 3),
            row("LIGHTING", "OUTWARRANTY", "N", 2),
        ];
        let previous = group_by_division(&rows);
        let rebuilt = group_by_division(&rows.clone());
        assert!(!needs_replay(Some(&previous), &rebuilt));
    }

    #[test]
    fn test_replay_when_count_changes() {
        let previous = group_by_division(&[
            row("FANS", "WARRANTY", "Y", 3),
            row("FANS", "WARRANTY", "N", 1),
        ]);
        let current = group_by_division(&[
            row("FANS", "WARRANTY", "Y", 3),
            row("FANS", "WARRANTY", "N", 2),
        ]);
        assert!(needs_replay(Some(&previous), &current));
    }
}
