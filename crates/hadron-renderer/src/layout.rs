//! Placement of states that share a diagram coordinate

use std::f32::consts::TAU;

use glam::Vec2;

/// Unit offsets that fan out states with equal keys
///
/// Two states sit side by side, three on a triangle (top, lower left, lower
/// right), four on a square and larger groups on a circle. Offsets are
/// assigned in the order the states appear. Callers scale the result to
/// their marker size.
pub fn coincident_offsets<K: PartialEq>(keys: &[K]) -> Vec<Vec2> {
    coincident_groups(keys)
        .into_iter()
        .map(|group| group_offset(group.rank, group.count))
        .collect()
}

/// Position of a state among the states sharing its key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coincidence {
    /// Zero-based order of appearance within the group
    pub rank: usize,
    /// Size of the group, 1 for a lone state
    pub count: usize,
}

impl Coincidence {
    pub fn is_shared(self) -> bool {
        self.count > 1
    }
}

pub fn coincident_groups<K: PartialEq>(keys: &[K]) -> Vec<Coincidence> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| Coincidence {
            rank: keys[..i].iter().filter(|other| *other == key).count(),
            count: keys.iter().filter(|other| *other == key).count(),
        })
        .collect()
}

fn group_offset(rank: usize, count: usize) -> Vec2 {
    const SIN_60: f32 = 0.866;
    match (count, rank) {
        (0 | 1, _) => Vec2::ZERO,
        (2, 0) => Vec2::new(1.0, 0.0),
        (2, _) => Vec2::new(-1.0, 0.0),
        (3, 0) => Vec2::new(0.0, SIN_60),
        (3, 1) => Vec2::new(-1.0, -SIN_60),
        (3, _) => Vec2::new(1.0, -SIN_60),
        (4, 0) => Vec2::new(-1.0, 1.0),
        (4, 1) => Vec2::new(1.0, 1.0),
        (4, 2) => Vec2::new(-1.0, -1.0),
        (4, _) => Vec2::new(1.0, -1.0),
        _ => {
            let angle = TAU * rank as f32 / count as f32;
            Vec2::new(angle.cos(), angle.sin())
        }
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f32;
            (0..count).map(|i| start + step * i as f32).collect()
        }
    }
}

/// Tick label: integers without decimals, halves with one
pub fn tick_label(value: f32) -> String {
    if (value - value.round()).abs() < 1e-4 {
        format!("{:.0}", value.round() + 0.0)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singles_stay_in_place() {
        let offsets = coincident_offsets(&[(0, 0), (1, 0), (0, 1)]);
        assert!(offsets.iter().all(|offset| *offset == Vec2::ZERO));
    }

    #[test]
    fn pairs_and_triples_fan_out_in_order() {
        let keys = [(0, 0), (1, 1), (0, 0), (1, 1), (1, 1)];
        let offsets = coincident_offsets(&keys);
        assert_eq!(offsets[0], Vec2::new(1.0, 0.0));
        assert_eq!(offsets[2], Vec2::new(-1.0, 0.0));
        assert_eq!(offsets[1], Vec2::new(0.0, 0.866));
        assert_eq!(offsets[3], Vec2::new(-1.0, -0.866));
        assert_eq!(offsets[4], Vec2::new(1.0, -0.866));
    }

    #[test]
    fn groups_rank_in_order_of_appearance() {
        let groups = coincident_groups(&['a', 'b', 'a', 'a']);
        assert_eq!(groups[0], Coincidence { rank: 0, count: 3 });
        assert_eq!(groups[1], Coincidence { rank: 0, count: 1 });
        assert_eq!(groups[3], Coincidence { rank: 2, count: 3 });
        assert!(!groups[1].is_shared());
    }

    #[test]
    fn large_groups_are_distinct() {
        let offsets = coincident_offsets(&[7; 6]);
        for (i, a) in offsets.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < 1e-5);
            for b in &offsets[i + 1..] {
                assert!((*a - *b).length() > 0.5);
            }
        }
    }

    #[test]
    fn linspace_is_inclusive() {
        let ticks = linspace(-1.0, 1.0, 5);
        assert_eq!(ticks, [-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(tick_label(-1.0), "-1");
        assert_eq!(tick_label(-0.0), "0");
        assert_eq!(tick_label(0.5), "0.5");
        assert_eq!(tick_label(-1.5), "-1.5");
    }
}
