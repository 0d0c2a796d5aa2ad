//! BINGO call catalog.
//!
//! The naming scheme for the spoken calls: a category prefix letter
//! (`B`, `I`, `N`, `G`, `O`) followed by the call number, with a `.mp3`
//! extension. Each letter owns a fixed 15-number slice of 1-75. A complete
//! set holds one clip per call; completion is judged by count alone.

use std::ops::RangeInclusive;

use crate::constants;

/// Number of clips in a complete set.
pub const TOTAL_CLIPS: usize = 75;

/// BINGO category prefix.
///
/// Names the column a call belongs to and supplies the letter its clip
/// file name starts with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    B,
    I,
    N,
    G,
    O,
}

/// All categories in board order.
pub const CATEGORIES: [Category; 5] = [
    Category::B,
    Category::I,
    Category::N,
    Category::G,
    Category::O,
];

impl Category {
    /// Prefix letter used in clip file names.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::B => 'B',
            Self::I => 'I',
            Self::N => 'N',
            Self::G => 'G',
            Self::O => 'O',
        }
    }

    /// Call numbers covered by this category.
    #[must_use]
    pub const fn numbers(self) -> RangeInclusive<u8> {
        match self {
            Self::B => 1..=15,
            Self::I => 16..=30,
            Self::N => 31..=45,
            Self::G => 46..=60,
            Self::O => 61..=75,
        }
    }

    /// Clip file name for `number`, e.g. `B1.mp3`.
    #[must_use]
    pub fn clip_name(self, number: u8) -> String {
        format!("{}{number}.{}", self.prefix(), constants::CLIP_EXT)
    }

    /// Naming-guide line for the report: the first three clip names, an
    /// ellipsis, and the last, e.g. `B1.mp3, B2.mp3, B3.mp3... B15.mp3`.
    #[must_use]
    pub fn guide_line(self) -> String {
        let numbers = self.numbers();
        let first = *numbers.start();
        let last = *numbers.end();
        format!(
            "{}, {}, {}... {}",
            self.clip_name(first),
            self.clip_name(first + 1),
            self.clip_name(first + 2),
            self.clip_name(last),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_spell_bingo() {
        let letters: String = CATEGORIES.iter().map(|c| c.prefix()).collect();
        assert_eq!(letters, "BINGO");
    }

    #[test]
    fn test_ranges_cover_every_call_once() {
        for number in 1..=75u8 {
            let owners = CATEGORIES
                .iter()
                .filter(|c| c.numbers().contains(&number))
                .count();
            assert_eq!(owners, 1, "call {number} owned by exactly one category");
        }
        assert!(CATEGORIES.iter().all(|c| !c.numbers().contains(&0)));
        assert!(CATEGORIES.iter().all(|c| !c.numbers().contains(&76)));
    }

    #[test]
    fn test_range_sizes_sum_to_total() {
        let total: usize = CATEGORIES.iter().map(|c| c.numbers().count()).sum();
        assert_eq!(total, TOTAL_CLIPS);
    }

    #[test]
    fn test_clip_name() {
        assert_eq!(Category::B.clip_name(1), "B1.mp3");
        assert_eq!(Category::N.clip_name(31), "N31.mp3");
        assert_eq!(Category::O.clip_name(75), "O75.mp3");
    }

    #[test]
    fn test_guide_line_shape() {
        assert_eq!(
            Category::B.guide_line(),
            "B1.mp3, B2.mp3, B3.mp3... B15.mp3"
        );
        assert_eq!(
            Category::O.guide_line(),
            "O61.mp3, O62.mp3, O63.mp3... O75.mp3"
        );
    }
}
