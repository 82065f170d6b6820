use std::fmt;

/// Bit weight for a smiling face.
const SMILE_BIT: u8 = 0b100;
/// Bit weight for an open left eye.
const LEFT_EYE_OPEN_BIT: u8 = 0b010;
/// Bit weight for an open right eye.
const RIGHT_EYE_OPEN_BIT: u8 = 0b001;

/// Probability threshold separating smiling/open from frowning/closed.
const SCORE_THRESHOLD: f32 = 0.5;

/// Emoji variant selected for a detected face.
///
/// The discriminant is the 3-bit classification code: smile is bit 2,
/// open left eye is bit 1, open right eye is bit 0. "Left" and "right"
/// are the subject's own left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EmojiCategory {
    /// Both eyes closed, frowning (code 000).
    ClosedEyeFrown = 0b000,
    /// Left eye closed, frowning (code 001).
    LeftWinkFrown = 0b001,
    /// Right eye closed, frowning (code 010).
    RightWinkFrown = 0b010,
    /// Both eyes open, frowning (code 011).
    Frown = 0b011,
    /// Both eyes closed, smiling (code 100).
    ClosedEyeSmile = 0b100,
    /// Left eye closed, smiling (code 101).
    LeftWink = 0b101,
    /// Right eye closed, smiling (code 110).
    RightWink = 0b110,
    /// Both eyes open, smiling (code 111).
    Smile = 0b111,
}

impl EmojiCategory {
    /// All categories, in classification-code order.
    pub const ALL: [EmojiCategory; 8] = [
        EmojiCategory::ClosedEyeFrown,
        EmojiCategory::LeftWinkFrown,
        EmojiCategory::RightWinkFrown,
        EmojiCategory::Frown,
        EmojiCategory::ClosedEyeSmile,
        EmojiCategory::LeftWink,
        EmojiCategory::RightWink,
        EmojiCategory::Smile,
    ];

    /// The 3-bit classification code for this category.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Category for a classification code. Bits above the low three are
    /// ignored, so the mapping is total.
    pub fn from_code(code: u8) -> EmojiCategory {
        Self::ALL[(code & 0b111) as usize]
    }

    /// Asset basename for this category (`smile.png` and friends).
    pub fn asset_name(self) -> &'static str {
        match self {
            EmojiCategory::Smile => "smile",
            EmojiCategory::RightWink => "rightwink",
            EmojiCategory::LeftWink => "leftwink",
            EmojiCategory::ClosedEyeSmile => "closed_smile",
            EmojiCategory::Frown => "frown",
            EmojiCategory::RightWinkFrown => "rightwinkfrown",
            EmojiCategory::LeftWinkFrown => "leftwinkfrown",
            EmojiCategory::ClosedEyeFrown => "closed_frown",
        }
    }
}

impl fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.asset_name())
    }
}

/// Classify a face's smile and eye-open scores into an emoji category.
///
/// Each score below 0.5 clears its bit; 0.5 and above keeps it set.
/// Detectors that cannot compute a score report a negative sentinel,
/// which therefore reads as frowning/closed. The three bits form the
/// classification code looked up directly in the category table, so every
/// input maps to exactly one category with no branching cascade.
pub fn classify(smile: f32, left_eye_open: f32, right_eye_open: f32) -> EmojiCategory {
    let mut code = 0;
    if smile >= SCORE_THRESHOLD {
        code |= SMILE_BIT;
    }
    if left_eye_open >= SCORE_THRESHOLD {
        code |= LEFT_EYE_OPEN_BIT;
    }
    if right_eye_open >= SCORE_THRESHOLD {
        code |= RIGHT_EYE_OPEN_BIT;
    }
    EmojiCategory::from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_combinations_map_to_their_category() {
        for code in 0u8..8 {
            let score = |bit: u8| if code & bit != 0 { 0.9 } else { 0.1 };
            let category = classify(
                score(SMILE_BIT),
                score(LEFT_EYE_OPEN_BIT),
                score(RIGHT_EYE_OPEN_BIT),
            );
            assert_eq!(category.code(), code);
            assert_eq!(category, EmojiCategory::from_code(code));
        }
    }

    #[test]
    fn smiling_with_both_eyes_open() {
        assert_eq!(classify(0.9, 0.8, 0.7), EmojiCategory::Smile);
    }

    #[test]
    fn frowning_with_both_eyes_closed() {
        assert_eq!(classify(0.3, 0.1, 0.1), EmojiCategory::ClosedEyeFrown);
    }

    #[test]
    fn right_eye_closed_while_smiling_is_a_right_wink() {
        assert_eq!(classify(0.9, 0.8, 0.2), EmojiCategory::RightWink);
    }

    #[test]
    fn left_eye_closed_while_frowning_is_a_left_wink_frown() {
        assert_eq!(classify(0.2, 0.1, 0.8), EmojiCategory::LeftWinkFrown);
    }

    #[test]
    fn boundary_score_keeps_the_bit_set() {
        // Only scores strictly below 0.5 clear a bit.
        assert_eq!(classify(0.5, 0.5, 0.5), EmojiCategory::Smile);
        assert_eq!(classify(0.5, 0.1, 0.1), EmojiCategory::ClosedEyeSmile);
    }

    #[test]
    fn just_below_boundary_clears_the_bit() {
        assert_eq!(classify(0.49999, 0.49999, 0.49999), EmojiCategory::ClosedEyeFrown);
    }

    #[test]
    fn uncomputed_negative_scores_read_as_closed_frown() {
        assert_eq!(classify(-1.0, -1.0, -1.0), EmojiCategory::ClosedEyeFrown);
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(0.6, 0.4, 0.6), classify(0.6, 0.4, 0.6));
        }
    }

    #[test]
    fn from_code_ignores_high_bits() {
        assert_eq!(EmojiCategory::from_code(0b1111), EmojiCategory::Smile);
        assert_eq!(EmojiCategory::from_code(0b1000), EmojiCategory::ClosedEyeFrown);
    }

    #[test]
    fn codes_round_trip_through_the_table() {
        for category in EmojiCategory::ALL {
            assert_eq!(EmojiCategory::from_code(category.code()), category);
        }
    }

    #[test]
    fn asset_names_are_distinct() {
        let mut names: Vec<_> = EmojiCategory::ALL.iter().map(|c| c.asset_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
