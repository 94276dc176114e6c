//! Narration estimates for dubbing scripts.
//!
//! A script's word count is the number of whitespace-separated runs after
//! trimming. Duration assumes a fixed reading speed and is rounded up per
//! script, so totals must be built by summing per-script durations.

use crate::constants::READING_SPEED_WPM;

/// Number of maximal non-whitespace runs in `text`. Blank text has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Seconds needed to read `words` aloud, rounded up: `ceil(words * 60 / WPM)`.
///
/// Computed in integers so that e.g. 15 words is exactly 6 seconds.
pub fn estimated_duration_seconds(words: usize) -> u64 {
    let words = words as u64;
    let wpm = u64::from(READING_SPEED_WPM);
    (words * 60).div_ceil(wpm)
}

/// Human-readable (Indonesian) duration: "0 detik", "45 detik", "1 menit", "1 menit 30 detik".
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "0 detik".to_string();
    }

    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;

    match (minutes, remaining_seconds) {
        (0, s) => format!("{} detik", s),
        (m, 0) => format!("{} menit", m),
        (m, s) => format!("{} menit {} detik", m, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ignores_surrounding_and_repeated_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count("  hello   world \n again "), 3);
    }

    #[test]
    fn duration_rounds_up_per_word_count() {
        assert_eq!(estimated_duration_seconds(0), 0);
        assert_eq!(estimated_duration_seconds(1), 1);
        assert_eq!(estimated_duration_seconds(2), 1);
        assert_eq!(estimated_duration_seconds(3), 2);
        assert_eq!(estimated_duration_seconds(15), 6);
        assert_eq!(estimated_duration_seconds(150), 60);
        assert_eq!(estimated_duration_seconds(151), 61);
    }

    #[test]
    fn duration_is_monotonic() {
        let mut previous = 0;
        for words in 0..1000 {
            let current = estimated_duration_seconds(words);
            assert!(current >= previous, "not monotonic at {} words", words);
            previous = current;
        }
    }

    #[test]
    fn format_duration_cases() {
        assert_eq!(format_duration(0), "0 detik");
        assert_eq!(format_duration(45), "45 detik");
        assert_eq!(format_duration(60), "1 menit");
        assert_eq!(format_duration(90), "1 menit 30 detik");
        assert_eq!(format_duration(120), "2 menit");
        assert_eq!(format_duration(3601), "60 menit 1 detik");
    }
}
