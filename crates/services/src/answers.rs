//! Builds the randomized choice list shown for one question.

use itertools::Itertools;
use rand::rng;
use rand::seq::SliceRandom;

/// Merge the incorrect answers and the correct answer into one shuffled
/// choice list.
///
/// Duplicates are dropped, keeping the first occurrence, and the correct
/// answer ends up in the list exactly once. The shuffle is unbiased
/// (`SliceRandom::shuffle`), so every position is equally likely to hold the
/// correct answer.
#[must_use]
pub fn shuffled_choices(incorrect: Vec<String>, correct: &str) -> Vec<String> {
    let mut choices: Vec<String> = incorrect
        .into_iter()
        .filter(|choice| choice != correct)
        .unique()
        .collect();
    choices.push(correct.to_string());

    let mut rng = rng();
    choices.shuffle(&mut rng);
    choices
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn incorrect() -> Vec<String> {
        vec!["Mars".to_string(), "Venus".to_string(), "Pluto".to_string()]
    }

    #[test]
    fn output_is_a_permutation_with_the_correct_answer_once() {
        let choices = shuffled_choices(incorrect(), "Earth");

        assert_eq!(choices.len(), 4);
        for expected in ["Mars", "Venus", "Pluto", "Earth"] {
            assert_eq!(
                choices.iter().filter(|choice| *choice == expected).count(),
                1,
                "{expected} should appear exactly once"
            );
        }
    }

    #[test]
    fn duplicate_incorrect_answers_are_dropped() {
        let choices = shuffled_choices(
            vec!["Mars".to_string(), "Mars".to_string(), "Venus".to_string()],
            "Earth",
        );
        assert_eq!(choices.len(), 3);
    }

    #[test]
    fn correct_answer_repeated_in_incorrect_list_stays_unique() {
        let choices = shuffled_choices(
            vec!["Earth".to_string(), "Mars".to_string()],
            "Earth",
        );

        assert_eq!(choices.len(), 2);
        assert_eq!(choices.iter().filter(|choice| *choice == "Earth").count(), 1);
    }

    #[test]
    fn correct_answer_position_is_roughly_uniform() {
        const TRIALS: usize = 4000;
        let mut position_counts = [0usize; 4];

        for _ in 0..TRIALS {
            let choices = shuffled_choices(incorrect(), "Earth");
            let position = choices
                .iter()
                .position(|choice| choice == "Earth")
                .expect("correct answer present");
            position_counts[position] += 1;
        }

        // Expected 1000 per position; +/-250 is far looser than the
        // binomial spread, so this effectively never flakes while still
        // catching a biased shuffle.
        for (position, count) in position_counts.iter().enumerate() {
            assert!(
                (750..=1250).contains(count),
                "position {position} hit {count} times out of {TRIALS}"
            );
        }
    }
}
