use crate::libtango::jisho::Jisho;
use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("word {0:?} is not in the dictionary")]
pub struct UnknownWordError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub word: String,
    pub correct: String,
    pub options: Vec<String>,
}

pub fn generate(
    word: &str,
    jisho: &Jisho,
    rng: &mut impl Rng,
) -> Result<Question, UnknownWordError> {
    let correct = jisho
        .meaning(word)
        .ok_or_else(|| UnknownWordError(word.to_string()))?;

    // distractors come from every entry except the asked word; duplicate
    // meaning text across different words is left as-is
    let pool: Vec<&str> = jisho
        .iter()
        .filter(|(other, _)| *other != word)
        .map(|(_, meaning)| meaning)
        .collect();

    let mut options: Vec<String> = pool
        .choose_multiple(rng, pool.len().min(3))
        .map(|meaning| meaning.to_string())
        .collect();
    options.push(correct.to_string());
    options.shuffle(rng);

    debug!(
        "[Quiz] Question for {:?} with {} options",
        word,
        options.len()
    );
    Ok(Question {
        word: word.to_string(),
        correct: correct.to_string(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libtango::jisho::VocabRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn jisho(entries: &[(&str, &str)]) -> Jisho {
        let records: Vec<VocabRecord> = entries
            .iter()
            .map(|(word, meaning)| VocabRecord {
                word: Some(word.to_string()),
                meaning: Some(meaning.to_string()),
            })
            .collect();
        Jisho::from_records(&records)
    }

    fn five_words() -> Jisho {
        jisho(&[
            ("abate", "reduce"),
            ("zeal", "enthusiasm"),
            ("terse", "concise"),
            ("lucid", "clear"),
            ("opaque", "unclear"),
        ])
    }

    #[test]
    fn options_contain_the_correct_meaning_exactly_once() {
        let jisho = five_words();
        let mut rng = StdRng::seed_from_u64(42);
        for word in ["abate", "zeal", "terse", "lucid", "opaque"] {
            let question = generate(word, &jisho, &mut rng).unwrap();
            assert_eq!(question.options.len(), 4);
            let hits = question
                .options
                .iter()
                .filter(|option| **option == question.correct)
                .count();
            assert_eq!(hits, 1, "options for {:?}: {:?}", word, question.options);
        }
    }

    #[test]
    fn small_dictionaries_degrade_the_option_count() {
        let mut rng = StdRng::seed_from_u64(1);

        let single = jisho(&[("abate", "reduce")]);
        let question = generate("abate", &single, &mut rng).unwrap();
        assert_eq!(question.options, ["reduce"]);

        let pair = jisho(&[("abate", "reduce"), ("zeal", "enthusiasm")]);
        let question = generate("zeal", &pair, &mut rng).unwrap();
        assert_eq!(question.options.len(), 2);
        assert!(question.options.contains(&"reduce".to_string()));
        assert!(question.options.contains(&"enthusiasm".to_string()));
    }

    #[test]
    fn unknown_word_is_an_error() {
        let jisho = five_words();
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate("missing", &jisho, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn the_asked_word_is_never_sampled_as_a_distractor() {
        // meanings are unique here, so a repeated "clear" could only come
        // from sampling the asked word itself
        let jisho = five_words();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = generate("lucid", &jisho, &mut rng).unwrap();
            let clears = question
                .options
                .iter()
                .filter(|option| **option == "clear")
                .count();
            assert_eq!(clears, 1);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_question() {
        let jisho = five_words();
        let first = generate("abate", &jisho, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = generate("abate", &jisho, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }
}
