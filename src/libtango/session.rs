use crate::libtango::jisho::Jisho;
use crate::libtango::mistakes::MistakeLog;
use crate::libtango::shitsumon::{self, Question, UnknownWordError};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    InProgress,
    SetComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Correct,
    Incorrect { correct: String },
    Rejected,
}

#[derive(Debug, Default)]
pub struct Session {
    unused: Vec<String>,
    history: Vec<Question>,
    answers: Vec<Option<String>>,
    cursor: usize,
    score: u32,
    total: usize,
    phase: Phase,
}

impl Session {
    pub fn start(
        word_list: &[String],
        jisho: &Jisho,
        rng: &mut impl Rng,
    ) -> Result<Session, UnknownWordError> {
        let mut unused: Vec<String> = word_list
            .iter()
            .filter(|word| jisho.contains(word))
            .cloned()
            .collect();
        unused.shuffle(rng);
        info!(
            "[Quiz] Starting a set of {} words ({} requested)",
            unused.len(),
            word_list.len()
        );

        let mut session = Session {
            total: unused.len(),
            phase: if unused.is_empty() {
                Phase::SetComplete
            } else {
                Phase::InProgress
            },
            unused,
            ..Session::default()
        };
        session.advance(jisho, rng)?;
        Ok(session)
    }

    // pops from the end of the shuffled list; encounter order depends on it
    pub fn advance(&mut self, jisho: &Jisho, rng: &mut impl Rng) -> Result<(), UnknownWordError> {
        if self.phase == Phase::SetComplete {
            return Ok(());
        }
        let Some(word) = self.unused.pop() else {
            info!("[Quiz] Set complete ({}/{} correct)", self.score, self.total);
            self.phase = Phase::SetComplete;
            return Ok(());
        };
        let question = shitsumon::generate(&word, jisho, rng)?;
        self.history.push(question);
        self.answers.push(None);
        self.cursor = self.history.len() - 1;
        Ok(())
    }

    pub fn submit(&mut self, selected: &str, mistakes: &mut MistakeLog) -> Submission {
        if self.cursor + 1 != self.history.len() {
            debug!("[Quiz] Ignoring submit while reviewing an earlier question");
            return Submission::Rejected;
        }
        if self.answers[self.cursor].is_some() {
            debug!("[Quiz] Question already answered");
            return Submission::Rejected;
        }

        let question = &self.history[self.cursor];
        self.answers[self.cursor] = Some(selected.to_string());
        if selected == question.correct {
            self.score += 1;
            Submission::Correct
        } else {
            mistakes.record(&question.word);
            Submission::Incorrect {
                correct: question.correct.clone(),
            }
        }
    }

    pub fn go_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn go_next(&mut self, jisho: &Jisho, rng: &mut impl Rng) -> Result<(), UnknownWordError> {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            Ok(())
        } else {
            self.advance(jisho, rng)
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&Question> {
        self.history.get(self.cursor)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(self.cursor)?.as_deref()
    }

    pub fn history(&self) -> &[Question] {
        &self.history
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
