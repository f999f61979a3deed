//! Multiple-choice quiz questions built from the catalog.
//!
//! Independent of the ledger: quiz answers never change word performance.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

use crate::config;
use crate::domain::VocabularyEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizKind {
  /// Prompt is a definition, options are words
  #[default]
  GuessWord,
  /// Prompt is a word, options are definitions
  GuessDefinition,
}

impl QuizKind {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "word" => Some(Self::GuessWord),
      "definition" => Some(Self::GuessDefinition),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::GuessWord => "word",
      Self::GuessDefinition => "definition",
    }
  }

  pub fn other(&self) -> Self {
    match self {
      Self::GuessWord => Self::GuessDefinition,
      Self::GuessDefinition => Self::GuessWord,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
  pub word_id: String,
  pub kind: QuizKind,
  pub prompt: String,
  /// Shuffled; exactly one equals `correct_answer`
  pub options: Vec<String>,
  pub correct_answer: String,
}

impl QuizQuestion {
  /// Exact match against the correct option
  pub fn is_correct(&self, answer: &str) -> bool {
    answer == self.correct_answer
  }
}

/// Build a question about `target`, or None when the catalog cannot supply
/// enough distinct distractors.
pub fn generate_question<R: Rng>(
  target: &VocabularyEntry,
  catalog: &[VocabularyEntry],
  kind: QuizKind,
  rng: &mut R,
) -> Option<QuizQuestion> {
  if catalog.len() < config::MIN_QUIZ_CATALOG {
    return None;
  }

  let (prompt, correct_answer) = match kind {
    QuizKind::GuessWord => {
      let definition = target.primary_definition()?;
      (format!("Which word means: \"{}\"", definition), target.word.clone())
    }
    QuizKind::GuessDefinition => {
      let definition = target.primary_definition()?;
      (
        format!("What is the definition of \"{}\"?", target.word),
        definition.to_string(),
      )
    }
  };

  let answer_of = |entry: &VocabularyEntry| -> Option<String> {
    match kind {
      QuizKind::GuessWord => Some(entry.word.clone()).filter(|w| !w.trim().is_empty()),
      QuizKind::GuessDefinition => entry.primary_definition().map(str::to_string),
    }
  };

  // Distinct usable strings, never equal to the correct answer
  let mut seen = HashSet::new();
  seen.insert(correct_answer.clone());
  let pool: Vec<String> = catalog
    .iter()
    .filter(|e| e.id != target.id)
    .filter_map(answer_of)
    .filter(|s| seen.insert(s.clone()))
    .collect();

  if pool.len() < config::DISTRACTOR_COUNT {
    return None;
  }

  let mut options: Vec<String> = pool
    .choose_multiple(rng, config::DISTRACTOR_COUNT)
    .cloned()
    .collect();
  options.push(correct_answer.clone());
  options.shuffle(rng);

  Some(QuizQuestion {
    word_id: target.id.clone(),
    kind,
    prompt,
    options,
    correct_answer,
  })
}

/// Draw a target uniformly from the catalog and build a question for it.
///
/// Targets without a usable question are skipped.
pub fn random_question<R: Rng>(
  catalog: &[VocabularyEntry],
  kind: QuizKind,
  rng: &mut R,
) -> Option<QuizQuestion> {
  if catalog.len() < config::MIN_QUIZ_CATALOG {
    return None;
  }
  let mut order: Vec<&VocabularyEntry> = catalog.iter().collect();
  order.shuffle(rng);
  order
    .into_iter()
    .find_map(|target| generate_question(target, catalog, kind, rng))
}

/// Running quiz score for one browser session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizScore {
  pub answered: u32,
  pub correct: u32,
}

impl QuizScore {
  pub fn record(&mut self, was_correct: bool) {
    self.answered += 1;
    if was_correct {
      self.correct += 1;
    }
  }

  pub fn accuracy_percent(&self) -> u32 {
    if self.answered == 0 {
      return 0;
    }
    (self.correct as f64 / self.answered as f64 * 100.0).round() as u32
  }
}
