use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::quiz::selection::select_set;
use crate::quiz::settings::Settings;
use crate::source;

mod extract;
mod normalize;
pub mod question;

pub use question::Question;

use self::extract::extract;
use self::normalize::normalize;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("could not read quiz source {path:?}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no content found in document")]
    EmptyContent,
    #[error("no valid questions found in the document, please check the document format")]
    NoValidQuestions,
}

/// Questions drawn for one quiz session. Never empty.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// The full pool of valid questions found in a document.
#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open<R: Rng + ?Sized>(source: &Path, rng: &mut R) -> Result<QuizDefinition, DefinitionError> {
        let raw = source::fetch(source)?;
        QuizDefinition::parse(&raw, rng)
    }

    pub fn parse<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Result<QuizDefinition, DefinitionError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(DefinitionError::EmptyContent);
        }

        let extraction = extract(&normalized, rng);
        if extraction.dropped() > 0 {
            warn!(
                "Skipped {} malformed question blocks out of {}",
                extraction.dropped(),
                extraction.segments
            );
        }
        if extraction.questions.is_empty() {
            return Err(DefinitionError::NoValidQuestions);
        }
        info!("Successfully parsed {} questions", extraction.questions.len());

        Ok(QuizDefinition {
            questions: extraction.questions,
        })
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn select<R: Rng + ?Sized>(&self, settings: &Settings, rng: &mut R) -> QuestionSet {
        let questions = select_set(
            &self.questions,
            settings.mode,
            settings.quick_count.get(),
            rng,
        );
        QuestionSet { questions }
    }
}

/// Runs the whole pipeline on extracted document text.
pub fn compile<R: Rng + ?Sized>(
    raw: &str,
    settings: &Settings,
    rng: &mut R,
) -> Result<QuestionSet, DefinitionError> {
    let definition = QuizDefinition::parse(raw, rng)?;
    Ok(definition.select(settings, rng))
}
