use anyhow::{anyhow, Result};
use log::info;

use self::definition::{Question, QuestionSet};
use crate::output::{Message, QuizOutput};

pub mod definition;
pub mod selection;
pub mod settings;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub selection: Vec<String>,
    pub is_correct: bool,
}

#[derive(Debug)]
enum Phase {
    Question {
        index: usize,
        answer: Option<AnswerResult>,
    },
    Results,
}

/// One run through a question set: answers, score and navigation.
pub struct Quiz<O: QuizOutput> {
    questions: QuestionSet,
    current_phase: Phase,
    score: usize,
    output: O,
}

impl<O: QuizOutput> Quiz<O> {
    pub fn new(questions: QuestionSet, output: O) -> Self {
        let mut quiz = Quiz {
            questions,
            current_phase: Phase::Results,
            score: 0,
            output,
        };
        quiz.begin_question(0);
        quiz
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.current_phase, Phase::Results)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::Question { index, .. } => self.questions.get_questions().get(*index),
            Phase::Results => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(
            self.current_phase,
            Phase::Question {
                answer: Some(_),
                ..
            }
        )
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    fn begin_question(&mut self, index: usize) {
        self.set_current_phase(Phase::Question {
            index,
            answer: None,
        });
        if let Some(question) = self.questions.get_questions().get(index) {
            self.output.say(&Message::QuestionBegins {
                number: index + 1,
                total: self.questions.len(),
                question: question.clone(),
            });
        }
    }

    fn show_results(&mut self) {
        self.set_current_phase(Phase::Results);
        self.output.say(&Message::QuizResults {
            score: self.score,
            total: self.questions.len(),
        });
    }

    pub fn answer(&mut self, selection: &[String]) -> Result<AnswerResult> {
        let question = match &self.current_phase {
            Phase::Question { answer: Some(_), .. } => {
                return Err(anyhow!("This question was already answered"))
            }
            Phase::Question { index, .. } => self
                .questions
                .get_questions()
                .get(*index)
                .ok_or_else(|| anyhow!("There is no active question"))?
                .clone(),
            Phase::Results => return Err(anyhow!("There is no active question")),
        };

        if selection.is_empty() {
            return Err(anyhow!("Select at least one option"));
        }
        if let Some(unknown) = selection.iter().find(|s| !question.options.contains(*s)) {
            return Err(anyhow!("{:?} is not an option of this question", unknown));
        }

        let answer_result = AnswerResult {
            selection: selection.to_vec(),
            is_correct: question.is_selection_correct(selection),
        };
        if answer_result.is_correct {
            self.score += 1;
            self.output.say(&Message::AnswerCorrect(question));
        } else {
            self.output.say(&Message::AnswerIncorrect(question));
        }

        if let Phase::Question { answer, .. } = &mut self.current_phase {
            *answer = Some(answer_result.clone());
        }
        Ok(answer_result)
    }

    pub fn next(&mut self) -> Result<()> {
        let index = match &self.current_phase {
            Phase::Question {
                index,
                answer: Some(_),
            } => *index,
            Phase::Question { answer: None, .. } => {
                return Err(anyhow!("Answer the current question before moving on"))
            }
            Phase::Results => return Err(anyhow!("The quiz is over")),
        };
        if index + 1 < self.questions.len() {
            self.begin_question(index + 1);
        } else {
            self.show_results();
        }
        Ok(())
    }

    pub fn end(&mut self) -> Result<()> {
        if self.is_over() {
            return Err(anyhow!("The quiz is over"));
        }
        self.show_results();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.begin_question(0);
    }
}
