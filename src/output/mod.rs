use crate::quiz::definition::Question;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerCorrect(Question),
    AnswerIncorrect(Question),
    InvalidSelection,
    LoadFailed(String),
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
    },
    QuizLoaded(usize),
    QuizResults {
        score: usize,
        total: usize,
    },
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
