use itertools::Itertools;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Question;

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    fn describe_answer_key(question: &Question) -> String {
        question
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| question.is_correct_option(option))
            .map(|(index, option)| format!("{}. {}", index + 1, option))
            .join(", ")
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuizLoaded(count) => format!("Loaded {} questions.", count),
            LoadFailed(reason) => format!("Error loading questions:\n{}", reason),
            QuestionBegins {
                number,
                total,
                question,
            } => {
                let options = question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| format!("  {}. {}", index + 1, option))
                    .join("\n");
                let hint = if question.is_multi_answer {
                    "Select all that apply, e.g. `1,3`. Type `end` to finish early."
                } else {
                    "Type the number or the text of your answer, or `end` to finish early."
                };
                format!(
                    "\nQuestion {} of {}\n{}\n{}\n{}",
                    number, total, question.stem, options, hint
                )
            }
            AnswerCorrect(_) => "✅ Correct! Press enter to continue.".into(),
            AnswerIncorrect(question) => format!(
                "❌ Incorrect. The answer was: {}\nPress enter to continue.",
                Self::describe_answer_key(question)
            ),
            InvalidSelection => "That is not one of the options, try again.".into(),
            QuizResults { score, total } => {
                let percentage = if *total == 0 {
                    0
                } else {
                    score * 100 / total
                };
                format!(
                    "\n📈 Quiz complete! You scored {} out of {} ({}%).",
                    score, total, percentage
                )
            }
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Pick primes".to_owned(),
            vec!["4".to_owned(), "3".to_owned(), "2".to_owned()],
            vec!["2".to_owned(), "3".to_owned()].into_iter().collect(),
        )
    }

    #[test]
    fn lists_numbered_options() {
        let text = TerminalOutput.interpret_message(&Message::QuestionBegins {
            number: 2,
            total: 10,
            question: question(),
        });
        assert!(text.contains("Question 2 of 10"));
        assert!(text.contains("  1. 4\n  2. 3\n  3. 2"));
        assert!(text.contains("Select all that apply"));
    }

    #[test]
    fn reveals_answer_key_in_option_order() {
        let text = TerminalOutput.interpret_message(&Message::AnswerIncorrect(question()));
        assert!(text.contains("2. 3, 3. 2"));
    }

    #[test]
    fn reports_percentage() {
        let text = TerminalOutput.interpret_message(&Message::QuizResults { score: 3, total: 4 });
        assert!(text.contains("3 out of 4 (75%)"));
    }
}
