use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_GUESS_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

fn sanitize(answer: &str) -> String {
    let answer = unidecode(answer);
    FORBIDDEN_GUESS_CHARACTERS_REGEX
        .replace_all(&answer.to_lowercase(), "")
        .into()
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_options: BTreeSet<String>,
    pub is_multi_answer: bool,
}

impl Question {
    pub fn new(stem: String, options: Vec<String>, correct_options: BTreeSet<String>) -> Self {
        let is_multi_answer = correct_options.len() > 1;
        Question {
            stem,
            options,
            correct_options,
            is_multi_answer,
        }
    }

    pub fn is_correct_option(&self, option: &str) -> bool {
        self.correct_options.contains(option)
    }

    /// A selection is correct when it names exactly the answer key, no more and
    /// no less.
    pub fn is_selection_correct(&self, selection: &[String]) -> bool {
        let selected: BTreeSet<&str> = selection.iter().map(|s| s.as_str()).collect();
        let expected: BTreeSet<&str> = self.correct_options.iter().map(|s| s.as_str()).collect();
        selected == expected
    }

    /// Reads user input such as `2`, `1, 3` or `paris` into a list of options.
    /// Numbers are 1-based option positions; anything else is matched against
    /// option texts, ignoring case, accents and punctuation.
    pub fn parse_selection(&self, input: &str) -> Option<Vec<String>> {
        let mut selection: Vec<String> = Vec::new();
        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let option = match token.parse::<usize>() {
                Ok(position) => self.options.get(position.checked_sub(1)?)?,
                Err(_) => self.find_option(token)?,
            };
            if !selection.contains(option) {
                selection.push(option.clone());
            }
        }
        if selection.is_empty() {
            None
        } else {
            Some(selection)
        }
    }

    fn find_option(&self, guess: &str) -> Option<&String> {
        let sanitized_guess = sanitize(guess);
        if sanitized_guess.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|option| sanitize(option) == sanitized_guess)
    }
}
