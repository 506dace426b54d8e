//! Difficulty levels and their built-in question sets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{QuizError, Result};
use crate::question::{MultipleChoiceQuestion, Question, QuestionDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }

    /// The fixed question set for this level, in presentation order.
    pub fn questions(&self) -> Vec<Question> {
        let table: &[(&str, [&str; 4], usize)] = match self {
            Level::Easy => &EASY[..],
            Level::Medium => &MEDIUM[..],
            Level::Hard => &HARD[..],
        };

        table
            .iter()
            .map(|(prompt, options, correct)| {
                Question::from(builtin(prompt, options, *correct))
            })
            .collect()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            _ => Err(QuizError::UnknownLevel(s.to_string())),
        }
    }
}

/// Questions for a level label; an unrecognized label yields no questions.
pub fn build_questions(level: &str) -> Vec<Question> {
    level
        .parse::<Level>()
        .map(|level| level.questions())
        .unwrap_or_default()
}

/// Resolve a level label against configured levels first, then built-ins.
///
/// Configured level names match ignoring ASCII case. Unlike
/// [`build_questions`], an unknown label is an error.
pub fn resolve_questions(
    level: &str,
    custom: &BTreeMap<String, Vec<QuestionDef>>,
) -> Result<Vec<Question>> {
    if let Some((_, defs)) = custom.iter().find(|(name, _)| name.eq_ignore_ascii_case(level)) {
        return defs.iter().map(Question::try_from).collect();
    }

    level.parse::<Level>().map(|level| level.questions())
}

const BUILTIN_POINTS: u32 = 2;

fn builtin(prompt: &str, options: &[&str; 4], correct: usize) -> MultipleChoiceQuestion {
    let options = options.iter().map(|o| o.to_string()).collect();
    match MultipleChoiceQuestion::new(prompt, BUILTIN_POINTS, options, correct) {
        Ok(q) => q,
        // Fixture tables are checked by tests below
        Err(err) => unreachable!("built-in question is malformed: {}", err),
    }
}

const EASY: [(&str, [&str; 4], usize); 5] = [
    (
        "Who is Mickey Mouse's Sister?",
        ["Minnie Mouse", "Daisy Duck", "Donald Duck", "Goofy"],
        1,
    ),
    (
        "Which planet is closest to the Sun?",
        ["Venus", "Mars", "Mercury", "Earth"],
        3,
    ),
    (
        "What is the largest ocean on Earth?",
        ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
        4,
    ),
    (
        "What do caterpillars turn into?",
        ["Butterflies", "Moths", "Dragonflies", "Bees"],
        1,
    ),
    (
        "How many continents are there on Earth?",
        ["6", "7", "5", "8"],
        2,
    ),
];

const MEDIUM: [(&str, [&str; 4], usize); 5] = [
    (
        "Who painted the Mona Lisa?",
        ["Leonardo da Vinci", "Michelangelo", "Vincent van Gogh", "Pablo Picasso"],
        1,
    ),
    (
        "What is the largest planet in our solar system?",
        ["Mars", "Jupiter", "Saturn", "Uranus"],
        2,
    ),
    (
        "Which famous scientist developed the theory of relativity?",
        ["Isaac Newton", "Albert Einstein", "Galileo Galilei", "Stephen Hawking"],
        2,
    ),
    (
        "What is the main component of Earth's atmosphere?",
        ["Oxygen", "Nitrogen", "Carbon Dioxide", "Helium"],
        2,
    ),
    (
        "What year did the Titanic sink?",
        ["1910", "1912", "1914", "1916"],
        2,
    ),
];

const HARD: [(&str, [&str; 4], usize); 5] = [
    (
        "Which chemical element has the symbol 'Sn'?",
        ["Tin", "Titanium", "Tungsten", "Thallium"],
        1,
    ),
    (
        "Who wrote the novel 'War and Peace'?",
        ["Leo Tolstoy", "Fyodor Dostoevsky", "Anton Chekhov", "Ivan Turgenev"],
        1,
    ),
    (
        "What is the only planet in our solar system known to support life?",
        ["Mars", "Earth", "Venus", "Jupiter"],
        2,
    ),
    (
        "Who painted the famous painting 'The Scream'?",
        ["Edvard Munch", "Vincent van Gogh", "Pablo Picasso", "Claude Monet"],
        1,
    ),
    (
        "In what year did World War II end?",
        ["1943", "1945", "1947", "1950"],
        2,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_five_two_point_questions() {
        for level in Level::ALL {
            let questions = level.questions();
            assert_eq!(questions.len(), 5, "{}", level);
            assert!(questions.iter().all(|q| q.points() == 2));
        }
    }

    #[test]
    fn test_build_questions_is_case_insensitive() {
        assert_eq!(build_questions("EASY"), build_questions("easy"));
        assert_eq!(build_questions("Hard").len(), 5);
        assert_eq!(
            build_questions("medium")[0].prompt(),
            "Who painted the Mona Lisa?"
        );
    }

    #[test]
    fn test_unknown_level_builds_nothing() {
        assert!(build_questions("unknown").is_empty());
        assert!(build_questions("").is_empty());
    }

    #[test]
    fn test_level_parse_error() {
        let err = "expert".parse::<Level>().unwrap_err();
        assert!(matches!(err, QuizError::UnknownLevel(ref l) if l == "expert"));
    }

    #[test]
    fn test_easy_correct_answers() {
        let answers: Vec<_> = Level::Easy
            .questions()
            .iter()
            .map(|q| q.correct_answer_text().to_string())
            .collect();
        assert_eq!(
            answers,
            vec!["Minnie Mouse", "Mercury", "Pacific Ocean", "Butterflies", "7"]
        );
    }

    #[test]
    fn test_resolve_prefers_custom_levels() {
        let mut custom = BTreeMap::new();
        custom.insert(
            "Easy".to_string(),
            vec![QuestionDef {
                prompt: "Custom?".to_string(),
                points: 5,
                options: vec!["yes".to_string(), "no".to_string()],
                correct: 1,
            }],
        );

        let questions = resolve_questions("easy", &custom).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].points(), 5);

        let builtin = resolve_questions("hard", &custom).unwrap();
        assert_eq!(builtin.len(), 5);
    }

    #[test]
    fn test_resolve_unknown_level_is_error() {
        let err = resolve_questions("nope", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, QuizError::UnknownLevel(_)));
    }

    #[test]
    fn test_resolve_reports_malformed_custom_question() {
        let mut custom = BTreeMap::new();
        custom.insert(
            "broken".to_string(),
            vec![QuestionDef {
                prompt: "Bad".to_string(),
                points: 1,
                options: vec!["only".to_string()],
                correct: 2,
            }],
        );
        let err = resolve_questions("broken", &custom).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion(_)));
    }
}
