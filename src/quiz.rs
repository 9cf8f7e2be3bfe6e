// src/quiz.rs
//! Four-question personality assessment producing an MBTI-style type code

use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use crate::core::ProfileStore;
use crate::error::{GuideError, QuizError};
use crate::views::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub text: &'static str,
    pub value: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: [QuizOption; 2],
}

impl Question {
    pub fn offers(&self, value: char) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

pub const QUESTIONS: [Question; 4] = [
    Question {
        id: 1,
        text: "How do you prefer to work?",
        options: [
            QuizOption { text: "Independently, focusing on my own tasks", value: 'I' },
            QuizOption { text: "In a team, collaborating with others", value: 'E' },
        ],
    },
    Question {
        id: 2,
        text: "When solving problems, you tend to:",
        options: [
            QuizOption { text: "Focus on concrete facts and details", value: 'S' },
            QuizOption { text: "Consider abstract theories and possibilities", value: 'N' },
        ],
    },
    Question {
        id: 3,
        text: "When making decisions, you usually:",
        options: [
            QuizOption { text: "Base them on logic and objective analysis", value: 'T' },
            QuizOption { text: "Consider how they affect people and values", value: 'F' },
        ],
    },
    Question {
        id: 4,
        text: "In your work environment, you prefer:",
        options: [
            QuizOption { text: "A structured, planned approach", value: 'J' },
            QuizOption { text: "Flexibility and spontaneity", value: 'P' },
        ],
    },
];

/// Type code such as `INTJ`: one valid axis letter per question, in question order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalityType(String);

impl PersonalityType {
    pub fn parse(code: &str) -> Result<Self, QuizError> {
        let letters: Vec<char> = code.chars().collect();
        let valid = letters.len() == QUESTIONS.len()
            && letters
                .iter()
                .zip(QUESTIONS.iter())
                .all(|(letter, question)| question.offers(*letter));

        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(QuizError::InvalidPersonalityType(code.to_string()))
        }
    }

    fn from_answers(answers: &AnswerSet) -> Option<Self> {
        if !answers.is_complete() {
            return None;
        }
        Some(Self(answers.values().collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chosen option value per question index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(BTreeMap<usize, char>);

impl AnswerSet {
    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        (0..QUESTIONS.len()).all(|index| self.0.contains_key(&index))
    }

    /// Values in question order
    pub fn values(&self) -> impl Iterator<Item = char> + '_ {
        self.0.values().copied()
    }

    fn record(&mut self, index: usize, value: char) {
        self.0.insert(index, value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    Answering(usize),
    Complete(PersonalityType),
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    state: QuizState,
    answers: AnswerSet,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            state: QuizState::Answering(0),
            answers: AnswerSet::default(),
        }
    }

    /// Rebuild an engine by replaying already confirmed answers, e.g. `"IN"` lands on question 3.
    pub fn resume(confirmed: &str) -> Result<Self, QuizError> {
        let mut engine = Self::new();
        for value in confirmed.chars() {
            engine.select(value)?;
            engine.advance()?;
        }
        Ok(engine)
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Answering(index) => Some(index),
            QuizState::Complete(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.current_index().map(|index| &QUESTIONS[index])
    }

    /// Answer for the current question, if one was picked
    pub fn current_answer(&self) -> Option<char> {
        self.current_index().and_then(|index| self.answers.get(index))
    }

    /// Answers confirmed by advancing, in order
    pub fn confirmed(&self) -> String {
        let upto = self.current_index().unwrap_or(QUESTIONS.len());
        self.answers.values().take(upto).collect()
    }

    pub fn personality_type(&self) -> Option<&PersonalityType> {
        match &self.state {
            QuizState::Complete(personality) => Some(personality),
            QuizState::Answering(_) => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete(_))
    }

    pub fn progress_percent(&self) -> u8 {
        match self.state {
            QuizState::Answering(index) => (((index + 1) * 100) / QUESTIONS.len()) as u8,
            QuizState::Complete(_) => 100,
        }
    }

    /// Record or overwrite the answer for the current question. Does not advance.
    pub fn select(&mut self, value: char) -> Result<(), QuizError> {
        let index = self.current_index().ok_or(QuizError::AlreadyComplete)?;
        let question = &QUESTIONS[index];

        if !question.offers(value) {
            return Err(QuizError::InvalidOption {
                question: question.id,
                value: value.to_string(),
            });
        }

        debug!("Question {} answered with {}", question.id, value);
        self.answers.record(index, value);
        Ok(())
    }

    pub fn advance(&mut self) -> Result<&QuizState, QuizError> {
        let index = self.current_index().ok_or(QuizError::AlreadyComplete)?;

        if self.answers.get(index).is_none() {
            return Err(QuizError::Unanswered { index });
        }

        self.state = if index + 1 < QUESTIONS.len() {
            QuizState::Answering(index + 1)
        } else {
            let personality =
                PersonalityType::from_answers(&self.answers).ok_or(QuizError::Incomplete)?;
            info!("Personality assessment complete: {}", personality);
            QuizState::Complete(personality)
        };

        Ok(&self.state)
    }

    /// Persist the result and hand over to the dashboard
    pub fn finish<S>(&self, store: &S) -> Result<Route, GuideError>
    where
        S: ProfileStore + ?Sized,
    {
        let personality = self.personality_type().ok_or(QuizError::Incomplete)?;
        store.save_personality_type(personality)?;
        Ok(Route::Dashboard)
    }
}
