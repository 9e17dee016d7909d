//! Core types for the quiz bank.

use serde::{Deserialize, Serialize};

/// Number of answers every question carries unless configured otherwise.
pub const DEFAULT_ANSWER_COUNT: usize = 5;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Answer texts in file order, labels stripped.
    pub answers: Vec<String>,
    /// 0-based index into `answers`.
    pub correct_answer: usize,
}

impl Question {
    /// Text of the correct answer.
    pub fn correct_answer_text(&self) -> Option<&str> {
        self.answers.get(self.correct_answer).map(String::as_str)
    }

    /// Letter of the correct answer (A, B, ...).
    pub fn correct_answer_label(&self) -> Option<char> {
        crate::parser::answer_label(self.correct_answer)
    }
}

/// A named group of consecutive questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub question_count: usize,
}

/// Result of parsing one quiz bank file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuizBank {
    pub questions: Vec<Question>,
    /// Empty unless `has_topics` is set.
    pub topics: Vec<Topic>,
    pub has_topics: bool,
}

impl ParsedQuizBank {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn has_topics(&self) -> bool {
        self.has_topics
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over each topic together with the questions that belong to it.
    ///
    /// Yields nothing for banks without topics.
    pub fn topic_sections(&self) -> impl Iterator<Item = (&Topic, &[Question])> {
        let mut start = 0;
        self.topics.iter().map(move |topic| {
            let end = (start + topic.question_count).min(self.questions.len());
            let section = &self.questions[start..end];
            start = end;
            (topic, section)
        })
    }
}

/// Quiz-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Questions drawn per quiz session.
    pub question_count: usize,
    /// Answers per question in the bank file.
    pub answer_count: usize,
    pub timer_minutes: u32,
    pub check_questions_update: bool,
    pub dark_mode: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: 16,
            answer_count: DEFAULT_ANSWER_COUNT,
            timer_minutes: 18,
            check_questions_update: true,
            dark_mode: false,
        }
    }
}
