//! Line-oriented parser for quiz bank files.
//!
//! # Format
//! ```text
//! @Math
//! What is 2+2?
//! A. 3
//! B. 4
//! C. 5
//! D. 6
//! E. 7
//! B
//!
//! @History
//! ...
//! ```
//!
//! The topic line is optional, but if the first non-blank line is not a topic
//! then no later line may be one. Each prompt is followed by exactly
//! `answer_count` answer lines and one line holding the correct letter.

use crate::error::{ParseError, Result};
use crate::types::{ParsedQuizBank, Question, Topic};
use std::io::BufRead;

/// Leading character of a topic line.
pub const TOPIC_MARKER: char = '@';

const ANSWER_LABELS: std::ops::RangeInclusive<char> = 'A'..='Z';
const MAX_ANSWER_COUNT: usize = 26;

/// Parse a quiz bank from a line source.
///
/// The reader is read to the end but never closed; pass `&mut reader` to keep
/// ownership of it.
pub fn parse<R: BufRead>(reader: R, answer_count: usize) -> Result<ParsedQuizBank> {
    if answer_count == 0 || answer_count > MAX_ANSWER_COUNT {
        return Err(ParseError::InvalidArgument(format!(
            "answer count must be between 1 and {}, got {}",
            MAX_ANSWER_COUNT, answer_count
        )));
    }

    let mut lines = LineCursor::new(reader);
    let mut bank = BankBuilder::default();

    while let Some(line) = lines.next_line()? {
        let prompt = match LineType::of(&line) {
            LineType::Blank => continue,
            LineType::Topic(raw) if !bank.started => {
                bank.open_topic(raw);
                continue;
            }
            LineType::Topic(raw) if bank.has_topics => {
                bank.open_topic(raw);
                // The prompt always sits on the line right after a topic.
                match lines.next_line()? {
                    Some(prompt) => prompt,
                    None => break,
                }
            }
            LineType::Topic(_) => {
                return Err(ParseError::MalformedTopicDeclaration {
                    line: lines.number(),
                })
            }
            LineType::Prompt => line,
        };

        let question = parse_question(prompt, &mut lines, answer_count)?;
        bank.push(question);
    }

    let bank = bank.finish();
    tracing::debug!(
        questions = bank.questions.len(),
        topics = bank.topics.len(),
        "parsed quiz bank"
    );
    Ok(bank)
}

/// Parse a quiz bank held in memory.
pub fn parse_str(content: &str, answer_count: usize) -> Result<ParsedQuizBank> {
    parse(content.as_bytes(), answer_count)
}

/// Strip everything but letters and whitespace from a topic line, then trim.
pub fn normalize_topic_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    kept.trim().to_string()
}

/// Letter labelling the answer at `index` (0 -> 'A').
pub fn answer_label(index: usize) -> Option<char> {
    let mut labels = ANSWER_LABELS;
    labels.nth(index)
}

/// Position of `label` among the first `answer_count` letters ('A' -> 0).
pub fn answer_index(label: char, answer_count: usize) -> Option<usize> {
    ANSWER_LABELS.take(answer_count).position(|l| l == label)
}

fn parse_question<R: BufRead>(
    prompt: String,
    lines: &mut LineCursor<R>,
    answer_count: usize,
) -> Result<Question> {
    let mut answers = Vec::with_capacity(answer_count);

    for letter in ANSWER_LABELS.take(answer_count) {
        let line = lines.next_line()?;
        let text = line
            .as_deref()
            .and_then(answer_text)
            .ok_or(ParseError::InvalidAnswerLine {
                line: lines.number(),
                letter,
            })?;
        answers.push(text.to_string());
    }

    let line = lines.next_line()?;
    let correct_answer = line
        .as_deref()
        .and_then(single_char)
        .and_then(|c| answer_index(c, answer_count))
        .ok_or(ParseError::InvalidCorrectAnswerLine {
            line: lines.number(),
        })?;

    Ok(Question {
        prompt,
        answers,
        correct_answer,
    })
}

/// Text after the first `". "`, if any and not blank.
fn answer_text(line: &str) -> Option<&str> {
    let (_label, text) = line.split_once(". ")?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn single_char(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        _ => None,
    }
}

/// Reads lines and tracks the 1-based number of the last one requested.
struct LineCursor<R> {
    lines: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> LineCursor<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }

    /// Next line, or `None` at end of stream. The counter advances either way
    /// so a missing line is reported where it was expected.
    fn next_line(&mut self) -> Result<Option<String>> {
        self.number += 1;
        Ok(self.lines.next().transpose()?)
    }

    fn number(&self) -> usize {
        self.number
    }
}

#[derive(Default)]
struct BankBuilder {
    questions: Vec<Question>,
    topics: Vec<Topic>,
    has_topics: bool,
    /// Set once the first non-blank line has been seen.
    started: bool,
}

impl BankBuilder {
    fn open_topic(&mut self, raw: &str) {
        if !self.started {
            self.has_topics = true;
            self.started = true;
        }
        self.topics.push(Topic {
            name: normalize_topic_name(raw),
            question_count: 0,
        });
    }

    fn push(&mut self, question: Question) {
        self.started = true;
        if let Some(topic) = self.topics.last_mut() {
            topic.question_count += 1;
        }
        self.questions.push(question);
    }

    fn finish(self) -> ParsedQuizBank {
        ParsedQuizBank {
            questions: self.questions,
            topics: self.topics,
            has_topics: self.has_topics,
        }
    }
}

enum LineType<'a> {
    Blank,
    Topic(&'a str),
    Prompt,
}

impl<'a> LineType<'a> {
    fn of(line: &'a str) -> Self {
        if line.trim().is_empty() {
            LineType::Blank
        } else if let Some(rest) = line.strip_prefix(TOPIC_MARKER) {
            LineType::Topic(rest)
        } else {
            LineType::Prompt
        }
    }
}
