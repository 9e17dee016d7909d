//! Core quiz bank library.
//!
//! Provides:
//! - Line-oriented parser for plain-text quiz bank files
//! - Topic name normalization and answer letter mapping
//! - Shared types (Question, Topic, ParsedQuizBank, QuizSettings)
//! - Line-by-line comparison of two bank files

pub mod compare;
pub mod error;
pub mod parser;
pub mod types;

pub use compare::{first_difference, first_difference_files};
pub use error::{ParseError, Result};
pub use parser::{answer_index, answer_label, normalize_topic_name, parse, parse_str, TOPIC_MARKER};
pub use types::{ParsedQuizBank, Question, QuizSettings, Topic, DEFAULT_ANSWER_COUNT};
