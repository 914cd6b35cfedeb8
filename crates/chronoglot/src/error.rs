//! Error types for phrase resolution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,

    #[error("Number out of range: {0}")]
    NumberRange(String),

    #[error("Invalid calendar date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: i32 },

    #[error("Invalid clock time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("Invalid UTC offset: {0} hours")]
    InvalidOffset(i32),
}

pub type Result<T> = std::result::Result<T, ParseError>;
