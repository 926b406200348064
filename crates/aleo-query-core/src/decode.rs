//! Response decoding shared by every client operation.
//!
//! The node answers in one of three shapes: a JSON document (blocks,
//! transactions, string lists), a JSON string literal that arrives wrapped in
//! literal `"` characters (hashes, ids, roots, program source), or bare
//! decimal digits (heights, peer count). Each shape is a [`ResponseShape`]
//! so an operation names the shape it expects instead of repeating the
//! interpretation inline.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::QueryError;

/// Interpretation of a raw response body.
pub trait ResponseShape: Sized {
    /// `target` names the expected value in error messages.
    fn decode(target: &'static str, body: &str) -> Result<Self, QueryError>;
}

/// Structured JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: DeserializeOwned> ResponseShape for Json<T> {
    fn decode(target: &'static str, body: &str) -> Result<Self, QueryError> {
        serde_json::from_str(body)
            .map(Json)
            .map_err(|source| QueryError::Decode {
                target,
                body: body.to_owned(),
                source,
            })
    }
}

/// Body holding a string scalar, possibly wrapped in one pair of quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quoted(pub String);

impl ResponseShape for Quoted {
    fn decode(target: &'static str, body: &str) -> Result<Self, QueryError> {
        if body.is_empty() {
            return Err(malformed(target, body, "empty body"));
        }
        Ok(Quoted(unquote(body).to_owned()))
    }
}

/// Body holding an unsigned integer as plain decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits<T>(pub T);

impl<T> ResponseShape for Digits<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn decode(target: &'static str, body: &str) -> Result<Self, QueryError> {
        let digits = body.trim();
        if digits.is_empty() {
            return Err(malformed(target, body, "empty body"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(target, body, "expected decimal digits"));
        }
        digits
            .parse::<T>()
            .map(Digits)
            .map_err(|e| malformed(target, body, &e.to_string()))
    }
}

/// Body passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque(pub String);

impl ResponseShape for Opaque {
    fn decode(_target: &'static str, body: &str) -> Result<Self, QueryError> {
        Ok(Opaque(body.to_owned()))
    }
}

/// Strip exactly one leading and one trailing `"` when both are present.
///
/// Bodies shorter than two bytes, including the empty body, are returned
/// unchanged.
pub fn unquote(body: &str) -> &str {
    if body.len() >= 2 && body.starts_with('"') && body.ends_with('"') {
        &body[1..body.len() - 1]
    } else {
        body
    }
}

/// Split unquoted program source on the two-character escape `\n`.
pub fn split_program_lines(source: &str) -> Vec<String> {
    source.split("\\n").map(str::to_owned).collect()
}

fn malformed(target: &'static str, body: &str, reason: &str) -> QueryError {
    QueryError::MalformedScalar {
        target,
        body: body.to_owned(),
        reason: reason.to_owned(),
    }
}
