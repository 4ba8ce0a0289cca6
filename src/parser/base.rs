use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::Value;
use crate::schema::Schema;
use crate::tokens::{Token, FLAG_POSITION, VALUE_POSITION};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A Cli token that does not fit the compiled schema.
///
/// Each variant records the `index` of the offending token within the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token is too short to hold a marker and a flag identifier.
    #[error("Parse error: malformed token '{token}' (expected a marker followed by a flag).")]
    MalformedToken { index: usize, token: String },

    /// The token names a flag the schema does not declare.
    #[error("Parse error: unknown flag '{flag}'.")]
    UnknownFlag { index: usize, flag: char },

    /// The token value for an integer flag is not a base-10 integer.
    #[error("Parse error: '{value}' cannot convert to an integer for flag '{flag}'.")]
    InvalidInteger {
        index: usize,
        flag: char,
        value: String,
    },
}

impl ParseError {
    /// The index of the offending token within the input.
    pub fn index(&self) -> usize {
        match self {
            ParseError::MalformedToken { index, .. }
            | ParseError::UnknownFlag { index, .. }
            | ParseError::InvalidInteger { index, .. } => *index,
        }
    }
}

/// Applies Cli tokens onto the flag values of a compiled schema.
#[derive(Debug)]
pub(crate) struct Initializer {
    values: BTreeMap<char, Value>,
}

impl Initializer {
    /// Seed every declared flag with the initial value of its type.
    pub(crate) fn new(schema: &Schema) -> Self {
        Self {
            values: schema
                .flags()
                .map(|(flag, flag_type)| (flag, flag_type.initial()))
                .collect(),
        }
    }

    /// Apply the tokens in order, later tokens overwriting earlier ones for the same flag.
    ///
    /// On failure, returns the error alongside its character offset into the concatenated tokens.
    pub(crate) fn consume<S: AsRef<str>>(
        self,
        tokens: &[S],
    ) -> Result<BTreeMap<char, Value>, (usize, ParseError)> {
        let Initializer { mut values } = self;
        let mut fed = 0;

        for (index, raw) in tokens.iter().enumerate() {
            let raw: &str = raw.as_ref();
            let token = Token::decompose(raw).ok_or_else(|| {
                (
                    fed,
                    ParseError::MalformedToken {
                        index,
                        token: raw.to_string(),
                    },
                )
            })?;

            match values.get_mut(&token.flag) {
                // Any trailing value on a boolean flag is ignored.
                Some(Value::Boolean(value)) => *value = true,
                Some(Value::Integer(value)) => {
                    *value = token.value.parse::<i32>().map_err(|_| {
                        (
                            fed + VALUE_POSITION,
                            ParseError::InvalidInteger {
                                index,
                                flag: token.flag,
                                value: token.value.to_string(),
                            },
                        )
                    })?;
                }
                Some(Value::String(value)) => *value = token.value.to_string(),
                None => {
                    return Err((
                        fed + FLAG_POSITION,
                        ParseError::UnknownFlag {
                            index,
                            flag: token.flag,
                        },
                    ));
                }
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Applied token '{raw}' onto flag '{}'.", token.flag);
            }

            fed += raw.chars().count();
        }

        Ok(values)
    }
}
