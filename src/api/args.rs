use std::collections::BTreeMap;
use std::env;
use thiserror::Error;

use crate::model::{FlagType, Value};
use crate::parser::{invoke, ConsoleInterface, Initializer, ParseError};
use crate::schema::{Schema, SchemaError};

/// A failure to construct [`Args`] from a schema and Cli tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// The schema string is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A Cli token does not fit the schema.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A typed query against [`Args`] that the schema does not support.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The flag is not declared, or is declared with a different type.
    #[error("flag '{flag}' is not declared as {expected}.")]
    OutOfRange { flag: char, expected: FlagType },
}

/// The parsed command line: flags declared by a schema, with their values from the Cli tokens.
///
/// ### Example
/// ```
/// use argschema::Args;
///
/// let args = Args::new("l,p#,d*", &["-l", "-p80", "-d/home/logs"]).unwrap();
///
/// assert!(args.get_boolean('l').unwrap());
/// assert_eq!(args.get_integer('p').unwrap(), 80);
/// assert_eq!(args.get_string('d').unwrap(), "/home/logs");
/// assert!(args.get_integer('l').is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    schema: Schema,
    values: BTreeMap<char, Value>,
}

impl Args {
    /// Compile the `schema` and apply the Cli tokens `args` onto it.
    ///
    /// Each token takes the shape `<marker><flag>[value]`, such as `-l`, `-p80` or `-d/home/logs`.
    /// Tokens are applied in order; when a flag repeats, the last token wins.
    ///
    /// Fails on a malformed schema, a malformed token, a flag not declared in the schema, or an integer flag value that does not parse.
    pub fn new<S: AsRef<str>>(schema: &str, args: &[S]) -> Result<Self, ArgsError> {
        Self::construct(schema, args).map_err(|(_, error)| error)
    }

    /// Construct, keeping the offset into the tokens of any parse failure.
    pub(crate) fn construct<S: AsRef<str>>(
        schema: &str,
        args: &[S],
    ) -> Result<Self, (Option<usize>, ArgsError)> {
        let schema = Schema::compile(schema).map_err(|error| (None, ArgsError::from(error)))?;
        let values = Initializer::new(&schema)
            .consume(args)
            .map_err(|(offset, error)| (Some(offset), ArgsError::from(error)))?;

        Ok(Self { schema, values })
    }

    /// Run against the input tokens, displaying any failure on stderr.
    ///
    /// If construction fails, the error is displayed (with the tokens and a caret under the point of failure), returning `Err(1)`.
    ///
    /// ### Example
    /// ```
    /// use argschema::Args;
    ///
    /// let args = Args::parse_tokens("v,n#", &["-v"]).unwrap();
    /// assert!(args.get_boolean('v').unwrap());
    ///
    /// let error_code = Args::parse_tokens("v,n#", &["-x"]).unwrap_err();
    /// assert_eq!(error_code, 1);
    /// ```
    pub fn parse_tokens<S: AsRef<str>>(schema: &str, tokens: &[S]) -> Result<Self, i32> {
        invoke(schema, tokens, &ConsoleInterface::default())
    }

    /// Run against the Cli [`env::args`] (excluding the program name).
    ///
    /// If construction fails, the error is displayed (with the tokens and a caret under the point of failure), exiting with error code `1` (via [`std::process::exit`]).
    pub fn parse(schema: &str) -> Self {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match Self::parse_tokens(schema, command_input.as_slice()) {
            Ok(args) => args,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    /// Whether the schema declares `flag`, regardless of whether it was supplied on the Cli.
    pub fn has(&self, flag: char) -> bool {
        self.schema.contains(flag)
    }

    /// The value of the boolean `flag`: `true` when supplied on the Cli.
    pub fn get_boolean(&self, flag: char) -> Result<bool, AccessError> {
        match self.values.get(&flag) {
            Some(Value::Boolean(value)) => Ok(*value),
            _ => Err(AccessError::OutOfRange {
                flag,
                expected: FlagType::Boolean,
            }),
        }
    }

    /// The value of the integer `flag`: `0` when not supplied on the Cli.
    pub fn get_integer(&self, flag: char) -> Result<i32, AccessError> {
        match self.values.get(&flag) {
            Some(Value::Integer(value)) => Ok(*value),
            _ => Err(AccessError::OutOfRange {
                flag,
                expected: FlagType::Integer,
            }),
        }
    }

    /// The value of the string `flag`: empty when not supplied on the Cli.
    pub fn get_string(&self, flag: char) -> Result<&str, AccessError> {
        match self.values.get(&flag) {
            Some(Value::String(value)) => Ok(value.as_str()),
            _ => Err(AccessError::OutOfRange {
                flag,
                expected: FlagType::String,
            }),
        }
    }

    /// The value of `flag` whatever its type, or `None` when the schema does not declare it.
    pub fn get(&self, flag: char) -> Option<&Value> {
        self.values.get(&flag)
    }

    /// The compiled schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
