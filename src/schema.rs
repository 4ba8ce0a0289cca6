use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

use crate::model::FlagType;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const DESCRIPTOR_SEPARATOR: char = ',';

/// A malformed schema string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The second character of a descriptor is neither `#` nor `*`.
    #[error("Schema error: invalid flag type '{marker}' in descriptor '{descriptor}'.")]
    InvalidFlagType { descriptor: String, marker: char },

    /// A descriptor longer than a flag identifier plus one type marker.
    #[error("Schema error: invalid descriptor '{descriptor}' (expected a flag, optionally followed by '#' or '*').")]
    InvalidDescriptor { descriptor: String },

    /// An empty descriptor, from a leading, trailing or repeated ','.
    #[error("Schema error: empty descriptor at position {position}.")]
    EmptyDescriptor { position: usize },

    /// The same flag identifier declared more than once.
    #[error("Schema error: cannot duplicate the flag '{flag}'.")]
    DuplicateFlag { flag: char },
}

/// The compiled schema: which flags are legal and what type each holds.
///
/// ### Example
/// ```
/// use argschema::{FlagType, Schema};
///
/// let schema = Schema::compile("l,p#,d*").unwrap();
/// assert_eq!(schema.flag_type('l'), Some(FlagType::Boolean));
/// assert_eq!(schema.flag_type('p'), Some(FlagType::Integer));
/// assert_eq!(schema.flag_type('d'), Some(FlagType::String));
/// assert_eq!(schema.flag_type('x'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    flags: BTreeMap<char, FlagType>,
}

impl Schema {
    /// Compile a schema string of comma separated descriptors.
    ///
    /// Each descriptor is a single character flag identifier, optionally followed by a type marker:
    /// * `c`: a boolean flag.
    /// * `c#`: an integer flag.
    /// * `c*`: a string flag.
    pub fn compile(schema: &str) -> Result<Self, SchemaError> {
        let mut flags = BTreeMap::default();

        for (position, descriptor) in schema.split(DESCRIPTOR_SEPARATOR).enumerate() {
            let (flag, flag_type) = compile_descriptor(position, descriptor)?;

            if flags.insert(flag, flag_type).is_some() {
                return Err(SchemaError::DuplicateFlag { flag });
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Declared flag '{flag}' as {flag_type}.");
            }
        }

        Ok(Self { flags })
    }

    /// The declared type of `flag`, or `None` when the schema does not declare it.
    pub fn flag_type(&self, flag: char) -> Option<FlagType> {
        self.flags.get(&flag).copied()
    }

    /// Whether the schema declares `flag`.
    pub fn contains(&self, flag: char) -> bool {
        self.flags.contains_key(&flag)
    }

    /// The declared flags in identifier order.
    pub fn flags(&self) -> impl Iterator<Item = (char, FlagType)> + '_ {
        self.flags.iter().map(|(flag, flag_type)| (*flag, *flag_type))
    }

    /// The number of declared flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the schema declares no flags.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

fn compile_descriptor(position: usize, descriptor: &str) -> Result<(char, FlagType), SchemaError> {
    let mut chars = descriptor.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Err(SchemaError::EmptyDescriptor { position }),
        (Some(flag), None, _) => Ok((flag, FlagType::Boolean)),
        (Some(flag), Some(marker), None) => match FlagType::from_marker(marker) {
            Some(flag_type) => Ok((flag, flag_type)),
            None => Err(SchemaError::InvalidFlagType {
                descriptor: descriptor.to_string(),
                marker,
            }),
        },
        (Some(_), Some(_), Some(_)) => Err(SchemaError::InvalidDescriptor {
            descriptor: descriptor.to_string(),
        }),
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Schema::compile(s)
    }
}

/// Renders the canonical schema string: descriptors in identifier order.
impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (flag, flag_type)) in self.flags().enumerate() {
            if i > 0 {
                write!(f, "{DESCRIPTOR_SEPARATOR}")?;
            }

            write!(f, "{flag}")?;

            if let Some(marker) = flag_type.marker() {
                write!(f, "{marker}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn compile() {
        // Execute
        let schema = Schema::compile("l,p#,d*").unwrap();

        // Verify
        assert_eq!(schema.len(), 3);
        assert!(!schema.is_empty());
        assert_eq!(
            schema.flags().collect::<Vec<_>>(),
            vec![
                ('d', FlagType::String),
                ('l', FlagType::Boolean),
                ('p', FlagType::Integer),
            ]
        );
        assert!(schema.contains('l'));
        assert!(!schema.contains('a'));
    }

    #[rstest]
    #[case("l", vec![('l', FlagType::Boolean)])]
    #[case("p#", vec![('p', FlagType::Integer)])]
    #[case("d*", vec![('d', FlagType::String)])]
    #[case("#", vec![('#', FlagType::Boolean)])]
    #[case("é*", vec![('é', FlagType::String)])]
    #[case("b,a", vec![('a', FlagType::Boolean), ('b', FlagType::Boolean)])]
    fn compile_descriptors(#[case] schema: &str, #[case] expected: Vec<(char, FlagType)>) {
        let schema = Schema::compile(schema).unwrap();
        assert_eq!(schema.flags().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case("p!", '!')]
    #[case("l,p!,d*", '!')]
    #[case("ll", 'l')]
    #[case("p-", '-')]
    fn compile_invalid_flag_type(#[case] schema: &str, #[case] expected_marker: char) {
        assert_matches!(
            Schema::compile(schema),
            Err(SchemaError::InvalidFlagType { marker, .. }) if marker == expected_marker
        );
    }

    #[rstest]
    #[case("", 0)]
    #[case(",l", 0)]
    #[case("l,", 1)]
    #[case("l,,p#", 1)]
    fn compile_empty_descriptor(#[case] schema: &str, #[case] expected_position: usize) {
        assert_eq!(
            Schema::compile(schema).unwrap_err(),
            SchemaError::EmptyDescriptor {
                position: expected_position
            }
        );
    }

    #[rstest]
    #[case("p##")]
    #[case("l,port#")]
    fn compile_invalid_descriptor(#[case] schema: &str) {
        assert_matches!(
            Schema::compile(schema),
            Err(SchemaError::InvalidDescriptor { .. })
        );
    }

    #[rstest]
    #[case("l,l")]
    #[case("l,l#")]
    #[case("p#,d*,p*")]
    fn compile_duplicate(#[case] schema: &str) {
        assert_matches!(
            Schema::compile(schema),
            Err(SchemaError::DuplicateFlag { .. })
        );
    }

    #[test]
    fn display_canonical() {
        let schema: Schema = "p#,l,d*".parse().unwrap();
        assert_eq!(schema.to_string(), "d*,l,p#");
        assert_eq!(Schema::compile(&schema.to_string()).unwrap(), schema);
    }

    #[test]
    fn error_message() {
        let error = Schema::compile("l,p!,d*").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Schema error: invalid flag type '!' in descriptor 'p!'."
        );
    }
}
