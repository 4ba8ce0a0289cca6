/// The type of value a flag holds, as declared by its schema descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagType {
    /// No type marker: the flag is present or not (`l`).
    Boolean,
    /// Type marker `#`: the flag takes a base-10 integer value (`p#`).
    Integer,
    /// Type marker `*`: the flag takes a verbatim string value (`d*`).
    String,
}

pub(crate) const INTEGER_MARKER: char = '#';
pub(crate) const STRING_MARKER: char = '*';

impl FlagType {
    /// The type marker that declares this type in a schema descriptor.
    /// Booleans are declared by the absence of a marker.
    pub fn marker(&self) -> Option<char> {
        match self {
            FlagType::Boolean => None,
            FlagType::Integer => Some(INTEGER_MARKER),
            FlagType::String => Some(STRING_MARKER),
        }
    }

    /// The type declared by a schema descriptor marker, if the marker is recognized.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            INTEGER_MARKER => Some(FlagType::Integer),
            STRING_MARKER => Some(FlagType::String),
            _ => None,
        }
    }

    /// The value a flag of this type holds when it is not supplied on the Cli.
    pub(crate) fn initial(&self) -> Value {
        match self {
            FlagType::Boolean => Value::Boolean(false),
            FlagType::Integer => Value::Integer(0),
            FlagType::String => Value::String(String::default()),
        }
    }
}

impl std::fmt::Display for FlagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagType::Boolean => write!(f, "boolean"),
            FlagType::Integer => write!(f, "integer"),
            FlagType::String => write!(f, "string"),
        }
    }
}

/// The current value of a declared flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Value of a [`FlagType::Boolean`] flag.
    Boolean(bool),
    /// Value of a [`FlagType::Integer`] flag.
    Integer(i32),
    /// Value of a [`FlagType::String`] flag.
    String(String),
}

impl Value {
    /// The flag type this value belongs to.
    pub fn flag_type(&self) -> FlagType {
        match self {
            Value::Boolean(_) => FlagType::Boolean,
            Value::Integer(_) => FlagType::Integer,
            Value::String(_) => FlagType::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FlagType::Boolean, Value::Boolean(false))]
    #[case(FlagType::Integer, Value::Integer(0))]
    #[case(FlagType::String, Value::String("".to_string()))]
    fn initial(#[case] flag_type: FlagType, #[case] expected: Value) {
        let value = flag_type.initial();
        assert_eq!(value, expected);
        assert_eq!(value.flag_type(), flag_type);
    }

    #[rstest]
    #[case('#', Some(FlagType::Integer))]
    #[case('*', Some(FlagType::String))]
    #[case('!', None)]
    #[case('l', None)]
    fn from_marker(#[case] marker: char, #[case] expected: Option<FlagType>) {
        assert_eq!(FlagType::from_marker(marker), expected);

        if let Some(flag_type) = expected {
            assert_eq!(flag_type.marker(), Some(marker));
        }
    }

    #[test]
    fn boolean_has_no_marker() {
        assert_eq!(FlagType::Boolean.marker(), None);
    }
}
