/// Character position of the flag within a raw token.
pub(crate) const FLAG_POSITION: usize = 1;
/// Character position of the value within a raw token.
pub(crate) const VALUE_POSITION: usize = 2;

/// A raw Cli token decomposed into its flag identifier and trailing value.
///
/// Tokens take the shape `<marker><flag>[value]`, for example `-p80`.
/// The marker (conventionally `-`) is skipped without validation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub flag: char,
    pub value: &'t str,
}

impl<'t> Token<'t> {
    /// Decompose a raw token, or `None` when it is too short to name a flag.
    pub(crate) fn decompose(raw: &'t str) -> Option<Self> {
        let mut indices = raw.char_indices();
        let _marker = indices.next()?;
        let (flag_start, flag) = indices.next()?;

        Some(Self {
            flag,
            value: &raw[flag_start + flag.len_utf8()..],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-l", 'l', "")]
    #[case("-p80", 'p', "80")]
    #[case("-d/home/logs", 'd', "/home/logs")]
    #[case("+x", 'x', "")]
    #[case("--", '-', "")]
    #[case("-d-p80", 'd', "-p80")]
    #[case("-é", 'é', "")]
    #[case("-dé", 'd', "é")]
    #[case("é-d", '-', "d")]
    fn decompose(#[case] raw: &str, #[case] expected_flag: char, #[case] expected_value: &str) {
        let token = Token::decompose(raw).unwrap();
        assert_eq!(token.flag, expected_flag);
        assert_eq!(token.value, expected_value);
        assert_eq!(raw.chars().nth(FLAG_POSITION), Some(expected_flag));
        assert_eq!(
            raw.chars().skip(VALUE_POSITION).collect::<String>(),
            expected_value
        );
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("é")]
    fn decompose_malformed(#[case] raw: &str) {
        assert_eq!(Token::decompose(raw), None);
    }
}
