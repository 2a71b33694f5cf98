//! Value parsers turn the raw string following a switch into a typed value.
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// The error a [`ValueParser`] signals when a raw value cannot be converted.
///
/// This is the only failure the resolver catches from a parser: it is
/// downgraded to [`ParseState::ParsingFailed`](crate::ParseState::ParsingFailed)
/// on the option it was parsed for.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The value is not a valid representation of the expected type.
    #[error("{value:?} is not a valid {kind}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    /// A custom message
    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    /// Creates an invalid value error for a value of the given type name.
    pub fn invalid<E>(kind: &'static str, value: &str, source: E) -> ParseError
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        ParseError::InvalidValue {
            kind,
            value: value.to_string(),
            source: source.into(),
        }
    }

    /// Returns the raw value that failed to parse, if known.
    pub fn value(&self) -> Option<&str> {
        match self {
            ParseError::InvalidValue { value, .. } => Some(value),
            ParseError::Custom(_) => None,
        }
    }
}

impl<'s> From<&'s str> for ParseError {
    fn from(message: &'s str) -> ParseError {
        ParseError::Custom(message.to_string())
    }
}

impl From<String> for ParseError {
    fn from(message: String) -> ParseError {
        ParseError::Custom(message)
    }
}

/// Converts a raw argument into a typed value.
///
/// Closures of the form `Fn(&str) -> Result<T, ParseError>` are parsers too,
/// so one-off conversions don't need a dedicated type.
pub trait ValueParser: Send + Sync {
    /// The type produced by this parser.
    type Value;

    /// Parses the raw string.
    fn parse(&self, raw: &str) -> Result<Self::Value, ParseError>;
}

impl<F, T> ValueParser for F
where
    F: Fn(&str) -> Result<T, ParseError> + Send + Sync,
{
    type Value = T;

    fn parse(&self, raw: &str) -> Result<T, ParseError> {
        self(raw)
    }
}

/// Parses booleans.
///
/// `true` in any casing is `true`, everything else is `false`.  This parser
/// never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoolParser;

impl ValueParser for BoolParser {
    type Value = bool;

    fn parse(&self, raw: &str) -> Result<bool, ParseError> {
        Ok(raw.eq_ignore_ascii_case("true"))
    }
}

/// Parses 32 bit signed integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerParser;

impl ValueParser for IntegerParser {
    type Value = i32;

    fn parse(&self, raw: &str) -> Result<i32, ParseError> {
        parse_from_str("integer", raw)
    }
}

/// Parses 64 bit signed integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongParser;

impl ValueParser for LongParser {
    type Value = i64;

    fn parse(&self, raw: &str) -> Result<i64, ParseError> {
        parse_from_str("long", raw)
    }
}

/// Parses double precision floats.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleParser;

impl ValueParser for DoubleParser {
    type Value = f64;

    fn parse(&self, raw: &str) -> Result<f64, ParseError> {
        parse_from_str("double", raw)
    }
}

/// Accepts any string as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringParser;

impl ValueParser for StringParser {
    type Value = String;

    fn parse(&self, raw: &str) -> Result<String, ParseError> {
        Ok(raw.to_string())
    }
}

/// Parses any type implementing [`FromStr`].
///
/// The `kind` is the human readable type name that shows up in
/// [`ParseError::InvalidValue`].
pub struct FromStrParser<T> {
    kind: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FromStrParser<T> {
    /// Creates a parser that reports failures as values of type `kind`.
    pub fn new(kind: &'static str) -> FromStrParser<T> {
        FromStrParser {
            kind,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for FromStrParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromStrParser")
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T> ValueParser for FromStrParser<T>
where
    T: FromStr,
    T::Err: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    type Value = T;

    fn parse(&self, raw: &str) -> Result<T, ParseError> {
        parse_from_str(self.kind, raw)
    }
}

fn parse_from_str<V>(kind: &'static str, raw: &str) -> Result<V, ParseError>
where
    V: FromStr,
    V::Err: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    V::from_str(raw).map_err(|err| ParseError::invalid(kind, raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_bool_parser() {
        assert!(BoolParser.parse("true").unwrap());
        assert!(BoolParser.parse("TRUE").unwrap());
        assert!(!BoolParser.parse("false").unwrap());
        assert!(!BoolParser.parse("yes").unwrap());
        assert!(!BoolParser.parse("").unwrap());
    }

    #[test]
    fn test_numeric_parsers() {
        assert_eq!(IntegerParser.parse("42").unwrap(), 42);
        assert_eq!(IntegerParser.parse("-7").unwrap(), -7);
        assert_eq!(LongParser.parse("8589934592").unwrap(), 8589934592);
        assert_eq!(DoubleParser.parse("1.5").unwrap(), 1.5);
        assert_eq!(DoubleParser.parse("-6001.45e-2").unwrap(), -60.0145);
    }

    #[test]
    fn test_numeric_parser_errors() {
        let err = IntegerParser.parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "\"abc\" is not a valid integer");
        assert_eq!(err.value(), Some("abc"));
        assert!(std::error::Error::source(&err).is_some());

        let err = IntegerParser.parse("8589934592").unwrap_err();
        assert_eq!(err.to_string(), "\"8589934592\" is not a valid integer");

        let err = DoubleParser.parse("1.5.5").unwrap_err();
        assert_eq!(err.to_string(), "\"1.5.5\" is not a valid double");
    }

    #[test]
    fn test_string_parser() {
        assert_eq!(StringParser.parse("-x y").unwrap(), "-x y");
    }

    #[test]
    fn test_from_str_parser() {
        let parser = FromStrParser::<IpAddr>::new("address");
        assert_eq!(
            parser.parse("127.0.0.1").unwrap(),
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        );
        let err = parser.parse("localhost").unwrap_err();
        assert_eq!(err.to_string(), "\"localhost\" is not a valid address");
    }

    #[test]
    fn test_closure_parser() {
        let parser = |raw: &str| -> Result<usize, ParseError> {
            Ok(raw.split(',').filter(|x| !x.is_empty()).count())
        };
        assert_eq!(parser.parse("a,b,,c").unwrap(), 3);

        let reject = |_: &str| -> Result<(), ParseError> { Err("nope".into()) };
        assert_eq!(reject.parse("x").unwrap_err().to_string(), "nope");
    }
}
