//! The outcome of a resolver run.
use std::any::Any;
use std::fmt;

use crate::options::{Opt, OptionSet, OptionSpec};
use crate::parsers::ParseError;

/// The state an option ends up in after resolving a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseState {
    /// The option was never mentioned.
    #[default]
    Unset,
    /// The option was found and its argument (if any) was accepted.
    Success,
    /// The option requires an argument but none followed it.
    ArgumentMissed,
    /// The argument could not be parsed into the option's type.
    ParsingFailed,
    /// The argument was parsed but rejected by the option's constraint.
    ConstraintFailed,
    /// A mandatory option ended up without a value.
    OptionMissed,
    /// An unknown switch that captured a value.
    Extra,
}

impl ParseState {
    /// Does this state count as a failure?
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            ParseState::ArgumentMissed
                | ParseState::ParsingFailed
                | ParseState::ConstraintFailed
                | ParseState::OptionMissed
        )
    }
}

/// Per run state of a single option.
#[derive(Default)]
pub(crate) struct OptionState {
    pub(crate) state: ParseState,
    pub(crate) value: Option<Box<dyn Any>>,
    pub(crate) raw: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) error: Option<ParseError>,
}

impl fmt::Debug for OptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionState")
            .field("state", &self.state)
            .field("raw", &self.raw)
            .field("message", &self.message)
            .finish()
    }
}

/// A switch that did not match any registered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraOption {
    switch: String,
    value: Option<String>,
}

impl ExtraOption {
    pub(crate) fn new(switch: String, value: Option<String>) -> ExtraOption {
        ExtraOption { switch, value }
    }

    /// The switch as it was written, dashes included.
    pub fn switch(&self) -> &str {
        &self.switch
    }

    /// The value that followed the switch, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// [`ParseState::Extra`] if a value was captured, [`ParseState::Unset`]
    /// otherwise.
    pub fn state(&self) -> ParseState {
        if self.value.is_some() {
            ParseState::Extra
        } else {
            ParseState::Unset
        }
    }
}

/// A read-only view of one registered option after a run.
///
/// The [`Display`](fmt::Display) implementation renders a short human
/// readable description of the outcome, which is mostly useful for
/// failures.
#[derive(Clone, Copy)]
pub struct OptionReport<'a> {
    spec: &'a OptionSpec,
    state: &'a OptionState,
}

impl<'a> OptionReport<'a> {
    /// The definition of the option.
    pub fn spec(&self) -> &'a OptionSpec {
        self.spec
    }

    /// The switch used to refer to the option.
    pub fn name(&self) -> String {
        self.spec.name()
    }

    pub fn state(&self) -> ParseState {
        self.state.state
    }

    /// The raw argument the option was last given.
    pub fn raw_value(&self) -> Option<&'a str> {
        self.state.raw.as_deref()
    }

    /// The constraint's message for a rejected value.
    pub fn error_message(&self) -> Option<&'a str> {
        self.state.message.as_deref()
    }

    /// The parser error for a value that failed to parse.
    pub fn parse_error(&self) -> Option<&'a ParseError> {
        self.state.error.as_ref()
    }
}

impl fmt::Debug for OptionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionReport")
            .field("name", &self.name())
            .field("state", &self.state())
            .field("raw_value", &self.raw_value())
            .finish()
    }
}

impl fmt::Display for OptionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self.state() {
            ParseState::Unset => write!(f, "option '{}' was not given", name),
            ParseState::Success | ParseState::Extra => write!(f, "option '{}'", name),
            ParseState::ArgumentMissed => write!(f, "missing argument for '{}'", name),
            ParseState::ParsingFailed => match self.parse_error() {
                Some(err) => write!(f, "invalid value for '{}': {}", name, err),
                None => write!(f, "invalid value for '{}'", name),
            },
            ParseState::ConstraintFailed => match self.error_message() {
                Some(msg) => write!(f, "value for '{}' was rejected: {}", name, msg),
                None => write!(f, "value for '{}' was rejected", name),
            },
            ParseState::OptionMissed => write!(f, "missing option '{}'", name),
        }
    }
}

/// The result of resolving a command line against an [`OptionSet`].
///
/// Every accessor that returns options returns them in registration order.
/// Extra options and the argument buckets keep the order of the command
/// line.
pub struct Resolution<'p> {
    options: &'p OptionSet,
    pub(crate) states: Vec<OptionState>,
    pub(crate) extras: Vec<ExtraOption>,
    pub(crate) unmatched: Vec<String>,
    pub(crate) regular: Vec<String>,
}

impl<'p> Resolution<'p> {
    pub(crate) fn new(options: &'p OptionSet) -> Resolution<'p> {
        Resolution {
            options,
            states: options.iter().map(|_| OptionState::default()).collect(),
            extras: Vec::new(),
            unmatched: Vec::new(),
            regular: Vec::new(),
        }
    }

    /// Returns the state of an option.
    pub fn state<T>(&self, opt: Opt<T>) -> ParseState {
        self.states
            .get(opt.index())
            .map_or(ParseState::Unset, |x| x.state)
    }

    /// Returns the parsed value of an option.
    ///
    /// Flags (options without argument) have the value `()` once they were
    /// given.  A value that was rejected by a constraint is still returned
    /// here, check [`state`](Self::state) to tell the cases apart.
    pub fn value<T: 'static>(&self, opt: Opt<T>) -> Option<&T> {
        self.states
            .get(opt.index())?
            .value
            .as_ref()?
            .downcast_ref::<T>()
    }

    /// Returns the raw argument an option was last given.
    pub fn raw_value<T>(&self, opt: Opt<T>) -> Option<&str> {
        self.states.get(opt.index())?.raw.as_deref()
    }

    /// Was the option given with an acceptable value?
    pub fn is_present<T>(&self, opt: Opt<T>) -> bool {
        self.state(opt) == ParseState::Success
    }

    /// Returns the constraint message of a rejected value.
    pub fn error_message<T>(&self, opt: Opt<T>) -> Option<&str> {
        self.states.get(opt.index())?.message.as_deref()
    }

    /// Returns the report for a single option.
    pub fn report<T>(&self, opt: Opt<T>) -> Option<OptionReport<'_>> {
        Some(OptionReport {
            spec: self.options.get(opt)?,
            state: self.states.get(opt.index())?,
        })
    }

    /// Iterates over the reports of all registered options.
    pub fn reports(&self) -> impl Iterator<Item = OptionReport<'_>> {
        self.options
            .iter()
            .zip(self.states.iter())
            .map(|(spec, state)| OptionReport { spec, state })
    }

    /// Options that failed for any reason.
    pub fn failed(&self) -> Vec<OptionReport<'_>> {
        self.reports().filter(|x| x.state().is_failure()).collect()
    }

    /// Mandatory options that were not given.
    pub fn missed(&self) -> Vec<OptionReport<'_>> {
        self.reports()
            .filter(|x| x.state() == ParseState::OptionMissed)
            .collect()
    }

    /// Unknown switches that captured a value.
    pub fn extra(&self) -> Vec<&ExtraOption> {
        self.extras
            .iter()
            .filter(|x| x.state() == ParseState::Extra)
            .collect()
    }

    /// All unknown switches, including those without a value.
    pub fn unrecognized(&self) -> &[ExtraOption] {
        &self.extras
    }

    /// Is there at least one failed option?
    pub fn has_error(&self) -> bool {
        self.reports().any(|x| x.state().is_failure())
    }

    /// One message per failed option.
    pub fn errors(&self) -> Vec<String> {
        self.failed().iter().map(ToString::to_string).collect()
    }

    /// Arguments that were neither switches nor consumed as values.
    pub fn unmatched_arguments(&self) -> &[String] {
        &self.unmatched
    }

    /// Arguments that followed the `--` marker.
    pub fn regular_arguments(&self) -> &[String] {
        &self.regular
    }
}

impl fmt::Debug for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("options", &self.reports().collect::<Vec<_>>())
            .field("extras", &self.extras)
            .field("unmatched", &self.unmatched)
            .field("regular", &self.regular)
            .finish()
    }
}
