use std::collections::VecDeque;
use std::fmt;

use crate::options::{OptionSet, OptionSpec, Resolved};
use crate::report::{ExtraOption, OptionState, ParseState, Resolution};

/// Parser behavior flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// When set, `--` ends option parsing and everything after it becomes
    /// a regular argument.  Otherwise `--` is treated like any other switch.
    ///
    /// **Default:** flag is set
    HandleDoubleDash,
    /// When set, a dash followed by a digit (eg: `-1`) is not a switch.  It is
    /// then accepted as value for the preceding option or, failing that,
    /// ends up as unmatched argument.
    ///
    /// **Default:** flag is unset
    DisableNumericOptions,
}

impl Flag {
    fn as_u8(self) -> u8 {
        match self {
            Flag::HandleDoubleDash => 1,
            Flag::DisableNumericOptions => 2,
        }
    }
}

/// Resolves command lines against an [`OptionSet`].
///
/// The parser itself is never modified by resolving, every call to
/// [`resolve_options`](Self::resolve_options) produces a fresh
/// [`Resolution`] so one parser can serve any number of command lines.
pub struct Parser {
    options: OptionSet,
    flags: u8,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.options.len())
            .field("flags", &self.flags)
            .finish()
    }
}

impl Parser {
    /// Creates a parser for the given options.
    pub fn new(options: OptionSet) -> Parser {
        Parser {
            options,
            flags: Flag::HandleDoubleDash.as_u8(),
        }
    }

    /// Returns the options the parser resolves against.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Check if a parsing [`Flag`] is currently set.
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.flags & flag.as_u8() != 0
    }

    /// Sets or unsets a parsing [`Flag`].
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, yes: bool) {
        if yes {
            self.flags |= flag.as_u8();
        } else {
            self.flags &= !flag.as_u8();
        }
    }

    /// Resolves the command line of the current process.
    ///
    /// The program name is skipped.  Arguments that are not valid unicode
    /// are converted lossily.
    pub fn resolve_env(&self) -> Resolution<'_> {
        self.resolve_options(
            std::env::args_os()
                .skip(1)
                .map(|x| x.to_string_lossy().into_owned()),
        )
    }

    /// Resolves the given arguments (without program name).
    ///
    /// Arguments are processed left to right:
    ///
    /// * `--` ends switch parsing, all following arguments become
    ///   [regular arguments](Resolution::regular_arguments).
    /// * Arguments not starting with `-` are
    ///   [unmatched](Resolution::unmatched_arguments).
    /// * `--name` is looked up as long switch, `-name` as short switch.  If
    ///   the next argument does not look like a switch it is taken as the
    ///   value, whether or not the option accepts one.
    /// * Unknown switches become [extra options](Resolution::extra).
    ///
    /// Once all arguments are consumed, mandatory options without a value are
    /// marked as [`ParseState::OptionMissed`], even if they were given but
    /// failed.  Failures never
    /// abort a run, they are recorded as the state of the affected option.
    pub fn resolve_options<I, S>(&self, args: I) -> Resolution<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into).collect::<VecDeque<String>>();
        let mut rv = Resolution::new(&self.options);

        while let Some(arg) = args.pop_front() {
            if arg == "--" && self.get_flag(Flag::HandleDoubleDash) {
                log::debug!("end of options, {} regular arguments follow", args.len());
                break;
            }
            if !self.considered_switch(&arg) {
                log::debug!("unmatched argument {:?}", arg);
                rv.unmatched.push(arg);
                continue;
            }

            let index = match arg.strip_prefix("--") {
                Some(name) => self.options.find_long(name),
                None => self.options.find_short(&arg[1..]),
            };
            log::trace!("looked up switch {:?}: {:?}", arg, index);

            let value = match args.front() {
                Some(next) if self.looks_like_value(next) => args.pop_front(),
                _ => None,
            };

            match index {
                Some(index) => {
                    let spec = self.options.spec(index);
                    if let (Some(spec), Some(state)) = (spec, rv.states.get_mut(index)) {
                        process_option(spec, state, value);
                        log::debug!("option {:?} resolved to {:?}", arg, state.state);
                    }
                }
                None => {
                    log::debug!("unknown switch {:?} with value {:?}", arg, value);
                    rv.extras.push(ExtraOption::new(arg, value));
                }
            }
        }

        rv.regular.extend(args);
        self.check_missed_options(&mut rv);
        rv
    }

    fn check_missed_options(&self, rv: &mut Resolution<'_>) {
        for (spec, state) in self.options.iter().zip(rv.states.iter_mut()) {
            if spec.is_mandatory() && state.value.is_none() {
                log::debug!("mandatory option {} is missing", spec.name());
                state.state = ParseState::OptionMissed;
            }
        }
    }

    /// Should the given argument be considered a switch?
    fn considered_switch(&self, arg: &str) -> bool {
        let bytes = arg.as_bytes();
        bytes.first() == Some(&b'-')
            && (!self.get_flag(Flag::DisableNumericOptions)
                || bytes.get(1).map_or(true, |x| !x.is_ascii_digit()))
    }

    /// Can the given argument be consumed as value for a preceding switch?
    fn looks_like_value(&self, arg: &str) -> bool {
        arg == "--" || !self.considered_switch(arg)
    }
}

fn process_option(spec: &OptionSpec, state: &mut OptionState, value: Option<String>) {
    state.message = None;
    state.error = None;
    state.state = match (spec.argument(), value) {
        (Some(argument), None) if argument.is_mandatory() => ParseState::ArgumentMissed,
        (Some(argument), Some(raw)) => {
            let rv = match argument.resolve(&raw) {
                Resolved::Accepted(value) => {
                    state.value = Some(value);
                    ParseState::Success
                }
                Resolved::Rejected(value, message) => {
                    state.value = Some(value);
                    state.message = Some(message);
                    ParseState::ConstraintFailed
                }
                Resolved::Failed(err) => {
                    log::debug!("failed to parse {:?}: {}", raw, err);
                    state.error = Some(err);
                    ParseState::ParsingFailed
                }
            };
            state.raw = Some(raw);
            rv
        }
        (Some(_), None) => ParseState::Success,
        (None, value) => {
            if let Some(value) = value {
                log::debug!("option {} takes no argument, dropping {:?}", spec.name(), value);
            }
            state.value = Some(Box::new(()));
            ParseState::Success
        }
    };
}
