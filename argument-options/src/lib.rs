//! This crate implements a declarative option resolver for command lines.
//! You describe the options your program understands, hand it the command
//! line and get back a report of what was found: which options fired, with
//! what typed values, which ones failed and what was left over.
//!
//! Unlike a step-by-step parser, resolving never stops at the first
//! problem.  Every failure is recorded on the option it belongs to so that
//! a program can report all of them at once.
//!
//! # Example
//!
//! ```
//! use argument_options::{
//!     AllowedSet, Argument, IntegerParser, OptionDef, OptionSet, ParseState, Parser,
//! };
//!
//! let mut options = OptionSet::new();
//! let verbose = options.add(OptionDef::short("v").with_long("verbose"));
//! let count = options.add(
//!     OptionDef::long("count")
//!         .with_short("n")
//!         .mandatory()
//!         .argument(Argument::required(IntegerParser)),
//! );
//! let level = options.add(
//!     OptionDef::long("level").argument(
//!         Argument::optional(IntegerParser).with_constraint(AllowedSet::from_iter([1, 3])),
//!     ),
//! );
//!
//! let parser = Parser::new(options);
//! let rv = parser.resolve_options(["-v", "--count", "5", "--level", "2", "file.txt"]);
//!
//! assert!(rv.is_present(verbose));
//! assert_eq!(rv.value(count), Some(&5));
//! assert_eq!(rv.state(level), ParseState::ConstraintFailed);
//! assert_eq!(rv.unmatched_arguments(), ["file.txt"]);
//! assert!(rv.has_error());
//! for error in rv.errors() {
//!     eprintln!("error: {}", error);
//! }
//! ```
//!
//! Here is what's happening:
//!
//! * [`OptionSet::add`] registers an [`OptionDef`] and hands back a typed
//!   [`Opt`] key.  An option without [`Argument`] is a flag.
//! * [`Argument::required`] and [`Argument::optional`] pick a
//!   [`ValueParser`] for the value, [`Argument::with_constraint`] attaches a
//!   [`Constraint`] that is checked after parsing.
//! * [`Parser::resolve_options`] walks the command line and returns a
//!   [`Resolution`].
//! * [`Resolution::state`] and [`Resolution::value`] look up the outcome of a
//!   single option, [`Resolution::failed`], [`Resolution::missed`] and
//!   [`Resolution::extra`] summarize the run.
//!
//! # Behavior
//!
//! * Arguments starting with `--` are long switches, other arguments
//!   starting with `-` are short switches.  Exactly one leading `--` or `-`
//!   is removed to get the switch name, so `-abc` is the short switch `abc`
//!   and not three combined flags.
//! * If the argument after a switch does not look like a switch itself it is
//!   consumed as the switch's value.  This happens even if the option does
//!   not take an argument, in which case the value is dropped.  `--` is
//!   always accepted as value.
//! * Values are never attached with `=`: `--count=5` is the long switch
//!   `count=5`.
//! * The special `--` argument ends switch parsing and everything after it
//!   ends up in [`Resolution::regular_arguments`].  This can be disabled by
//!   un-setting [`Flag::HandleDoubleDash`].
//! * Negative numbers look like switches.  If you expect them as values,
//!   set [`Flag::DisableNumericOptions`].
//! * If an option is given more than once, the last occurrence determines
//!   its state.
//! * Unknown switches are collected as [`ExtraOption`]s.  Only those that
//!   captured a value have the [`ParseState::Extra`] state.
//! * Mandatory options that end up without a value are
//!   [`ParseState::OptionMissed`].  This includes options that were given
//!   but whose argument was missing or failed to parse.
//!
//! # Failures
//!
//! Resolving itself cannot fail.  A [`ValueParser`] signals a bad value by
//! returning a [`ParseError`] which is recorded as
//! [`ParseState::ParsingFailed`].  Panics in parsers or constraints are not
//! caught.
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade
//! at `debug` and `trace` level.  The crate never prints or exits.
mod constraints;
mod engine;
mod options;
mod parsers;
mod report;

pub use self::constraints::{constraint_fn, AllowedSet, Constraint, FnConstraint};
pub use self::engine::{Flag, Parser};
pub use self::options::{Argument, Opt, OptionDef, OptionSet, OptionSpec};
pub use self::parsers::{
    BoolParser, DoubleParser, FromStrParser, IntegerParser, LongParser, ParseError, StringParser,
    ValueParser,
};
pub use self::report::{ExtraOption, OptionReport, ParseState, Resolution};
