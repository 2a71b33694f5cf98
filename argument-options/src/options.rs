//! Option definitions and the set they are registered into.
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::constraints::Constraint;
use crate::parsers::{ParseError, ValueParser};

/// Describes the argument an option accepts.
///
/// The argument is either mandatory (the option is incomplete without a
/// value) or optional.  Every argument has a [`ValueParser`] and can carry
/// a [`Constraint`] which is checked after parsing succeeded.
pub struct Argument<T> {
    mandatory: bool,
    parser: Box<dyn ValueParser<Value = T>>,
    constraint: Option<Box<dyn Constraint<T>>>,
}

impl<T> Argument<T> {
    /// Creates an argument that has to be provided whenever the option is.
    pub fn required<P>(parser: P) -> Argument<T>
    where
        P: ValueParser<Value = T> + 'static,
    {
        Argument {
            mandatory: true,
            parser: Box::new(parser),
            constraint: None,
        }
    }

    /// Creates an argument that may be left out.
    pub fn optional<P>(parser: P) -> Argument<T>
    where
        P: ValueParser<Value = T> + 'static,
    {
        Argument {
            mandatory: false,
            parser: Box::new(parser),
            constraint: None,
        }
    }

    /// Attaches a constraint to the argument, replacing a previous one.
    pub fn with_constraint<C>(mut self, constraint: C) -> Argument<T>
    where
        C: Constraint<T> + 'static,
    {
        self.constraint = Some(Box::new(constraint));
        self
    }

    /// Is a value required?
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Does the argument carry a constraint?
    pub fn has_constraint(&self) -> bool {
        self.constraint.is_some()
    }
}

impl<T> fmt::Debug for Argument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("mandatory", &self.mandatory)
            .field("constraint", &self.constraint.is_some())
            .finish()
    }
}

/// The outcome of feeding a raw value to an argument.
pub(crate) enum Resolved {
    Accepted(Box<dyn Any>),
    Rejected(Box<dyn Any>, String),
    Failed(ParseError),
}

/// An [`Argument`] with its value type erased.
pub(crate) trait AnyArgument: Send + Sync {
    fn is_mandatory(&self) -> bool;
    fn resolve(&self, raw: &str) -> Resolved;
}

impl<T: 'static> AnyArgument for Argument<T> {
    fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    fn resolve(&self, raw: &str) -> Resolved {
        let value = match self.parser.parse(raw) {
            Ok(value) => value,
            Err(err) => return Resolved::Failed(err),
        };
        match self.constraint {
            Some(ref constraint) if !constraint.is_fulfilled(&value) => {
                let message = constraint.error_message(&value);
                Resolved::Rejected(Box::new(value), message)
            }
            _ => Resolved::Accepted(Box::new(value)),
        }
    }
}

/// Builder for a single option.
///
/// An option starts out as a flag (`OptionDef<()>`) with one switch and is
/// turned into a valued option by attaching an [`Argument`]:
///
/// ```
/// use argument_options::{Argument, IntegerParser, OptionDef};
///
/// let verbose = OptionDef::short("v").with_long("verbose");
/// let count = OptionDef::long("count")
///     .with_short("c")
///     .mandatory()
///     .argument(Argument::required(IntegerParser));
/// # let _ = (verbose, count);
/// ```
pub struct OptionDef<T = ()> {
    short: Vec<String>,
    long: Vec<String>,
    mandatory: bool,
    argument: Option<Argument<T>>,
}

impl OptionDef<()> {
    /// Starts a definition with a short switch (`-name`).
    pub fn short<S: Into<String>>(name: S) -> OptionDef<()> {
        OptionDef::empty().with_short(name)
    }

    /// Starts a definition with a long switch (`--name`).
    pub fn long<S: Into<String>>(name: S) -> OptionDef<()> {
        OptionDef::empty().with_long(name)
    }

    fn empty() -> OptionDef<()> {
        OptionDef {
            short: Vec::new(),
            long: Vec::new(),
            mandatory: false,
            argument: None,
        }
    }

    /// Makes the option accept an argument.
    pub fn argument<T>(self, argument: Argument<T>) -> OptionDef<T> {
        OptionDef {
            short: self.short,
            long: self.long,
            mandatory: self.mandatory,
            argument: Some(argument),
        }
    }
}

impl<T> OptionDef<T> {
    /// Adds another short switch.
    pub fn with_short<S: Into<String>>(mut self, name: S) -> OptionDef<T> {
        push_unique(&mut self.short, name.into());
        self
    }

    /// Adds another long switch.
    pub fn with_long<S: Into<String>>(mut self, name: S) -> OptionDef<T> {
        push_unique(&mut self.long, name.into());
        self
    }

    /// Marks the option as one that has to be present on the command line.
    pub fn mandatory(mut self) -> OptionDef<T> {
        self.mandatory = true;
        self
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

/// A registered option definition with its value type erased.
///
/// This is what the resolver and the report work with.  The typed view is
/// the [`Opt`] key handed out by [`OptionSet::add`].
pub struct OptionSpec {
    short: Vec<String>,
    long: Vec<String>,
    mandatory: bool,
    argument: Option<Box<dyn AnyArgument>>,
}

impl OptionSpec {
    /// The short switches without the leading dash.
    pub fn short_switches(&self) -> &[String] {
        &self.short
    }

    /// The long switches without the leading dashes.
    pub fn long_switches(&self) -> &[String] {
        &self.long
    }

    /// Does the option have to be present?
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Does the option accept an argument?
    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }

    /// Does the option require an argument?
    pub fn has_mandatory_argument(&self) -> bool {
        self.argument.as_ref().map_or(false, |x| x.is_mandatory())
    }

    /// Returns the switch used to refer to this option in messages.
    ///
    /// Long switches are preferred over short ones.
    pub fn name(&self) -> String {
        match (self.long.first(), self.short.first()) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => String::new(),
        }
    }

    pub(crate) fn argument(&self) -> Option<&dyn AnyArgument> {
        self.argument.as_deref()
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("mandatory", &self.mandatory)
            .field("argument", &self.has_argument())
            .field("mandatory_argument", &self.has_mandatory_argument())
            .finish()
    }
}

/// A typed key to a registered option.
///
/// Used to look up state and value of the option in a
/// [`Resolution`](crate::Resolution).
pub struct Opt<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Opt<T> {
    pub(crate) fn index(self) -> usize {
        self.index
    }
}

impl<T> Clone for Opt<T> {
    fn clone(&self) -> Opt<T> {
        *self
    }
}

impl<T> Copy for Opt<T> {}

impl<T> PartialEq for Opt<T> {
    fn eq(&self, other: &Opt<T>) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Opt<T> {}

impl<T> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opt").field(&self.index).finish()
    }
}

/// The ordered collection of options a [`Parser`](crate::Parser) resolves
/// against.
///
/// Options keep their registration order.  Switch names should not be
/// shared between options; if they are, the option registered first wins.
#[derive(Default)]
pub struct OptionSet {
    specs: Vec<OptionSpec>,
    short_index: HashMap<String, usize>,
    long_index: HashMap<String, usize>,
}

impl OptionSet {
    /// Creates an empty option set.
    pub fn new() -> OptionSet {
        OptionSet::default()
    }

    /// Registers an option and returns the key to look it up later.
    pub fn add<T: 'static>(&mut self, def: OptionDef<T>) -> Opt<T> {
        let index = self.specs.len();
        for name in &def.short {
            claim_switch(&mut self.short_index, name, index, "-");
        }
        for name in &def.long {
            claim_switch(&mut self.long_index, name, index, "--");
        }
        self.specs.push(OptionSpec {
            short: def.short,
            long: def.long,
            mandatory: def.mandatory,
            argument: def
                .argument
                .map(|x| Box::new(x) as Box<dyn AnyArgument>),
        });
        Opt {
            index,
            _marker: PhantomData,
        }
    }

    /// Returns the definition behind a key.
    pub fn get<T>(&self, opt: Opt<T>) -> Option<&OptionSpec> {
        self.spec(opt.index())
    }

    /// Iterates over all definitions in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub(crate) fn spec(&self, index: usize) -> Option<&OptionSpec> {
        self.specs.get(index)
    }

    pub(crate) fn find_short(&self, name: &str) -> Option<usize> {
        self.short_index.get(name).copied()
    }

    pub(crate) fn find_long(&self, name: &str) -> Option<usize> {
        self.long_index.get(name).copied()
    }
}

impl fmt::Debug for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.specs.iter()).finish()
    }
}

fn claim_switch(index: &mut HashMap<String, usize>, name: &str, option: usize, prefix: &str) {
    match index.entry(name.to_string()) {
        Entry::Occupied(entry) => {
            log::warn!(
                "switch {}{} of option #{} is already claimed by option #{}",
                prefix,
                name,
                option,
                entry.get()
            );
        }
        Entry::Vacant(entry) => {
            entry.insert(option);
        }
    }
}
