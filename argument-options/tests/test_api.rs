use argument_options::{
    Argument, BoolParser, Flag, IntegerParser, OptionDef, OptionSet, ParseError, ParseState,
    Parser, StringParser,
};

#[test]
fn test_option_spec() {
    let mut options = OptionSet::new();
    let verbose = options.add(OptionDef::short("v").with_long("verbose").with_short("v"));
    let color = options.add(OptionDef::long("color").argument(Argument::optional(BoolParser)));
    let count = options.add(
        OptionDef::short("n")
            .mandatory()
            .argument(Argument::required(IntegerParser)),
    );
    assert_eq!(options.len(), 3);
    assert!(!options.is_empty());
    assert_ne!(verbose, options.add(OptionDef::long("other")));

    let spec = options.get(verbose).unwrap();
    assert_eq!(spec.short_switches(), ["v"]);
    assert_eq!(spec.long_switches(), ["verbose"]);
    assert!(!spec.is_mandatory());
    assert!(!spec.has_argument());
    assert_eq!(spec.name(), "--verbose");

    let spec = options.get(color).unwrap();
    assert!(spec.has_argument());
    assert!(!spec.has_mandatory_argument());

    let spec = options.get(count).unwrap();
    assert!(spec.is_mandatory());
    assert!(spec.has_mandatory_argument());
    assert_eq!(spec.name(), "-n");

    let names = options.iter().map(|x| x.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["--verbose", "--color", "-n", "--other"]);
}

#[test]
fn test_argument() {
    let arg = Argument::required(StringParser);
    assert!(arg.is_mandatory());
    assert!(!arg.has_constraint());
    let arg = Argument::optional(IntegerParser)
        .with_constraint(argument_options::AllowedSet::from_iter([1]));
    assert!(!arg.is_mandatory());
    assert!(arg.has_constraint());
}

#[test]
fn test_closure_parser() {
    let mut options = OptionSet::new();
    let pair = options.add(OptionDef::long("pair").argument(Argument::required(
        |raw: &str| -> Result<(i32, i32), ParseError> {
            let (a, b) = raw.split_once(',').ok_or("expected two values")?;
            let a = a.parse::<i32>().map_err(|err| ParseError::invalid("integer", a, err))?;
            let b = b.parse::<i32>().map_err(|err| ParseError::invalid("integer", b, err))?;
            Ok((a, b))
        },
    )));
    let parser = Parser::new(options);

    let rv = parser.resolve_options(["--pair", "-1,2"]);
    // -1,2 looks like a switch
    assert_eq!(rv.state(pair), ParseState::ArgumentMissed);

    let rv = parser.resolve_options(["--pair", "1,2"]);
    assert_eq!(rv.value(pair), Some(&(1, 2)));

    let rv = parser.resolve_options(["--pair", "1"]);
    assert_eq!(rv.state(pair), ParseState::ParsingFailed);
    assert_eq!(
        rv.report(pair).unwrap().to_string(),
        "invalid value for '--pair': expected two values"
    );
}

#[test]
fn test_parser_flags() {
    let mut parser = Parser::new(OptionSet::new());
    assert!(parser.get_flag(Flag::HandleDoubleDash));
    assert!(!parser.get_flag(Flag::DisableNumericOptions));
    parser.set_flag(Flag::DisableNumericOptions, true);
    parser.set_flag(Flag::HandleDoubleDash, false);
    assert!(parser.get_flag(Flag::DisableNumericOptions));
    assert!(!parser.get_flag(Flag::HandleDoubleDash));
    assert!(parser.options().is_empty());
}

#[test]
fn test_parse_state() {
    assert!(!ParseState::Unset.is_failure());
    assert!(!ParseState::Success.is_failure());
    assert!(!ParseState::Extra.is_failure());
    assert!(ParseState::ArgumentMissed.is_failure());
    assert!(ParseState::ParsingFailed.is_failure());
    assert!(ParseState::ConstraintFailed.is_failure());
    assert!(ParseState::OptionMissed.is_failure());
    assert_eq!(ParseState::default(), ParseState::Unset);
}

#[test]
fn test_parser_is_sync() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Parser>();
}
