//! This is a basic example with help page, usage and error printing.
use argument_options::{
    AllowedSet, Argument, IntegerParser, OptionDef, OptionSet, Parser, StringParser,
};

const USAGE: &str = "basic --number NUMBER [--mode MODE] [--shout] [--help] [-- FILES...]";
const HELP: &str = "basic
A small example of argument-options

USAGE:
    !!USAGE!!

OPTIONS:
    -n, --number <NUMBER>   the number to add to every file index
    -m, --mode <MODE>       one of fast or slow
    --shout                 shouts!
    --help                  prints the help\
";

fn main() {
    let mut options = OptionSet::new();
    let number = options.add(
        OptionDef::short("n")
            .with_long("number")
            .mandatory()
            .argument(Argument::required(IntegerParser)),
    );
    let mode = options.add(
        OptionDef::short("m").with_long("mode").argument(
            Argument::required(StringParser).with_constraint(
                ["fast", "slow"]
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<AllowedSet<_>>(),
            ),
        ),
    );
    let shout = options.add(OptionDef::long("shout"));
    let help = options.add(OptionDef::long("help"));

    let parser = Parser::new(options);
    let rv = parser.resolve_env();

    if rv.is_present(help) {
        println!("{}", HELP.replace("!!USAGE!!", USAGE));
        return;
    }

    if rv.has_error() {
        for error in rv.errors() {
            eprintln!("error: {}", error);
        }
        eprintln!("usage: {}", USAGE);
        std::process::exit(1);
    }

    for extra in rv.unrecognized() {
        eprintln!("warning: ignoring unknown option {}", extra.switch());
    }
    for arg in rv.unmatched_arguments() {
        eprintln!("warning: ignoring stray argument {:?}", arg);
    }

    let number = rv.value(number).copied().unwrap_or_default();
    let mode = rv.value(mode).map_or("fast", |x| x.as_str());
    println!("Mode: {}", mode);
    for (idx, file) in rv.regular_arguments().iter().enumerate() {
        println!("{}: {}", idx as i32 + number, file);
    }
    if rv.is_present(shout) {
        println!("I AM SHOUTING!");
    }
}
