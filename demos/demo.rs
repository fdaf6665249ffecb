use cmdspec::{derive::*, CommandLineParser, Error, ParserResult, ParserSettings, Specified};

#[derive(Debug, Default, Clone, Copy, PartialEq, OptionEnum)]
enum Level {
    #[cmdspec(name = "low")]
    Low,
    #[default]
    #[cmdspec(name = "medium")]
    Medium,
    #[cmdspec(name = "high")]
    High,
}

#[derive(Debug, Default, Options)]
struct Parameters {
    #[cmdspec(option, short = 'v', help = "Print more.")]
    verbose: bool,
    #[cmdspec(option, short = 'l', long = "level", default = Level::Medium)]
    level: Level,
    #[cmdspec(option, short = 'x', separator = ',', max = 4, meta = "PATTERN")]
    exclude: Vec<String>,
    #[cmdspec(option, set = "output", help = "Write as json.")]
    json: bool,
    #[cmdspec(option, set = "plain", help = "Write as plain text.")]
    plain: bool,
    #[cmdspec(value, meta = "FILE", required, help = "The file to scan.")]
    file: String,
}

fn main() {
    let parser = CommandLineParser::new(ParserSettings::default().case_insensitive_enum_values(true));

    match parser.parse_env::<Parameters>() {
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
        Ok(ParserResult::Parsed(parameters)) => {
            println!("{parameters:?}");
        }
        Ok(ParserResult::NotParsed { errors, .. }) => {
            if errors.contains(&Error::HelpRequested) {
                for specification in Parameters::specifications() {
                    let label = if specification.is_value() {
                        specification.property().to_uppercase()
                    } else {
                        specification.name_info().to_string()
                    };
                    println!("  {label:<16} {}", specification.conversion().type_name());
                }
            } else if errors.contains(&Error::VersionRequested) {
                println!("demo {}", env!("CARGO_PKG_VERSION"));
            } else {
                for error in errors {
                    eprintln!("{error}");
                }
                std::process::exit(1);
            }
        }
    }
}
