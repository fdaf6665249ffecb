use cmdspec::{derive::*, CommandLineParser, Error, ParserSettings, VerbSpecification};

#[derive(Debug, Default, Options)]
#[cmdspec(verb = "add", help = "Add files to the index.")]
struct Add {
    #[cmdspec(option, short = 'n', help = "Only show what would be added.")]
    dry_run: bool,
    #[cmdspec(value, min = 1, help = "The files to add.")]
    files: Vec<String>,
}

#[derive(Debug, Default, Options)]
#[cmdspec(verb = "status", default_verb)]
struct Status {
    #[cmdspec(option, short = 's')]
    short: bool,
}

fn main() -> Result<(), cmdspec::ConfigError> {
    let verbs = vec![
        VerbSpecification::of::<Add>()?,
        VerbSpecification::of::<Status>()?,
    ];
    let parser = CommandLineParser::new(ParserSettings::default());
    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let outcome = parser.parse_verbs(verbs.clone(), &arguments)?;

    if let Some(Error::HelpVerbRequested { verb }) = outcome.outcome().errors().first() {
        for candidate in &verbs {
            if verb.is_none() || verb.as_deref() == Some(candidate.name()) {
                println!(
                    "{:<8} {}",
                    candidate.name(),
                    candidate.help_text().unwrap_or_default()
                );
            }
        }

        return Ok(());
    }

    let verb = outcome.verb().map(str::to_string);

    match verb.as_deref() {
        Some("add") => {
            let add = outcome.bind::<Add>().into_result();
            println!("{add:?}");
        }
        Some("status") => {
            let status = outcome.bind::<Status>().into_result();
            println!("{status:?}");
        }
        _ => {
            for error in outcome.outcome().errors() {
                eprintln!("{error}");
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
