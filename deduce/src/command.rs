use crate::terminal::Stylus;
use crate::{constants::*, examples::run_examples, repl::Session, utils::*};
use anyhow::{bail, Error};
use deduce_fol::trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE};
use std::{fs, io::stdin};
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "parse", about = "Parse a formula and report on its structure")]
    Parse {
        #[structopt(help = "The formula, for example \"forall x. (P(x) -> Q(x))\"")]
        formula: Vec<String>,
    },
    #[structopt(
        name = "substitute",
        about = "Substitute a term for a free variable in a formula, avoiding capture"
    )]
    Substitute {
        #[structopt(short = "v", long = "variable", help = "The variable to replace")]
        variable: String,
        #[structopt(short = "t", long = "term", help = "The term to substitute")]
        term: String,
        #[structopt(help = "The formula to substitute into")]
        formula: Vec<String>,
    },
    #[structopt(name = "repl", about = "Start an interactive session")]
    Repl,
    #[structopt(name = "examples", about = "Parse the built-in example formulae")]
    Examples,
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Parse { formula } => {
                let (formula, constants) = read_formula(&formula)?;
                print_report("Parsed successfully:", &formula, &constants, stylus);
                Ok(())
            }
            ProcessCommand::Substitute {
                variable,
                term,
                formula,
            } => {
                let (formula, constants) = read_formula(&formula)?;
                let variable = read_variable(&variable)?;
                let term = read_term(&term)?;

                print_report("Parsed successfully:", &formula, &constants, stylus);
                let result = substitute(&formula, &variable, &term);
                print_substitution(&formula, &variable, &term, &result, stylus);
                Ok(())
            }
            ProcessCommand::Repl => {
                let stdin = stdin();
                let input = stdin.lock();
                Session::new().run(input, stylus)
            }
            ProcessCommand::Examples => {
                let failures = run_examples(stylus);
                println!();
                if failures > 0 {
                    bail!("{} example(s) failed to parse", failures);
                }
                stylus.println(STYLE_INFO, "All examples were parsed.");
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "deduce",
    about = "A tool for parsing and manipulating propositional and first-order formulae"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(subcommand, name = "command")]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<std::path::PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self
            .log
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !self.no_color {
            stylus.println(STYLE_LOGO, ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("cannot create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
