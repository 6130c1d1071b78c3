use crate::{constants::*, examples::run_examples, terminal::Stylus, utils::*};
use anyhow::{anyhow, Error};
use deduce_fol::syntax::Formula;
use itertools::Itertools;
use std::io::{BufRead, Write};

/// Is an instruction, read from a line of the interactive session.
#[derive(PartialEq, Debug)]
pub(crate) enum Instruction {
    Parse(String),
    List,
    Clear,
    Subst {
        name: String,
        variable: String,
        term: String,
    },
    Test,
    Help,
    Quit,
    Empty,
}

impl std::str::FromStr for Instruction {
    type Err = Error;

    // Only the instruction keyword is case insensitive. The arguments are taken as they are
    // because the case of an identifier decides its meaning.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(i) => (&line[..i], line[i..].trim()),
            None => (line, ""),
        };

        let instruction = match keyword.to_lowercase().as_str() {
            "" => Instruction::Empty,
            "parse" => Instruction::Parse(rest.to_owned()),
            "list" => Instruction::List,
            "clear" => Instruction::Clear,
            "subst" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next()) {
                    (Some(name), Some(variable)) if args.clone().next().is_some() => {
                        Instruction::Subst {
                            name: name.to_owned(),
                            variable: variable.to_owned(),
                            term: args.join(" "),
                        }
                    }
                    _ => return Err(anyhow!("usage: subst <name> <var> <term>")),
                }
            }
            "test" => Instruction::Test,
            "help" | "h" | "?" => Instruction::Help,
            "quit" | "exit" | "q" => Instruction::Quit,
            _ => {
                return Err(anyhow!(
                    "unknown command `{}`; type `help` for available commands",
                    keyword
                ))
            }
        };
        Ok(instruction)
    }
}

/// Keeps the formulae parsed in an interactive session under the names `f1`, `f2`, ...
pub(crate) struct Session {
    formulae: Vec<(String, Formula)>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            formulae: Vec::new(),
        }
    }

    fn store(&mut self, formula: Formula) -> String {
        let name = format!("f{}", self.formulae.len() + 1);
        self.formulae.push((name.clone(), formula));
        name
    }

    fn get(&self, name: &str) -> Option<&Formula> {
        self.formulae
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// Executes `instruction` and returns false if the session must end.
    pub fn execute(&mut self, instruction: Instruction, stylus: &Stylus) -> Result<bool, Error> {
        match instruction {
            Instruction::Empty => (),
            Instruction::Parse(text) => {
                let (formula, constants) = read_formula(&[text])?;
                let name = self.store(formula);
                if let Some(formula) = self.get(&name) {
                    print_report(
                        &format!("Parsed successfully as {}:", name),
                        formula,
                        &constants,
                        stylus,
                    );
                }
            }
            Instruction::List => {
                if self.formulae.is_empty() {
                    stylus.println(STYLE_INFO, "No formulae stored.");
                } else {
                    stylus.println(STYLE_INFO, "Stored formulae:");
                    for (name, formula) in &self.formulae {
                        stylus.println(STYLE_FORMULA, &format!("  {}: {}", name, formula));
                    }
                }
            }
            Instruction::Clear => {
                self.formulae.clear();
                stylus.println(STYLE_INFO, "All formulae cleared.");
            }
            Instruction::Subst {
                name,
                variable,
                term,
            } => {
                let formula = self
                    .get(&name)
                    .cloned()
                    .ok_or_else(|| anyhow!("no formula is stored as `{}`", name))?;
                let variable = read_variable(&variable)?;
                let term = read_term(&term)?;
                let result = substitute(&formula, &variable, &term);
                print_substitution(&formula, &variable, &term, &result, stylus);

                let name = self.store(result);
                stylus.println(STYLE_SUCCESS, &format!("Stored as {}.", name));
            }
            Instruction::Test => {
                run_examples(stylus);
            }
            Instruction::Help => stylus.println(STYLE_INFO, HELP),
            Instruction::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Reads instructions from `input`, one per line, until the input ends or the session is
    /// quit. Errors are reported without ending the session.
    pub fn run<R: BufRead>(&mut self, input: R, stylus: &Stylus) -> Result<(), Error> {
        stylus.println(STYLE_INFO, "Type `help` for available commands.");
        let mut lines = input.lines();
        loop {
            stylus.set(STYLE_INFO);
            print!("{}", PROMPT);
            std::io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let result = line
                .parse::<Instruction>()
                .and_then(|instruction| self.execute(instruction, stylus));
            match result {
                Ok(true) => (),
                Ok(false) => break,
                Err(e) => print_error(&e, stylus),
            }
        }
        println!();
        Ok(())
    }
}
