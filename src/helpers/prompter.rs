use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use crate::enums::tech_stack::TechStack;
use crate::errors::SetupResult;

/// Line-based prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Blank input (or EOF) yields `default`; anything else is returned
    /// as typed, minus the line terminator.
    pub fn ask(&mut self, label: &str, default: &str) -> SetupResult<String> {
        write!(self.writer, "{} [{}]: ", label, default)?;
        self.writer.flush()?;

        let answer = self.read_line()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    pub fn select_tech_stack(&mut self, default: TechStack) -> SetupResult<TechStack> {
        writeln!(self.writer, "\nSelect a tech stack:")?;
        for stack in TechStack::ALL {
            writeln!(self.writer, "  {}. {} - {}", stack.choice(), stack.label(), stack.description())?;
        }

        let choice = self.ask("Choice (1-5)", &default.choice().to_string())?;
        let stack = TechStack::from_choice(&choice);
        if choice != stack.choice().to_string() {
            log::debug!("Unrecognized tech stack choice {:?}, using {}", choice, stack);
        }

        Ok(stack)
    }

    pub fn confirm(&mut self, question: &str) -> SetupResult<bool> {
        write!(self.writer, "{} (y/N): ", question)?;
        self.writer.flush()?;

        let answer = self.read_line()?;
        Ok(is_affirmative(&answer))
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_line(&mut self) -> SetupResult<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

/// Only `y` and `yes`, in any case, count as agreement.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
