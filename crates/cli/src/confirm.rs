//! Terminal confirmation for destructive edits.

use std::io::{BufRead, Write};

use catalogo_editor::Confirm;

/// Asks `[y/N]` on `output` and reads the answer from `input`.
///
/// Anything other than an explicit yes (including EOF or an I/O error)
/// counts as no.
pub struct PromptConfirm<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PromptConfirm<'a, R, W> {
    pub const fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ").and_then(|()| self.output.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

/// Confirmation policy for one-shot commands.
pub enum CliConfirm {
    /// `--yes` was given.
    Assume,
    /// Ask on the terminal.
    Ask,
}

impl CliConfirm {
    pub const fn from_flag(yes: bool) -> Self {
        if yes { Self::Assume } else { Self::Ask }
    }
}

impl Confirm for CliConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match self {
            Self::Assume => true,
            Self::Ask => {
                let mut input = std::io::stdin().lock();
                let mut output = std::io::stderr();
                PromptConfirm::new(&mut input, &mut output).confirm(prompt)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = answer.as_bytes();
        let mut output = Vec::new();
        let approved = PromptConfirm::new(&mut input, &mut output).confirm("¿Borrar?");
        (approved, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        for answer in ["y\n", "YES\n", " s \n", "Sí\n", "si"] {
            assert!(ask(answer).0, "{answer:?} should approve");
        }
    }

    #[test]
    fn test_other_answers_decline() {
        for answer in ["n\n", "\n", "", "maybe\n"] {
            assert!(!ask(answer).0, "{answer:?} should decline");
        }
    }

    #[test]
    fn test_prompt_is_written() {
        assert_eq!(ask("n\n").1, "¿Borrar? [y/N] ");
    }

    #[test]
    fn test_assume_confirms_without_reading() {
        assert!(CliConfirm::from_flag(true).confirm("x"));
    }
}
