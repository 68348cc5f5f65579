use std::io::{self, BufRead, Write};

/// Interactive yes/no gate in front of destructive calls.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// `--yes`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Asks on stderr, reads the answer from stdin. Anything but y/yes/д/да declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ").and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_latin_and_cyrillic_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" Да "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[test]
    fn closures_can_answer() {
        let mut asked = Vec::new();
        let mut decline = |p: &str| {
            asked.push(p.to_string());
            false
        };
        assert!(!decline.confirm("sure?"));
        assert_eq!(asked, vec!["sure?"]);
    }
}
