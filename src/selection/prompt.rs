use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use std::io;

/// Terminal interaction used by the selector and the entry point.
pub trait Prompt {
    /// Print an informational line.
    fn show(&mut self, line: &str);

    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read without echoing (private keys).
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;

    /// Read a line that may be left empty.
    fn read_optional(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// `dialoguer`-backed prompt for interactive terminals.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for DialoguerPrompt {
    fn show(&mut self, line: &str) {
        println!("{}", line);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()
    }

    fn read_optional(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let value = value.trim();
        Ok(if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        })
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
    }
}

#[cfg(test)]
pub mod testing {
    use super::Prompt;
    use std::collections::VecDeque;
    use std::io;

    /// Replays canned answers and records everything shown.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub shown: Vec<String>,
        pub questions: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }

        fn next(&mut self, prompt: &str) -> io::Result<String> {
            self.questions.push(prompt.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    impl Prompt for ScriptedPrompt {
        fn show(&mut self, line: &str) {
            self.shown.push(line.to_string());
        }

        fn read_line(&mut self, prompt: &str) -> io::Result<String> {
            self.next(prompt)
        }

        fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
            self.next(prompt)
        }

        fn read_optional(&mut self, prompt: &str) -> io::Result<Option<String>> {
            let answer = self.next(prompt)?;
            Ok(Some(answer).filter(|a| !a.is_empty()))
        }

        fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
            Ok(self.next(prompt)? == "y")
        }
    }
}
