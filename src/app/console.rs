use crate::app::notice::{self, Notice};
use crate::core::amount::parse_amount;
use crate::core::session::Session;
use crate::domain::model::{Amount, SessionState};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

const HELP: &str = "Commands: login <pin>, deposit <amount>, withdraw <amount>, balance, help, exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(String),
    Deposit(String),
    Withdraw(String),
    Balance,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "login" | "pin" => Command::Login(rest.to_string()),
            "deposit" => Command::Deposit(rest.to_string()),
            "withdraw" => Command::Withdraw(rest.to_string()),
            "balance" | "check" => Command::Balance,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(word.to_string()),
        };
        Some(command)
    }

    fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "login",
            Command::Deposit(_) => "deposit",
            Command::Withdraw(_) => "withdraw",
            Command::Balance => "balance",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Unknown(_) => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSummary {
    pub commands: usize,
    pub state: SessionState,
    /// `None` when the session was never unlocked.
    pub balance: Option<Decimal>,
}

/// Line-oriented front end for a [`Session`].
pub struct Console<R: BufRead, W: Write> {
    session: Session,
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            prompt: false,
        }
    }

    /// Print a `> ` prompt before each read.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `exit` or end of input. Only I/O failures are returned as errors.
    pub fn run(mut self) -> Result<ConsoleSummary> {
        let mut commands = 0;
        self.emit(&Notice::info(notice::WELCOME))?;

        let mut line = String::new();
        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input");
                break;
            }

            let Some(command) = Command::parse(&line) else {
                continue;
            };
            commands += 1;
            tracing::debug!("Command: {}", command.name());

            if command == Command::Exit {
                break;
            }

            let notice = self.execute(command);
            self.emit(&notice)?;
        }

        self.emit(&Notice::info(notice::GOODBYE))?;
        self.output.flush()?;

        let summary = ConsoleSummary {
            commands,
            state: self.session.state(),
            balance: self.session.inquire().ok(),
        };
        tracing::info!("Console closed after {} commands", summary.commands);
        Ok(summary)
    }

    /// Applies one command to the session and returns the notice to show.
    pub fn execute(&mut self, command: Command) -> Notice {
        match command {
            Command::Login(_) if self.session.is_unlocked() => {
                Notice::info(notice::ALREADY_LOGGED_IN)
            }
            Command::Login(pin) => match self.session.unlock(&pin) {
                Ok(()) => Notice::pin_accepted(),
                Err(e) => e.into(),
            },
            Command::Deposit(text) => match self.session.deposit(&text) {
                Ok(_) => Notice::deposited(echoed_amount(&text)),
                Err(e) => e.into(),
            },
            Command::Withdraw(text) => match self.session.withdraw(&text) {
                Ok(_) => Notice::withdrawn(echoed_amount(&text)),
                Err(e) => e.into(),
            },
            Command::Balance => match self.session.inquire() {
                Ok(balance) => Notice::balance(balance),
                Err(e) => e.into(),
            },
            Command::Help => Notice::info(HELP),
            Command::Exit => Notice::info(notice::GOODBYE),
            Command::Unknown(word) => Notice::error(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                word
            )),
        }
    }

    fn emit(&mut self, notice: &Notice) -> Result<()> {
        writeln!(self.output, "{}", notice)?;
        Ok(())
    }
}

// Only called after the session accepted the text, so parsing succeeds.
fn echoed_amount(text: &str) -> Decimal {
    parse_amount(text).map_or(Decimal::ZERO, Amount::value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_PIN;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(
            Command::parse("LOGIN 1234"),
            Some(Command::Login("1234".to_string()))
        );
        assert_eq!(
            Command::parse("deposit   12.50 "),
            Some(Command::Deposit("12.50".to_string()))
        );
        assert_eq!(Command::parse("withdraw"), Some(Command::Withdraw(String::new())));
        assert_eq!(Command::parse("check"), Some(Command::Balance));
        assert_eq!(Command::parse("quit"), Some(Command::Exit));
        assert_eq!(
            Command::parse("transfer 5"),
            Some(Command::Unknown("transfer".to_string()))
        );
    }

    #[test]
    fn test_execute_login_twice() {
        let mut console = Console::new(Session::default(), Cursor::new(""), Vec::new());
        let first = console.execute(Command::Login(DEFAULT_PIN.to_string()));
        assert_eq!(first.message, notice::PIN_ACCEPTED);

        let second = console.execute(Command::Login("0000".to_string()));
        assert_eq!(second.message, notice::ALREADY_LOGGED_IN);
        assert!(console.session().is_unlocked());
    }

    #[test]
    fn test_execute_deposit_echoes_amount() {
        let mut session = Session::default();
        session.unlock(DEFAULT_PIN).unwrap();
        let mut console = Console::new(session, Cursor::new(""), Vec::new());

        let notice = console.execute(Command::Deposit(" 7.5 ".to_string()));
        assert_eq!(notice.to_string(), "[Success] You have deposited $7.50.");
    }

    #[test]
    fn test_prompt_is_written() {
        let mut output = Vec::new();
        let console = Console::new(Session::default(), Cursor::new("exit\n"), &mut output)
            .with_prompt(true);
        console.run().unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("> "));
    }
}
