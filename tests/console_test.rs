use anyhow::Result;
use atm_sim::{Console, Session, SessionState, Settings, TomlConfig, DEFAULT_PIN};
use rust_decimal_macros::dec;
use std::io::Cursor;

fn run_script(session: Session, script: &str) -> Result<(Vec<String>, atm_sim::ConsoleSummary)> {
    let mut output = Vec::new();
    let summary = Console::new(session, Cursor::new(script.to_string()), &mut output).run()?;
    let lines = String::from_utf8(output)?
        .lines()
        .map(str::to_string)
        .collect();
    Ok((lines, summary))
}

#[test]
fn test_full_transcript() -> Result<()> {
    let script = "\
login 0000
login 1234
deposit 50
withdraw 20
withdraw 100
balance
exit
";
    let (lines, summary) = run_script(Session::default(), script)?;

    assert_eq!(
        lines,
        vec![
            "[Info] Welcome to the ATM Simulator. Log in with 'login <pin>'.",
            "[Error] Incorrect PIN. Please try again.",
            "[Success] PIN accepted. You can now access the ATM functions.",
            "[Success] You have deposited $50.00.",
            "[Success] You have withdrawn $20.00.",
            "[Error] Insufficient funds.",
            "[Current Balance] Your current balance is $30.00.",
            "[Info] Goodbye.",
        ]
    );
    assert_eq!(summary.commands, 7);
    assert_eq!(summary.state, SessionState::Unlocked);
    assert_eq!(summary.balance, Some(dec!(30)));
    Ok(())
}

#[test]
fn test_input_errors_are_reported_and_recoverable() -> Result<()> {
    let script = "\
login 1234
deposit abc
deposit 0
withdraw -5
deposit
deposit 10
balance
";
    let (lines, summary) = run_script(Session::default(), script)?;

    assert_eq!(lines[2], "[Error] Invalid input. Please enter a number.");
    assert_eq!(lines[3], "[Error] Amount must be greater than zero.");
    assert_eq!(lines[4], "[Error] Amount must be greater than zero.");
    assert_eq!(lines[5], "[Error] Invalid input. Please enter a number.");
    assert_eq!(lines[6], "[Success] You have deposited $10.00.");
    assert_eq!(lines[7], "[Current Balance] Your current balance is $10.00.");
    assert_eq!(summary.balance, Some(dec!(10)));
    Ok(())
}

#[test]
fn test_locked_commands_are_refused() -> Result<()> {
    let (lines, summary) = run_script(Session::default(), "deposit 10\nwithdraw 5\nbalance\n")?;

    for line in &lines[1..4] {
        assert_eq!(line, "[Error] Please log in with your PIN first.");
    }
    assert_eq!(summary.state, SessionState::Locked);
    assert_eq!(summary.balance, None);
    Ok(())
}

#[test]
fn test_end_of_input_acts_like_exit() -> Result<()> {
    let (lines, summary) = run_script(Session::default(), "login 1234")?;
    assert_eq!(lines.last().map(String::as_str), Some("[Info] Goodbye."));
    assert_eq!(summary.commands, 1);
    Ok(())
}

#[test]
fn test_commands_after_exit_are_ignored() -> Result<()> {
    let (lines, summary) = run_script(Session::default(), "login 1234\nquit\ndeposit 5\n")?;
    assert_eq!(lines.len(), 3);
    assert_eq!(summary.balance, Some(dec!(0)));
    Ok(())
}

#[test]
fn test_blank_and_unknown_lines() -> Result<()> {
    let (lines, summary) = run_script(Session::default(), "\n   \nTRANSFER 5\nHelp\n")?;
    assert_eq!(
        lines[1],
        "[Error] Unknown command 'TRANSFER'. Type 'help' for a list of commands."
    );
    assert!(lines[2].starts_with("[Info] Commands:"));
    assert_eq!(summary.commands, 2);
    Ok(())
}

#[test]
fn test_already_logged_in() -> Result<()> {
    let (lines, _) = run_script(Session::default(), "pin 1234\nlogin 1234\n")?;
    assert_eq!(lines[2], "[Info] You are already logged in.");
    Ok(())
}

#[test]
fn test_session_from_config_file_pin() -> Result<()> {
    let config = TomlConfig::from_toml_str("[session]\npin = \"5678\"\n")?;
    let settings = Settings::resolve(Some(&config), None, false);
    let session = Session::from_config(&settings);

    let script = format!("login {}\nlogin 5678\nbalance\n", DEFAULT_PIN);
    let (lines, summary) = run_script(session, &script)?;

    assert_eq!(lines[1], "[Error] Incorrect PIN. Please try again.");
    assert_eq!(lines[3], "[Current Balance] Your current balance is $0.00.");
    assert_eq!(summary.state, SessionState::Unlocked);
    Ok(())
}
