use anyhow::Result;
use colored::*;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::ReplConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Submit a word for the active player
    Word(String),
    Status,
    Help,
    Quit,
}

pub struct ReplInterface {
    editor: DefaultEditor,
    command_sender: mpsc::UnboundedSender<ReplCommand>,
    config: ReplConfig,
}

impl ReplInterface {
    pub fn new(command_sender: mpsc::UnboundedSender<ReplCommand>, config: ReplConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(history_file) = &config.history_file {
            let _ = editor.load_history(history_file);
        }

        Ok(Self {
            editor,
            command_sender,
            config,
        })
    }

    /// Read lines on a blocking thread until the user quits; the editor is
    /// created on that thread
    pub fn spawn(command_sender: mpsc::UnboundedSender<ReplCommand>, config: ReplConfig) -> JoinHandle<Result<()>> {
        tokio::task::spawn_blocking(move || {
            let mut repl = ReplInterface::new(command_sender, config)?;
            repl.run();
            Ok(())
        })
    }

    fn run(&mut self) {
        loop {
            let input = match self.editor.readline(&self.config.prompt) {
                Ok(input) => input,
                Err(_) => {
                    let _ = self.command_sender.send(ReplCommand::Quit);
                    break;
                }
            };

            let command = match parse_command(&input) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{}", format!("Error: {}", e).red());
                    continue;
                }
            };

            let _ = self.editor.add_history_entry(input.trim());
            let quit = command == ReplCommand::Quit;
            if self.command_sender.send(command).is_err() || quit {
                break;
            }
        }

        if let Some(history_file) = &self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }
    }
}

/// Lines starting with `:` are commands, anything else is a word
pub fn parse_command(input: &str) -> Result<ReplCommand> {
    let input = input.trim();

    match input {
        "" => Err(anyhow::anyhow!("Type a word, or :help for commands")),
        ":status" | ":s" => Ok(ReplCommand::Status),
        ":help" | ":h" => Ok(ReplCommand::Help),
        ":quit" | ":exit" | ":q" => Ok(ReplCommand::Quit),
        command if command.starts_with(':') => Err(anyhow::anyhow!(
            "Unknown command: '{}'. Type :help for available commands.",
            command
        )),
        word => Ok(ReplCommand::Word(word.to_string())),
    }
}
