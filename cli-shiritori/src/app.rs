use anyhow::Result;
use colored::*;
use tokio::sync::{broadcast, mpsc};

use shiritori::{GameSession, SessionHandle, Submission};

use crate::config::CliConfig;
use crate::render;
use crate::repl::{ReplCommand, ReplInterface};

pub struct GameApp {
    config: CliConfig,
    session: SessionHandle,
    command_receiver: mpsc::UnboundedReceiver<ReplCommand>,
    command_sender: Option<mpsc::UnboundedSender<ReplCommand>>,
}

impl GameApp {
    pub fn new(config: CliConfig) -> Result<Self> {
        let dictionary = shiritori::client::from_config(&config.engine.dictionary)?;
        let session = GameSession::spawn(config.engine.game.clone(), dictionary);

        let (command_sender, command_receiver) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            session,
            command_receiver,
            command_sender: Some(command_sender),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let warn_below = self.config.warn_below_seconds;
        let mut outcomes = self.session.outcomes();
        let mut snapshots = self.session.subscribe();
        let mut last_warning = None;

        println!("{}\n", render::welcome());
        println!("{}", render::board(&self.session.snapshot().await?, warn_below));

        if let Some(sender) = self.command_sender.take() {
            // dropping the handle detaches the reader thread
            let _ = ReplInterface::spawn(sender, self.config.repl());
        }

        loop {
            tokio::select! {
                command = self.command_receiver.recv() => match command {
                    Some(ReplCommand::Word(word)) => {
                        if self.session.submit_word(word).await? == Submission::Busy {
                            println!("{}", "Still checking the previous word...".dimmed());
                        }
                    }
                    Some(ReplCommand::Status) => {
                        println!("{}", render::board(&self.session.snapshot().await?, warn_below));
                    }
                    Some(ReplCommand::Help) => println!("{}", render::help()),
                    Some(ReplCommand::Quit) | None => break,
                },
                outcome = outcomes.recv() => match outcome {
                    Ok(outcome) => {
                        if let Some(line) = render::outcome_line(&outcome) {
                            println!("{}", line);
                        }
                        if outcome.advances_turn() {
                            println!("{}", render::board(&self.session.snapshot().await?, warn_below));
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let (turn, remaining) = {
                        let snapshot = snapshots.borrow_and_update();
                        (snapshot.turn_number, snapshot.remaining_seconds)
                    };
                    if remaining < warn_below && last_warning != Some((turn, remaining)) {
                        last_warning = Some((turn, remaining));
                        println!("{} {}", "Time left:".dimmed(), render::countdown(remaining, warn_below));
                    }
                }
            }
        }

        self.session.shutdown().await;
        println!("Goodbye!");
        Ok(())
    }
}
