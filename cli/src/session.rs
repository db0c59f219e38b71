use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use minefield_core::{Minefield, Reveal, ShuffleGenerator};

use crate::command::{Command, HELP};
use crate::render;
use crate::settings::Settings;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive run: owns the engine and turns commands into output.
#[derive(Debug)]
pub struct Session {
    engine: Minefield,
    settings: Settings,
    seed: Option<u64>,
    boards: u64,
    json: bool,
}

impl Session {
    pub fn new(settings: Settings, seed: Option<u64>, json: bool) -> Self {
        Self {
            engine: Minefield::with_policy(settings.policy),
            settings,
            seed,
            boards: 0,
            json,
        }
    }

    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.generate(out)?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Could not read command")?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.handle(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
            out.flush()?;
        }

        Ok(())
    }

    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Reveal(index) => {
                let result = self.engine.reveal(index);
                self.show_reveal(result, out)?;
            }
            Command::RevealAt(coords) => {
                let result = self.engine.reveal_at(coords);
                self.show_reveal(result, out)?;
            }
            Command::Generate(None) => self.generate(out)?,
            Command::Generate(Some((width, height, mines))) => {
                self.settings = self.settings.with_board(width, height, mines);
                self.generate(out)?;
            }
            Command::Print => self.print(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn generate(&mut self, out: &mut impl Write) -> Result<()> {
        // each new board in a seeded run gets its own seed
        let generator = match self.seed {
            Some(seed) => ShuffleGenerator::seeded(seed.wrapping_add(self.boards)),
            None => ShuffleGenerator::unseeded(),
        };
        self.boards += 1;

        let config = self.settings.config;
        self.engine
            .generate_with(config, generator)
            .context("Could not generate board")?;
        log::info!(
            "New {}x{} board with {} mines",
            config.width,
            config.height,
            config.mines
        );

        self.print(out)
    }

    fn show_reveal(
        &self,
        result: minefield_core::Result<Reveal>,
        out: &mut impl Write,
    ) -> Result<()> {
        match result {
            Ok(reveal) if self.json => {
                serde_json::to_writer(&mut *out, &reveal)?;
                writeln!(out)?;
            }
            Ok(reveal) => {
                render::reveal(&reveal, out)?;
                self.print(out)?;
            }
            Err(err) => {
                log::warn!("Reveal rejected: {err}");
                if self.json {
                    writeln!(out, "{}", serde_json::json!({ "error": err.to_string() }))?;
                } else {
                    writeln!(out, "{err}")?;
                }
            }
        }
        Ok(())
    }

    fn print(&self, out: &mut impl Write) -> Result<()> {
        let Some(view) = self.engine.view() else {
            return Ok(());
        };

        if self.json {
            serde_json::to_writer(&mut *out, &view)?;
            writeln!(out)?;
        } else {
            render::board(&view, out)?;
        }
        Ok(())
    }
}
