//! The interactive quiz loop.
//!
//! Each round draws a riddle, waits for a line of note names, then reveals
//! the verdict. Between rounds any line except `q` starts the next one.
//! End of input ends the game in either state.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;

use fretquiz_core::answer::Answer;
use fretquiz_core::checker::{check_answer, RoundResult};
use fretquiz_core::render::{render_answer, render_result, render_riddle};
use fretquiz_core::riddle::{Riddle, SampleOptions};
use fretquiz_core::theory::Spelling;

use crate::config::FretquizConfig;

const ANSWER_PROMPT: &str = "Enter the names of all notes separated by spaces: ";
const CONTINUE_PROMPT: &str = "for more press \"RETURN\", to exit enter \"q\": ";
const QUIT: &str = "q";

/// Everything a game needs besides its streams and RNG.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub sample: SampleOptions,
    pub spelling: Spelling,
    pub pause: Duration,
    /// Ask this riddle every round instead of drawing one.
    pub fixed_riddle: Option<Riddle>,
}

impl GameSettings {
    /// Build settings from a validated config and optional fixed frets.
    pub fn from_config(config: &FretquizConfig, frets: Option<&[u8]>) -> Result<Self> {
        let fixed_riddle = frets
            .map(|f| Riddle::new(f, config.neck_length))
            .transpose()?;
        Ok(Self {
            sample: config.sample_options(),
            spelling: config.spelling,
            pause: Duration::from_millis(config.pause_ms),
            fixed_riddle,
        })
    }
}

/// Tally of a finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub rounds: u32,
    pub correct: u32,
}

/// A quiz game reading answers from `input` and drawing to `output`.
pub struct Game<R, W, G> {
    input: R,
    output: W,
    rng: G,
    settings: GameSettings,
}

impl<R: BufRead, W: Write, G: Rng> Game<R, W, G> {
    pub fn new(input: R, output: W, rng: G, settings: GameSettings) -> Self {
        Self {
            input,
            output,
            rng,
            settings,
        }
    }

    /// Play rounds until the user quits or input runs out.
    ///
    /// A flat-spelled name missing from the note tables, or a short answer,
    /// ends the game with an error.
    pub fn run(&mut self) -> Result<Session> {
        let mut session = Session::default();

        loop {
            let Some(result) = self.play_round()? else {
                break;
            };
            session.rounds += 1;
            if result.is_correct() {
                session.correct += 1;
            }

            write!(self.output, "\n{CONTINUE_PROMPT}")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(line) if line.trim() != QUIT => continue,
                Some(_) => break,
                None => {
                    writeln!(self.output)?;
                    break;
                }
            }
        }

        tracing::info!(
            rounds = session.rounds,
            correct = session.correct,
            "quiz finished"
        );
        Ok(session)
    }

    /// One Prompting → Revealing pass. `None` when input ended at the prompt.
    fn play_round(&mut self) -> Result<Option<RoundResult>> {
        let riddle = match self.settings.fixed_riddle {
            Some(riddle) => riddle,
            None => Riddle::sample(&mut self.rng, &self.settings.sample)?,
        };

        writeln!(self.output, "{}", render_riddle(riddle.frets()))?;
        write!(self.output, "{ANSWER_PROMPT}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            writeln!(self.output)?;
            return Ok(None);
        };
        let answer = Answer::parse(&line);

        writeln!(self.output, "\nEvaluating answer: {answer}...")?;
        self.output.flush()?;
        if !self.settings.pause.is_zero() {
            thread::sleep(self.settings.pause);
        }

        let result = check_answer(&answer, &riddle)?;
        let correct = riddle.correct_notes();

        if result.is_correct() {
            writeln!(self.output, "You Are Correct!")?;
        } else {
            writeln!(self.output, "\nWrong! the correct answer is:")?;
            writeln!(
                self.output,
                "{}",
                render_answer(&correct, self.settings.spelling)?
            )?;
        }
        writeln!(
            self.output,
            "\n{}",
            render_result(&result, &answer, &correct)
        )?;

        tracing::debug!(
            %riddle,
            wrong = result.wrong_count(),
            "round complete"
        );
        Ok(Some(result))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        Ok((n > 0).then_some(line))
    }
}
