//! Interactive roller: pick a splat, then roll until the player stops.
//!
//! Bad input is reported and asked again; end of input ends the session.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use colored::Colorize;
use wod_mechanics::{
    DiceSource, DifficultySource, MAX_DICE, PoolSource, RollPreset, RollRequest, Splat,
};

const DIFFICULTY_RANGE: RangeInclusive<u32> = 1..=10;

/// Start an interactive session on stdin/stdout.
pub fn run(splat: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let splat = splat
        .map(str::parse::<Splat>)
        .transpose()
        .map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), super::rng_from_seed(seed));
    shell.run(splat).map_err(|e| e.to_string())
}

/// A prompt loop over any reader, writer, and dice.
pub struct Shell<R, W, S> {
    input: R,
    output: W,
    dice: S,
    line: String,
}

impl<R: BufRead, W: Write, S: DiceSource> Shell<R, W, S> {
    pub fn new(input: R, output: W, dice: S) -> Self {
        Self {
            input,
            output,
            dice,
            line: String::new(),
        }
    }

    /// Play `splat`, or ask for one first.
    pub fn run(&mut self, splat: Option<Splat>) -> io::Result<()> {
        let splat = match splat {
            Some(splat) => splat,
            None => match self.choose_splat()? {
                Some(splat) => splat,
                None => return Ok(()),
            },
        };
        writeln!(self.output, "\n  {} {}", "Playing".bold(), splat)?;

        loop {
            let Some(preset) = self.choose_preset(splat)? else {
                break;
            };
            let Some(request) = self.build_request(preset)? else {
                break;
            };
            let result = wod_mechanics::roll(&request, &mut self.dice);
            super::write_roll(&mut self.output, &result)?;

            if self.ask_yes_no("\nRoll again? (y/n): ")? != Some(true) {
                break;
            }
        }
        Ok(())
    }

    fn choose_splat(&mut self) -> io::Result<Option<Splat>> {
        writeln!(
            self.output,
            "\n  {}",
            "Choose Your World of Darkness Game".blue().bold()
        )?;
        for (i, splat) in Splat::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {splat}", i + 1)?;
        }
        let choice = self.ask_number("Enter your selection: ", 1..=Splat::ALL.len() as u32)?;
        Ok(choice.and_then(|n| Splat::from_menu_index(n as usize)))
    }

    fn choose_preset(&mut self, splat: Splat) -> io::Result<Option<&'static RollPreset>> {
        let presets = splat.presets();
        if let [only] = presets {
            return Ok(Some(only));
        }
        let labels: Vec<&str> = presets.iter().map(|p| p.label).collect();
        writeln!(self.output, "\n  Available Rolls: {}", labels.join(", "))?;
        let prompt = format!("Which roll do you want to perform? (1-{}): ", presets.len());
        let choice = self.ask_number(&prompt, 1..=presets.len() as u32)?;
        Ok(choice.and_then(|n| presets.get(n as usize - 1)))
    }

    fn build_request(&mut self, preset: &RollPreset) -> io::Result<Option<RollRequest>> {
        let PoolSource::Prompt { prompt } = preset.dice;
        let Some(dice) = self.ask_number(&format!("{prompt}: "), 1..=MAX_DICE)? else {
            return Ok(None);
        };
        let difficulty = match preset.difficulty {
            DifficultySource::Fixed { value } => value,
            DifficultySource::Prompt { prompt } => {
                match self.ask_number(&format!("{prompt}: "), DIFFICULTY_RANGE)? {
                    Some(value) => value,
                    None => return Ok(None),
                }
            }
        };
        let request = RollRequest::new(dice, difficulty)
            .map_err(io::Error::other)?
            .with_label(preset.label);
        Ok(Some(request))
    }

    /// Ask until the answer is a whole number in `range`. `None` on end of input.
    fn ask_number(&mut self, prompt: &str, range: RangeInclusive<u32>) -> io::Result<Option<u32>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<u32>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                Ok(_) => writeln!(
                    self.output,
                    "  {}",
                    format!(
                        "Enter a number between {} and {}.",
                        range.start(),
                        range.end()
                    )
                    .red()
                )?,
                Err(_) => writeln!(
                    self.output,
                    "  {}",
                    "Invalid input! Enter a number.".red()
                )?,
            }
        }
    }

    /// Ask until the answer is `y` or `n`. `None` on end of input.
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => writeln!(
                    self.output,
                    "  {}",
                    "Enter 'y' for Yes or 'n' for No.".red()
                )?,
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt.yellow())?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_string()))
    }
}
