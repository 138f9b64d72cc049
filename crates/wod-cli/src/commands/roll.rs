//! One-shot roll from the command line.

use std::io;

use clap::Args;
use wod_mechanics::{DEFAULT_DIFFICULTY, RollRequest, Splat};

/// Arguments for `wod roll`.
#[derive(Args)]
pub struct RollArgs {
    /// Number of d10s to roll
    dice: u32,

    /// Difficulty each die must meet (default: 6, or the splat roll's fixed difficulty)
    #[arg(short, long)]
    difficulty: Option<u32>,

    /// Label to print with the roll
    #[arg(short, long)]
    label: Option<String>,

    /// Roll as this splat (e.g. wraith, mage)
    #[arg(short, long)]
    splat: Option<String>,

    /// Which of the splat's rolls, by name or number (default: the first)
    #[arg(short, long, requires = "splat")]
    roll: Option<String>,

    /// RNG seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: &RollArgs) -> Result<(), String> {
    let mut label = args.label.clone();
    let mut difficulty = args.difficulty;

    if let Some(name) = &args.splat {
        let splat: Splat = name.parse().map_err(|e: wod_mechanics::MechError| e.to_string())?;
        let preset = splat
            .preset(args.roll.as_deref().unwrap_or("1"))
            .map_err(|e| e.to_string())?;
        label = label.or_else(|| Some(preset.label.to_string()));
        difficulty = difficulty.or(preset.difficulty.fixed());
    }

    let mut request = RollRequest::new(args.dice, difficulty.unwrap_or(DEFAULT_DIFFICULTY))
        .map_err(|e| e.to_string())?;
    if let Some(label) = label {
        request = request.with_label(label);
    }

    let result = wod_mechanics::roll(&request, &mut super::rng_from_seed(args.seed));

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
        Ok(())
    } else {
        super::write_roll(&mut io::stdout(), &result).map_err(|e| e.to_string())
    }
}
