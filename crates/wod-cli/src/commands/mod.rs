pub mod play;
pub mod roll;
pub mod serve;
pub mod splats;

use std::io::{self, Write};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wod_mechanics::{Outcome, RollResult};

/// A seeded RNG when a seed is given, OS entropy otherwise.
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Print the faces, the success count, and the outcome line.
fn write_roll(out: &mut impl Write, result: &RollResult) -> io::Result<()> {
    let faces: Vec<String> = result.results.iter().map(u32::to_string).collect();
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        format!("{} Dice: [{}]", result.label, faces.join(", ")).cyan()
    )?;
    writeln!(
        out,
        "  {}",
        format!(
            "Total Successes: {} (Difficulty: {})",
            result.successes, result.difficulty
        )
        .green()
    )?;
    let verdict = match result.outcome() {
        Outcome::Botch => "Botch! Severe consequences may occur!".red().bold(),
        Outcome::Success { .. } => "Success!".green().bold(),
        Outcome::Failure => "Failure!".red(),
    };
    writeln!(out, "  {verdict}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wod_mechanics::RollRequest;

    fn rendered(difficulty: u32, faces: Vec<u32>) -> String {
        colored::control::set_override(false);
        let request = RollRequest::new(faces.len() as u32, difficulty)
            .unwrap()
            .with_label("Arete");
        let mut out = Vec::new();
        write_roll(&mut out, &RollResult::from_values(&request, faces)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_botch() {
        let text = rendered(6, vec![6, 1, 1, 3, 8]);
        assert!(text.contains("Arete Dice: [6, 1, 1, 3, 8]"));
        assert!(text.contains("Total Successes: 2 (Difficulty: 6)"));
        assert!(text.contains("Botch!"));
    }

    #[test]
    fn renders_success_and_failure() {
        assert!(rendered(6, vec![7, 8, 2, 3]).contains("Success!"));
        assert!(rendered(9, vec![7, 8, 2, 3]).contains("Failure!"));
    }
}
