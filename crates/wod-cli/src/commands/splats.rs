use comfy_table::{ContentArrangement, Table};
use wod_mechanics::{DifficultySource, PoolSource, Splat};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Splat", "Roll", "Dice", "Difficulty"]);

    for (i, splat) in Splat::ALL.iter().enumerate() {
        for (j, preset) in splat.presets().iter().enumerate() {
            let (number, name) = if j == 0 {
                ((i + 1).to_string(), splat.to_string())
            } else {
                (String::new(), String::new())
            };
            let PoolSource::Prompt { prompt } = preset.dice;
            let difficulty = match preset.difficulty {
                DifficultySource::Fixed { value } => value.to_string(),
                DifficultySource::Prompt { .. } => "asked".to_string(),
            };
            table.add_row(vec![
                number,
                name,
                preset.label.to_string(),
                prompt.trim_start_matches("Enter ").to_string(),
                difficulty,
            ]);
        }
    }

    println!("{table}");
    println!();
    println!("  {} splats", Splat::ALL.len());

    Ok(())
}
