mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use termcal_core::ics::generate_ics;
use termcal_core::schedule::Schedule;
use termcal_core::week_view::week_view;

use crate::render::Render;

#[derive(Parser)]
#[command(name = "termcal")]
#[command(about = "Turn a term's course schedule into an .ics calendar")]
struct Cli {
    /// Schedule description (JSON)
    #[arg(default_value = "courses.json")]
    input: PathBuf,

    /// Where to write the generated calendar
    #[arg(short, long, default_value = "school_calendar.ics")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let schedule = Schedule::load(&cli.input)?;

    println!("\n{}", week_view(&schedule.events).render());

    let ics = generate_ics(&schedule);
    std::fs::write(&cli.output, &ics)?;

    let resolved = cli.output.canonicalize().unwrap_or_else(|_| cli.output.clone());
    println!("\n✅ Exported: {}", resolved.display().green());

    Ok(())
}
