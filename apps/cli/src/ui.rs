use std::time::Duration;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

pub fn prompt_line(term: &Term, label: &str) -> std::io::Result<String> {
    term.write_str(&format!("{} ", style(label).bold()))?;
    let line = term.read_line()?;
    Ok(line.trim().to_string())
}

/// Numbered picker over the saved video names. Empty input cancels.
pub fn select_one<'a>(
    term: &Term,
    heading: &str,
    options: &[&'a str],
) -> std::io::Result<Option<&'a str>> {
    println!("{}", style(heading).bold());
    for (i, option) in options.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", i + 1)).cyan(), option);
    }

    loop {
        let line = prompt_line(term, "Choose an option (empty to go back):")?;
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(options[n - 1])),
            _ => println!(
                "{}",
                style(format!("Enter a number between 1 and {}", options.len())).yellow()
            ),
        }
    }
}

pub fn info(message: &str) {
    println!("{} {}", style("i").blue().bold(), message);
}

pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

pub fn failure(message: &str) {
    println!("{} {}", style("Error:").red().bold(), message);
}
