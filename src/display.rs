use owo_colors::OwoColorize;

pub fn section_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "─".repeat(title.len()).cyan());
}

pub fn progress(msg: &str) {
    println!("{} {msg}", "→".cyan());
}

pub fn success(msg: &str) {
    println!("{} {msg}", "✓".green().bold());
}

pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "error:".red().bold());
}
