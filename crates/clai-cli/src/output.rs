use colored::Colorize;

/// Confirmation or status line: bold yellow, followed by a blank line.
pub fn notice(text: &str) {
    println!("{}\n", text.yellow().bold());
}

/// Help text block: bold, uncolored.
pub fn help(text: &str) {
    println!("{}", text.bold());
}

/// Raw log contents, printed as-is in yellow.
pub fn log(text: &str) {
    println!("{}", text.yellow());
}

/// The assistant's reply, set off by blank lines.
pub fn reply(text: &str) {
    println!("\n{}\n", text.green());
}

pub fn error(msg: &str) {
    eprintln!("{}", format!("error: {msg}").red().bold());
}
