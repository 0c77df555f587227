//! Console output utilities.

use console::style;

use crate::config::Config;
use crate::organize::Summary;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print configuration summary.
pub fn print_config_summary(target: &str, config: &Config) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Directory: {}", target);
    if let Some(roster) = &config.options.roster {
        println!("  Roster: {}", roster.display());
    }
    let mut passes = vec!["rename"];
    if config.options.extract_archives {
        passes.insert(0, "extract");
    }
    if config.options.flatten {
        passes.push("flatten");
    }
    println!("  Passes: {}", passes.join(", "));
    if !config.options.shorten_extensions.is_empty() {
        println!(
            "  Shorten: {}",
            config.options.shorten_extensions.join(", ")
        );
    }
    println!();
}

/// Print the run summary.
pub fn print_summary(summary: &Summary) {
    println!();
    println!("{}", style("Done:").bold());
    println!("  Folders matched: {}", summary.folders_matched);
    println!("  Folders renamed: {}", summary.folders_renamed);
    if summary.archives_extracted > 0 {
        println!("  Archives extracted: {}", summary.archives_extracted);
    }
    if summary.files_moved > 0 {
        println!("  Files moved: {}", summary.files_moved);
    }
    if summary.externals_copied > 0 {
        println!("  External files copied: {}", summary.externals_copied);
    }
}
