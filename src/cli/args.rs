//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Moodle submission folder organizer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "moodle-organizer",
    version,
    about = "Rename and reorganize Moodle assignment submission folders",
    long_about = "Renames the folders of a Moodle bulk submission download to canonical\n\
                  Last__First names, matching each folder to a student on a roster.\n\n\
                  Optionally extracts ZIP archives, flattens student folders into the\n\
                  target directory, shortens submitted file names, and copies in\n\
                  external files."
)]
pub struct Args {
    /// Directory containing the downloaded submission folders.
    pub directory: PathBuf,

    /// Extract ZIP archives found inside student folders.
    #[arg(short = 'z', long = "extract", alias = "unzip")]
    pub extract: bool,

    /// Roster file listing known students, one per line.
    #[arg(short = 's', long = "roster", value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Flatten student folders into the target directory.
    #[arg(short = 'f', long)]
    pub flatten: bool,

    /// External file to copy into the target directory (repeatable).
    #[arg(short = 'e', long = "external", value_name = "FILE")]
    pub external: Vec<PathBuf>,

    /// Extension whose files get shortened names during flatten (repeatable).
    #[arg(short = 'x', long = "shorten", value_name = "EXT")]
    pub shorten: Vec<String>,

    /// Filename prefix exempt from shortening (repeatable).
    #[arg(short = 'p', long = "protect", value_name = "PREFIX")]
    pub protect: Vec<String>,

    /// Narrate every rename and move.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "organizer.toml")]
    pub config: PathBuf,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if self.extract {
            config.options.extract_archives = true;
        }

        if let Some(roster) = self.roster {
            config.options.roster = Some(roster);
        }

        if self.flatten {
            config.options.flatten = true;
        }

        config.options.external_files.extend(self.external);
        config.options.shorten_extensions.extend(self.shorten);
        config.options.protected_prefixes.extend(self.protect);

        if self.verbose {
            config.options.verbose = true;
        }
    }
}
