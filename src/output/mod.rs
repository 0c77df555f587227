//! Output module for console output.

pub mod console;

pub use console::{
    print_config_summary, print_error, print_info, print_success, print_summary, print_warning,
};
