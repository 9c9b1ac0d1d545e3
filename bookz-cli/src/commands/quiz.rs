//! Quiz URL command implementation

use anyhow::Result;
use bookz_core::{Mode, QuizLink};

/// Print the URL of the quiz application
pub fn quiz_url(production: bool) -> Result<()> {
    let mode = if production {
        Mode::Production
    } else {
        Mode::Development
    };
    println!("{}", QuizLink::for_mode(mode).url());
    Ok(())
}
