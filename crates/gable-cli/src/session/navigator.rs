//! Terminal navigation target.

use colored::Colorize;

use gable_core::Navigator;

/// Points the user back at the login command when the session dies.
///
/// A terminal cannot redirect the way a browser does; printing the
/// instruction is the closest analogue, and it must never block or fail.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_to_login(&self) {
        eprintln!(
            "{}",
            "Session expired. Run 'gable login' to sign in again.".yellow()
        );
    }
}
