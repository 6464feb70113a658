//! Terminal renderer: a numbered listing with a total header.

use colored::Colorize;

use crate::models::UserRecord;
use crate::output::OutputRenderer;

/// Width of the rule under the header.
const RULE_WIDTH: usize = 50;

/// Terminal output renderer.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, users: &[UserRecord]) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!("{}\n", format!("Total: {} users", users.len()).bold()));
        output.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH).dimmed()));

        for (i, user) in users.iter().enumerate() {
            output.push_str(&format!(
                "{}. Login: {} | ID: {} | Type: {}\n",
                i + 1,
                user.login,
                user.id,
                user.type_label(),
            ));
        }

        output.push('\n');
        output
    }
}
