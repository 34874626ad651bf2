use std::str::FromStr;

pub const BYE_MESSAGE: &str = "Bye!";

pub const HELP_MESSAGE: &str = "\
The program calculates integer expressions with +, -, *, / and ^.
Several signs in a row are folded: 5 - - 2 is 5 + 2 and 5 - - - 2 is 5 - 2.
Division truncates toward zero and parentheses can be used to group.
Assign a variable with `name = value`, where name is made of Latin letters
and value is an integer or another variable, then use it in expressions.
Commands: /help shows this message, /exit quits.";

pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command";

/// A line starting with `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Command, ()> {
        Ok(match s.trim() {
            "/exit" => Command::Exit,
            "/help" => Command::Help,
            _ => return Err(()),
        })
    }
}

/// Returns true if the line should be handled as a command rather than be
/// given to the calculator.
pub fn is_command(line: &str) -> bool {
    line.trim_start().starts_with('/')
}
