use crate::config::MAX_WINDOW_DAYS;
use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// A parsed input line.
///
/// Arguments are whitespace-separated words; extra trailing words are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    All,
    AddBirthday {
        name: String,
        date: String,
    },
    ShowBirthday {
        name: String,
    },
    /// `None` uses the configured window
    Birthdays {
        days: Option<u32>,
    },
    Delete {
        name: String,
    },
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Split `line` into a command word and arguments.
    ///
    /// The command word is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// - `CommandError::EmptyInput` for a blank line
    /// - `CommandError::UnknownCommand` for an unrecognised word
    /// - `CommandError::MissingArguments` when required arguments are absent
    /// - `CommandError::InvalidArgument` for a malformed day count
    fn from_str(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::EmptyInput)?.to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match word.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take::<2>(&args, "add", "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] =
                    take::<3>(&args, "change", "change <name> <old phone> <new phone>")?;
                Command::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take::<1>(&args, "phone", "phone <name>")?;
                Command::Phone { name }
            }
            "remove-phone" => {
                let [name, phone] = take::<2>(&args, "remove-phone", "remove-phone <name> <phone>")?;
                Command::RemovePhone { name, phone }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, date] =
                    take::<2>(&args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take::<1>(&args, "show-birthday", "show-birthday <name>")?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays {
                days: args.first().map(|raw| parse_days(raw)).transpose()?,
            },
            "delete" => {
                let [name] = take::<1>(&args, "delete", "delete <name>")?;
                Command::Delete { name }
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::UnknownCommand(word)),
        };

        Ok(command)
    }
}

/// The first `N` arguments, owned.
fn take<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { command, usage });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

fn parse_days(raw: &str) -> CommandResult<u32> {
    match raw.parse::<u32>() {
        Ok(days) if days <= MAX_WINDOW_DAYS => Ok(days),
        _ => Err(CommandError::InvalidArgument {
            command: "birthdays",
            reason: format!("day count must be 0-{}, got: {}", MAX_WINDOW_DAYS, raw),
        }),
    }
}
