use std::path::PathBuf;

use super::CliFlags;
use crate::pass::CharacterClass;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-p" | "--print" => flags.print = true,
            "-b" | "--board" => flags.clipboard = true,
            "--lowercase" => flags.classes.push((CharacterClass::Lowercase, true)),
            "--uppercase" => flags.classes.push((CharacterClass::Uppercase, true)),
            "--numbers" => flags.classes.push((CharacterClass::Numbers, true)),
            "--symbols" => flags.classes.push((CharacterClass::Symbols, true)),
            "--no-lowercase" => flags.classes.push((CharacterClass::Lowercase, false)),
            "--no-uppercase" => flags.classes.push((CharacterClass::Uppercase, false)),
            "--no-numbers" => flags.classes.push((CharacterClass::Numbers, false)),
            "--no-symbols" => flags.classes.push((CharacterClass::Symbols, false)),
            flag @ ("-l" | "--length") => {
                let value = value_of(args, &mut i, flag)?;
                // Out-of-range values are clamped later, only garbage is rejected
                flags.length = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.to_string()))?,
                );
            }
            flag @ ("-n" | "--number") => {
                let value = value_of(args, &mut i, flag)?;
                let number = value
                    .parse()
                    .ok()
                    .filter(|&n: &usize| n > 0)
                    .ok_or_else(|| ParseError::InvalidNumber(value.to_string()))?;
                flags.number = Some(number);
            }
            flag @ "--log-file" => {
                let value = value_of(args, &mut i, flag)?;
                flags.log_file = Some(PathBuf::from(value));
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}
