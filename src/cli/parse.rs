use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing value for: {0}")]
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
            "-b" | "--board" => flags.clipboard = true,
            "-u" | "--upper" => flags.upper = true,
            "-d" | "--digits" => flags.digits = true,
            "-s" | "--symbols" => flags.symbols = true,
            "--no-lower" => flags.no_lower = true,
            "-l" | "--length" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue(args[i - 1].clone()));
                }
                // Kept raw: validation owns the range/numeric messages.
                flags.length_raw = Some(args[i].clone());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("formpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_parses_to_defaults() {
        assert_eq!(parse(&args(&[])), Ok(CliFlags::default()));
    }

    #[test]
    fn class_flags_map_to_fields() {
        let flags = parse(&args(&["-u", "-d", "-s", "--no-lower"])).unwrap();
        assert!(flags.upper && flags.digits && flags.symbols && flags.no_lower);
        assert!(!flags.clipboard && !flags.quiet);
    }

    #[test]
    fn length_value_is_kept_raw() {
        let flags = parse(&args(&["--length", "8"])).unwrap();
        assert_eq!(flags.length_raw.as_deref(), Some("8"));

        // Out-of-range and junk values still parse; validation rejects them
        // later with the field message.
        let flags = parse(&args(&["-l", "banana"])).unwrap();
        assert_eq!(flags.length_raw.as_deref(), Some("banana"));
    }

    #[test]
    fn length_without_value_errors() {
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".into()))
        );
    }

    #[test]
    fn unknown_flag_errors() {
        assert_eq!(
            parse(&args(&["--frobnicate"])),
            Err(ParseError::UnknownArg("--frobnicate".into()))
        );
    }
}
