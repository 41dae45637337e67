use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

pub struct Args {
    pub tuning: Option<PathBuf>,
    pub ticks: u64,
    pub seed: u64,
}

pub fn command() -> Command {
    let tuning_option = Arg::new("tuning")
        .value_name("TUNING_JSON")
        .help("Tuning file; defaults apply to anything it leaves out")
        .value_parser(value_parser!(PathBuf));

    let ticks_option = Arg::new("ticks")
        .long("ticks")
        .short('n')
        .help("Frames to simulate")
        .default_value("900")
        .value_parser(value_parser!(u64));

    let seed_option = Arg::new("seed")
        .long("seed")
        .short('s')
        .help("Idle-mode bot seed")
        .default_value("12345")
        .value_parser(value_parser!(u64));

    Command::new("space-game")
        .about("Headless space shooter simulation")
        .arg(tuning_option)
        .arg(ticks_option)
        .arg(seed_option)
}

pub fn parse_command_line() -> Args {
    args_from(&command().get_matches())
}

fn args_from(matches: &ArgMatches) -> Args {
    Args {
        tuning: matches.get_one::<PathBuf>("tuning").cloned(),
        ticks: matches.get_one::<u64>("ticks").copied().unwrap_or(900),
        seed: matches.get_one::<u64>("seed").copied().unwrap_or(12345),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        command().try_get_matches_from(argv).map(|m| args_from(&m))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["space-game"]).unwrap();
        assert!(args.tuning.is_none());
        assert_eq!(args.ticks, 900);
        assert_eq!(args.seed, 12345);
    }

    #[test]
    fn test_flags_and_tuning_path() {
        let argv = ["space-game", "balance.json", "--ticks", "5", "-s", "7"];
        let args = parse(&argv).unwrap();
        assert_eq!(args.tuning, Some(PathBuf::from("balance.json")));
        assert_eq!(args.ticks, 5);
        assert_eq!(args.seed, 7);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse(&["space-game", "--tick", "5"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_a_tuning_path() {
        let err = parse(&["space-game", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bad_number_is_rejected() {
        let err = parse(&["space-game", "--ticks", "many"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
