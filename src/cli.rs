use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::path::PathBuf;

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Open the interactive viewer
    View(Option<PathBuf>),
    /// Print the FEN after `index` plies
    Fen { path: Option<PathBuf>, index: usize },
    /// Print one label per move
    Moves(Option<PathBuf>),
    Help,
    Version,
}

pub fn parse_args(args: &[String]) -> Result<CliCommand> {
    let rest = args.get(1..).unwrap_or_default();
    match rest {
        [] => Ok(CliCommand::View(None)),
        [flag] if flag == "--help" || flag == "-h" => Ok(CliCommand::Help),
        [flag] if flag == "--version" || flag == "-v" => Ok(CliCommand::Version),
        [command, index] if command == "fen" => Ok(CliCommand::Fen {
            path: None,
            index: parse_index(index)?,
        }),
        [command, path, index] if command == "fen" => Ok(CliCommand::Fen {
            path: Some(PathBuf::from(path)),
            index: parse_index(index)?,
        }),
        [command] if command == "fen" => Err(eyre!("fen needs a move index")),
        [command] if command == "moves" => Ok(CliCommand::Moves(None)),
        [command, path] if command == "moves" => Ok(CliCommand::Moves(Some(PathBuf::from(path)))),
        [path] if !path.starts_with('-') => Ok(CliCommand::View(Some(PathBuf::from(path)))),
        _ => Err(eyre!("Unknown arguments: {}", rest.join(" "))),
    }
}

fn parse_index(text: &str) -> Result<usize> {
    text.parse()
        .map_err(|_| eyre!("move index must be a non-negative number, got {:?}", text))
}

pub fn print_help(program_name: &str) {
    println!("Replay - step through a recorded chess game");
    println!();
    println!("Usage: {} [command] [game.json]", program_name);
    println!();
    println!("Commands:");
    println!("  fen [PATH] INDEX  - Print the position after INDEX half-moves");
    println!("  moves [PATH]      - Print the move list");
    println!("  --help            - Show this help");
    println!("  --version         - Show version");
    println!();
    println!("Without a command the viewer opens PATH, the configured game,");
    println!("or the bundled sample game.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("replay")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_arguments_opens_viewer() {
        assert_eq!(parse_args(&args(&[])).unwrap(), CliCommand::View(None));
    }

    #[test]
    fn test_path_opens_viewer() {
        assert_eq!(
            parse_args(&args(&["game.json"])).unwrap(),
            CliCommand::View(Some(PathBuf::from("game.json")))
        );
    }

    #[test]
    fn test_fen_with_and_without_path() {
        assert_eq!(
            parse_args(&args(&["fen", "4"])).unwrap(),
            CliCommand::Fen {
                path: None,
                index: 4
            }
        );
        assert_eq!(
            parse_args(&args(&["fen", "g.json", "0"])).unwrap(),
            CliCommand::Fen {
                path: Some(PathBuf::from("g.json")),
                index: 0
            }
        );
        assert!(parse_args(&args(&["fen", "-1"])).is_err());
        assert!(parse_args(&args(&["fen"])).is_err());
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), CliCommand::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), CliCommand::Version);
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_moves_command() {
        assert_eq!(parse_args(&args(&["moves"])).unwrap(), CliCommand::Moves(None));
        assert_eq!(
            parse_args(&args(&["moves", "x.json"])).unwrap(),
            CliCommand::Moves(Some(PathBuf::from("x.json")))
        );
    }
}
