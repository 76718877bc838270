use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskz", version)]
#[command(about = "Line-oriented personal task tracker", long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Run these lines instead of reading standard input (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_commands() {
        let cli = Cli::parse_from(["taskz", "-c", "todo a", "--command", "save"]);
        assert_eq!(cli.commands, vec!["todo a", "save"]);
        assert!(cli.data_file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_data_file_and_verbose() {
        let cli = Cli::parse_from(["taskz", "--data-file", "/tmp/t.txt", "-v"]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/t.txt")));
        assert!(cli.verbose);
    }
}
