use clap::Parser;

/// Interactive vending machine for the terminal
///
/// The machine takes no options: the catalog is fixed and the whole
/// interaction happens over stdin/stdout. Parsing still runs so stray
/// arguments are rejected and --help/--version behave as expected.
#[derive(Parser, Debug)]
#[command(name = "vending-machine", version)]
#[command(about = "Interactive vending machine for the terminal", long_about = None)]
pub struct CliArgs {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn test_accepts_no_arguments() {
        let result = CliArgs::try_parse_from(["vending-machine"]);
        assert!(result.is_ok());
    }

    #[rstest]
    #[case::stray_positional(&["vending-machine", "A1"])]
    #[case::unknown_flag(&["vending-machine", "--restock", "A1"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_and_version_are_display_requests() {
        let help = CliArgs::try_parse_from(["vending-machine", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        let version = CliArgs::try_parse_from(["vending-machine", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }
}
