use clap::Parser;
use clap::error::ErrorKind;

/// Parse the command line. The tool never signals failure via exit code, so
/// a leading flag-like token this tool does not define is reported as an
/// unknown action with a zero exit instead of clap's hard error path.
/// `--help`/`--version` keep clap's own handling (which also exits 0).
pub fn args_checks() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{UNKNOWN_ACTION}");
                std::process::exit(0);
            }
        },
    }
}

/// Hint printed when no action is given
pub const SPECIFY_ACTION: &str = "Please specify an action: list, upload, list_regex, delete_regex";
/// Hint printed for an unrecognized action
pub const UNKNOWN_ACTION: &str =
    "Unknown action. Available actions: list, upload, list_regex, delete_regex";
pub const USAGE_UPLOAD: &str = "Usage: upload <file_path> <s3_key>";
pub const USAGE_LIST_REGEX: &str = "Usage: list_regex <regex>";
pub const USAGE_DELETE_REGEX: &str = "Usage: delete_regex <regex>";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Action to perform: list, upload, list_regex, delete_regex
    pub action: Option<String>,
    /// Operands for the action: <file_path> <s3_key> for upload, <regex> for the regex actions
    // Captured raw: a pattern may begin with a hyphen, so -v counts as the
    // verbose flag only before the action
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub operands: Vec<String>,
    /// Print extra stuff (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A classified invocation. `Usage` carries the message to print for a
/// malformed call; the other variants are ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    List,
    Upload { file_path: String, s3_key: String },
    ListRegex { pattern: String },
    DeleteRegex { pattern: String },
    Usage(&'static str),
}

impl Args {
    /// Classify the raw action/operand strings. Missing operands and unknown
    /// actions become `Usage`, so the caller prints a hint and exits 0
    /// without ever constructing a storage client.
    pub fn invocation(&self) -> Invocation {
        let Some(action) = self.action.as_deref() else {
            return Invocation::Usage(SPECIFY_ACTION);
        };

        match action {
            "list" => Invocation::List,
            "upload" => match self.operands.as_slice() {
                [file_path, s3_key, ..] => Invocation::Upload {
                    file_path: file_path.clone(),
                    s3_key: s3_key.clone(),
                },
                _ => Invocation::Usage(USAGE_UPLOAD),
            },
            "list_regex" => match self.operands.first() {
                Some(pattern) => Invocation::ListRegex {
                    pattern: pattern.clone(),
                },
                None => Invocation::Usage(USAGE_LIST_REGEX),
            },
            "delete_regex" => match self.operands.first() {
                Some(pattern) => Invocation::DeleteRegex {
                    pattern: pattern.clone(),
                },
                None => Invocation::Usage(USAGE_DELETE_REGEX),
            },
            _ => Invocation::Usage(UNKNOWN_ACTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["s3-prefix-mgr"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn no_action_asks_for_one() {
        assert_eq!(parse(&[]).invocation(), Invocation::Usage(SPECIFY_ACTION));
    }

    #[test]
    fn unknown_action_is_reported() {
        assert_eq!(
            parse(&["download"]).invocation(),
            Invocation::Usage(UNKNOWN_ACTION)
        );
    }

    #[test]
    fn list_takes_no_operands() {
        assert_eq!(parse(&["list"]).invocation(), Invocation::List);
    }

    #[test]
    fn upload_requires_both_operands() {
        assert_eq!(
            parse(&["upload"]).invocation(),
            Invocation::Usage(USAGE_UPLOAD)
        );
        assert_eq!(
            parse(&["upload", "report.txt"]).invocation(),
            Invocation::Usage(USAGE_UPLOAD)
        );
        assert_eq!(
            parse(&["upload", "report.txt", "report.txt"]).invocation(),
            Invocation::Upload {
                file_path: "report.txt".to_string(),
                s3_key: "report.txt".to_string(),
            }
        );
    }

    #[test]
    fn regex_actions_require_a_pattern() {
        assert_eq!(
            parse(&["list_regex"]).invocation(),
            Invocation::Usage(USAGE_LIST_REGEX)
        );
        assert_eq!(
            parse(&["delete_regex"]).invocation(),
            Invocation::Usage(USAGE_DELETE_REGEX)
        );
        assert_eq!(
            parse(&["list_regex", "a-wing/test.*"]).invocation(),
            Invocation::ListRegex {
                pattern: "a-wing/test.*".to_string(),
            }
        );
    }

    #[test]
    fn verbose_flag_counts() {
        assert_eq!(parse(&["-v", "-v", "list"]).verbose, 2);
    }

    #[test]
    fn hyphen_leading_pattern_is_an_operand_not_a_flag() {
        let args = Args::try_parse_from(["s3-prefix-mgr", "list_regex", "--foo"]).unwrap();
        assert_eq!(
            args.invocation(),
            Invocation::ListRegex {
                pattern: "--foo".to_string(),
            }
        );

        let args = Args::try_parse_from(["s3-prefix-mgr", "list_regex", "-v"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert_eq!(
            args.invocation(),
            Invocation::ListRegex {
                pattern: "-v".to_string(),
            }
        );
    }

    #[test]
    fn verbose_only_counts_before_the_action() {
        let args = parse(&["-v", "delete_regex", "-v"]);
        assert_eq!(args.verbose, 1);
        assert_eq!(
            args.invocation(),
            Invocation::DeleteRegex {
                pattern: "-v".to_string(),
            }
        );
    }

    #[test]
    fn flag_like_action_token_takes_the_unknown_action_path() {
        // args_checks maps this parse error onto UNKNOWN_ACTION and exits 0
        let err = Args::try_parse_from(["s3-prefix-mgr", "--foo"]).unwrap_err();
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }
}
