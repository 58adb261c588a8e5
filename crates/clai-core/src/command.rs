use crate::error::{ClaiError, Result};

/// One invocation's worth of work, chosen from the first argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    SetModel(String),
    SetSystemMessage(String),
    NewConversation,
    ShowLog,
    PurgeLog,
    ClearAll,
    Help,
    Prompt(String),
}

impl Command {
    /// Map the raw argument list (program name excluded) to a command.
    ///
    /// Only the first token is inspected, case-insensitively. Anything that
    /// is not a known verb is a prompt, so this only fails on a malformed
    /// `model` or `system` invocation.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command> {
        let Some(first) = args.first() else {
            return Ok(Command::Status);
        };
        let verb = first.as_ref().to_lowercase();
        let rest = &args[1..];

        let command = match verb.as_str() {
            "model" => Command::SetModel(single_arg(
                rest,
                "missing model name argument: usage: clai model <name>",
            )?),
            "system" => Command::SetSystemMessage(single_arg(
                rest,
                "missing system message: usage: clai system \"<system message>\"",
            )?),
            "new" => Command::NewConversation,
            "log" => Command::ShowLog,
            "purge" | "del" => Command::PurgeLog,
            "help" => Command::Help,
            v if v.starts_with("clea") => Command::ClearAll,
            _ => Command::Prompt(
                args.iter()
                    .map(|a| a.as_ref())
                    .collect::<Vec<&str>>()
                    .join(" "),
            ),
        };
        Ok(command)
    }
}

fn single_arg<S: AsRef<str>>(rest: &[S], usage: &str) -> Result<String> {
    match rest {
        [value] if !value.as_ref().trim().is_empty() => Ok(value.as_ref().trim().to_string()),
        _ => Err(ClaiError::Usage(usage.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        Command::parse(args)
    }

    #[test]
    fn no_args_is_status() {
        assert_eq!(parse(&[]).unwrap(), Command::Status);
    }

    #[test]
    fn verbs() {
        assert_eq!(parse(&["new"]).unwrap(), Command::NewConversation);
        assert_eq!(parse(&["log"]).unwrap(), Command::ShowLog);
        assert_eq!(parse(&["purge"]).unwrap(), Command::PurgeLog);
        assert_eq!(parse(&["del"]).unwrap(), Command::PurgeLog);
        assert_eq!(parse(&["help"]).unwrap(), Command::Help);
        assert_eq!(
            parse(&["model", "gpt-4o-mini"]).unwrap(),
            Command::SetModel("gpt-4o-mini".into())
        );
        assert_eq!(
            parse(&["system", "be terse"]).unwrap(),
            Command::SetSystemMessage("be terse".into())
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse(&["NEW"]).unwrap(), Command::NewConversation);
        assert_eq!(parse(&["Purge"]).unwrap(), Command::PurgeLog);
        assert_eq!(
            parse(&["MODEL", "GPT-4o"]).unwrap(),
            Command::SetModel("GPT-4o".into())
        );
    }

    #[test]
    fn clea_prefix_is_lenient() {
        for word in ["clear", "clean", "CLEAN", "clea", "cleaverage"] {
            assert_eq!(parse(&[word]).unwrap(), Command::ClearAll, "{word}");
        }
        assert_eq!(parse(&["cle"]).unwrap(), Command::Prompt("cle".into()));
    }

    #[test]
    fn model_and_system_need_exactly_one_arg() {
        for args in [
            vec!["model"],
            vec!["model", "a", "b"],
            vec!["model", "  "],
            vec!["system"],
            vec!["system", "be", "terse"],
        ] {
            let err = parse(&args).unwrap_err();
            assert!(matches!(err, ClaiError::Usage(_)), "{args:?}");
        }
    }

    #[test]
    fn anything_else_is_a_prompt() {
        assert_eq!(
            parse(&["what", "is", "a", "monad?"]).unwrap(),
            Command::Prompt("what is a monad?".into())
        );
        assert_eq!(
            parse(&["hello"]).unwrap(),
            Command::Prompt("hello".into())
        );
    }

    #[test]
    fn only_first_token_selects_verb() {
        assert_eq!(
            parse(&["explain", "log", "rotation"]).unwrap(),
            Command::Prompt("explain log rotation".into())
        );
        assert_eq!(
            parse(&["newline", "handling"]).unwrap(),
            Command::Prompt("newline handling".into())
        );
    }

    #[test]
    fn prompt_keeps_original_case() {
        assert_eq!(
            parse(&["Hello", "World"]).unwrap(),
            Command::Prompt("Hello World".into())
        );
    }
}
