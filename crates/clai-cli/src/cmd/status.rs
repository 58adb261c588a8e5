use crate::output;
use clai_core::Settings;

const BANNER: &str = r#"
   _____   _                _
  / ____| | |              (_)
 | |      | |        __ _   _
 | |      | |       / _` | | |
 | |____  | |____  | (_| | | |
  \_____| |______|  \__,_| |_|

    Welcome to CLai `clay`

required environment variables:
'GPTKEY' OpenAI Auth Code
'GPTMOD' default model to use
'GPTMSG' default system message

Usage:
clai prompt...  launch your query to AI
clai log        print out log contents to the console
clai new        new conversation for current directory
clai clea[r|n]  erase .clai_local directory and all its files
clai purge|del  erase log file
clai model {model} set model for current directory
clai system {"system prompt text"}  set system prompt
"#;

const HELP: &str = r#"
----------- c l a i  H E L P -----------
Command Line AI
(CLai == `clay`)

usage: clai
  [PROMPT... | log | new |
   clear | purge |
   model {model} |
   system {system message}]

clai PROMPT...  write the prompt on command line
clai log        print out log contents to the console
clai new        new conversation for current directory
clai clea[r|n]  erase .clai_local directory and all its files
clai purge|del  erase log file
clai model {model} set model for current directory
clai system {"system prompt text"}  set system prompt
clai help       print this help

On running clai in a directory not previously visited,
clai uses the default model and system message and
starts a new conversation.

Files created:
    .clai_local/
        clai_conversation
        clai_model
        clai_log
        clai_sysmsg

clai reads these environment variables:
'GPTKEY' for your OpenAI key,
'GPTMOD' for the default model,
'GPTMSG' for the default system message,
'CLAI_BASE_URL' to use another OpenAI-compatible endpoint,
'CLAI_TIMEOUT_SECS' to bound the request time.
for example: export GPTMOD=gpt-4o-mini
"#;

/// `clai` with no arguments.
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    output::notice(BANNER);
    output::notice(&format!("Model: {}", settings.model));
    output::notice(&format!("System Msg: {}", settings.system_message));
    Ok(())
}

/// `clai help`
pub fn help(settings: &Settings) -> anyhow::Result<()> {
    output::help(HELP);
    output::help(&format!("Current Model: {}", settings.model));
    output::help(&format!("Current System Msg: {}\n", settings.system_message));
    Ok(())
}
