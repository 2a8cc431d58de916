//! Help command implementation.
//!
//! Prints the usage banner, or the section for a single command.

use clap::Args;

/// Show help for bootskin or one of its commands
#[derive(Args, Debug, Default)]
pub struct HelpArgs {
    /// Command to explain (help, build, clean)
    pub topic: Option<String>,
}

const HELP: &str = "\
`help`         - Show the entire help message.
`help word`    - Show help related to the word.";

const BUILD: &str = "\
`build`        - Build the theme: icons are composited onto the button
                 templates and tinted, the plain background is copied.
`build [args]` - Configure the build process with KEY=VALUE args:
    `bgbakeicons=N`       - Copy icons verbatim and bake N buttons into each
                            row of the background, to give the illusion of
                            button presses. A bare `bgbakeicons` bakes none.
    `bgbakeicons.os=N`    - Number of big (OS) buttons to bake.
    `bgbakeicons.other=N` - Number of small (other) buttons to bake.";

const CLEAN: &str = "\
`clean`        - Delete the theme's build folder.";

/// Help text for a topic, or the whole banner when `topic` is `None`.
pub fn help_text(topic: Option<&str>) -> String {
    match topic.map(|t| t.trim().to_lowercase()) {
        None => format!("{}\n\n{}\n\n{}", HELP, BUILD, CLEAN),
        Some(topic) => match topic.as_str() {
            "help" => HELP.to_string(),
            "build" => BUILD.to_string(),
            "clean" => CLEAN.to_string(),
            _ => "What's that?".to_string(),
        },
    }
}

pub fn run(args: HelpArgs) {
    println!("{}", help_text(args.topic.as_deref()));
}
