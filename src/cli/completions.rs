use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ultrac completions bash > ~/.bash_completion.d/ultrac\n\n\
                  Generate zsh completions:\n    ultrac completions zsh > ~/.zfunc/_ultrac\n\n\
                  Generate fish completions:\n    ultrac completions fish > ~/.config/fish/completions/ultrac.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
