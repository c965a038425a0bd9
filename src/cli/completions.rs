use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    agentpack completions bash > ~/.bash_completion.d/agentpack\n\n\
                  Generate zsh completions:\n    agentpack completions zsh > ~/.zfunc/_agentpack\n\n\
                  Generate fish completions:\n    agentpack completions fish > ~/.config/fish/completions/agentpack.fish\n\n\
                  Generate PowerShell completions:\n    agentpack completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
