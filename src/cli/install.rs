use clap::Parser;

use crate::content::Category;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install everything:\n    agentpack install\n\n\
                   Install selected categories:\n    agentpack install --agents --skills\n\n\
                   Append-merge markdown into existing files:\n    agentpack install --merge\n\n\
                   Unattended (post-install hook) mode:\n    agentpack install --auto")]
pub struct InstallArgs {
    /// Install the agents category
    #[arg(long)]
    pub agents: bool,

    /// Install the skills category
    #[arg(long)]
    pub skills: bool,

    /// Install the prompts category
    #[arg(long)]
    pub prompts: bool,

    /// Install the instructions category
    #[arg(long)]
    pub instructions: bool,

    /// Install every category (the default when no category is selected)
    #[arg(long)]
    pub all: bool,

    /// Append non-duplicate markdown content to existing files instead of skipping them
    #[arg(long)]
    pub merge: bool,

    /// Unattended mode: do nothing if content was installed before
    #[arg(long)]
    pub auto: bool,
}

impl InstallArgs {
    /// Resolve the selector flags into the category set to install.
    /// No selection, and `--all`, both degrade to every category.
    pub fn selected_categories(&self) -> Vec<Category> {
        let mut selected = Vec::new();
        if self.agents {
            selected.push(Category::Agents);
        }
        if self.skills {
            selected.push(Category::Skills);
        }
        if self.prompts {
            selected.push(Category::Prompts);
        }
        if self.instructions {
            selected.push(Category::Instructions);
        }

        if self.all || selected.is_empty() {
            return Category::ALL.to_vec();
        }
        selected
    }
}
