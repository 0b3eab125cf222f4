use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create a GitHub repository for a freshly generated ML project and push it", long_about = None)]
struct Cli {
    /// Settings file (defaults to .ml-bootstrap.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for consent and a token, create the repository and push (default)
    Hook {
        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Create the GitHub repository only
    Create {
        #[command(flatten)]
        template: TemplateArgs,

        /// Make the repository private
        #[arg(long)]
        private: bool,

        /// GitHub token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Initialize git in the project and push it to an existing repository
    Push {
        /// Repository URL (e.g. https://github.com/user/repo)
        url: String,

        #[command(flatten)]
        template: TemplateArgs,

        /// GitHub token, embedded in the remote URL
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

/// Template variables, overriding the settings file
#[derive(Args, Debug, Default, Clone)]
pub struct TemplateArgs {
    /// Generated project directory (defaults to ./<repo-name>)
    #[arg(long)]
    project_dir: Option<String>,

    #[arg(long)]
    project_name: Option<String>,

    #[arg(long)]
    repo_name: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    author_name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    python_version: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ml_bootstrap::logging::init(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        None => {
            commands::hook::execute(config, &TemplateArgs::default())?;
        }
        Some(Commands::Hook { template }) => {
            commands::hook::execute(config, &template)?;
        }
        Some(Commands::Create {
            template,
            private,
            token,
        }) => {
            commands::create::execute(config, &template, private, token.as_deref())?;
        }
        Some(Commands::Push {
            url,
            template,
            token,
        }) => {
            commands::push::execute(config, &template, &url, token.as_deref())?;
        }
    }

    Ok(())
}
