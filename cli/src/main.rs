//! Look up a workspace, follow it to one of its environments and print that
//! environment's variables.

mod error;
mod logging;
mod report;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use postman_core::{ClientConfig, PostmanClient, Transport};

use crate::error::Error;
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "postman-env", about = "Print the variables of a Postman environment")]
struct Args {
    /// Postman API key, sent as `X-API-Key`.
    #[arg(long, env = "POSTMAN_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Workspace to start from.
    #[arg(long, env = "WORKSPACE_ID")]
    workspace: String,

    /// Environment of the workspace to print; defaults to its first one.
    #[arg(long, env = "ENVIRONMENT_ID")]
    environment: Option<String>,

    #[arg(long, env = "POSTMAN_BASE_URL", default_value = postman_core::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

impl Args {
    fn config(&self) -> ClientConfig {
        ClientConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Look up the workspace, pick one of its environments and render it.
///
/// A failed workspace lookup ends the chain; the environment is only fetched
/// once the workspace is known and lists it.
fn run<T: Transport>(
    client: &PostmanClient<T>,
    workspace_id: &str,
    environment_id: Option<&str>,
) -> Result<String, Error> {
    let workspace = client.get_workspace(workspace_id)?;
    tracing::debug!(
        workspace = %workspace.name,
        environments = workspace.environments.len(),
        "workspace loaded"
    );

    let chosen = match environment_id {
        Some(id) => workspace
            .environments
            .iter()
            .find(|env| env.id == id)
            .ok_or_else(|| Error::EnvironmentNotInWorkspace {
                workspace: workspace_id.to_string(),
                environment: id.to_string(),
            })?,
        None => workspace
            .environments
            .first()
            .ok_or_else(|| Error::NoEnvironments {
                workspace: workspace_id.to_string(),
            })?,
    };

    let environment = client.get_environment(&chosen.id)?;
    Ok(Report(&environment).to_string())
}

fn main() -> ExitCode {
    logging::init_logger();
    let args = Args::parse();
    tracing::debug!(workspace = %args.workspace, base_url = %args.base_url, "starting");

    let client = PostmanClient::new(args.config());
    match run(&client, &args.workspace, args.environment.as_deref()) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
