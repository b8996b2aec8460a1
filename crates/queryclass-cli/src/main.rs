mod display;
mod form;

use anyhow::Context;
use clap::{Parser, Subcommand};
use queryclass_client::{ClassifyClient, DEFAULT_ENDPOINT};
use queryclass_core::{FormState, ModelId, Query};
use queryclass_proxy::ProxyConfig;
use queryclass_proxy::config::{DEFAULT_BIND, DEFAULT_PORT, DEFAULT_UPSTREAM};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "queryclass", version, about = "Query classification form and proxy")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the classification proxy.
    Serve {
        #[arg(long, env = "QUERYCLASS_BIND", default_value = DEFAULT_BIND)]
        bind: String,
        #[arg(long, env = "QUERYCLASS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Base URL of the classification service.
        #[arg(long, env = "QUERYCLASS_UPSTREAM", default_value = DEFAULT_UPSTREAM)]
        upstream: String,
        /// Allow browser requests from any origin.
        #[arg(long, env = "QUERYCLASS_CORS")]
        cors: bool,
    },
    /// List the available models.
    Models,
    /// Classify a single query and print the prediction.
    Classify {
        #[arg(long, env = "QUERYCLASS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        #[arg(long, short, default_value = "default")]
        model: ModelId,
        text: String,
    },
    /// Interactive query form.
    Form {
        #[arg(long, env = "QUERYCLASS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        /// Model selected when the form opens.
        #[arg(long, short, default_value = "default")]
        model: ModelId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("queryclass v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Serve {
            bind,
            port,
            upstream,
            cors,
        } => {
            let config = ProxyConfig {
                bind,
                port,
                upstream_url: upstream,
                cors,
            };
            queryclass_proxy::serve(config)
                .await
                .context("running proxy")?;
        }
        Command::Models => print!("{}", display::render_catalog()),
        Command::Classify {
            endpoint,
            model,
            text,
        } => {
            let client = ClassifyClient::new(endpoint);
            let prediction = client
                .classify(&Query::new(text, model))
                .await
                .with_context(|| format!("classifying via {}", client.endpoint()))?;
            println!("{prediction}");
        }
        Command::Form { endpoint, model } => {
            let client = ClassifyClient::new(endpoint);
            form::run_form(&client, FormState::new(model)).await?;
        }
    }

    Ok(())
}
