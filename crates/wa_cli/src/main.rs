use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use wa_inference::InferenceConfig;
use wa_scrapers::logging::init_logging;
use wa_scrapers::ExtractArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyword article extraction and a quick sort API", long_about = None)]
pub struct Cli {
    /// Model backend: completions (default) or dummy
    #[arg(long, env = "WA_MODEL", default_value = "completions", global = true)]
    model: String,
    /// Completion endpoint, e.g. http://host:3000/v1/completions
    #[arg(long, env = "WA_LLM_URL", default_value = wa_inference::DEFAULT_API_URL, global = true)]
    llm_url: String,
    #[arg(long, env = "WA_LLM_MODEL", default_value = wa_inference::DEFAULT_MODEL_NAME, global = true)]
    llm_model: String,
    /// Bearer token for the completion endpoint
    #[arg(long, env = "WA_LLM_TOKEN", hide_env_values = true, global = true)]
    llm_token: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Extract keyword-matching articles from a listing page
    Extract(ExtractArgs),
    /// Run the quick sort HTTP API
    Serve {
        #[arg(long, env = "WA_HOST", default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, env = "WA_PORT", default_value_t = wa_web::DEFAULT_PORT)]
        port: u16,
    },
}

impl Cli {
    fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            backend: self.model.clone(),
            api_url: self.llm_url.clone(),
            model_name: self.llm_model.clone(),
            api_token: self.llm_token.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(ref args) => {
            let inference = wa_inference::create_model(&cli.inference_config())?;
            info!("🧠 Inference model initialized (using {})", inference.name());
            wa_scrapers::handle_command(args.clone(), inference)
                .await
                .context("extraction failed")?;
        }
        Commands::Serve { host, port } => {
            wa_web::serve(SocketAddr::new(host, port)).await?;
        }
    }

    Ok(())
}
