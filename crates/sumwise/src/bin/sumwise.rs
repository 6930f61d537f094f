use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;

use sumwise::{
    bedrock::BedrockClient,
    config::{ModelConfig, RetryConfig},
    tracing::init_tracing_subscriber,
    types::{SummarizeRequest, SummaryOptions, VideoSummarizeRequest},
    yt::transcript::TranscriptClient,
    SummaryProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "sumwise", about = "Summarize long text and video transcripts")]
struct Cli {
    /// Bedrock API key
    #[arg(long, env = "AWS_BEARER_TOKEN_BEDROCK", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Region of the model runtime
    #[arg(long, env = "AWS_REGION", default_value = ModelConfig::DEFAULT_REGION)]
    region: String,

    /// Model identifier
    #[arg(long, env = "BEDROCK_MODEL_ID", default_value = ModelConfig::DEFAULT_MODEL_ID)]
    model_id: String,

    /// Overrides the regional runtime endpoint
    #[arg(long, env = "BEDROCK_ENDPOINT")]
    endpoint: Option<String>,

    /// Retries on transient model service failures
    #[arg(long, env = "MODEL_MAX_RETRIES", default_value = "3")]
    max_retries: u32,

    /// Base URL of the transcript service
    #[arg(long, env = "TRANSCRIPT_SERVICE_URL")]
    transcript_service_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct OptionArgs {
    /// short, medium or long
    #[arg(long)]
    length: Option<String>,

    /// Format the summary as bullet points
    #[arg(long)]
    bullet_points: bool,

    /// Language code of the summary; detected when omitted
    #[arg(long)]
    language: Option<String>,

    /// Replaces the built-in instructions
    #[arg(long)]
    custom_prompt: Option<String>,
}

impl From<OptionArgs> for SummaryOptions {
    fn from(args: OptionArgs) -> Self {
        SummaryOptions {
            language: args.language,
            summary_length: args.length,
            bullet_points: Some(args.bullet_points),
            custom_prompt: args.custom_prompt,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Summarize text from a file or stdin
    Text {
        /// Read from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Summarize a video's transcript
    Video {
        /// Video URL or id
        url: String,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Project the cost of summarizing text without calling the model
    Estimate {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print service configuration
    Info,
}

async fn read_input(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = ModelConfig {
        model_id: cli.model_id,
        region: cli.region,
        endpoint: cli.endpoint,
        retry: RetryConfig {
            max_retries: cli.max_retries,
            ..Default::default()
        },
        ..Default::default()
    };

    let model = BedrockClient::new(cli.api_key, config).context("Failed to build model client")?;
    let transcripts = cli.transcript_service_url.map(TranscriptClient::new);

    let processor = SummaryProcessorBuilder::new()
        .model(model)
        .transcripts(transcripts)
        .build();

    let output = match cli.command {
        Command::Text { file, options } => {
            let request = SummarizeRequest {
                text: read_input(file).await?,
                options: options.into(),
            };
            let response = processor
                .summarize_text(request)
                .await
                .inspect_err(|e| {
                    tracing::error!(error = %e, caller_fixable = e.is_caller_fixable(), "Summarization failed")
                })?;
            serde_json::to_string_pretty(&response)?
        }
        Command::Video { url, options } => {
            let request = VideoSummarizeRequest {
                url,
                options: options.into(),
            };
            let response = processor
                .summarize_video(request)
                .await
                .inspect_err(|e| {
                    tracing::error!(error = %e, caller_fixable = e.is_caller_fixable(), "Video summarization failed")
                })?;
            serde_json::to_string_pretty(&response)?
        }
        Command::Estimate { file } => {
            let text = read_input(file).await?;
            serde_json::to_string_pretty(&processor.estimate_cost(&text))?
        }
        Command::Info => serde_json::to_string_pretty(&processor.service_info())?,
    };

    println!("{output}");

    Ok(())
}
