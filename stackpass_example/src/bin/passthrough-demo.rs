//! Demo against a local Llama Stack gateway using the remote::passthrough
//! provider: one regular chat completion, then one streaming completion,
//! with the API key supplied per request in the provider-data header.

use std::io::Write;

use anyhow::{Context, Result};
use futures::StreamExt;
use stackpass_client::{
    ChatClient, ChatRequest, LlamaStackClient, LlamaStackConfig, Message, ProviderData,
    StreamEvent,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("OPENAI_API_KEY")
        .context("Set OPENAI_API_KEY environment variable")?;

    let client = LlamaStackClient::new(LlamaStackConfig::default())?;
    let creds = client.provider_data(api_key);

    chat(&client, &creds).await?;
    chat_streaming(&client, &creds).await?;

    Ok(())
}

/// Regular (non-streaming) chat completion.
async fn chat(client: &LlamaStackClient, creds: &ProviderData) -> Result<()> {
    let request = ChatRequest::new(vec![Message::user(
        "Say hello in three languages. Be brief.",
    )]);

    let response = client.chat(creds, request).await?;

    println!("=== Regular ===");
    println!("{}", response.content().unwrap_or_default());

    Ok(())
}

/// Streaming chat completion, printed fragment by fragment.
async fn chat_streaming(client: &LlamaStackClient, creds: &ProviderData) -> Result<()> {
    let request = ChatRequest::new(vec![Message::user("Count from 1 to 5.")]);

    println!("\n=== Streaming ===");

    let mut stream = client.chat_stream(creds, request).await?;

    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::Message { content } => {
                print!("{}", content);
                std::io::stdout().flush()?;
            }
            StreamEvent::Done => break,
        }
    }

    // Terminate the streamed block whether or not a sentinel arrived
    println!();

    Ok(())
}
