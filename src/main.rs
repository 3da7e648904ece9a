use clap::Parser;
use ragkit::cli::commands::{Cli, Commands};
use ragkit::domain::entities::document::Document;
use ragkit::Rag;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rag = match Rag::from_env().await {
        Ok(rag) => rag,
        Err(e) => {
            eprintln!("Error initializing ragkit: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(rag, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rag: Rag, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Ingest { json } => {
            let documents: Vec<Document> = serde_json::from_str(&json)?;
            let count = rag.ingest(&documents).await?;
            println!("Upserted {count} documents");
        }
        Commands::Search { vector, top_k } => {
            let query_vector: Vec<f32> = serde_json::from_str(&vector)?;
            let result = rag.search(&query_vector, top_k).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Ask {
            query,
            vector,
            top_k,
            context,
        } => {
            let text = match vector {
                Some(v) => {
                    let query_vector: Vec<f32> = serde_json::from_str(&v)?;
                    rag.answer(&query, &query_vector, top_k).await?
                }
                None => rag.generate(&query, &context).await?,
            };
            println!("{text}");
        }
    }
    Ok(())
}
