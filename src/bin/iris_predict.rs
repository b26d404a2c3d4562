use clap::Parser;
use patient_api::domain::model::FlowerMeasurements;
use patient_api::utils::logger;
use patient_api::PredictClient;

#[derive(Parser)]
#[command(name = "iris-predict")]
#[command(about = "Ask the patient-api server which iris species a flower is")]
struct Args {
    /// Base URL of the API server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// Sepal length (cm)
    #[arg(long)]
    sepal_length: f64,

    /// Sepal width (cm)
    #[arg(long)]
    sepal_width: f64,

    /// Petal length (cm)
    #[arg(long)]
    petal_length: f64,

    /// Petal width (cm)
    #[arg(long)]
    petal_width: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let client = match PredictClient::new(&args.api_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let measurements = FlowerMeasurements {
        sepal_length: args.sepal_length,
        sepal_width: args.sepal_width,
        petal_length: args.petal_length,
        petal_width: args.petal_width,
    };

    match client.predict(&measurements).await {
        Ok(species) => println!("🌼 Predicted Flower: {}", species),
        Err(e) => {
            tracing::error!("❌ Prediction request to {} failed: {}", client.endpoint(), e);
            eprintln!("❌ Error: Could not get prediction from the API");
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }
}
