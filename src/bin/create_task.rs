use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use taskcast::classifier::huggingface::HuggingFaceClassifier;
use taskcast::config::Config;
use taskcast::handlers::{self, ApiResponse};
use taskcast::store::dynamo::DynamoStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = Config::from_env()?;
    let classifier = HuggingFaceClassifier::new(config.hf_api_key)?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    );

    // Built once per process, shared by reference across invocations.
    let classifier = &classifier;
    let store = &store;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<ApiResponse, Error>(handlers::create::handle(&event.payload, classifier, store).await)
    }))
    .await
}
