use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use taskcast::config;
use taskcast::handlers::{self, ApiResponse};
use taskcast::store::dynamo::DynamoStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let table_name = config::table_name()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoStore::new(aws_sdk_dynamodb::Client::new(&aws_config), table_name);

    let store = &store;
    run(service_fn(move |_event: LambdaEvent<Value>| async move {
        Ok::<ApiResponse, Error>(handlers::list::handle(store).await)
    }))
    .await
}
