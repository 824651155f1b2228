use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::info;

use guest_users::common::config::WriterConfig;
use guest_users::random_user::RandomUserClient;
use guest_users::store::DynamoUserStore;
use guest_users::writer::process_event;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = WriterConfig::from_env()?;
    info!("Writing users to table {}", config.table_name);

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoUserStore::new(dynamo_client, config.table_name);
    let source = RandomUserClient::new(config.random_user_url, config.http_timeout)?;

    let store = &store;
    let source = &source;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        info!("Scheduled invocation {}", event.context.request_id);
        process_event(source, store).await.map_err(LambdaError::from)
    }))
    .await
}
