use aws_sdk_cloudformation::Client;

/// Region the warehouse stack lives in, used unless overridden on the CLI
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Initialize the AWS CloudFormation client with the default credential provider chain
///
/// This will try to load credentials from:
/// 1. Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY)
/// 2. ~/.aws/credentials file
/// 3. IAM role (when running on EC2, ECS, Lambda, etc.)
pub async fn create_cloudformation_client(region: Option<String>) -> Client {
    let region_provider = aws_sdk_cloudformation::config::Region::new(
        region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
    );
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    Client::new(&config)
}
