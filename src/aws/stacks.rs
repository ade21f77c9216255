use crate::error::DeployError;
use crate::types::{ChangeSetRequest, ChangeSetType, Parameter, ParameterValue};
use async_trait::async_trait;
use aws_sdk_cloudformation::types::{
    Capability, ChangeSetType as SdkChangeSetType, Parameter as SdkParameter,
};
use aws_sdk_cloudformation::Client;
use std::collections::HashSet;

/// The two stack-management operations this tool consumes
///
/// Implemented by the CloudFormation wrapper below; tests substitute a fake
/// with the same capability set.
#[async_trait]
pub trait StackService {
    /// Enumerate the names of every stack visible to the caller's
    /// credentials and region
    async fn list_stack_names(&self) -> Result<HashSet<String>, DeployError>;

    /// Submit a change set and return the identifier the service assigned
    /// to it. The change set is left for review, never executed here.
    async fn create_change_set(&self, request: ChangeSetRequest) -> Result<String, DeployError>;
}

/// CloudFormation-backed implementation of [`StackService`]
pub struct CloudFormationService {
    client: Client,
}

impl CloudFormationService {
    pub fn new(client: Client) -> Self {
        CloudFormationService { client }
    }
}

#[async_trait]
impl StackService for CloudFormationService {
    async fn list_stack_names(&self) -> Result<HashSet<String>, DeployError> {
        let mut names = HashSet::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut request = self.client.describe_stacks();

            if let Some(token) = next_token {
                request = request.next_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| DeployError::AwsError(format!("Failed to list stacks: {}", e)))?;

            if let Some(stacks) = response.stacks {
                for stack in stacks {
                    let stack_name = stack.stack_name().unwrap_or("");

                    if stack_name.is_empty() {
                        continue;
                    }

                    names.insert(stack_name.to_string());
                }
            }

            if response.next_token.is_some() {
                next_token = response.next_token;
            } else {
                break;
            }
        }

        Ok(names)
    }

    async fn create_change_set(&self, request: ChangeSetRequest) -> Result<String, DeployError> {
        let parameters: Vec<SdkParameter> =
            request.parameters.iter().map(to_sdk_parameter).collect();

        let mut api_request = self
            .client
            .create_change_set()
            .stack_name(&request.stack_name)
            .template_body(&request.template_body)
            .change_set_name(&request.changeset_name)
            .change_set_type(to_sdk_changeset_type(request.changeset_type))
            .set_parameters(Some(parameters));

        for capability in &request.capabilities {
            api_request = api_request.capabilities(Capability::from(capability.as_str()));
        }

        let response = api_request.send().await.map_err(|e| {
            DeployError::AwsError(format!("Failed to create change set: {}", e))
        })?;

        response.id.ok_or_else(|| {
            DeployError::AwsError("Change set response did not include an identifier".to_string())
        })
    }
}

fn to_sdk_changeset_type(changeset_type: ChangeSetType) -> SdkChangeSetType {
    match changeset_type {
        ChangeSetType::Create => SdkChangeSetType::Create,
        ChangeSetType::Update => SdkChangeSetType::Update,
    }
}

fn to_sdk_parameter(parameter: &Parameter) -> SdkParameter {
    match &parameter.value {
        ParameterValue::Literal(value) => SdkParameter::builder()
            .parameter_key(&parameter.key)
            .parameter_value(value)
            .build(),
        ParameterValue::UsePrevious => SdkParameter::builder()
            .parameter_key(&parameter.key)
            .use_previous_value(true)
            .build(),
    }
}
