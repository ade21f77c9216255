use crate::aws::client::create_cloudformation_client;
use crate::aws::stacks::{CloudFormationService, StackService};
use crate::display::{format_json_output, print_info, print_success};
use crate::error::DeployError;
use crate::naming;
use crate::templates::TemplateStore;
use crate::types::{
    ChangeSetRequest, ChangeSetType, DeployOutcome, Parameter, CAPABILITY_NAMED_IAM,
};
use crate::validation::{is_valid_cidr_block, is_valid_name_suffix};
use crate::OutputFormat;
use chrono::Local;
use std::path::PathBuf;

/// Template parameter receiving the bucket name
const BUCKET_NAME_KEY: &str = "BucketNameParameter";

/// Template parameter receiving the CIDR blocks allowed to upload raw data
const UPLOAD_CIDR_KEY: &str = "WarehouseUploadCIDRParameter";

/// Upload CIDR applied when none is given at stack creation: all sources
const DEFAULT_UPLOAD_CIDR: &str = "0.0.0.0/0";

/// Arguments for the deploy command
#[derive(Debug)]
pub struct DeployArgs {
    pub suffix: Option<String>,
    pub allowed_cidr: Vec<String>,
    pub region: Option<String>,
    pub templates_dir: PathBuf,
}

/// Load the warehouse template, submit a change set for it, and report the
/// identifier the service assigned
pub async fn deploy(args: DeployArgs, format: &OutputFormat) -> Result<(), DeployError> {
    validate_args(&args)?;

    let store = TemplateStore::new(&args.templates_dir);
    let template_body = store.load(naming::DEFAULT_TEMPLATE_NAME)?;

    let client = create_cloudformation_client(args.region).await;
    let service = CloudFormationService::new(client);

    let suffix = args.suffix.as_deref().filter(|s| !s.is_empty());
    let outcome = submit(&service, &template_body, suffix, &args.allowed_cidr).await?;

    match format {
        OutputFormat::Text => print_success(&format!(
            "Created changeset for warehouse with ARN: {}",
            outcome.changeset_id
        )),
        OutputFormat::Json => println!("{}", format_json_output(&outcome)?),
    }

    Ok(())
}

fn validate_args(args: &DeployArgs) -> Result<(), DeployError> {
    if let Some(suffix) = args.suffix.as_deref().filter(|s| !s.is_empty()) {
        if !is_valid_name_suffix(suffix) {
            return Err(DeployError::ParseError(format!(
                "Invalid suffix '{}': use lowercase letters, digits and hyphens",
                suffix
            )));
        }
    }

    for block in &args.allowed_cidr {
        if !is_valid_cidr_block(block) {
            return Err(DeployError::ParseError(format!(
                "Invalid CIDR block '{}'",
                block
            )));
        }
    }

    Ok(())
}

/// Submit a change set for the warehouse stack against the given service,
/// creating or updating the stack as needed
pub async fn submit<S: StackService>(
    service: &S,
    template_body: &str,
    suffix: Option<&str>,
    allowed_cidr: &[String],
) -> Result<DeployOutcome, DeployError> {
    let stack_name = naming::stack_name(suffix);
    let bucket_name = naming::bucket_name(suffix);
    let changeset_name = naming::changeset_name(&Local::now());

    print_info(&format!("Stack name: {}", stack_name));

    // Update or create as needed
    let existing = service.list_stack_names().await?;
    let changeset_type = if existing.contains(&stack_name) {
        ChangeSetType::Update
    } else {
        ChangeSetType::Create
    };

    print_info(&format!("Change set type: {}", changeset_type));

    let parameters = build_parameters(&bucket_name, allowed_cidr, changeset_type);

    let request = ChangeSetRequest {
        stack_name: stack_name.clone(),
        template_body: template_body.to_string(),
        changeset_name: changeset_name.clone(),
        changeset_type,
        capabilities: vec![CAPABILITY_NAMED_IAM.to_string()],
        parameters,
    };

    let changeset_id = service.create_change_set(request).await?;

    Ok(DeployOutcome {
        stack_name,
        changeset_name,
        changeset_type,
        changeset_id,
    })
}

/// Construct the template parameters
///
/// The upload CIDR takes the explicit value when one was given. Without one,
/// a new stack opens to all sources and an updated stack keeps whatever
/// value it currently holds.
pub fn build_parameters(
    bucket_name: &str,
    allowed_cidr: &[String],
    changeset_type: ChangeSetType,
) -> Vec<Parameter> {
    let mut parameters = vec![Parameter::literal(BUCKET_NAME_KEY, bucket_name)];

    if !allowed_cidr.is_empty() {
        parameters.push(Parameter::literal(UPLOAD_CIDR_KEY, allowed_cidr.join(",")));
    } else if changeset_type == ChangeSetType::Create {
        parameters.push(Parameter::literal(UPLOAD_CIDR_KEY, DEFAULT_UPLOAD_CIDR));
    } else {
        parameters.push(Parameter::use_previous(UPLOAD_CIDR_KEY));
    }

    parameters
}
