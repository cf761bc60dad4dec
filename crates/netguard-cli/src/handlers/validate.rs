//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::manifest::{self, Manifest};
use crate::output::{DocumentReport, OutputWriter, ValidationReport};
use netguard_types::AnyResource;
use netguard_validation::{
    admit, AdmissionRequest, AdmissionResponse, FieldError, FieldErrorList, FieldPath, Operation,
    ValidationContext,
};
use tracing::{debug, info};

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate", &args.manifests.display().to_string());
    let operation = Operation::from(args.operation);

    let mut validation = config.validation.clone();
    if let Some(api_version) = args.api_version {
        validation = validation.with_api_version(api_version);
    }
    let ctx = ValidationContext::new(validation);

    let manifests = manifest::load_manifests(&args.manifests)?;
    let old_objects = match (&args.old, operation) {
        (Some(old_path), Operation::Update) => {
            let old = manifest::load_manifests(old_path)?;
            manifest::pair_with_old(&manifests, old)
        }
        (Some(_), _) => {
            output.warning("--old is only used for update; ignoring it")?;
            vec![None; manifests.len()]
        }
        (None, _) => vec![None; manifests.len()],
    };

    let source = manifest::source_label(&args.manifests).display().to_string();
    output.info(&format!(
        "Validating {} document(s) from {} for {}",
        manifests.len(),
        source,
        operation
    ))?;
    output.debug(&format!("Expecting apiVersion {}", ctx.api_version()))?;

    let documents: Vec<DocumentReport> = manifests
        .into_iter()
        .zip(old_objects)
        .map(|(manifest, old)| review_document(&ctx, operation, manifest, old))
        .collect();

    let report = ValidationReport::new(source, operation, documents);
    info!(
        total = report.total,
        rejected = report.rejected,
        operation = %operation,
        "Validation finished"
    );

    output.report(&report)?;

    if report.is_allowed() {
        Ok(())
    } else {
        Err(Error::Rejected {
            rejected: report.rejected,
            total: report.total,
        })
    }
}

/// Admit one document, adding a check on its declared apiVersion
///
/// A document that did not decode is rejected with its decode violations
/// and never reaches a validator.
fn review_document(
    ctx: &ValidationContext,
    operation: Operation,
    manifest: Manifest,
    old: Option<AnyResource>,
) -> DocumentReport {
    let mut response = match manifest.resource {
        Ok(resource) => {
            let request = AdmissionRequest {
                operation,
                object: Some(resource),
                old_object: old,
            };
            admit(ctx, &request)
        }
        Err(errors) => AdmissionResponse {
            allowed: false,
            operation,
            kind: manifest.kind,
            name: manifest.name,
            errors,
        },
    };

    if let Some(error) = check_api_version(ctx, &manifest.api_version) {
        debug!(index = manifest.index, declared = %manifest.api_version, "apiVersion mismatch");
        response = with_leading_error(response, error);
    }

    DocumentReport {
        index: manifest.index,
        response,
    }
}

fn check_api_version(ctx: &ValidationContext, declared: &str) -> Option<FieldError> {
    let path = FieldPath::new("apiVersion");
    if declared.is_empty() {
        Some(FieldError::required(path, ""))
    } else if declared != ctx.api_version() {
        Some(FieldError::invalid(
            path,
            declared,
            format!("must be {}", ctx.api_version()),
        ))
    } else {
        None
    }
}

fn with_leading_error(response: AdmissionResponse, error: FieldError) -> AdmissionResponse {
    let mut errors = FieldErrorList::from(error);
    errors.append(response.errors);
    AdmissionResponse {
        allowed: false,
        errors,
        ..response
    }
}
