//! Admission dispatch over the closed set of resource kinds
//!
//! An [`AdmissionRequest`] carries an operation and the objects involved;
//! [`admit`] routes it to the validator of the object's kind and turns the
//! resulting error list into a decision.
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::resources::{
    AddressGroupBindingPolicyValidator, AddressGroupBindingValidator, AddressGroupPortMappingValidator,
    AddressGroupValidator, IEAgAgRuleValidator, NetworkBindingValidator, NetworkValidator, RuleS2SValidator,
    ServiceAliasValidator, ServiceValidator,
};
use crate::validation::{FieldError, FieldErrorList, FieldPath, ResourceValidator, ValidationContext};
use netguard_types::{AnyResource, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// The mutation being admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// A proposed mutation of one object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    pub operation: Operation,
    #[serde(default)]
    pub object: Option<AnyResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_object: Option<AnyResource>,
}

impl AdmissionRequest {
    pub fn create(object: impl Into<AnyResource>) -> Self {
        Self {
            operation: Operation::Create,
            object: Some(object.into()),
            old_object: None,
        }
    }

    pub fn update(object: impl Into<AnyResource>, old: impl Into<AnyResource>) -> Self {
        Self {
            operation: Operation::Update,
            object: Some(object.into()),
            old_object: Some(old.into()),
        }
    }

    pub fn delete(object: impl Into<AnyResource>) -> Self {
        Self {
            operation: Operation::Delete,
            object: Some(object.into()),
            old_object: None,
        }
    }

    /// Kind of the object under admission, falling back to the old object
    pub fn kind(&self) -> Option<ResourceKind> {
        self.object.as_ref().or(self.old_object.as_ref()).map(AnyResource::kind)
    }
}

/// Outcome of one admission request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    pub allowed: bool,
    pub operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResourceKind>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "FieldErrorList::is_empty")]
    pub errors: FieldErrorList,
}

impl AdmissionResponse {
    /// Rendered rejection text, or `None` when the request was allowed
    pub fn message(&self) -> Option<String> {
        if self.allowed {
            None
        } else {
            Some(self.errors.to_string())
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrorList> {
        self.errors.into_result()
    }
}

/// Validate one request and decide whether it is admitted
pub fn admit(ctx: &ValidationContext, request: &AdmissionRequest) -> AdmissionResponse {
    let errors = match request.operation {
        Operation::Create => match &request.object {
            Some(obj) => dispatch_create(ctx, obj),
            None => missing(FieldPath::new("object")),
        },
        Operation::Update => match (&request.object, &request.old_object) {
            (None, _) => missing(FieldPath::new("object")),
            (Some(_), None) => missing(FieldPath::new("oldObject")),
            (Some(obj), Some(old)) => dispatch_update(ctx, obj, old),
        },
        Operation::Delete => match &request.object {
            Some(obj) => dispatch_delete(ctx, obj),
            None => FieldErrorList::new(),
        },
    };

    let name = request
        .object
        .as_ref()
        .or(request.old_object.as_ref())
        .map(|obj| obj.metadata().display_name())
        .unwrap_or_default();
    let response = AdmissionResponse {
        allowed: errors.is_empty(),
        operation: request.operation,
        kind: request.kind(),
        name,
        errors,
    };

    debug!(
        operation = %response.operation,
        kind = ?response.kind,
        name = %response.name,
        allowed = response.allowed,
        "admission decided"
    );
    response
}

/// Validate a batch of independent requests, preserving order
pub fn admit_batch(ctx: &ValidationContext, requests: &[AdmissionRequest]) -> Vec<AdmissionResponse> {
    let responses: Vec<AdmissionResponse> = requests.iter().map(|request| admit(ctx, request)).collect();
    let rejected = responses.iter().filter(|r| !r.allowed).count();
    info!(total = responses.len(), rejected, "admission batch complete");
    responses
}

fn missing(path: FieldPath) -> FieldErrorList {
    FieldErrorList::from(FieldError::required(path, ""))
}

fn kind_changed(new: &AnyResource, old: &AnyResource) -> FieldErrorList {
    FieldErrorList::from(FieldError::invalid(
        FieldPath::new("kind"),
        new.kind().as_str(),
        format!("may not change from {}", old.kind()),
    ))
}

macro_rules! dispatch_table {
    ($($kind:ident => $validator:ident),+ $(,)?) => {
        fn dispatch_create(ctx: &ValidationContext, obj: &AnyResource) -> FieldErrorList {
            match obj {
                $(AnyResource::$kind(obj) => $validator.validate_create(ctx, Some(obj)),)+
            }
        }

        fn dispatch_update(ctx: &ValidationContext, obj: &AnyResource, old: &AnyResource) -> FieldErrorList {
            match (obj, old) {
                $((AnyResource::$kind(obj), AnyResource::$kind(old)) => {
                    $validator.validate_update(ctx, Some(obj), old)
                })+
                (obj, old) => kind_changed(obj, old),
            }
        }

        fn dispatch_delete(ctx: &ValidationContext, obj: &AnyResource) -> FieldErrorList {
            match obj {
                $(AnyResource::$kind(obj) => $validator.validate_delete(ctx, Some(obj)),)+
            }
        }
    };
}

dispatch_table!(
    Service => ServiceValidator,
    ServiceAlias => ServiceAliasValidator,
    AddressGroup => AddressGroupValidator,
    AddressGroupBinding => AddressGroupBindingValidator,
    AddressGroupPortMapping => AddressGroupPortMappingValidator,
    AddressGroupBindingPolicy => AddressGroupBindingPolicyValidator,
    RuleS2S => RuleS2SValidator,
    IEAgAgRule => IEAgAgRuleValidator,
    Network => NetworkValidator,
    NetworkBinding => NetworkBindingValidator,
);
