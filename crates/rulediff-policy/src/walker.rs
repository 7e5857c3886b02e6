use serde_json::{Map, Value};

use crate::errors::PolicyError;
use crate::scrub::IDENTIFIER_SENTINEL;

/// Top-level field holding the array of on-premises containers.
pub const ON_PREMISES_POLICIES: &str = "onPremisesDirectoryPolicies";
/// Top-level field holding the single cloud container.
pub const CLOUD_POLICY: &str = "cloudDirectoryPolicy";
/// Output label for the cloud container, which carries no `friendlyName`.
pub const CLOUD_LABEL: &str = "AAD";

/// The two rule kinds an export distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Administrator-authored rules.
    Custom,
    /// Product-shipped rules.
    Standard,
}

impl RuleKind {
    /// Container field holding the collection of rules of this kind.
    pub fn collection_field(self) -> &'static str {
        match self {
            RuleKind::Custom => "customSynchronizationRules",
            RuleKind::Standard => "standardSynchronizationRules",
        }
    }

    /// Tag used in composite output names.
    pub fn file_tag(self) -> &'static str {
        match self {
            RuleKind::Custom => "CUSTOM",
            RuleKind::Standard => "DEFAULT",
        }
    }
}

/// One rule lifted out of an export document, still unscrubbed.
#[derive(Debug, Clone)]
pub struct ExtractedRule {
    /// `friendlyName` of the owning container, or [`CLOUD_LABEL`].
    pub container_label: String,
    /// Collection the rule came from.
    pub kind: RuleKind,
    /// Display name (`name` field) of the rule.
    pub name: String,
    /// The rule document itself.
    pub document: Value,
}

/// Lifts every rule out of a canonicalized export document.
///
/// Visit order is deterministic: on-premises containers in their array order
/// (which, after canonicalization, is the generic canonical order of the
/// container array), then the cloud container; within each container the
/// custom collection before the standard one; within each collection, rules
/// in ascending `name` order. The name sort is an explicit secondary sort:
/// rules are filed by display name, so visit order must track the name even
/// where the generic canonical-text order would differ.
///
/// The source tree is never mutated.
pub fn extract_rules(config: &Value) -> Result<Vec<ExtractedRule>, PolicyError> {
    let root = config
        .as_object()
        .ok_or_else(|| PolicyError::NotAnObject("document root".into()))?;

    let mut rules = Vec::new();

    let forests = require_array(root, ON_PREMISES_POLICIES, "document root")?;
    for (idx, container) in forests.iter().enumerate() {
        let context = format!("{}[{}]", ON_PREMISES_POLICIES, idx);
        let container = container
            .as_object()
            .ok_or_else(|| PolicyError::NotAnObject(context.clone()))?;
        let label = container
            .get("friendlyName")
            .and_then(Value::as_str)
            .ok_or_else(|| PolicyError::UnnamedContainer(context.clone()))?;
        collect_container(container, label, &context, &mut rules)?;
    }

    let cloud = root
        .get(CLOUD_POLICY)
        .ok_or_else(|| PolicyError::MissingField {
            field: CLOUD_POLICY,
            context: "document root".into(),
        })?
        .as_object()
        .ok_or_else(|| PolicyError::NotAnObject(CLOUD_POLICY.into()))?;
    collect_container(cloud, CLOUD_LABEL, CLOUD_POLICY, &mut rules)?;

    Ok(rules)
}

fn collect_container(
    container: &Map<String, Value>,
    label: &str,
    context: &str,
    out: &mut Vec<ExtractedRule>,
) -> Result<(), PolicyError> {
    for kind in [RuleKind::Custom, RuleKind::Standard] {
        let documents = require_array(container, kind.collection_field(), context)?;

        let mut named: Vec<(String, &Value)> = Vec::with_capacity(documents.len());
        for document in documents {
            let name = document
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    PolicyError::UnnamedRule(format!("{}.{}", context, kind.collection_field()))
                })?;
            named.push((name.to_string(), document));
        }
        named.sort_by(|a, b| a.0.cmp(&b.0));

        out.extend(named.into_iter().map(|(name, document)| ExtractedRule {
            container_label: label.to_string(),
            kind,
            name,
            document: document.clone(),
        }));
    }
    Ok(())
}

fn require_array<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    context: &str,
) -> Result<&'a Vec<Value>, PolicyError> {
    object
        .get(field)
        .ok_or_else(|| PolicyError::MissingField {
            field,
            context: context.to_string(),
        })?
        .as_array()
        .ok_or_else(|| PolicyError::NotAnArray {
            field,
            context: context.to_string(),
        })
}

/// Produces the residual skeleton for an export document.
///
/// Returns a copy of `config` with both rule collections set to `null` on
/// every container and each container's own `uniqueIdentifier` overwritten
/// with the sentinel. The rest of the tree is untouched, so the skeleton
/// stays canonically comparable to other skeletons. Idempotent: applying it
/// to its own output is a no-op.
pub fn skeleton(config: &Value) -> Result<Value, PolicyError> {
    let mut out = config.clone();
    let root = out
        .as_object_mut()
        .ok_or_else(|| PolicyError::NotAnObject("document root".into()))?;

    if let Some(Value::Array(forests)) = root.get_mut(ON_PREMISES_POLICIES) {
        for container in forests {
            clear_container(container);
        }
    }
    if let Some(cloud) = root.get_mut(CLOUD_POLICY) {
        clear_container(cloud);
    }

    Ok(out)
}

fn clear_container(container: &mut Value) {
    if let Some(object) = container.as_object_mut() {
        for kind in [RuleKind::Custom, RuleKind::Standard] {
            if let Some(collection) = object.get_mut(kind.collection_field()) {
                *collection = Value::Null;
            }
        }
        if let Some(id) = object.get_mut("uniqueIdentifier") {
            *id = Value::String(IDENTIFIER_SENTINEL.to_string());
        }
    }
}
