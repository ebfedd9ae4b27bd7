//! Provider-specific phrasing that is not a component name.

use stratus_core::config::LabelStyle;
use stratus_core::Component;

/// How the compute choice is described as deployable units.
pub fn compute_units(compute: Component, style: LabelStyle) -> &'static str {
    match (compute, style) {
        (Component::ContainerCompute, LabelStyle::Generic) => "container services",
        (Component::ContainerCompute, LabelStyle::Aws) => "Fargate (ECS) services",
        (_, LabelStyle::Generic) => "serverless functions",
        (_, LabelStyle::Aws) => "Lambda functions",
    }
}

pub fn monitoring(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::Generic => "Managed metrics/logs + alarms",
        LabelStyle::Aws => "CloudWatch metrics/logs + alarms",
    }
}

pub fn audit_trail(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::Generic => "audit trails",
        LabelStyle::Aws => "audit trails (CloudTrail)",
    }
}
