use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LabelStyle;

/// Every component the selector can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Dns,
    Cdn,
    LoadBalancer,
    ContainerCompute,
    ServerlessCompute,
    RelationalDbHa,
    RelationalDbStandard,
    DistributedCache,
    LocalCache,
    AsyncQueue,
    StreamIngestion,
    ObjectStore,
}

impl Component {
    /// Provider-neutral name. This is the node name in the topology graph.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dns => "DNS",
            Self::Cdn => "CDN",
            Self::LoadBalancer => "load balancer",
            Self::ContainerCompute => "container-orchestrated compute",
            Self::ServerlessCompute => "serverless function compute",
            Self::RelationalDbHa => "managed relational DB (HA, encrypted)",
            Self::RelationalDbStandard => "managed relational DB (standard)",
            Self::DistributedCache => "managed distributed cache",
            Self::LocalCache => "local in-memory cache",
            Self::AsyncQueue => "managed async queue",
            Self::StreamIngestion => "managed stream ingestion",
            Self::ObjectStore => "encrypted private object store",
        }
    }

    /// AWS service name.
    pub fn aws_label(&self) -> &'static str {
        match self {
            Self::Dns => "Route53",
            Self::Cdn => "CloudFront",
            Self::LoadBalancer => "ALB",
            Self::ContainerCompute => "AWS Fargate (ECS)",
            Self::ServerlessCompute => "AWS Lambda",
            Self::RelationalDbHa => "Amazon Aurora (PostgreSQL)",
            Self::RelationalDbStandard => "Amazon RDS (PostgreSQL)",
            Self::DistributedCache => "Amazon ElastiCache (Redis)",
            Self::LocalCache => "Local in-memory cache",
            Self::AsyncQueue => "Amazon SQS",
            Self::StreamIngestion => "Amazon Kinesis",
            Self::ObjectStore => "Amazon S3 (Encrypted, private)",
        }
    }

    /// Name under the given label style.
    pub fn styled(&self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Generic => self.label(),
            LabelStyle::Aws => self.aws_label(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Controls in the security stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityControl {
    Iam,
    Kms,
    Waf,
    SecurityGroups,
    PrivateSubnets,
}

impl SecurityControl {
    /// The baseline stack, in order.
    pub const BASELINE: [SecurityControl; 5] = [
        Self::Iam,
        Self::Kms,
        Self::Waf,
        Self::SecurityGroups,
        Self::PrivateSubnets,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Iam => "IAM",
            Self::Kms => "KMS",
            Self::Waf => "WAF",
            Self::SecurityGroups => "network security groups",
            Self::PrivateSubnets => "private subnets",
        }
    }

    pub fn aws_label(&self) -> &'static str {
        match self {
            Self::Iam => "AWS IAM",
            Self::Kms => "AWS KMS",
            Self::Waf => "AWS WAF",
            Self::SecurityGroups => "Security Groups",
            Self::PrivateSubnets => "VPC Private Subnets",
        }
    }

    pub fn styled(&self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Generic => self.label(),
            LabelStyle::Aws => self.aws_label(),
        }
    }
}

impl fmt::Display for SecurityControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GDPR/NIS2 considerations attached to every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceNote {
    DataMinimization,
    EncryptionAtRestAndTransit,
    RegionalResidency,
    AuditLogging,
}

impl ComplianceNote {
    pub const BASELINE: [ComplianceNote; 4] = [
        Self::DataMinimization,
        Self::EncryptionAtRestAndTransit,
        Self::RegionalResidency,
        Self::AuditLogging,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DataMinimization => "data minimization",
            Self::EncryptionAtRestAndTransit => "encryption at rest & transit",
            Self::RegionalResidency => "regional residency options",
            Self::AuditLogging => "audit logging",
        }
    }
}

impl fmt::Display for ComplianceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
