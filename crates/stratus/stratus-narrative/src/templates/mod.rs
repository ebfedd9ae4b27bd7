//! Explanation line templates. Placeholders are `{name}`.

pub mod vocabulary;

pub const FOCUS: &str = "This design targets: {focus}.";
pub const INGRESS: &str = "Traffic enters via {ingress}, then flows to {compute} for stateless compute.";
pub const CACHE: &str = "Hot paths are accelerated using {cache} to reduce latency.";
pub const PERSISTENCE: &str = "Stateful data persists in {database} with {storage} for objects/logs.";
pub const QUEUE: &str = "Decoupling with {queue} helps absorb spikes and improve reliability.";
pub const STREAM: &str = "Real-time events stream through {stream} enabling near real-time analytics.";
pub const SECURITY: &str =
    "Security is enforced with IAM least-privilege, KMS encryption, WAF, and private subnets.";
pub const COMPLIANCE: &str =
    "GDPR/NIS2 considerations: data minimization, regional data residency, and full audit logging.";
pub const SCORES: &str = "The sliders guided trade-offs (latency {latency}, load {load}, cost {cost}, \
                          performance {performance}, security {security}, scale {scale}).";

/// Render a template, substituting each `{key}` with its value.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

/// Placeholder for an absent optional component.
pub const NONE: &str = "None";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        assert_eq!(render("{a} and {a} or {b}", &[("a", "x"), ("b", "y")]), "x and x or y");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        assert_eq!(render(QUEUE, &[]), QUEUE);
    }
}
