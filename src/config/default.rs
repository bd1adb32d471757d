// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration and file templates.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# egf configuration

# Output configuration
[output]
# Default output format: "text" or "json"
format = "text"

# UI configuration
[ui]
color = true
emoji = true
"#
}

/// Generate a facts template listing every fact.
///
/// All values start out `false` except `has_explanation`, so the template
/// evaluates as permissible until it is edited.
pub fn facts_template() -> &'static str {
    r#"# Facts about one proposed action.
# Every key is required; remove none of them.

# Wrongful arrest, violence or other life-changing harm.
causes_severe_harm = false

# Stress, repeated stops, brief detainment.
causes_minor_harm = false

# Prevents a mass-casualty event or comparable catastrophe.
prevents_catastrophe = false

# Uses personal data beyond what people agreed to.
violates_privacy = false

# Informed consent or a transparent legal mandate exists.
has_consent = false

# People are misled about what the system does.
involves_deception = false

# An independent ethics board approved the action.
has_ethics_approval = false

# Decisions can be explained and traced to responsible humans.
has_explanation = true

# Relies on historical data that may carry bias.
uses_historical_data = false

# Bias mitigation measures and audits are in place.
has_bias_mitigation = false
"#
}
