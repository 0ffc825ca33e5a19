use crate::wire::{IntegrationConfig, ResponseFormat, ThemeFileSet};

fn integration_requirements(cfg: &IntegrationConfig) -> Vec<String> {
    let domain = cfg.environment.subdomain();
    let key = &cfg.publishable_key;
    let env = cfg.environment.as_str();
    vec![
        "INTEGRATION REQUIREMENTS:".into(),
        "1. Add Bolt tracking script to the main layout/base template in the <head> section:".into(),
        format!("   <script id='bolt-tracking' type='text/javascript' src='https://{domain}.bolt.com/track.js' data-publishable-key='{key}'></script>"),
        String::new(),
        "2. Add Bolt connect script to cart-related pages before closing </body> tag:".into(),
        format!("   <script id='bolt-connect' src='https://{domain}.bolt.com/connect.js' data-auto-capture='true' data-auto-capture-elements='form[action*=checkout]' data-publishable-key='{key}'></script>"),
        String::new(),
        "3. Add Bolt checkout button to replace or supplement existing checkout buttons:".into(),
        "   <div id='bolt-checkout-button'></div>".into(),
        "   <script>".into(),
        "   document.addEventListener('DOMContentLoaded', function() {".into(),
        "     const originalButton = document.querySelector('.btn-checkout, .checkout-button, [href*=\"checkout\"]');".into(),
        "     if (originalButton) { originalButton.style.display = 'none'; }".into(),
        "     if (typeof BoltCheckout !== 'undefined') {".into(),
        format!("       const boltCheckout = BoltCheckout.configure({{ publishableKey: '{key}', environment: '{env}' }});"),
        "       const checkoutButton = boltCheckout.create('checkout_button');".into(),
        "       checkoutButton.mount('#bolt-checkout-button');".into(),
        "     }".into(),
        "   });".into(),
        "   </script>".into(),
    ]
}

const INSTRUCTIONS: [&str; 7] = [
    "INSTRUCTIONS:",
    "1. Analyze the theme structure and identify the appropriate files to modify",
    "2. Determine the best locations for each Bolt integration component based on the theme's architecture",
    "3. Integrate Bolt functionality while preserving existing theme functionality",
    "4. Return ONLY the files that need modifications with their complete updated content",
    "5. Use proper BigCommerce templating syntax (Handlebars/Stencil)",
    "6. Ensure the integration is compatible with the existing theme structure",
];

const MARKER_FORMAT: [&str; 7] = [
    "RESPONSE FORMAT:",
    "For each file that needs modification, provide:",
    "FILE_PATH: path/to/file.html",
    "CONTENT:",
    "[complete file content with Bolt integration]",
    "",
    "Only include files that require changes. Do not include unchanged files.",
];

const JSON_FORMAT: [&str; 6] = [
    "RESPONSE FORMAT:",
    "Return exactly one JSON object and nothing else (no markdown, no prose):",
    r#"{"files": [{"path": "path/to/file.html", "content": "[complete file content with Bolt integration]"}]}"#,
    "Paths are relative to the theme root and use forward slashes.",
    "",
    "Only include files that require changes. Do not include unchanged files.",
];

/// Build the integration prompt for `files`. Pure: the same inputs always
/// produce the same text.
pub fn build(files: &ThemeFileSet, cfg: &IntegrationConfig) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(48 + files.len() * 3);
    parts.push("You are an expert BigCommerce theme developer tasked with integrating Bolt checkout functionality into a BigCommerce theme.".into());
    parts.push(String::new());
    parts.extend(integration_requirements(cfg));
    parts.push(String::new());

    parts.push("THEME FILES STRUCTURE:".into());
    for (path, content) in files {
        parts.push(file_marker(path));
        parts.push(content.clone());
        parts.push(String::new());
    }

    parts.extend(INSTRUCTIONS.iter().map(|s| s.to_string()));
    parts.push(String::new());

    let format: &[&str] = match cfg.response_format {
        ResponseFormat::Markers => &MARKER_FORMAT[..],
        ResponseFormat::Json => &JSON_FORMAT[..],
    };
    parts.extend(format.iter().map(|s| s.to_string()));

    parts.join("\n")
}

pub fn file_marker(path: &str) -> String {
    format!("--- FILE: {path} ---")
}
