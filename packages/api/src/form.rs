// ABOUTME: Embedded HTML for the single-page form
// ABOUTME: Rendered with the result region populated after a submission

use fincrew_agents::AgentRegistry;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Fincrew</title>
  <style>
    body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; }
    label { display: block; margin-top: 0.8rem; }
    textarea { width: 100%; height: 8rem; }
    .result { margin-top: 1.5rem; padding: 1rem; background: #f4f4f4; white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>Fincrew</h1>
  <form method="post" action="/" enctype="multipart/form-data">
    <label>Agent
      <select name="agent">{agent_options}</select>
    </label>
    <label>Your input
      <textarea name="user_input" placeholder="Type or paste text here"></textarea>
    </label>
    <label>Audio clip <input type="file" name="audio_file"></label>
    <label>Image <input type="file" name="image_file"></label>
    <label>Document <input type="file" name="text_file"></label>
    <button type="submit">Run</button>
  </form>
  {result_region}
</body>
</html>
"#;

/// Render the page, optionally with a populated result region.
pub fn render_page(registry: &AgentRegistry, result: Option<&str>) -> String {
    let mut profiles = registry.list();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));

    let agent_options: String = profiles
        .iter()
        .map(|p| format!("<option value=\"{}\">{}</option>", p.id, escape_html(&p.name)))
        .collect();

    let result_region = match result {
        Some(text) => format!("<div class=\"result\">{}</div>", escape_html(text)),
        None => String::new(),
    };

    PAGE_TEMPLATE
        .replace("{agent_options}", &agent_options)
        .replace("{result_region}", &result_region)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_no_result_region() {
        let registry = AgentRegistry::new().unwrap();
        let page = render_page(&registry, None);
        assert!(page.contains("name=\"agent\""));
        assert!(page.contains("value=\"credit\""));
        assert!(!page.contains("class=\"result\""));
    }

    #[test]
    fn test_result_region_is_escaped() {
        let registry = AgentRegistry::new().unwrap();
        let page = render_page(&registry, Some("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
    }
}
