// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Static form page served at the root route
//!
//! One form, one trigger action, one results/error region. Option lists
//! are rendered from the same enums the API deserializes.

use crate::prompt::{AgeGroup, ContentStyle, Platform, TaskType};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Content Generator</title>
<style>
  body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
  h1 { font-size: 1.4rem; }
  label { display: block; margin-top: 0.8rem; font-weight: bold; }
  textarea, select, input { width: 100%; margin-top: 0.2rem; padding: 0.3rem; box-sizing: border-box; }
  textarea { height: 9rem; }
  button { margin-top: 1rem; padding: 0.5rem 1.2rem; }
  .error { color: darkred; white-space: pre-wrap; }
  .version { margin-top: 1rem; }
  .version h3 { margin-bottom: 0.2rem; }
</style>
</head>
<body>
<h1>AI Content Generator</h1>
<form id="generate-form">
  <label for="input">Type the topic or URL</label>
  <textarea id="input" name="input"></textarea>

  <label for="taskType">Task type:</label>
  <select id="taskType" name="taskType">__TASK_OPTIONS__</select>

  <label for="ageGroup">Target age group:</label>
  <select id="ageGroup" name="ageGroup">__AGE_OPTIONS__</select>

  <label for="platform">Platform:</label>
  <select id="platform" name="platform">__PLATFORM_OPTIONS__</select>

  <label for="style">Style:</label>
  <select id="style" name="style">__STYLE_OPTIONS__</select>

  <label for="numOutputs">Number of outputs:</label>
  <input type="number" id="numOutputs" name="numOutputs" min="1" max="5" value="1">

  <button type="submit">Generate Content</button>
</form>
<div id="results"></div>
<script>
document.getElementById('generate-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const results = document.getElementById('results');
  results.textContent = 'Processing...';

  const body = {
    input: document.getElementById('input').value,
    taskType: document.getElementById('taskType').value,
    ageGroup: document.getElementById('ageGroup').value,
    platform: document.getElementById('platform').value,
    style: document.getElementById('style').value,
    numOutputs: parseInt(document.getElementById('numOutputs').value, 10)
  };

  try {
    const response = await fetch('/v1/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body)
    });

    if (!response.ok) {
      const text = await response.text();
      results.innerHTML = '';
      const error = document.createElement('p');
      error.className = 'error';
      error.textContent = text;
      results.appendChild(error);
      return;
    }

    const data = await response.json();
    results.innerHTML = '';
    for (const completion of data.completions) {
      const block = document.createElement('div');
      block.className = 'version';
      const heading = document.createElement('h3');
      heading.textContent = 'Version ' + completion.position + ':';
      const text = document.createElement('p');
      text.textContent = completion.text;
      block.appendChild(heading);
      block.appendChild(text);
      results.appendChild(block);
    }
  } catch (err) {
    results.textContent = 'Request failed: ' + err;
  }
});
</script>
</body>
</html>
"#;

/// Build an option list from human-readable labels
fn options_markup<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels
        .into_iter()
        .map(|label| format!("<option>{}</option>", label))
        .collect()
}

/// Render the form page with option lists drawn from the config enums
pub fn render_form_page() -> String {
    PAGE_TEMPLATE
        .replace(
            "__TASK_OPTIONS__",
            &options_markup(TaskType::ALL.iter().map(|t| t.label())),
        )
        .replace(
            "__AGE_OPTIONS__",
            &options_markup(AgeGroup::ALL.iter().map(|a| a.label())),
        )
        .replace(
            "__PLATFORM_OPTIONS__",
            &options_markup(Platform::ALL.iter().map(|p| p.label())),
        )
        .replace(
            "__STYLE_OPTIONS__",
            &options_markup(ContentStyle::ALL.iter().map(|s| s.label())),
        )
}
