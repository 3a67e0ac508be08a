use axum::response::Html;

/// GET /
/// The interactive page: upload, extracted-text preview, mode selection,
/// job fields and the improvement result.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ATS-Friendly CV Improver</title>
<style>
  body { font-family: Arial, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; }
  pre { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; }
  .warning { color: #8a5300; background: #fff4e0; padding: .5rem; }
  .error { color: #a00; }
  aside { font-size: .9rem; color: #555; border-top: 1px solid #ddd; margin-top: 2rem; }
</style>
</head>
<body>
<h1>ATS-Friendly CV Improver</h1>

<h3>Upload your CV (PDF format):</h3>
<input type="file" id="file" accept=".pdf,application/pdf">
<p id="status"></p>

<details id="preview" hidden>
  <summary>Extracted CV Text</summary>
  <textarea id="cv_text" rows="14" readonly></textarea>
</details>

<div id="controls" hidden>
  <label for="mode">Choose an option:</label>
  <select id="mode">
    <option value="general">General CV Enhancement</option>
    <option value="specific">Specific Job Description Enhancement</option>
  </select>

  <div id="job" hidden>
    <p><label>Enter the job description:<br><textarea id="job_description" rows="7"></textarea></label></p>
    <p><label>Enter the minimum qualification:<br><textarea id="minimum_qualification" rows="3"></textarea></label></p>
  </div>

  <p><button id="improve">Improve CV</button></p>
</div>

<p id="warning" class="warning" hidden></p>
<h3 id="result_title" hidden>Improved CV and Suggestions:</h3>
<pre id="result" hidden></pre>

<aside>
  <h4>About</h4>
  <p>This app uses Google's Gemini AI to improve your CV and make it more ATS-friendly.
  Upload your CV in PDF format and choose between general enhancement or tailoring for a specific job description.</p>
</aside>

<script>
const $ = (id) => document.getElementById(id);
let cvText = null;

function show(id, visible) { $(id).hidden = !visible; }

async function errorMessage(res) {
  try { const body = await res.json(); return body.error.message; } catch (_) { return res.statusText; }
}

function showError(message) {
  const span = document.createElement("span");
  span.className = "error";
  span.textContent = message;
  $("status").replaceChildren(span);
}

$("file").addEventListener("change", async () => {
  const file = $("file").files[0];
  if (!file) return;
  cvText = null;
  show("controls", false); show("preview", false); show("result", false); show("result_title", false);
  $("status").textContent = "Extracting text from PDF...";
  const form = new FormData();
  form.append("file", file);
  const res = await fetch("/api/v1/extract", { method: "POST", body: form });
  if (!res.ok) {
    showError(await errorMessage(res));
    return;
  }
  const body = await res.json();
  cvText = body.text;
  $("cv_text").value = body.text;
  $("status").textContent = `Extracted ${body.char_count} characters from ${body.page_count} page(s).`;
  show("preview", true); show("controls", true);
});

$("mode").addEventListener("change", () => {
  const specific = $("mode").value === "specific";
  show("job", specific);
  $("improve").textContent = specific ? "Improve CV for Specific Job" : "Improve CV";
  $("result_title").textContent = specific
    ? "Improved CV and Suggestions for Specific Job:"
    : "Improved CV and Suggestions:";
});

$("improve").addEventListener("click", async () => {
  if (cvText === null) return;
  const mode = $("mode").value;
  const payload = { cv_text: cvText, mode };
  show("warning", false);
  if (mode === "specific") {
    payload.job_description = $("job_description").value;
    payload.minimum_qualification = $("minimum_qualification").value;
    if (!payload.job_description || !payload.minimum_qualification) {
      $("warning").textContent = "Please enter both job description and minimum qualification.";
      show("warning", true);
      return;
    }
  }
  $("improve").disabled = true;
  $("status").textContent = mode === "specific"
    ? "Improving your CV for the specific job..."
    : "Improving your CV...";
  const res = await fetch("/api/v1/improve", {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify(payload),
  });
  $("improve").disabled = false;
  if (!res.ok) {
    const message = await errorMessage(res);
    if (res.status === 400) { $("warning").textContent = message; show("warning", true); }
    else { showError(message); }
    return;
  }
  const body = await res.json();
  $("status").textContent = "";
  $("result").textContent = body.result;
  show("result_title", true); show("result", true);
});
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wires_every_endpoint_it_calls() {
        assert!(INDEX_HTML.contains(r#"fetch("/api/v1/extract""#));
        assert!(INDEX_HTML.contains(r#"fetch("/api/v1/improve""#));
        assert!(INDEX_HTML.contains(r#"accept=".pdf,application/pdf""#));
    }

    #[test]
    fn test_server_messages_rendered_as_text() {
        assert!(!INDEX_HTML.contains("innerHTML"));
        assert!(INDEX_HTML.contains("span.textContent = message"));
    }
}
