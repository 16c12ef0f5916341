//! The single-page form UI. All interactivity is inline JavaScript that
//! talks to the JSON API the same way any other client would, so the
//! page needs no build step and no assets beyond this file.

use axum::response::Html;

/// GET /
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_HTML)
}

const FORM_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Postsmith Job Posting Helper</title>
<style>
  body { font-family: system-ui, -apple-system, sans-serif; max-width: 760px;
         margin: 2rem auto; padding: 0 1rem; color: #1c2733; }
  h1 { font-size: 1.5rem; }
  .lede { color: #51606f; }
  form { display: grid; grid-template-columns: 1fr 1fr; gap: 0.9rem; margin-top: 1.2rem; }
  .wide { grid-column: 1 / -1; }
  label { display: block; font-weight: 600; font-size: 0.85rem; margin-bottom: 0.25rem; }
  input, textarea, select { width: 100%; box-sizing: border-box; padding: 0.5rem;
         border: 1px solid #c4ced8; border-radius: 6px; font: inherit; }
  textarea { resize: vertical; }
  .actions { grid-column: 1 / -1; display: flex; gap: 0.75rem; }
  button { padding: 0.55rem 1.1rem; border: 0; border-radius: 6px; font: inherit;
           font-weight: 600; cursor: pointer; background: #0a66c2; color: #fff; }
  button.secondary { background: #3d4f61; }
  button:disabled { opacity: 0.6; cursor: wait; }
  #status { margin-top: 1rem; }
  #status.error { color: #b3261e; }
  #preview { white-space: pre-wrap; background: #f4f6f8; border-radius: 6px;
             padding: 1rem; margin-top: 1rem; display: none; }
  .slide-title { font-weight: 700; margin-top: 0.8rem; }
  #download { display: none; margin-top: 1rem; font-weight: 600; }
  footer { margin-top: 2.5rem; font-size: 0.8rem; color: #7a8694; }
</style>
</head>
<body>
<h1>Postsmith Job Posting Helper</h1>
<p class="lede">Generate a recruiter-friendly LinkedIn / job portal post, and download it
as a PDF to share with your team or agencies.</p>

<form id="job-form">
  <div>
    <label for="role">Role / Job Title*</label>
    <input id="role" placeholder="Bilingual L1 Support Lead (Japanese + Tamil)">
  </div>
  <div>
    <label for="experience">Experience range</label>
    <input id="experience" placeholder="5+ years in L1 / Tech Support">
  </div>
  <div>
    <label for="location">Location</label>
    <input id="location" placeholder="Coimbatore, Tamil Nadu">
  </div>
  <div>
    <label for="country">Hiring market</label>
    <select id="country">
      <option value="india" selected>India</option>
      <option value="japan">Japan</option>
    </select>
  </div>
  <div class="wide">
    <label for="skills">Key skills (comma separated)</label>
    <textarea id="skills" rows="3"
      placeholder="Japanese JLPT N3/N2, Tamil (native), ServiceNow, JIRA, Confluence, Java/.NET/Front-end basics"></textarea>
  </div>
  <div class="wide">
    <label for="extra_notes">Extra notes / context for the role</label>
    <textarea id="extra_notes" rows="3"
      placeholder="Any client specifics, work timings, culture notes, must-have behaviours, etc."></textarea>
  </div>
  <div class="wide">
    <label for="client_context">Client context (carousel only)</label>
    <textarea id="client_context" rows="2"
      placeholder="Who the client is and what tone the deck should take"></textarea>
  </div>
  <div class="wide">
    <label for="jd_text">Job description text (carousel only)</label>
    <textarea id="jd_text" rows="5"
      placeholder="Paste the full JD to turn into a 6-slide carousel"></textarea>
  </div>
  <div class="actions">
    <button type="button" id="post-btn">Generate job post</button>
    <button type="button" id="carousel-btn" class="secondary">Generate carousel</button>
  </div>
</form>

<p id="status"></p>
<div id="preview"></div>
<a id="download"></a>

<footer>Built for Postsmith recruiters. You can safely share this URL with your team;
the completion-service API key is stored on the server and never exposed.</footer>

<script>
function payload() {
  const field = (id) => document.getElementById(id).value;
  return {
    role: field('role'),
    location: field('location'),
    experience: field('experience'),
    skills: field('skills'),
    extra_notes: field('extra_notes'),
    country: field('country'),
    client_context: field('client_context'),
    jd_text: field('jd_text'),
  };
}

function setStatus(message, isError) {
  const status = document.getElementById('status');
  status.textContent = message;
  status.className = isError ? 'error' : '';
}

function showPostPreview(data) {
  const preview = document.getElementById('preview');
  preview.textContent = data.post_text;
  preview.style.display = 'block';
}

function showCarouselPreview(data) {
  const preview = document.getElementById('preview');
  preview.textContent = '';
  if (data.caption) {
    preview.appendChild(document.createTextNode(data.caption + '\n'));
  }
  for (const slide of data.slides) {
    const title = document.createElement('div');
    title.className = 'slide-title';
    title.textContent = slide.title;
    preview.appendChild(title);
    preview.appendChild(document.createTextNode(slide.body + '\n'));
  }
  preview.style.display = 'block';
}

function offerDownload(filename, b64) {
  const bytes = atob(b64);
  const buf = new Uint8Array(bytes.length);
  for (let i = 0; i < bytes.length; i++) buf[i] = bytes.charCodeAt(i);
  const blob = new Blob([buf], { type: 'application/pdf' });
  const link = document.getElementById('download');
  link.href = URL.createObjectURL(blob);
  link.download = filename;
  link.textContent = 'Download ' + filename;
  link.style.display = 'inline-block';
}

async function generate(kind) {
  const endpoint = kind === 'carousel' ? '/api/v1/carousels' : '/api/v1/posts';
  const buttons = document.querySelectorAll('button');
  buttons.forEach((b) => (b.disabled = true));
  document.getElementById('preview').style.display = 'none';
  document.getElementById('download').style.display = 'none';
  setStatus('Calling the completion service and drafting your job post...');
  try {
    const res = await fetch(endpoint, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload()),
    });
    const data = await res.json();
    if (!res.ok) {
      const message = data.error && data.error.message
        ? data.error.message
        : 'Request failed (' + res.status + ')';
      throw new Error(message);
    }
    if (kind === 'carousel') {
      showCarouselPreview(data);
    } else {
      showPostPreview(data);
    }
    offerDownload(data.filename, data.pdf_base64);
    setStatus('Done! Review your job post below.');
  } catch (err) {
    setStatus(err.message, true);
  } finally {
    buttons.forEach((b) => (b.disabled = false));
  }
}

document.getElementById('post-btn').addEventListener('click', () => generate('post'));
document.getElementById('carousel-btn').addEventListener('click', () => generate('carousel'));
</script>
</body>
</html>
"##;
