//! Global CSS styles for the contact card editor.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f6f7f9;
  --surface: #ffffff;
  --border: #d9dde3;
  --text-primary: #1d2330;
  --text-secondary: #5b6475;
  --accent: #2f6fed;
  --accent-hover: #2459c4;
  --danger: #d6334c;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --radius: 8px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
}

/* === Layout === */
.card-editor {
  display: grid;
  grid-template-columns: minmax(320px, 1fr) minmax(280px, 360px);
  gap: 2rem;
  padding: 2rem;
}

.page-title {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

/* === Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.input-label {
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.input-field {
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
}

.textarea {
  resize: vertical;
}

.form-actions {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.5rem;
}

.form-status {
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.form-status--error {
  color: var(--danger);
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-ghost {
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #fff;
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-secondary {
  background: var(--surface);
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn-ghost {
  background: transparent;
  border: 1px dashed var(--border);
  color: var(--text-secondary);
  align-self: flex-start;
}

button:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === Preview === */
.preview-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.5rem;
  text-align: center;
}

.preview-avatar img, .preview-avatar__placeholder {
  width: 96px;
  height: 96px;
  border-radius: 50%;
  object-fit: cover;
  margin: 0 auto 0.75rem;
}

.preview-avatar__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  background: var(--bg);
}

.preview-name {
  font-size: 1.25rem;
  min-height: 1.5rem;
}

.preview-title, .preview-company {
  color: var(--text-secondary);
}

.preview-details {
  list-style: none;
  margin-top: 0.75rem;
  font-size: 0.85rem;
  overflow-wrap: anywhere;
}

/* === QR === */
.qr-box {
  margin-top: 1.5rem;
  padding: 1rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  text-align: center;
}

.qr-box__hint {
  font-size: 0.8rem;
  color: var(--text-secondary);
  margin-bottom: 0.5rem;
}

.qr-code {
  margin: 0 auto;
}

.qr-code svg {
  width: 100%;
  height: 100%;
}

/* === Acknowledgment === */
.ack-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.35);
  display: flex;
  align-items: center;
  justify-content: center;
}

.ack-content {
  background: var(--surface);
  border-radius: 12px;
  padding: 1.5rem 2rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
}
"#;
