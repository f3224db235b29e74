pub const CONTENT_STYLES: &str = r#"
/* Intro */
.intro {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-12) var(--space-4) var(--space-8);
  text-align: center;
}

.intro-pretitle {
  display: block;
  color: var(--text-muted);
  font-size: var(--font-small);
  margin-bottom: var(--space-3);
}

.intro-title {
  font-size: var(--font-title);
  font-weight: 500;
  line-height: 1.2;
}

.intro-author {
  font-size: var(--font-body);
  font-weight: 400;
  font-style: italic;
  margin-top: var(--space-3);
}

/* Editor */
.editor {
  display: block;
  margin: 0 auto;
  padding: 0 var(--space-4);
  font-size: var(--font-body);
}

.editor.default,
.editor.mood {
  max-width: var(--content-width);
}

.editor.gallery {
  max-width: var(--wide-width);
}

.editor p {
  margin-bottom: var(--space-6);
}

/* Images */
.img-figure {
  margin-bottom: var(--space-6);
}

.img-figure.first-image {
  margin-top: 0;
}

.img-wrapper {
  display: block;
  position: relative;
  overflow: hidden;
  cursor: zoom-in;
}

.img-wrapper.static {
  cursor: default;
}

.img-wrapper .img {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.img-figure figcaption {
  color: var(--text-muted);
  font-size: var(--font-small);
  margin-top: var(--space-2);
}

/* Meta */
.meta {
  max-width: var(--content-width);
  margin: var(--space-8) auto;
  padding: 0 var(--space-4);
}

.meta-content {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
  gap: var(--space-4);
}

.meta-title {
  color: var(--text-muted);
  font-size: var(--font-small);
}

/* Error pages */
.error-container {
  display: flex;
  min-height: 50vh;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.error-title {
  font-weight: 500;
  margin-bottom: var(--space-6);
}

.error-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

.error-button {
  background: none;
  border: 1px solid var(--text);
  color: var(--text);
  padding: var(--space-2) var(--space-4);
  font: inherit;
  cursor: pointer;
}
"#;
