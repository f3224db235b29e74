pub const LAYOUT_STYLES: &str = r#"
/* Header */
.header-inner {
  display: grid;
  grid-template-columns: 44px 1fr 44px;
  align-items: center;
  max-width: var(--wide-width);
  margin: 0 auto;
  padding: var(--space-4);
  position: relative;
}

.header-btn {
  width: 22px;
  height: 22px;
  background: none;
  border: none;
  cursor: pointer;
  fill: var(--text);
  stroke: var(--text);
}

.header-btn .outer {
  fill: none;
  stroke-width: 2;
}

.header-btn .inner {
  stroke: none;
}

.header-home {
  justify-self: center;
}

.logo {
  width: 40px;
  height: 40px;
  fill: var(--text);
}

/* Search */
.search-form {
  display: none;
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  padding: var(--space-4);
  background-color: var(--background);
  z-index: 5;
}

.search-form.is-open {
  display: flex;
  gap: var(--space-2);
}

.search-input {
  flex: 1;
  padding: var(--space-2);
  background: none;
  color: var(--text);
  font: inherit;
}

.search-submit {
  width: 22px;
  background: none;
  border: none;
  fill: var(--text);
  cursor: pointer;
}

/* Menu */
.menu {
  max-width: var(--wide-width);
  margin: 0 auto;
}

.menu-btn {
  display: block;
  width: 100%;
  padding: var(--space-3);
  background: none;
  border-left: none;
  border-right: none;
  border-top: none;
  color: var(--text);
  font: inherit;
  cursor: pointer;
}

.menu-inner {
  display: none;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  padding: var(--space-4);
}

.menu.is-open .menu-inner {
  display: flex;
}

.menu-item {
  text-decoration: none;
}

.menu-item.active,
.menu-item:hover {
  text-decoration: underline;
}

/* Archives */
.archives-inner {
  max-width: var(--content-width);
  margin: var(--space-12) auto 0;
  padding: var(--space-12) var(--space-4);
  text-align: center;
}

.archives-title {
  font-weight: 500;
  margin-bottom: var(--space-6);
}

/* Newsletter */
.newsletter-container {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-8) var(--space-4);
}

.newsletter-form {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.newsletter-input {
  flex: 1;
  padding: var(--space-2) 0;
  background: none;
  border: none;
  color: var(--text);
  font: inherit;
}

.newsletter-label {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
}

.newsletter-btn {
  background: none;
  border: none;
  color: var(--text);
  font-size: 1.25rem;
  cursor: pointer;
}

.newsletter-status {
  color: var(--text-muted);
  font-size: var(--font-small);
}

/* Sponsors */
.sponsors-inner {
  display: grid;
  grid-template-columns: 32px repeat(4, 1fr) 32px;
  align-items: center;
  gap: var(--space-4);
  max-width: var(--wide-width);
  margin: 0 auto;
  padding: var(--space-8) var(--space-4);
}

.sponsor-container {
  text-align: center;
}

.sponsor-logo {
  display: block;
  font-weight: 500;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.sponsor-link {
  text-decoration: none;
}

.sponsor-tagline {
  color: var(--text-muted);
  font-size: var(--font-small);
}

.sponsor-step {
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}

/* Footer */
.footer-links {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  max-width: var(--wide-width);
  margin: 0 auto;
  padding: var(--space-8) var(--space-4);
}

.footer-link-container {
  display: flex;
  gap: var(--space-4);
}

.footer-link {
  font-size: var(--font-small);
  text-decoration: none;
}

.footer-logo {
  width: 24px;
  height: 24px;
}
"#;
