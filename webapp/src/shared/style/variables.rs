pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --background: #FFFFFF;
  --text: #111111;
  --text-muted: #6B6B6B;
  --border: #E5E5E5;
  --overlay: rgba(0, 0, 0, 0.75);

  /* Layout */
  --content-width: 702px;
  --wide-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Type */
  --font-small: 0.8125rem;
  --font-body: 1.0625rem;
  --font-title: 2.5rem;

  --transition: 200ms ease;
}

/* reading mode, toggled from the header */
:root.inverted {
  --background: #111111;
  --text: #F5F5F5;
  --text-muted: #9A9A9A;
  --border: #2A2A2A;
}
"#;
