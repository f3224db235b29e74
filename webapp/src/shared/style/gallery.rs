pub const GALLERY: &str = r#"
.gallery {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.gallery .img-figure {
  margin-bottom: 0;
}

.gallery [data-orientation="landscape"] {
  grid-column: span 2;
}

@media (max-width: 600px) {
  .gallery {
    grid-template-columns: 1fr;
  }

  .gallery [data-orientation="landscape"] {
    grid-column: auto;
  }
}
"#;

pub const LIGHTBOX: &str = r#"
.zoom-overlay {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  left: 0;
  background: var(--overlay);
  z-index: 9999;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: zoom-out;
}

.zoomed-image {
  max-width: 90%;
  max-height: 90%;
  width: auto;
  height: auto;
  object-fit: contain;
}

.zoom-step {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  padding: var(--space-4);
  background: none;
  border: none;
  color: #FFFFFF;
  font-size: 2rem;
  cursor: pointer;
}

.zoom-step.previous {
  left: var(--space-4);
}

.zoom-step.next {
  right: var(--space-4);
}

.zoom-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  background: none;
  border: none;
  color: #FFFFFF;
  font-size: 2rem;
  cursor: pointer;
}

.zoom-counter {
  position: absolute;
  bottom: var(--space-4);
  color: #FFFFFF;
  font-size: var(--font-small);
}
"#;
