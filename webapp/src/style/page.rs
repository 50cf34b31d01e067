pub const PAGE_STYLES: &str = r#"
/* Header */
.app-header {
  position: sticky;
  top: 0;
  z-index: 30;
  height: var(--header-height);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
  cursor: pointer;
}

.nav-links {
  display: flex;
  gap: var(--space-1);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--background-alt);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: var(--background-tint);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-toggle {
  display: none;
}

.shortcut-hint kbd {
  font-family: inherit;
  font-size: 0.75rem;
  padding: 1px var(--space-1);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

@media (max-width: 900px) {
  .nav-links, .shortcut-hint {
    display: none;
  }

  .nav-toggle {
    display: inline-flex;
  }
}

/* Drawer */
.drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: var(--drawer-width);
  max-width: 100%;
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  z-index: 50;
  display: flex;
  flex-direction: column;
  padding: var(--space-4);
  gap: var(--space-2);
}

.drawer-header {
  display: flex;
  justify-content: flex-end;
  margin-bottom: var(--space-4);
}

.drawer .nav-link {
  font-size: 1.1rem;
  padding: var(--space-3);
}

/* Scroll helpers */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  background: linear-gradient(90deg, var(--accent), var(--primary));
  z-index: 60;
}

.top-button {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 20;
  box-shadow: var(--shadow-lg);
}

/* Command palette */
.palette {
  position: fixed;
  top: 15vh;
  left: 50%;
  transform: translateX(-50%);
  width: min(560px, calc(100% - var(--space-8)));
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  z-index: 70;
  overflow: hidden;
}

.palette-input {
  width: 100%;
  padding: var(--space-4);
  font-size: 1rem;
  border: none;
  border-bottom: 1px solid var(--border);
  background: transparent;
  color: var(--text-primary);
  outline: none;
}

.palette-list {
  list-style: none;
  max-height: 50vh;
  overflow-y: auto;
  padding: var(--space-2);
}

.palette-item {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  cursor: pointer;
  color: var(--text-secondary);
}

.palette-item.highlighted, .palette-item:hover {
  background-color: var(--background-tint);
  color: var(--primary);
}

.palette-empty {
  padding: var(--space-4);
  color: var(--text-tertiary);
  text-align: center;
}

/* Sections */
.page-section {
  padding: var(--space-16) 0;
  scroll-margin-top: var(--header-height);
}

.page-section.alt {
  background-color: var(--background-alt);
}

.page-section.tint {
  background-color: var(--background-tint);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-10);
}

.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  padding: var(--space-20) var(--space-6);
  background: linear-gradient(90deg, var(--accent), var(--primary-dark));
  color: var(--text-inverse);
}

.hero-photo {
  width: 128px;
  height: 128px;
  border-radius: var(--radius-full);
  object-fit: cover;
  margin-bottom: var(--space-6);
  border: 4px solid rgba(255, 255, 255, 0.6);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.25rem;
  max-width: 42rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.about-text {
  max-width: 56rem;
  margin: 0 auto;
  font-size: 1.125rem;
  text-align: center;
  color: var(--text-secondary);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-8);
}

.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  text-align: center;
  font-weight: 600;
}

.plain-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  text-align: center;
  color: var(--text-secondary);
}

.testimonial {
  max-width: 48rem;
  margin: 0 auto;
  text-align: center;
}

.testimonial-quote {
  font-style: italic;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.testimonial-author {
  margin-top: var(--space-4);
  font-weight: 600;
}

.rotator-dots {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-6);
}

.rotator-dot {
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  border: none;
  background-color: var(--neutral-300);
  cursor: pointer;
}

.rotator-dot.active {
  background-color: var(--primary);
}

.button-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-6);
}

.contact {
  background-color: var(--primary-dark);
  color: var(--text-inverse);
  text-align: center;
}

.contact p {
  max-width: 36rem;
  margin: 0 auto var(--space-6);
}

.site-footer {
  padding: var(--space-6) 0;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-tertiary);
}
"#;
