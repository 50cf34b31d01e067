pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  font-weight: 500;
  font-size: 0.95rem;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  background-color: var(--background-alt);
  text-decoration: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-light {
  background-color: #FFFFFF;
  color: var(--neutral-900);
  border-color: transparent;
}

.btn-ghost {
  background: transparent;
  border-color: transparent;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-md);
  padding: var(--space-6);
}

.card-title {
  font-size: 1.2rem;
  font-weight: 600;
}

.card-meta {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.card-bullets {
  margin-top: var(--space-3);
  padding-left: var(--space-4);
  color: var(--text-secondary);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-3);
}

.tag {
  font-size: 0.75rem;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--background-tint);
  color: var(--primary);
}

/* Overlays */
.overlay {
  position: fixed;
  inset: 0;
  background-color: var(--overlay);
  z-index: 40;
}
"#;
