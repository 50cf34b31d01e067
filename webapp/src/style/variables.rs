pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #4F46E5;          /* Indigo brand */
  --primary-light: #818CF8;
  --primary-dark: #4338CA;
  --accent: #3B82F6;           /* Hero gradient start */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --background-alt: var(--neutral-100);
  --background-tint: #EEF2FF;
  --surface: #FFFFFF;
  --overlay: rgba(17, 24, 39, 0.55);

  /* Text Colors */
  --text-primary: var(--neutral-800);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-200);

  /* Layout */
  --header-height: 64px;
  --drawer-width: 280px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* dark theme, switched by the data-theme attribute on <html> */
:root[data-theme="dark"] {
  --primary: #818CF8;
  --primary-light: #A5B4FC;
  --primary-dark: #6366F1;

  --background: #0B1120;
  --background-alt: #111827;
  --background-tint: #1E1B4B;
  --surface: #1F2937;
  --overlay: rgba(0, 0, 0, 0.7);

  --text-primary: #F3F4F6;
  --text-secondary: #D1D5DB;
  --text-tertiary: #9CA3AF;

  --border: #374151;
}
"#;
