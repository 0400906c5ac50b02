pub const PROJECT_FORM_STYLES: &str = r#"
.project-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    max-width: 40rem;
    padding: 1rem;
    color: var(--text-primary, #f8fafc);
}

.project-form-fields {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.project-form-label {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    font-size: 0.875rem;
    font-weight: 600;
}

.project-form-input {
    padding: 0.5rem 0.625rem;
    background: var(--input-bg, #1e293b);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.375rem;
    color: inherit;
    font: inherit;
    font-weight: 400;
}

.project-form-input:disabled {
    opacity: 0.6;
}

.project-form-hint {
    margin: 0;
    font-size: 0.75rem;
    color: var(--text-secondary, #94a3b8);
}

.project-form-actions {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.project-form-submit {
    align-self: flex-start;
    padding: 0.5rem 1.25rem;
    background: var(--accent-bg, #3b82f6);
    border: none;
    border-radius: 0.375rem;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}

.project-form-submit:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.project-form-saved {
    font-size: 0.75rem;
    color: var(--success-bg, #22c55e);
}

.project-form-error {
    padding: 0.75rem;
    border: 1px solid var(--danger-bg, #ef4444);
    border-radius: 0.375rem;
    background: color-mix(in srgb, var(--danger-bg, #ef4444) 12%, transparent);
}

.project-form-error pre {
    margin: 0.25rem 0 0 0;
    white-space: pre-wrap;
    font-family: inherit;
}

.project-form-toggle {
    margin: 0;
    font-size: 0.8rem;
    color: var(--text-secondary, #94a3b8);
}

.project-form-link {
    padding: 0;
    background: none;
    border: none;
    color: var(--accent-bg, #3b82f6);
    text-decoration: underline;
    cursor: pointer;
    font: inherit;
}

.project-form-created h3 {
    margin: 0 0 0.5rem 0;
}

.project-form-id {
    font-family: monospace;
    font-size: 0.75rem;
    color: var(--text-secondary, #94a3b8);
}
"#;
