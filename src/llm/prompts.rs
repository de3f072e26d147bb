//! Fixed prompt and output text for the release notes pipeline.
//!
//! `RELEASE_NOTES_RULES` is reproduced verbatim: downstream consumers of the
//! generated notes rely on the exact section taxonomy and callout syntax, so
//! any edit here changes the document shape they parse.

pub const RELEASE_NOTES_RULES: &str = r###"Please analyze these commits and categorize the changes into sections. Use these sections in this order and include the emoji in the H2 heading:
- **✨ Highlights**: 2 to 5 most important user-facing changes
- **⚠️ Breaking Changes**: Any breaking changes (see special rules below)
- **🚀 Features**: New functionality or capabilities
- **🛠️ Improvements**: Enhancements to existing features
- **🐛 Bug Fixes**: Corrections to defects
- **⚡ Performance**: Speed, memory, or efficiency improvements
- **🔒 Security**: Vulnerability fixes or security hardening
- **🧩 Plugin API**: Changes that affect plugin authors, even if not breaking
- **📚 Documentation**: Documentation updates
- **🧰 Developer Experience**: Tooling, build system, CI, scripts, tests, or internal workflows
- **🧹 Internal**: Refactoring, dependencies, code cleanup

Breaking changes rules:
- If any change is a breaking change to the plugins API, include a GitHub CAUTION callout under the **Breaking Changes** section.
- Use the exact format:
> [!CAUTION]
> Breaking change: <short description>
- If there are multiple breaking changes, include multiple callouts.

Formatting rules (strict):
- Use GitHub Markdown with H2 headings (e.g. "## Features").
- One blank line between sections, and one blank line between a heading and its list.
- Use '-' bullet points only, no nested lists.
- Each bullet: short sentence, sentence case, ends with a period.
- Each bullet MUST include GitHub mentions for everyone involved in the commit (author and any co-authors).
- Use @username mentions when available; otherwise include the provided name as plain text.
- No trailing whitespace.

General guidelines:
- If a section has no items, omit that section entirely.
- Merge similar commits into single entries when appropriate.
- Focus on user-facing changes for Highlights, Features, Improvements, Bug Fixes.
- Place technical/infrastructure changes in Developer Experience or Internal.

Return ONLY the markdown content without code fences or explanations/anecdotes."###;

/// Printed to stderr when the commit list is empty and no prompt is built.
pub const NO_COMMITS_NOTICE: &str = "## What's Changed\n\nNo commits found since last release.";
