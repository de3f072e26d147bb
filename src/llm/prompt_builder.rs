use crate::config::Commit;
use crate::llm::prompts;

/// Assemble the release notes prompt: a header naming the version and repo,
/// one line per commit in input order, then the fixed formatting rules.
///
/// Returns `None` for an empty commit list. That is the "nothing to do"
/// signal, not an error; the caller short-circuits with a fixed notice
/// instead of issuing a request over zero commits.
pub fn release_notes_prompt(
    repo_owner: &str,
    repo_name: &str,
    version: &str,
    commits: &[Commit],
) -> Option<String> {
    if commits.is_empty() {
        return None;
    }

    let commits_text = commits
        .iter()
        .map(|c| format!("- {} (by {})", c.message, c.author))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "Generate structured release notes for version {version} of {repo_owner}/{repo_name}.\n\
         \n\
         Commits since last release:\n\
         {commits_text}\n\
         \n\
         {rules}",
        rules = prompts::RELEASE_NOTES_RULES
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(message: &str, author: &str) -> Commit {
        Commit {
            sha: None,
            message: message.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn empty_commit_list_yields_no_prompt() {
        assert!(release_notes_prompt("octo", "widgets", "1.2.0", &[]).is_none());
    }

    #[test]
    fn prompt_names_version_repo_and_commits() {
        let commits = vec![commit("Fix crash on startup", "alice")];
        let prompt = release_notes_prompt("octo", "widgets", "1.2.0", &commits).unwrap();

        assert!(prompt.starts_with(
            "Generate structured release notes for version 1.2.0 of octo/widgets."
        ));
        assert!(prompt.contains("- Fix crash on startup (by alice)"));
        assert!(prompt.contains("version 1.2.0"));
    }

    #[test]
    fn commits_render_one_line_each_in_input_order() {
        let commits = vec![
            commit("Add dark mode", "bob"),
            commit("Fix flaky test", "carol"),
        ];
        let prompt = release_notes_prompt("octo", "widgets", "2.0.0", &commits).unwrap();

        assert!(prompt.contains(
            "Commits since last release:\n- Add dark mode (by bob)\n- Fix flaky test (by carol)\n"
        ));
    }

    #[test]
    fn prompt_carries_the_full_rules_block() {
        let commits = vec![commit("Anything", "dave")];
        let prompt = release_notes_prompt("octo", "widgets", "0.1.0", &commits).unwrap();

        assert!(prompt.contains("Please analyze these commits and categorize the changes"));
        assert!(prompt.contains("> [!CAUTION]\n> Breaking change: <short description>"));
        assert!(prompt.ends_with(
            "Return ONLY the markdown content without code fences or explanations/anecdotes."
        ));
    }

    #[test]
    fn prompt_is_deterministic() {
        let commits = vec![commit("Fix crash on startup", "alice")];
        let a = release_notes_prompt("octo", "widgets", "1.2.0", &commits).unwrap();
        let b = release_notes_prompt("octo", "widgets", "1.2.0", &commits).unwrap();
        assert_eq!(a, b);
    }
}
