/// Branch used when a location string carries no `#branch` suffix.
pub const DEFAULT_BRANCH: &str = "master";

/// Where a dangerfile lives: optional repo, path inside it, and branch.
///
/// Parsed from the compact `[repoSlug@]path[#branch]` encoding used in rule
/// values. Constructed via [`DangerfileLocation::parse`], which accepts any
/// string; no validation of the path or slug format happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DangerfileLocation {
    /// `"owner/repo"`; `None` means the repo the event came from.
    pub repo_slug: Option<String>,
    pub dangerfile_path: String,
    pub branch: String,
}

impl DangerfileLocation {
    /// Parse a location string.
    ///
    /// - Everything before the first `@` is the repo slug.
    /// - In the remainder, everything before the first `#` is the path and
    ///   everything after it is the branch.
    /// - Missing `#` → branch [`DEFAULT_BRANCH`].
    ///
    /// Total over all inputs: `""` yields an empty path on `master`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dangerfile_router::domain::DangerfileLocation;
    ///
    /// let loc = DangerfileLocation::parse("orta/eigen@dangerfile.ts#branch");
    /// assert_eq!(loc.repo_slug.as_deref(), Some("orta/eigen"));
    /// assert_eq!(loc.dangerfile_path, "dangerfile.ts");
    /// assert_eq!(loc.branch, "branch");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let (repo_slug, remainder) = match raw.split_once('@') {
            Some((repo, rest)) => (Some(repo.to_string()), rest),
            None => (None, raw),
        };

        let (path, branch) = match remainder.split_once('#') {
            Some((path, branch)) => (path, branch),
            None => (remainder, DEFAULT_BRANCH),
        };

        DangerfileLocation {
            repo_slug,
            dangerfile_path: path.to_string(),
            branch: branch.to_string(),
        }
    }
}

impl std::fmt::Display for DangerfileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(repo) = &self.repo_slug {
            write!(f, "{repo}@")?;
        }
        write!(f, "{}#{}", self.dangerfile_path, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(repo: Option<&str>, path: &str, branch: &str) -> DangerfileLocation {
        DangerfileLocation {
            repo_slug: repo.map(String::from),
            dangerfile_path: path.to_string(),
            branch: branch.to_string(),
        }
    }

    #[test]
    fn bare_path_defaults_to_master_and_no_repo() {
        assert_eq!(
            DangerfileLocation::parse("dangerfile.ts"),
            location(None, "dangerfile.ts", "master")
        );
    }

    #[test]
    fn repo_and_path() {
        assert_eq!(
            DangerfileLocation::parse("orta/eigen@dangerfile.ts"),
            location(Some("orta/eigen"), "dangerfile.ts", "master")
        );
    }

    #[test]
    fn repo_path_and_branch() {
        assert_eq!(
            DangerfileLocation::parse("orta/eigen@dangerfile.ts#branch"),
            location(Some("orta/eigen"), "dangerfile.ts", "branch")
        );
    }

    #[test]
    fn branch_without_repo() {
        assert_eq!(
            DangerfileLocation::parse("dangerfile.ts#branch"),
            location(None, "dangerfile.ts", "branch")
        );
    }

    #[test]
    fn empty_string_is_empty_path_on_master() {
        assert_eq!(DangerfileLocation::parse(""), location(None, "", "master"));
    }

    #[test]
    fn nested_path_is_kept_verbatim() {
        assert_eq!(
            DangerfileLocation::parse("org/settings@peril/rules/pr.ts"),
            location(Some("org/settings"), "peril/rules/pr.ts", "master")
        );
    }

    #[test]
    fn empty_branch_after_hash_is_kept() {
        // "#" present but nothing after it: branch is the empty string, not master
        assert_eq!(
            DangerfileLocation::parse("dangerfile.ts#"),
            location(None, "dangerfile.ts", "")
        );
    }

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(
            DangerfileLocation::parse("a/b@c@d.ts#x#y"),
            location(Some("a/b"), "c@d.ts", "x#y")
        );
    }

    #[test]
    fn display_renders_full_form() {
        let loc = DangerfileLocation::parse("orta/eigen@dangerfile.ts");
        assert_eq!(loc.to_string(), "orta/eigen@dangerfile.ts#master");
        assert_eq!(
            DangerfileLocation::parse("dangerfile.ts").to_string(),
            "dangerfile.ts#master"
        );
    }
}
