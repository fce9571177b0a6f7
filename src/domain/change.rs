/// Shell script producing the labeled change report consumed by the model prompt.
pub const SUMMARY_SCRIPT: &str = r####"
echo "### GIT STATUS ###"
git status
echo ""
echo "### STAGED ###"
git --no-pager diff --cached --shortstat
echo ""
echo "### UNSTAGED ###"
git --no-pager diff --shortstat
echo ""
echo "### RECENT COMMITS ###"
git --no-pager log --oneline -n 5
"####;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSummary {
    pub report: String,
}

impl ChangeSummary {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_HEADINGS: [&str; 4] = [
        "### GIT STATUS ###",
        "### STAGED ###",
        "### UNSTAGED ###",
        "### RECENT COMMITS ###",
    ];

    #[test]
    fn script_emits_headings_in_order() {
        let positions = SECTION_HEADINGS
            .iter()
            .map(|heading| SUMMARY_SCRIPT.find(heading).expect("heading present"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn script_keeps_every_command_line() {
        let lines = SUMMARY_SCRIPT.trim().lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines.first(), Some(&"echo \"### GIT STATUS ###\""));
        assert_eq!(lines.last(), Some(&"git --no-pager log --oneline -n 5"));
    }
}
