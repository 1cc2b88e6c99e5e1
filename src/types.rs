use serde::{Deserialize, Serialize};

/// A stored analysis result, identified by a server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub repo_url: String,
    pub status: String,
    pub result: String,
}

/// A report paired with the ordinal shown to the user in place of the raw id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayReport {
    pub display_id: usize,
    pub report: Report,
}

/// Orders reports newest-first and assigns display numbers counting down,
/// so the newest report gets the highest number. Recomputed on every render.
pub fn number_reports(reports: &[Report]) -> Vec<DisplayReport> {
    let mut sorted: Vec<Report> = reports.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    let count = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, report)| DisplayReport {
            display_id: count - rank,
            report,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64) -> Report {
        Report {
            id,
            repo_url: format!("https://example.com/repo-{id}"),
            status: "completed".to_string(),
            result: String::new(),
        }
    }

    #[test]
    fn newest_report_gets_highest_display_number() {
        let reports = vec![report(5), report(3), report(9)];
        let numbered = number_reports(&reports);

        let ids: Vec<i64> = numbered.iter().map(|d| d.report.id).collect();
        let display_ids: Vec<usize> = numbered.iter().map(|d| d.display_id).collect();

        assert_eq!(ids, vec![9, 5, 3]);
        assert_eq!(display_ids, vec![3, 2, 1]);
    }

    #[test]
    fn empty_list_yields_no_display_reports() {
        assert!(number_reports(&[]).is_empty());
    }
}
