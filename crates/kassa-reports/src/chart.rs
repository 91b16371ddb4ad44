use serde::{Deserialize, Serialize};

use crate::summary::{GroupBy, GroupTotal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

/// Declarative chart description for the presentation layer:
/// a pie breakdown for categories, ordered bars for months and
/// weeks. No rendering happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

pub fn summary_chart(group_by: GroupBy, groups: &[GroupTotal]) -> Chart {
    let (kind, title) = match group_by {
        GroupBy::Category => (ChartKind::Pie, "Expenses by Category"),
        GroupBy::Month => (ChartKind::Bar, "Expenses by Month"),
        GroupBy::Week => (ChartKind::Bar, "Expenses by Week"),
    };
    Chart {
        kind,
        title: title.to_string(),
        labels: groups.iter().map(|g| g.group.clone()).collect(),
        values: groups.iter().map(|g| g.total).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<GroupTotal> {
        vec![
            GroupTotal { group: "2024-01".to_string(), total: 25.0 },
            GroupTotal { group: "2024-02".to_string(), total: 10.0 },
        ]
    }

    #[test]
    fn test_category_chart_is_pie() {
        let chart = summary_chart(GroupBy::Category, &groups());
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.title, "Expenses by Category");
    }

    #[test]
    fn test_period_chart_is_ordered_bars() {
        let chart = summary_chart(GroupBy::Month, &groups());
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(chart.values, vec![25.0, 10.0]);
    }
}
