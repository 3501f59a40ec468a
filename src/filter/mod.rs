// Lead list filtering: free-text search plus project, channel and stage selectors

use crate::models::{ChannelGroup, Lead, PipelineStage};
use crate::utils::fuzzy::is_substring_match;

/// Filter applied to the lead list view. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    /// Case-insensitive substring of name, email or project name
    pub search: Option<String>,
    pub project_id: Option<String>,
    pub channel_group: Option<ChannelGroup>,
    pub stage: Option<PipelineStage>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let search = search.trim();
            let hit = is_substring_match(&lead.name, search)
                || is_substring_match(&lead.email, search)
                || is_substring_match(&lead.project_name, search);
            if !hit {
                return false;
            }
        }
        if let Some(project_id) = &self.project_id {
            if &lead.project_id != project_id {
                return false;
            }
        }
        if let Some(group) = self.channel_group {
            if lead.channel_group != group {
                return false;
            }
        }
        if let Some(stage) = self.stage {
            if lead.status != stage {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Leads matching the filter, in source order
pub fn filter_leads<'a>(leads: &'a [Lead], filter: &LeadFilter) -> Vec<&'a Lead> {
    if filter.is_empty() {
        return leads.iter().collect();
    }
    leads.iter().filter(|l| filter.matches(l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, name: &str, email: &str, project: &str) -> Lead {
        let mut lead = Lead::new(name.to_string(), format!("p-{}", project.len()), project.to_string());
        lead.id = id.to_string();
        lead.email = email.to_string();
        lead
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let leads = vec![
            lead("1", "Camila Soto", "camila@mail.cl", "Parque Norte"),
            lead("2", "Diego Fuentes", "dfuentes@mail.cl", "Vista Mar"),
            lead("3", "Jorge Pino", "jp@mail.cl", "Altos del PARQUE"),
        ];

        let by_name = LeadFilter { search: Some("CAMILA".to_string()), ..Default::default() };
        assert_eq!(filter_leads(&leads, &by_name).len(), 1);

        let by_email = LeadFilter { search: Some("dfuentes@".to_string()), ..Default::default() };
        assert_eq!(filter_leads(&leads, &by_email)[0].id, "2");

        let by_project = LeadFilter { search: Some("parque".to_string()), ..Default::default() };
        let ids: Vec<&str> = filter_leads(&leads, &by_project).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_blank_search_matches_all() {
        let leads = vec![lead("1", "A", "a@x", "P"), lead("2", "B", "b@x", "Q")];
        let filter = LeadFilter { search: Some("   ".to_string()), ..Default::default() };
        assert_eq!(filter_leads(&leads, &filter).len(), 2);
        assert!(LeadFilter::default().is_empty());
        assert_eq!(filter_leads(&leads, &LeadFilter::default()).len(), 2);
    }

    #[test]
    fn test_selectors_combine() {
        let mut a = lead("1", "A", "a@x", "P");
        a.channel_group = ChannelGroup::Paid;
        a.status = PipelineStage::InContact;
        let mut b = lead("2", "B", "b@x", "P");
        b.channel_group = ChannelGroup::Paid;
        let leads = vec![a, b];

        let filter = LeadFilter {
            channel_group: Some(ChannelGroup::Paid),
            stage: Some(PipelineStage::InContact),
            ..Default::default()
        };
        let hits = filter_leads(&leads, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let other_project = LeadFilter { project_id: Some("nope".to_string()), ..Default::default() };
        assert!(filter_leads(&leads, &other_project).is_empty());
    }
}
