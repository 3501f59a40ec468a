// Built-in sample pipeline used when no lead file is configured

use crate::models::{ChannelGroup, ExternalStatus, FitScore, Lead, PipelineStage, PreEvaluationStatus};
use chrono::{DateTime, Utc};

/// Fixed reference instant (2026-10-01T00:00:00Z) so samples are reproducible.
/// Activity ages are relative to it, so they grow when rendered against the clock.
const BASE_TS: i64 = 1_790_812_800;
const HOUR: i64 = 3600;
const DAY: i64 = 24 * HOUR;

struct Seed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    project: (&'static str, &'static str, &'static str),
    status: PipelineStage,
    fit: u8,
    ticket_uf: f64,
    channel: (&'static str, ChannelGroup),
    utm: Option<(&'static str, &'static str, &'static str)>,
    created_days_ago: i64,
    active_hours_ago: i64,
    external: ExternalStatus,
    pre_eval: PreEvaluationStatus,
    documents: (u32, u32),
    assigned_to: Option<&'static str>,
}

const PARQUE_NORTE: (&str, &str, &str) = ("1", "Parque Norte", "Huechuraba");
const VISTA_MAR: (&str, &str, &str) = ("2", "Vista Mar", "Viña del Mar");
const ALTOS_DEL_VALLE: (&str, &str, &str) = ("3", "Altos del Valle", "La Florida");

const META: (&str, ChannelGroup) = ("Meta Ads", ChannelGroup::Paid);
const GOOGLE: (&str, ChannelGroup) = ("Google Ads", ChannelGroup::Paid);
const ORGANIC: (&str, ChannelGroup) = ("Website", ChannelGroup::Organic);
const REFERRAL: (&str, ChannelGroup) = ("Referral", ChannelGroup::Referral);

const SEEDS: &[Seed] = &[
    Seed {
        id: "1", name: "Camila Soto", email: "camila.soto@mail.cl", phone: "+56 9 8123 4567",
        project: PARQUE_NORTE, status: PipelineStage::New, fit: 5, ticket_uf: 4500.0,
        channel: META, utm: Some(("facebook", "cpc", "spring_launch")),
        created_days_ago: 1, active_hours_ago: 2,
        external: ExternalStatus::Active, pre_eval: PreEvaluationStatus::Pending,
        documents: (0, 5), assigned_to: Some("Rodrigo Díaz"),
    },
    Seed {
        id: "2", name: "Diego Fuentes", email: "dfuentes@mail.cl", phone: "+56 9 7654 3210",
        project: VISTA_MAR, status: PipelineStage::New, fit: 3, ticket_uf: 6200.0,
        channel: GOOGLE, utm: Some(("google", "cpc", "coastal_homes")),
        created_days_ago: 2, active_hours_ago: 20,
        external: ExternalStatus::Inactive, pre_eval: PreEvaluationStatus::Pending,
        documents: (0, 5), assigned_to: None,
    },
    Seed {
        id: "3", name: "Valentina Reyes", email: "vreyes@mail.cl", phone: "+56 9 5555 1234",
        project: PARQUE_NORTE, status: PipelineStage::InContact, fit: 4, ticket_uf: 3900.0,
        channel: ORGANIC, utm: None,
        created_days_ago: 6, active_hours_ago: 5,
        external: ExternalStatus::DocumentsPending, pre_eval: PreEvaluationStatus::InProgress,
        documents: (2, 5), assigned_to: Some("Rodrigo Díaz"),
    },
    Seed {
        id: "4", name: "Matías González", email: "mgonzalez@mail.cl", phone: "+56 9 4321 8765",
        project: ALTOS_DEL_VALLE, status: PipelineStage::InContact, fit: 2, ticket_uf: 2800.0,
        channel: META, utm: Some(("instagram", "paid_social", "first_home")),
        created_days_ago: 9, active_hours_ago: 30,
        external: ExternalStatus::DocumentsInReview, pre_eval: PreEvaluationStatus::Conditional,
        documents: (4, 5), assigned_to: Some("Francisca Muñoz"),
    },
    Seed {
        id: "5", name: "Javiera Morales", email: "jmorales@mail.cl", phone: "+56 9 6789 0123",
        project: VISTA_MAR, status: PipelineStage::MeetingScheduled, fit: 5, ticket_uf: 7100.0,
        channel: REFERRAL, utm: None,
        created_days_ago: 14, active_hours_ago: 1,
        external: ExternalStatus::DocumentsApproved, pre_eval: PreEvaluationStatus::Approved,
        documents: (5, 5), assigned_to: Some("Francisca Muñoz"),
    },
    Seed {
        id: "6", name: "Benjamín Rojas", email: "brojas@mail.cl", phone: "+56 9 3210 9876",
        project: ALTOS_DEL_VALLE, status: PipelineStage::MeetingScheduled, fit: 4, ticket_uf: 3300.0,
        channel: GOOGLE, utm: Some(("google", "cpc", "family_homes")),
        created_days_ago: 18, active_hours_ago: 48,
        external: ExternalStatus::PreEvaluationReady, pre_eval: PreEvaluationStatus::Approved,
        documents: (5, 5), assigned_to: Some("Rodrigo Díaz"),
    },
    Seed {
        id: "7", name: "Antonia Silva", email: "asilva@mail.cl", phone: "+56 9 2468 1357",
        project: PARQUE_NORTE, status: PipelineStage::Won, fit: 5, ticket_uf: 4800.0,
        channel: REFERRAL, utm: None,
        created_days_ago: 40, active_hours_ago: 96,
        external: ExternalStatus::DocumentsApproved, pre_eval: PreEvaluationStatus::Approved,
        documents: (5, 5), assigned_to: Some("Francisca Muñoz"),
    },
    Seed {
        id: "8", name: "Tomás Herrera", email: "therrera@mail.cl", phone: "+56 9 1357 2468",
        project: VISTA_MAR, status: PipelineStage::Lost, fit: 1, ticket_uf: 5600.0,
        channel: META, utm: Some(("facebook", "cpc", "coastal_homes")),
        created_days_ago: 35, active_hours_ago: 240,
        external: ExternalStatus::Inactive, pre_eval: PreEvaluationStatus::Rejected,
        documents: (1, 5), assigned_to: Some("Rodrigo Díaz"),
    },
];

fn ts(offset_secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(BASE_TS - offset_secs, 0).unwrap_or_default()
}

fn to_lead(seed: &Seed) -> Lead {
    let (project_id, project_name, district) = seed.project;
    let (channel, channel_group) = seed.channel;
    let (utm_source, utm_medium, utm_campaign) = match seed.utm {
        Some((source, medium, campaign)) => (
            Some(source.to_string()),
            Some(medium.to_string()),
            Some(campaign.to_string()),
        ),
        None => (None, None, None),
    };

    Lead {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        email: seed.email.to_string(),
        phone: seed.phone.to_string(),
        project_id: project_id.to_string(),
        project_name: project_name.to_string(),
        district: district.to_string(),
        status: seed.status,
        fit_score: FitScore::new(seed.fit).unwrap_or(FitScore::lowest()),
        ticket_uf: seed.ticket_uf,
        channel: channel.to_string(),
        channel_group,
        utm_source,
        utm_medium,
        utm_campaign,
        created_at: ts(seed.created_days_ago * DAY),
        last_activity: ts(seed.active_hours_ago * HOUR),
        external_status: seed.external,
        pre_evaluation_status: seed.pre_eval,
        documents_complete: seed.documents.0,
        documents_total: seed.documents.1,
        assigned_to: seed.assigned_to.map(str::to_string),
    }
}

/// Sample leads covering every stage, timestamped relative to a fixed instant
pub fn sample_leads() -> Vec<Lead> {
    SEEDS.iter().map(to_lead).collect()
}
