use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::disc::{DiscScore, DiscTrait};

#[derive(Debug, Clone, Serialize)]
pub struct TraitProfile {
    #[serde(rename = "trait")]
    pub disc_trait: DiscTrait,
    pub title: &'static str,
    pub description: &'static str,
    pub characteristics: [&'static str; 5],
}

static PROFILES: [TraitProfile; 4] = [
    TraitProfile {
        disc_trait: DiscTrait::D,
        title: "Dominance",
        description: "Results-oriented, direct and decisive. Enjoys challenges, takes calculated \
            risks and prefers environments where they can exercise control and authority. \
            Naturally competitive and focused on goals.",
        characteristics: [
            "Results-oriented",
            "Direct and objective",
            "Enjoys challenges",
            "Takes the lead",
            "Makes quick decisions",
        ],
    },
    TraitProfile {
        disc_trait: DiscTrait::I,
        title: "Influence",
        description: "Communicative, optimistic and persuasive. Stands out in social settings, \
            likes working with people and motivates others. Values recognition and prefers \
            collaborative environments.",
        characteristics: [
            "Communicative and expressive",
            "Optimistic and enthusiastic",
            "Persuasive",
            "Sociable",
            "Motivates teams",
        ],
    },
    TraitProfile {
        disc_trait: DiscTrait::S,
        title: "Steadiness",
        description: "Patient, reliable and loyal. Prefers stable, predictable environments, \
            listens well and works well in a team. Values harmony and avoids conflict.",
        characteristics: [
            "Patient and calm",
            "Reliable and loyal",
            "Good listener",
            "Works well in a team",
            "Seeks harmony",
        ],
    },
    TraitProfile {
        disc_trait: DiscTrait::C,
        title: "Compliance",
        description: "Analytical, precise and detail-oriented. Values quality, follows \
            established procedures and works systematically. Bases decisions on data and facts.",
        characteristics: [
            "Analytical and precise",
            "Detail-oriented",
            "Follows procedures",
            "Pursues quality",
            "Data-driven",
        ],
    },
];

pub fn describe(t: DiscTrait) -> &'static TraitProfile {
    match t {
        DiscTrait::D => &PROFILES[0],
        DiscTrait::I => &PROFILES[1],
        DiscTrait::S => &PROFILES[2],
        DiscTrait::C => &PROFILES[3],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TraitBreakdown {
    #[serde(rename = "trait")]
    pub disc_trait: DiscTrait,
    pub title: &'static str,
    pub value: u32,
}

/// Report view of a scored result: dominant profile plus per-trait breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct DiscReport {
    pub result_id: Uuid,
    pub assessment_name: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: DiscScore,
    pub dominant: &'static TraitProfile,
    pub breakdown: Vec<TraitBreakdown>,
}

pub fn build_report(
    result_id: Uuid,
    assessment_name: String,
    completed_at: Option<DateTime<Utc>>,
    score: DiscScore,
) -> DiscReport {
    let breakdown = DiscTrait::ALL
        .iter()
        .map(|t| TraitBreakdown {
            disc_trait: *t,
            title: describe(*t).title,
            value: score.value(*t),
        })
        .collect();

    DiscReport {
        result_id,
        assessment_name,
        completed_at,
        score,
        dominant: describe(score.dominant_profile),
        breakdown,
    }
}
