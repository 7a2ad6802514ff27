//! DISC scoring — converts per-question answer selections into a normalized
//! four-trait distribution with a dominant trait.
//!
//! Algorithm:
//! 1. Accumulate the weight quadruple of every recognized (question, option) pair.
//!    Unknown questions or options are skipped silently.
//! 2. total = D + I + S + C. When total is 0 every trait stays 0.
//! 3. Each trait becomes round(value / total × 100), halves rounding up.
//!    The four values may sum to 99..=102; this is not corrected.
//! 4. Dominant = highest value, ties resolved in D, I, S, C order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::disc::weights::{weight_for, TraitWeights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscTrait {
    D,
    I,
    S,
    C,
}

impl DiscTrait {
    /// Fixed iteration order. Tie-breaks follow it.
    pub const ALL: [DiscTrait; 4] = [DiscTrait::D, DiscTrait::I, DiscTrait::S, DiscTrait::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscTrait::D => "D",
            DiscTrait::I => "I",
            DiscTrait::S => "S",
            DiscTrait::C => "C",
        }
    }
}

impl fmt::Display for DiscTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized DISC score as persisted in `results.score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscScore {
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "C")]
    pub c: u32,
    /// The dominant trait's own value.
    pub percentage: u32,
    #[serde(rename = "dominantProfile")]
    pub dominant_profile: DiscTrait,
}

impl DiscScore {
    pub fn value(&self, t: DiscTrait) -> u32 {
        match t {
            DiscTrait::D => self.d,
            DiscTrait::I => self.i,
            DiscTrait::S => self.s,
            DiscTrait::C => self.c,
        }
    }

    pub fn total(&self) -> u32 {
        self.d + self.i + self.s + self.c
    }
}

/// Scores a set of answers. Never fails: empty or unrecognized input yields
/// the all-zero distribution with `D` as dominant.
pub fn calculate_disc_score<K, V>(answers: &BTreeMap<K, V>) -> DiscScore
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw = TraitWeights::default();
    for (question_id, option) in answers {
        if let Some(w) = weight_for(question_id.as_ref(), option.as_ref()) {
            raw += w;
        }
    }
    normalize(raw)
}

fn normalize(raw: TraitWeights) -> DiscScore {
    let total = raw.total();
    let pct = |v: u32| -> u32 {
        if total == 0 {
            0
        } else {
            // round-half-up in integer arithmetic: floor((200v + total) / 2total)
            (200 * v + total) / (2 * total)
        }
    };

    let (d, i, s, c) = (pct(raw.d), pct(raw.i), pct(raw.s), pct(raw.c));
    let values = [d, i, s, c];

    let mut dominant = DiscTrait::D;
    let mut best = values[0];
    for (t, v) in DiscTrait::ALL.iter().zip(values).skip(1) {
        if v > best {
            best = v;
            dominant = *t;
        }
    }

    DiscScore {
        d,
        i,
        s,
        c,
        percentage: best,
        dominant_profile: dominant,
    }
}

/// Extracts `question -> option` pairs from a stored answers document.
///
/// Only string values of a top-level JSON object are kept. Any other shape
/// contributes no pairs and therefore scores as all-zero.
pub fn answers_from_json(value: &Value) -> BTreeMap<String, String> {
    match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|opt| (k.clone(), opt.to_string())))
            .collect(),
        _ => BTreeMap::new(),
    }
}
