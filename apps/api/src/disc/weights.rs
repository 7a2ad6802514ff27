//! Per-question, per-option DISC weights.
//!
//! Each answer option contributes a fixed `(D, I, S, C)` quadruple to the
//! running totals. Pairs missing from the table contribute nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraitWeights {
    pub d: u32,
    pub i: u32,
    pub s: u32,
    pub c: u32,
}

impl TraitWeights {
    pub const fn new(d: u32, i: u32, s: u32, c: u32) -> Self {
        Self { d, i, s, c }
    }

    pub fn total(&self) -> u32 {
        self.d + self.i + self.s + self.c
    }
}

impl std::ops::AddAssign for TraitWeights {
    fn add_assign(&mut self, rhs: Self) {
        self.d += rhs.d;
        self.i += rhs.i;
        self.s += rhs.s;
        self.c += rhs.c;
    }
}

type QuestionWeights = (&'static str, [(&'static str, TraitWeights); 4]);

/// q1 challenges, q2 team settings, q3 decisions, q4 communication, q5 pressure.
/// Option A leans D, B leans I, C leans S, D leans C.
static DISC_WEIGHTS: [QuestionWeights; 5] = [
    (
        "q1",
        [
            ("A", TraitWeights::new(3, 0, 0, 1)),
            ("B", TraitWeights::new(1, 3, 0, 0)),
            ("C", TraitWeights::new(0, 0, 3, 1)),
            ("D", TraitWeights::new(0, 1, 1, 3)),
        ],
    ),
    (
        "q2",
        [
            ("A", TraitWeights::new(3, 1, 0, 0)),
            ("B", TraitWeights::new(1, 3, 0, 0)),
            ("C", TraitWeights::new(0, 0, 3, 1)),
            ("D", TraitWeights::new(0, 0, 1, 3)),
        ],
    ),
    (
        "q3",
        [
            ("A", TraitWeights::new(3, 0, 0, 1)),
            ("B", TraitWeights::new(1, 3, 0, 0)),
            ("C", TraitWeights::new(0, 1, 3, 0)),
            ("D", TraitWeights::new(0, 0, 1, 3)),
        ],
    ),
    (
        "q4",
        [
            ("A", TraitWeights::new(3, 1, 0, 0)),
            ("B", TraitWeights::new(1, 3, 0, 0)),
            ("C", TraitWeights::new(0, 1, 3, 0)),
            ("D", TraitWeights::new(0, 0, 1, 3)),
        ],
    ),
    (
        "q5",
        [
            ("A", TraitWeights::new(3, 0, 0, 1)),
            ("B", TraitWeights::new(1, 3, 0, 0)),
            ("C", TraitWeights::new(0, 0, 3, 1)),
            ("D", TraitWeights::new(0, 1, 1, 3)),
        ],
    ),
];

/// Looks up the weights for one answer. Ids are matched exactly.
pub fn weight_for(question_id: &str, option: &str) -> Option<TraitWeights> {
    DISC_WEIGHTS
        .iter()
        .find(|(q, _)| *q == question_id)
        .and_then(|(_, options)| options.iter().find(|(o, _)| *o == option))
        .map(|(_, w)| *w)
}
