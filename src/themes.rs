//! Heuristic keyword themes over free-text writeups. The tables are
//! qualitative and may mislabel ambiguous phrasing ("wrong" inside an
//! unrelated clause); the negative patterns only cover the known traps.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SubmissionRecord;

pub struct ThemeDefinition {
    pub label: &'static str,
    patterns: Vec<Regex>,
    negative: Vec<Regex>,
}

impl ThemeDefinition {
    fn new(label: &'static str, patterns: &[&str], negative: &[&str]) -> Self {
        Self {
            label,
            patterns: compile(patterns),
            negative: compile(negative),
        }
    }

    /// Any positive pattern matches AND no negative pattern matches.
    pub fn matches(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        if !self.patterns.iter().any(|re| re.is_match(text)) {
            return false;
        }
        !self.negative.iter().any(|re| re.is_match(text))
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("(?i){pattern}")).expect("invalid theme pattern")
        })
        .collect()
}

pub static STRENGTH_THEMES: Lazy<Vec<ThemeDefinition>> = Lazy::new(|| {
    vec![
        ThemeDefinition::new(
            "Step-by-step derivations",
            &[
                r"step[- ]by[- ]step",
                r"\bderiv(e|ed|ation|ations)\b",
                r"intermediate steps?",
                r"worked through",
                r"chain[- ]of[- ]thought",
                r"reasoning step",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Conceptual explanations / intuition",
            &[
                r"\bconceptual\b",
                r"\bintuition\b",
                r"\bhigh[- ]level\b",
                r"clear (explanation|explanations)",
                r"explained (why|how)",
                r"clarif(y|ying|ication)",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "One-shot / high correctness",
            &[
                r"one[- ]shot",
                r"first (try|attempt)",
                r"solved (everything|all).*(correct|accurate)",
                r"99%\s*accuracy",
                r"zero (arithmetic|math|numerical) errors",
                r"no (arithmetic|math|numerical) errors",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Strong linear algebra / calculus",
            &[
                r"linear algebra",
                r"\bmatrix\b",
                r"\bcalculus\b",
                r"\bgradient(s)?\b",
                r"\bsvd\b",
                r"\boptimization\b",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Structured / well-formatted output",
            &[
                r"\bstructured\b",
                r"\bwell[- ]organized\b",
                r"\bclear\b.*\bsteps\b",
                r"\bformat\b",
                r"\bconsistent\b.*\bnotation\b",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "\"Thinking\"/reasoning modes helpful",
            &[
                r"extended thinking",
                r"\bthinking mode\b",
                r"\bdeep think\b",
                r"\breasoning mode\b",
                r"chain[- ]of[- ]thought",
            ],
            &[],
        ),
    ]
});

pub static WEAKNESS_THEMES: Lazy<Vec<ThemeDefinition>> = Lazy::new(|| {
    vec![
        ThemeDefinition::new(
            "Math mistakes (sign/constant/algebra)",
            &[
                r"sign error",
                r"missing (a )?constant",
                r"\balgebra(ic)?\b.*(mistake|error)",
                r"math(ematical)? (mistake|error)",
                r"numerical (mistake|error)",
                r"\barithmetic (mistake|error)\b",
                r"\bovercount(ed|ing)?\b",
                r"\bincorrect\b",
                r"\bwrong\b",
            ],
            &[
                r"no (arithmetic|math|numerical) errors",
                r"zero (arithmetic|math|numerical) errors",
                r"\bwithout (any )?errors\b",
            ],
        ),
        ThemeDefinition::new(
            "Needs reprompting / user steering",
            &[
                r"re-?prompt",
                r"needed (a|to) (re|another) prompt",
                r"had to (re)?prompt",
                r"required (two|multiple|several) prompts?",
                r"only after (i|we)",
                r"after (i|we) (explicitly|specifically|directly)",
                r"when (i|we) pointed out",
                r"\bsteer(ing)?\b",
                r"\bnudge(d)?\b",
                r"\bfeedback\b",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Missing intermediate steps / too terse",
            &[
                r"without showing",
                r"did(n't| not) show",
                r"skipped (steps|derivation)",
                r"condensed",
                r"\bincomplete\b",
                r"lacked (explanation|detail|steps)",
                r"final formulas without",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Prompt misinterpretation / ambiguity",
            &[
                r"misinterpret",
                r"misunderstand",
                r"parsing error",
                r"\bambigu(ity|ous)\b",
                r"interpreted .* as",
                r"wrong (assumption|interpretation|cost model)",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "PDF/image/vision limitations",
            &[
                r"(can'?t|cannot|unable to|could(n't| not)|failed to) (read|parse|interpret).*(image|screenshot|pdf)",
                r"(image|screenshot|pdf).*(hallucinat|guess|made up)",
                r"\bocr\b",
                r"pdf.*(parsing|formatting)",
                r"vision.*(issue|problem|fail)",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Hallucination / guessing",
            &[
                r"\bhallucinat(e|ed|ion|ions)\b",
                r"\bmade up\b",
                r"\bfabricat(ed|ion)\b",
                r"\bguess(ing|ed)?\b",
                r"\binvent(ed|ing)?\b",
            ],
            &[
                r"no hallucinat",
                r"did(n't| not) hallucinat",
                r"not (a )?hallucinat",
            ],
        ),
        ThemeDefinition::new(
            "Ineffective self-checking / overconfidence",
            &[
                r"overconfiden(t|ce)",
                r"\bself[- ]check(ing)?\b",
                r"\bself[- ]examination\b",
                r"never flagged",
                r"rarely identified",
                r"did(n't| not) catch",
                r"\buncertain(ty)?\b.*(not|never|rarely)",
            ],
            &[],
        ),
        ThemeDefinition::new(
            "Refusal / tutor mode",
            &[
                r"\brefus(e|ed|al)\b",
                r"would(n't| not).*(give|provide).*(answer|solution)",
                r"won't.*(give|provide).*(answer|solution)",
                r"\bpolicy\b",
                r"\btutor\b",
                r"\bpedagogical\b",
                r"encourag.*(me|us) to work",
            ],
            &[],
        ),
    ]
});

pub fn detect(text: &str, definitions: &[ThemeDefinition]) -> Vec<&'static str> {
    definitions
        .iter()
        .filter(|theme| theme.matches(text))
        .map(|theme| theme.label)
        .collect()
}

#[derive(Debug, Default)]
pub struct ThemeTally {
    pub count: u64,
    pub models: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct ModelThemes {
    pub total: u64,
    pub strengths: BTreeMap<&'static str, u64>,
    pub weaknesses: BTreeMap<&'static str, u64>,
}

#[derive(Debug, Default)]
pub struct ThemeAnalysis {
    pub total_submissions: u64,
    pub total_models: usize,
    pub strengths: BTreeMap<&'static str, ThemeTally>,
    pub weaknesses: BTreeMap<&'static str, ThemeTally>,
    pub by_model: BTreeMap<String, ModelThemes>,
}

/// Pure function of the record list and the static pattern tables.
pub fn analyze(records: &[SubmissionRecord]) -> ThemeAnalysis {
    let mut analysis = ThemeAnalysis {
        total_submissions: records.len() as u64,
        ..ThemeAnalysis::default()
    };

    for record in records {
        let model = record.model_name().to_string();
        let text = record.text_blob();

        let strengths = detect(&text, &STRENGTH_THEMES);
        let weaknesses = detect(&text, &WEAKNESS_THEMES);

        for &label in &strengths {
            bump(&mut analysis.strengths, label, &model);
        }
        for &label in &weaknesses {
            bump(&mut analysis.weaknesses, label, &model);
        }

        let entry = analysis.by_model.entry(model).or_default();
        entry.total += 1;
        for label in strengths {
            *entry.strengths.entry(label).or_default() += 1;
        }
        for label in weaknesses {
            *entry.weaknesses.entry(label).or_default() += 1;
        }
    }

    analysis.total_models = analysis.by_model.len();
    analysis
}

fn bump(map: &mut BTreeMap<&'static str, ThemeTally>, label: &'static str, model: &str) {
    let tally = map.entry(label).or_default();
    tally.count += 1;
    tally.models.insert(model.to_string());
}
