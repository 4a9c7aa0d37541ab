//! Narrative composition: finding record in, ordered clauses out.
//!
//! Pure and total. Sections and fields are walked in fixed catalog order,
//! never record insertion order; flag labels within an abnormal section are
//! resolved in the order the flags were first set. Status is read before
//! flag data, so stale flags on Normal or None sections never reach the
//! output, and flag ids missing from the catalog are skipped silently.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vetscribe_catalogs::conditions::{self, ConditionEntry, Variant, STROKE_CONDITION_ID};
use vetscribe_catalogs::exam::{self as exam_catalog, SummaryEntry};
use vetscribe_catalogs::soap as soap_catalog;
use vetscribe_core::models::exam::{ExamRecord, ExamSection};
use vetscribe_core::models::mri::{MriRecord, StrokeFields};
use vetscribe_core::models::section::{SectionState, SectionStatus};
use vetscribe_core::models::signalment::Signalment;
use vetscribe_core::models::soap::{BodySystem, SoapRecord, Vitals};

use crate::text;

/// Which block of the assembled MRI report a clause belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportSection {
    Study,
    History,
    Findings,
    Impression,
    Recommendations,
}

impl ReportSection {
    pub const ALL: [ReportSection; 5] = [
        ReportSection::Study,
        ReportSection::History,
        ReportSection::Findings,
        ReportSection::Impression,
        ReportSection::Recommendations,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ReportSection::Study => "STUDY:",
            ReportSection::History => "HISTORY:",
            ReportSection::Findings => "FINDINGS:",
            ReportSection::Impression => "IMPRESSION:",
            ReportSection::Recommendations => "RECOMMENDATIONS:",
        }
    }
}

/// One composed sentence or line, tagged with its report block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clause {
    pub section: ReportSection,
    pub text: String,
}

impl Clause {
    fn new(section: ReportSection, text: impl Into<String>) -> Self {
        Self {
            section,
            text: text.into(),
        }
    }
}

// --- neurologic examination -------------------------------------------------

/// Compose the compact exam summary, one `**label**:` line per layout entry.
pub fn exam(record: &ExamRecord) -> Vec<String> {
    let mut lines = vec!["**Neurologic examination**".to_string()];
    let history = record.history.trim();
    if !history.is_empty() {
        lines.push(format!("**History**: {history}"));
    }
    for entry in exam_catalog::summary_layout() {
        let line = match entry {
            SummaryEntry::Single { section } => exam_single_line(record, *section),
            SummaryEntry::Group {
                label,
                members,
                all_normal_phrase,
            } => exam_group_line(record, label, members, all_normal_phrase),
        };
        if let Some(line) = line {
            lines.push(line);
        }
    }
    lines
}

fn exam_single_line(record: &ExamRecord, section: ExamSection) -> Option<String> {
    let state = record.sections.get(&section)?;
    let def = exam_catalog::section_def(section);
    let body = match state.status {
        SectionStatus::None => return None,
        SectionStatus::Normal => def.normal_phrase.clone(),
        SectionStatus::Abnormal => exam_flag_body(section, state),
    };
    let mut line = format!("**{}**: {body}", def.label);
    push_exam_note(&mut line, state);
    Some(line)
}

fn exam_group_line(
    record: &ExamRecord,
    label: &str,
    members: &[ExamSection],
    all_normal_phrase: &str,
) -> Option<String> {
    let all_normal = members.iter().all(|m| {
        record.sections.get(m).map(|s| s.status) == Some(SectionStatus::Normal)
    });
    if all_normal {
        let mut line = format!("**{label}**: {all_normal_phrase}");
        for member in members {
            if let Some(state) = record.sections.get(member) {
                push_exam_note(&mut line, state);
            }
        }
        return Some(line);
    }
    let mut parts = Vec::new();
    for member in members {
        let Some(state) = record.sections.get(member) else {
            continue;
        };
        if state.status != SectionStatus::Abnormal {
            continue;
        }
        let def = exam_catalog::section_def(*member);
        let mut part = format!("{}: {}", def.label, exam_flag_body(*member, state));
        push_exam_note(&mut part, state);
        parts.push(part);
    }
    // A mix of None and Normal members with nothing abnormal is omitted;
    // only an all-Normal group collapses to its phrase.
    if parts.is_empty() {
        return None;
    }
    Some(format!("**{label}**: {}", parts.join("; ")))
}

fn exam_flag_body(section: ExamSection, state: &SectionState) -> String {
    let labels: Vec<&str> = state
        .data
        .active()
        .filter_map(|id| exam_catalog::flag_label(section, id))
        .collect();
    if labels.is_empty() {
        "Abnormal (unspecified)".to_string()
    } else {
        labels.join(", ")
    }
}

fn push_exam_note(line: &mut String, state: &SectionState) {
    let note = state.note.trim();
    if !note.is_empty() {
        line.push_str(&format!("  - Note: {note}"));
    }
}

// --- SOAP note --------------------------------------------------------------

/// Compose the compact SOAP summary.
pub fn soap(record: &SoapRecord) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(line) = signalment_line(&record.signalment) {
        lines.push(line);
    }
    if let Some(line) = subjective_line(record) {
        lines.push(line);
    }
    if let Some(line) = vitals_line(&record.vitals) {
        lines.push(line);
    }
    for system in BodySystem::ALL {
        if let Some(line) = system_line(record, system) {
            lines.push(line);
        }
    }
    let assessment = record.assessment.trim();
    if !assessment.is_empty() {
        lines.push(format!("**Assessment**: {assessment}"));
    }
    let plan = record.plan.trim();
    if !plan.is_empty() {
        lines.push(format!("**Plan**: {plan}"));
    }
    lines
}

fn signalment_line(signalment: &Signalment) -> Option<String> {
    let name = signalment.patient_name.trim();
    let details: Vec<&str> = [
        signalment.species.trim(),
        signalment.breed.trim(),
        signalment.age.trim(),
        signalment.sex.trim(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if name.is_empty() && details.is_empty() {
        return None;
    }
    if details.is_empty() {
        Some(format!("**Signalment**: {name}"))
    } else {
        Some(format!("**Signalment**: {name} ({})", details.join(", ")))
    }
}

fn subjective_line(record: &SoapRecord) -> Option<String> {
    let mut parts = Vec::new();
    let attitude = record.attitude.trim();
    if !attitude.is_empty() {
        parts.push(attitude.to_string());
    }
    let appetite = record.appetite.trim();
    if !appetite.is_empty() {
        parts.push(format!("appetite {}", text::lowercase_first(appetite)));
    }
    let hydration = record.hydration.trim();
    if !hydration.is_empty() {
        parts.push(text::lowercase_first(hydration));
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!("**Subjective**: {}", parts.join(", ")))
}

fn vitals_line(vitals: &Vitals) -> Option<String> {
    let mut parts = Vec::new();
    let temp = vitals.temp_f.trim();
    if !temp.is_empty() {
        parts.push(format!("T {temp}°F"));
    }
    let pulse = vitals.pulse.trim();
    if !pulse.is_empty() {
        parts.push(format!("P {pulse}"));
    }
    let resp = vitals.resp.trim();
    if !resp.is_empty() {
        parts.push(format!("R {resp}"));
    }
    let weight = vitals.weight_kg.trim();
    if !weight.is_empty() {
        parts.push(format!("wt {weight} kg"));
    }
    let bcs = vitals.bcs.trim();
    if !bcs.is_empty() {
        parts.push(format!("BCS {bcs}/9"));
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!("**Vitals**: {}", parts.join(", ")))
}

fn system_line(record: &SoapRecord, system: BodySystem) -> Option<String> {
    let state = record.systems.get(&system)?;
    let def = soap_catalog::system_def(system);
    let body = match state.status {
        SectionStatus::None => return None,
        SectionStatus::Normal => def.normal_phrase.clone(),
        SectionStatus::Abnormal => {
            let labels: Vec<&str> = state
                .data
                .active()
                .filter_map(|id| soap_catalog::flag_label(system, id))
                .collect();
            if labels.is_empty() {
                "Abnormal (unspecified)".to_string()
            } else {
                labels.join(", ")
            }
        }
    };
    let mut line = format!("**{}**: {body}", def.label);
    let note = state.note.trim();
    if !note.is_empty() {
        line.push_str(&format!(" ({note})"));
    }
    Some(line)
}

// --- MRI report -------------------------------------------------------------

/// Compose the MRI report clauses.
///
/// Three modes, selected by `condition_id`: the stroke protocol (clauses
/// interpolated from the per-sequence fields), the condition library
/// (template text with variant overlays), and the fallback for an absent or
/// unknown condition. Advisories are not produced here; the assembler
/// appends what the advisor returns.
pub fn mri(record: &MriRecord) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let study = record.study.study_description.trim();
    if !study.is_empty() {
        clauses.push(Clause::new(ReportSection::Study, study));
    }
    let history = record.study.clinical_history.trim();
    if !history.is_empty() {
        clauses.push(Clause::new(ReportSection::History, history));
    }
    match record.condition_id.as_deref() {
        Some(STROKE_CONDITION_ID) => stroke_clauses(record, &mut clauses),
        Some(id) => match conditions::get(id) {
            Some(entry) => condition_clauses(record, entry, &mut clauses),
            None => fallback_clauses(record, &mut clauses),
        },
        None => fallback_clauses(record, &mut clauses),
    }
    clauses
}

fn push_additional_findings(record: &MriRecord, clauses: &mut Vec<Clause>) {
    let additional = record.additional_findings.trim();
    if !additional.is_empty() {
        clauses.push(Clause::new(ReportSection::Findings, additional));
    }
}

fn stroke_clauses(record: &MriRecord, clauses: &mut Vec<Clause>) {
    let fields = &record.stroke;
    clauses.push(Clause::new(ReportSection::Findings, diffusion_clause(fields)));
    clauses.push(Clause::new(ReportSection::Findings, flair_clause(&fields.flair)));
    clauses.push(Clause::new(
        ReportSection::Findings,
        susceptibility_clause(&fields.t2star),
    ));
    clauses.push(Clause::new(
        ReportSection::Findings,
        contrast_clause(&fields.contrast),
    ));
    clauses.push(Clause::new(
        ReportSection::Findings,
        mass_effect_clause(&fields.mass_effect),
    ));
    if let Some(clause) = vascular_clause(fields) {
        clauses.push(Clause::new(ReportSection::Findings, clause));
    }
    if let Some(clause) = distribution_clause(fields) {
        clauses.push(Clause::new(ReportSection::Findings, clause));
    }
    push_additional_findings(record, clauses);
    let impression = fields.impression_preset.trim();
    if !impression.is_empty() {
        clauses.push(Clause::new(ReportSection::Impression, format!("{impression}.")));
    }
    if let Some(entry) = conditions::get(STROKE_CONDITION_ID) {
        push_recommendations(entry, clauses);
    }
}

fn dwi_phrase(dwi: &str) -> String {
    match dwi {
        "Marked hyperintense" => "markedly hyperintense".to_string(),
        "Mildly hyperintense" => "mildly hyperintense".to_string(),
        other => text::lowercase_first(other),
    }
}

fn adc_phrase(adc: &str) -> String {
    match adc {
        "Low signal (restricted diffusion)" => "low, indicating restricted diffusion".to_string(),
        "Near-normal (pseudonormalizing)" => {
            "near-normal, suggesting pseudonormalization".to_string()
        }
        "High signal (facilitated diffusion)" => {
            "high, indicating facilitated diffusion".to_string()
        }
        other => text::lowercase_first(other),
    }
}

fn diffusion_clause(fields: &StrokeFields) -> String {
    if fields.dwi == "Not acquired" {
        return "Diffusion-weighted imaging was not acquired.".to_string();
    }
    if fields.dwi.contains("hyperintense") && fields.adc.contains("Low") {
        return format!(
            "There is a focal region of {} DWI signal with corresponding low values on the ADC map, consistent with restricted diffusion.",
            dwi_phrase(&fields.dwi)
        );
    }
    if fields.adc == "Not acquired" {
        return format!(
            "DWI signal is {}; the ADC map was not acquired.",
            dwi_phrase(&fields.dwi)
        );
    }
    format!(
        "DWI signal is {}; ADC values are {}.",
        dwi_phrase(&fields.dwi),
        adc_phrase(&fields.adc)
    )
}

fn flair_clause(flair: &str) -> String {
    if flair == "Not acquired" {
        return "FLAIR imaging was not acquired.".to_string();
    }
    if flair.to_lowercase().contains("hyperinten") {
        let signal = if flair == "Subtle hyperintensity" {
            "subtle hyperintense signal"
        } else {
            "hyperintense signal"
        };
        return format!("FLAIR images demonstrate {signal} in the corresponding territory.");
    }
    "FLAIR signal in the region is unremarkable.".to_string()
}

fn susceptibility_clause(t2star: &str) -> String {
    match t2star {
        "Not acquired" => "T2*-weighted imaging was not acquired.".to_string(),
        "" | "No susceptibility" => {
            "No susceptibility artifact is identified on T2*-weighted images.".to_string()
        }
        "Confluent susceptibility" => {
            "T2*-weighted images show confluent susceptibility artifact.".to_string()
        }
        other => format!("T2*-weighted images show {}.", text::lowercase_first(other)),
    }
}

fn contrast_clause(contrast: &str) -> String {
    match contrast {
        "Not administered" => "Intravenous contrast was not administered.".to_string(),
        "" | "No enhancement" => "There is no abnormal contrast enhancement.".to_string(),
        other => format!("Post-contrast images show {}.", text::lowercase_first(other)),
    }
}

fn mass_effect_clause(mass_effect: &str) -> String {
    match mass_effect {
        "" | "None" => "There is no associated mass effect.".to_string(),
        other => format!(
            "There is {} mass effect on the adjacent parenchyma.",
            text::lowercase_first(other)
        ),
    }
}

fn vascular_clause(fields: &StrokeFields) -> Option<String> {
    let mut sentences = Vec::new();
    match fields.heme_pattern.as_str() {
        "" => {}
        "None observed" => {
            sentences.push("No hemorrhagic component is observed.".to_string());
        }
        "Petechial" => {
            sentences.push("A petechial hemorrhagic component is present.".to_string());
        }
        "Confluent hematoma" => {
            sentences.push("A confluent intralesional hematoma is present.".to_string());
        }
        other => sentences.push(format!(
            "Hemorrhagic pattern: {}.",
            text::lowercase_first(other)
        )),
    }
    match fields.vessel.as_str() {
        "" | "Not assessed" => {}
        "Normal flow voids" => {
            sentences.push("Intracranial arterial flow voids are preserved.".to_string());
        }
        "Attenuated MCA flow void" => {
            sentences.push("The middle cerebral artery flow void is attenuated.".to_string());
        }
        "Absent basilar flow void" => {
            sentences.push("The basilar artery flow void is absent.".to_string());
        }
        other => sentences.push(format!(
            "Vascular assessment: {}.",
            text::lowercase_first(other)
        )),
    }
    match fields.perfusion.as_str() {
        "" | "Not acquired" => {}
        "Perfusion deficit present" => {
            sentences.push("Perfusion imaging demonstrates a regional perfusion deficit.".to_string());
        }
        "No perfusion deficit" => {
            sentences.push("Perfusion imaging shows no regional deficit.".to_string());
        }
        other => sentences.push(format!("Perfusion: {}.", text::lowercase_first(other))),
    }
    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(" "))
    }
}

fn distribution_clause(fields: &StrokeFields) -> Option<String> {
    let territory = fields.territory.trim();
    let size = fields.lesion_size.trim();
    match (territory.is_empty(), size.is_empty()) {
        (true, true) => None,
        (false, true) => Some(format!("Distribution: {}.", text::lowercase_first(territory))),
        (false, false) => Some(format!(
            "Distribution: {}; estimated lesion size {size}.",
            text::lowercase_first(territory)
        )),
        (true, false) => Some(format!("Estimated lesion size {size}.")),
    }
}

fn condition_clauses(record: &MriRecord, entry: &ConditionEntry, clauses: &mut Vec<Clause>) {
    // Unknown variant ids resolve to nothing and are skipped.
    let variants: Vec<&Variant> = record
        .active_variants
        .iter()
        .filter_map(|id| entry.variant(id))
        .collect();

    // The last active variant carrying a primary override wins; secondary
    // findings and signal characteristics concatenate after the base entry's.
    let primary = variants
        .iter()
        .rev()
        .find_map(|v| v.primary_findings.as_ref())
        .unwrap_or(&entry.primary_findings);

    if !entry.location.is_empty() {
        clauses.push(Clause::new(
            ReportSection::Findings,
            format!("The lesion is centered at the {}.", entry.location.join(", ")),
        ));
    }
    for finding in primary {
        clauses.push(Clause::new(ReportSection::Findings, format!("{finding}.")));
    }
    let signal_characteristics = entry
        .signal_characteristics
        .iter()
        .chain(variants.iter().flat_map(|v| v.signal_characteristics.iter()));
    for characteristic in signal_characteristics {
        let mut line = format!("{}: {}", characteristic.sequence, characteristic.intensity);
        if let Some(pattern) = &characteristic.pattern {
            line.push_str(&format!(", {pattern}"));
        }
        clauses.push(Clause::new(ReportSection::Findings, line));
    }
    let secondary = entry
        .secondary_findings
        .iter()
        .chain(variants.iter().flat_map(|v| v.secondary_findings.iter()));
    for finding in secondary {
        clauses.push(Clause::new(ReportSection::Findings, format!("{finding}.")));
    }
    if let Some(enhancement) = &entry.enhancement {
        clauses.push(Clause::new(ReportSection::Findings, format!("{enhancement}.")));
    }
    if let Some(mass_effect) = &entry.mass_effect {
        clauses.push(Clause::new(ReportSection::Findings, format!("{mass_effect}.")));
    }
    push_additional_findings(record, clauses);

    let mut impression = format!(
        "Findings are most consistent with {}",
        text::lowercase_first(&entry.display_name)
    );
    let labels: Vec<&str> = variants.iter().map(|v| v.label.as_str()).collect();
    if !labels.is_empty() {
        impression.push_str(&format!(" ({})", labels.join(", ")));
    }
    impression.push('.');
    if !entry.differentials.is_empty() {
        impression.push_str(&format!(
            "  Differentials include {}.",
            entry.differentials.join(", ")
        ));
    }
    let differential = record.differential.trim();
    if !differential.is_empty() {
        impression.push_str(&text::differential_sentence(differential));
    }
    clauses.push(Clause::new(ReportSection::Impression, impression));

    push_recommendations(entry, clauses);
}

fn fallback_clauses(record: &MriRecord, clauses: &mut Vec<Clause>) {
    clauses.push(Clause::new(
        ReportSection::Findings,
        "No structural abnormality identified.",
    ));
    push_additional_findings(record, clauses);
    let mut impression = "No acute intracranial lesion identified.".to_string();
    let differential = record.differential.trim();
    if !differential.is_empty() {
        impression.push_str(&text::differential_sentence(differential));
    }
    clauses.push(Clause::new(ReportSection::Impression, impression));
}

fn push_recommendations(entry: &ConditionEntry, clauses: &mut Vec<Clause>) {
    for recommendation in &entry.recommendations {
        clauses.push(Clause::new(
            ReportSection::Recommendations,
            format!("- {recommendation}"),
        ));
    }
}
